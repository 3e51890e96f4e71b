//! Pure matching operations over the roster
//!
//! Nothing here mutates state; every function takes the roster by reference
//! and, where randomness is involved, an explicit `Rng` so callers (and
//! tests) control the seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::roster::{Roster, Tutor};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// How to order a tutor listing.
///
/// The sort selector comes from free-form client input. Anything
/// unrecognized deliberately maps to `Random` rather than an error: the
/// listing page always renders, it just shuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSelector {
    ByPrice(Direction),
    ByRating(Direction),
    Random,
}

impl SortSelector {
    /// Parse client-supplied criterion/direction tokens.
    pub fn parse(criterion: Option<&str>, direction: Option<&str>) -> Self {
        let dir = match direction {
            Some("asc") => Direction::Ascending,
            Some("desc") => Direction::Descending,
            _ => return SortSelector::Random,
        };
        match criterion {
            Some("price") => SortSelector::ByPrice(dir),
            Some("rating") => SortSelector::ByRating(dir),
            _ => SortSelector::Random,
        }
    }
}

/// Pick `n` distinct tutors uniformly at random, without replacement.
pub fn sample<'r, R: Rng>(roster: &'r Roster, n: usize, rng: &mut R) -> Result<Vec<&'r Tutor>> {
    let all = roster.all();
    if n > all.len() {
        return Err(Error::InvalidArgument(format!(
            "sample size {} exceeds roster size {}",
            n,
            all.len()
        )));
    }
    let indices = rand::seq::index::sample(rng, all.len(), n);
    Ok(indices.iter().map(|i| &all[i]).collect())
}

/// Tutors supporting `goal`, in roster order. Empty result is not an error.
pub fn filter_by_goal<'r>(roster: &'r Roster, goal: &str) -> Vec<&'r Tutor> {
    roster
        .all()
        .iter()
        .filter(|t| t.goals.iter().any(|g| g == goal))
        .collect()
}

/// Order the full roster by the given selector.
///
/// Sorts are stable: tutors tied on the sort key keep roster order.
pub fn sort_by<'r, R: Rng>(
    roster: &'r Roster,
    selector: SortSelector,
    rng: &mut R,
) -> Vec<&'r Tutor> {
    let mut tutors: Vec<&Tutor> = roster.all().iter().collect();
    match selector {
        SortSelector::ByPrice(dir) => sort_by_key(&mut tutors, dir, |t| t.price),
        SortSelector::ByRating(dir) => sort_by_key(&mut tutors, dir, |t| t.rating),
        SortSelector::Random => tutors.shuffle(rng),
    }
    tutors
}

fn sort_by_key(tutors: &mut [&Tutor], dir: Direction, key: impl Fn(&Tutor) -> f64) {
    tutors.sort_by(|a, b| {
        // Prices and ratings are finite; NaN would only come from a corrupt
        // roster, which load() never produces.
        let ord = key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal);
        match dir {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
}

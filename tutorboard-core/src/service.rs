//! Service facade handed to the presentation layer
//!
//! Bundles the read-only roster with the two durable collections and exposes
//! the boundary operations: tutor listings, slot resolution and the two
//! submission flows. Handlers hold this behind an `Arc` and never touch the
//! stores or the roster directly.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::matching::{self, SortSelector};
use crate::roster::{Roster, Tutor};
use crate::slots::{self, BookingSlot};
use crate::store::{
    BookingDocument, BookingSubmission, Collection, RequestDocument, RequestSubmission,
};
use crate::validate::{
    self, hours_label, BookingInput, FieldErrors, RequestInput,
};
use crate::{Error, Result};

/// Outcome of a submission: stored durably, or bounced back for re-prompt.
#[derive(Debug)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(FieldErrors),
}

/// Confirmation payload for a stored consultation request.
///
/// Carries the display labels the confirmation view needs alongside the
/// persisted record.
#[derive(Debug, Clone, Serialize)]
pub struct RequestReceipt {
    #[serde(flatten)]
    pub record: RequestSubmission,
    pub goal_label: String,
    pub hours_label: String,
}

/// Confirmation payload for a stored booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingReceipt {
    #[serde(flatten)]
    pub record: BookingSubmission,
    pub weekday_label: String,
}

/// The matching and booking engine behind the HTTP boundary.
pub struct TutorBoard {
    roster: Arc<Roster>,
    requests: Collection<RequestDocument>,
    bookings: Collection<BookingDocument>,
}

impl TutorBoard {
    /// Wire the engine to a loaded roster and a data directory holding the
    /// two collection files (created on first submission).
    pub fn new(roster: Arc<Roster>, data_dir: &Path) -> Self {
        Self {
            roster,
            requests: Collection::new(data_dir.join("requests.json")),
            bookings: Collection::new(data_dir.join("bookings.json")),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// `n` distinct tutors chosen uniformly at random (index page).
    pub fn sample_tutors(&self, n: usize) -> Result<Vec<Tutor>> {
        let picked = matching::sample(&self.roster, n, &mut rand::thread_rng())?;
        Ok(picked.into_iter().cloned().collect())
    }

    /// Full roster ordered by the given selector (listing page).
    pub fn sorted_tutors(&self, selector: SortSelector) -> Vec<Tutor> {
        matching::sort_by(&self.roster, selector, &mut rand::thread_rng())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Tutors supporting a goal, with the goal's display label.
    ///
    /// An unknown goal code is `NotFound`; a known goal with no matching
    /// tutors is an empty listing.
    pub fn tutors_by_goal(&self, code: &str) -> Result<(String, Vec<Tutor>)> {
        let label = self
            .roster
            .goal_label(code)
            .ok_or_else(|| Error::NotFound(format!("no goal '{code}'")))?
            .to_string();
        let tutors = matching::filter_by_goal(&self.roster, code)
            .into_iter()
            .cloned()
            .collect();
        Ok((label, tutors))
    }

    /// Single tutor profile.
    pub fn tutor(&self, id: u32) -> Result<Tutor> {
        self.roster
            .by_id(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no tutor with id {id}")))
    }

    /// Resolve a requested slot for the confirmation view. Read-only.
    pub fn resolve_booking_slot(
        &self,
        tutor_id: u32,
        day_token: &str,
        time_token: &str,
    ) -> Result<BookingSlot> {
        slots::resolve(&self.roster, tutor_id, day_token, time_token)
    }

    /// Validate and persist a consultation request.
    ///
    /// `Err` means persistence failed and the client must not be shown a
    /// success confirmation. Identical submissions store identical records
    /// twice; there is no deduplication.
    pub async fn submit_request(&self, input: RequestInput) -> Result<Submission<RequestReceipt>> {
        let record = match validate::validate_request(&self.roster, &input) {
            Ok(record) => record,
            Err(errors) => return Ok(Submission::Rejected(errors)),
        };
        self.requests.append(record.clone()).await?;
        info!("stored consultation request from {}", record.client_name);

        // Labels resolved during validation; absent would mean a roster bug.
        let goal_label = self
            .roster
            .goal_label(&record.client_goal)
            .unwrap_or_default()
            .to_string();
        let hours_label = hours_label(&record.client_hours).unwrap_or_default().to_string();
        Ok(Submission::Accepted(RequestReceipt {
            record,
            goal_label,
            hours_label,
        }))
    }

    /// Validate and persist a lesson booking.
    ///
    /// The weekday code and tutor id were resolved by the slot resolver
    /// before submission, but both are re-checked here: the roster and the
    /// weekday table are the source of truth at submission time, and one
    /// unresolved reference invalidates the whole attempt.
    pub async fn submit_booking(&self, input: BookingInput) -> Result<Submission<BookingReceipt>> {
        if let Err(errors) = validate::validate_booking(&input) {
            return Ok(Submission::Rejected(errors));
        }
        let tutor_id = input
            .tutor_id
            .ok_or_else(|| Error::NotFound("booking references no tutor".to_string()))?;
        let weekday = slots::weekday_by_code(&input.weekday)
            .ok_or_else(|| Error::NotFound(format!("no weekday code '{}'", input.weekday)))?;
        let tutor = self
            .roster
            .by_id(tutor_id)
            .ok_or_else(|| Error::NotFound(format!("no tutor with id {tutor_id}")))?;

        let record = BookingSubmission {
            client_name: input.name.trim().to_string(),
            client_phone: input.phone.trim().to_string(),
            client_weekday: weekday.code.to_string(),
            client_time: slots::normalize_time(&input.time),
            client_teacher: tutor.id,
        };
        self.bookings.append(record.clone()).await?;
        info!(
            "stored booking for tutor {} on {} {}",
            record.client_teacher, record.client_weekday, record.client_time
        );
        Ok(Submission::Accepted(BookingReceipt {
            record,
            weekday_label: weekday.label.to_string(),
        }))
    }

    /// All stored consultation requests, insertion order.
    pub async fn stored_requests(&self) -> Result<Vec<RequestSubmission>> {
        Ok(self.requests.read().await?.requests)
    }

    /// All stored bookings, insertion order.
    pub async fn stored_bookings(&self) -> Result<Vec<BookingSubmission>> {
        Ok(self.bookings.read().await?.bookings)
    }
}

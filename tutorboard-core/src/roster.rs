//! Tutor roster and goal taxonomy
//!
//! Loaded once at process start from a single JSON document and shared
//! read-only for the process lifetime. A reload is a restart, not a runtime
//! operation.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One teaching profile from the catalog. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    /// Stable unique identifier, referenced by bookings
    pub id: u32,
    pub name: String,
    pub picture: String,
    /// Hourly price
    pub price: f64,
    pub rating: f64,
    /// Goal codes this tutor supports; every code must exist in the goal taxonomy
    pub goals: Vec<String>,
    /// Free-text bio
    #[serde(default)]
    pub about: String,
}

/// On-disk shape of the roster document.
///
/// Top-level keys `teachers` and `goals` are a stable contract with data
/// export tooling; renaming them is a breaking change.
#[derive(Debug, Deserialize)]
struct RosterDocument {
    goals: BTreeMap<String, String>,
    teachers: Vec<Tutor>,
}

/// The immutable tutor catalog plus the goal taxonomy.
#[derive(Debug)]
pub struct Roster {
    tutors: Vec<Tutor>,
    goals: BTreeMap<String, String>,
}

impl Roster {
    /// Load the roster document from disk.
    ///
    /// Any failure to read or parse, a duplicate tutor id, or a tutor
    /// referencing a goal code with no label is reported as
    /// [`Error::Corrupt`]; the roster is the single source of truth and is
    /// never partially loaded.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::Corrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let doc: RosterDocument = serde_json::from_str(&raw).map_err(|e| Error::Corrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_parts(doc.teachers, doc.goals).map_err(|e| match e {
            Error::Corrupt { reason, .. } => Error::Corrupt {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Build a roster from already-parsed parts, enforcing the same
    /// integrity checks as [`Roster::load`].
    pub fn from_parts(tutors: Vec<Tutor>, goals: BTreeMap<String, String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tutor in &tutors {
            if !seen.insert(tutor.id) {
                return Err(Error::Corrupt {
                    path: String::new(),
                    reason: format!("duplicate tutor id {}", tutor.id),
                });
            }
            for goal in &tutor.goals {
                if !goals.contains_key(goal) {
                    return Err(Error::Corrupt {
                        path: String::new(),
                        reason: format!(
                            "tutor {} references unknown goal '{}'",
                            tutor.id, goal
                        ),
                    });
                }
            }
        }
        Ok(Self { tutors, goals })
    }

    /// All tutors in load order.
    pub fn all(&self) -> &[Tutor] {
        &self.tutors
    }

    pub fn len(&self) -> usize {
        self.tutors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutors.is_empty()
    }

    /// Look up a tutor by its stable identifier.
    pub fn by_id(&self, id: u32) -> Option<&Tutor> {
        self.tutors.iter().find(|t| t.id == id)
    }

    /// The goal taxonomy, code → display label.
    pub fn goals(&self) -> &BTreeMap<String, String> {
        &self.goals
    }

    /// Display label for a goal code, or None if the code is not in the taxonomy.
    pub fn goal_label(&self, code: &str) -> Option<&str> {
        self.goals.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn goals() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("travel".to_string(), "Для путешествий".to_string()),
            ("study".to_string(), "Для учебы".to_string()),
        ])
    }

    fn tutor(id: u32, goals: &[&str]) -> Tutor {
        Tutor {
            id,
            name: format!("Tutor {id}"),
            picture: format!("https://example.com/{id}.png"),
            price: 900.0,
            rating: 4.5,
            goals: goals.iter().map(|g| g.to_string()).collect(),
            about: String::new(),
        }
    }

    #[test]
    fn load_parses_valid_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
              "goals": {{"travel": "Для путешествий"}},
              "teachers": [
                {{"id": 1, "name": "Eliza", "picture": "p.png",
                  "price": 900, "rating": 4.7, "goals": ["travel"],
                  "about": "..."}}
              ]
            }}"#
        )
        .unwrap();

        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.by_id(1).unwrap().name, "Eliza");
        assert_eq!(roster.goal_label("travel"), Some("Для путешествий"));
        assert_eq!(roster.goal_label("work"), None);
    }

    #[test]
    fn load_missing_file_is_corrupt() {
        let err = Roster::load(Path::new("/nonexistent/tutors.json")).unwrap_err();
        assert!(matches!(err, Error::Corrupt { .. }));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = Roster::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Corrupt { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Roster::from_parts(
            vec![tutor(1, &["travel"]), tutor(1, &["study"])],
            goals(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Corrupt { .. }));
    }

    #[test]
    fn unknown_goal_reference_is_rejected() {
        let err = Roster::from_parts(vec![tutor(1, &["surfing"])], goals()).unwrap_err();
        assert!(matches!(err, Error::Corrupt { .. }));
    }

    #[test]
    fn all_preserves_load_order() {
        let roster = Roster::from_parts(
            vec![tutor(3, &["travel"]), tutor(1, &["study"]), tutor(2, &[])],
            goals(),
        )
        .unwrap();
        let ids: Vec<u32> = roster.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

//! Client submission validation
//!
//! Raw inbound fields are checked against the required-field policy and the
//! fixed vocabularies; failures come back as a per-field error map for the
//! client to re-prompt, never as a crash or a store mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roster::Roster;
use crate::store::RequestSubmission;

/// The four weekly-hours buckets a consultation request may pick from.
pub const HOURS_BUCKETS: [(&str, &str); 4] = [
    ("hour1_2", "1-2 часа в неделю"),
    ("hour3_5", "3-5 часов в неделю"),
    ("hour5_7", "5-7 часов в неделю"),
    ("hour7_10", "7-10 часов в неделю"),
];

/// Display label for an hours bucket code.
pub fn hours_label(code: &str) -> Option<&'static str> {
    HOURS_BUCKETS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Per-field validation failures, field name → message.
///
/// Ordered map so error listings render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Names of the failing fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Raw fields of an inbound consultation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub hours: String,
}

/// Raw fields of an inbound booking submission.
///
/// Weekday, time and tutor id arrive already resolved by the slot resolver
/// (the confirmation view carries them back); the validator checks only the
/// client-typed fields and leaves referential checks to the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub weekday: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub tutor_id: Option<u32>,
}

fn check_contact(errors: &mut FieldErrors, name: &str, phone: &str) {
    if name.trim().is_empty() {
        errors.insert("name", "Необходимо указать имя");
    }
    if phone.trim().is_empty() {
        // Free-form phone strings are accepted; only presence is required.
        errors.insert("phone", "Необходимо указать телефон");
    }
}

/// Validate a consultation request against the goal taxonomy and the
/// hours-bucket vocabulary, producing the normalized record on success.
pub fn validate_request(
    roster: &Roster,
    input: &RequestInput,
) -> Result<RequestSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_contact(&mut errors, &input.name, &input.phone);
    if roster.goal_label(&input.goal).is_none() {
        errors.insert("goal", "Неизвестная цель занятий");
    }
    if hours_label(&input.hours).is_none() {
        errors.insert("hours", "Неизвестный объём занятий");
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RequestSubmission {
        client_name: input.name.trim().to_string(),
        client_phone: input.phone.trim().to_string(),
        client_goal: input.goal.clone(),
        client_hours: input.hours.clone(),
    })
}

/// Validate the client-typed fields of a booking submission.
pub fn validate_booking(input: &BookingInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_contact(&mut errors, &input.name, &input.phone);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Tutor;
    use std::collections::BTreeMap;

    fn roster() -> Roster {
        let goals = BTreeMap::from([
            ("travel".to_string(), "Для путешествий".to_string()),
            ("study".to_string(), "Для учебы".to_string()),
        ]);
        Roster::from_parts(
            vec![Tutor {
                id: 1,
                name: "Eliza".to_string(),
                picture: String::new(),
                price: 900.0,
                rating: 4.7,
                goals: vec!["travel".to_string()],
                about: String::new(),
            }],
            goals,
        )
        .unwrap()
    }

    fn input() -> RequestInput {
        RequestInput {
            name: "Anna".to_string(),
            phone: "123".to_string(),
            goal: "travel".to_string(),
            hours: "hour5_7".to_string(),
        }
    }

    #[test]
    fn valid_request_produces_normalized_record() {
        let record = validate_request(&roster(), &input()).unwrap();
        assert_eq!(record.client_name, "Anna");
        assert_eq!(record.client_phone, "123");
        assert_eq!(record.client_goal, "travel");
        assert_eq!(record.client_hours, "hour5_7");
    }

    #[test]
    fn empty_name_fails_on_exactly_that_field() {
        let errors = validate_request(
            &roster(),
            &RequestInput {
                name: String::new(),
                ..input()
            },
        )
        .unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["name"]);
        assert!(errors.message("name").is_some());
    }

    #[test]
    fn whitespace_only_name_counts_as_missing() {
        let errors = validate_request(
            &roster(),
            &RequestInput {
                name: "   ".to_string(),
                ..input()
            },
        )
        .unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn unknown_goal_and_hours_are_rejected() {
        let errors = validate_request(
            &roster(),
            &RequestInput {
                goal: "surfing".to_string(),
                hours: "hour0_1".to_string(),
                ..input()
            },
        )
        .unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["goal", "hours"]);
    }

    #[test]
    fn all_failures_are_reported_together() {
        let errors = validate_request(&roster(), &RequestInput::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn booking_checks_only_contact_fields() {
        let ok = validate_booking(&BookingInput {
            name: "Anna".to_string(),
            phone: "123".to_string(),
            ..Default::default()
        });
        assert!(ok.is_ok());

        let errors = validate_booking(&BookingInput::default()).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["name", "phone"]);
    }

    #[test]
    fn hours_bucket_lookup() {
        assert_eq!(hours_label("hour1_2"), Some("1-2 часа в неделю"));
        assert!(hours_label("hour24_7").is_none());
    }
}

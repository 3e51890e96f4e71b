//! Business-day table and booking slot resolution

use serde::Serialize;

use crate::roster::Roster;
use crate::{Error, Result};

/// One entry of the fixed business-day table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekday {
    /// Short code persisted with bookings (e.g. `mon`)
    pub code: &'static str,
    /// Canonical day token used in booking URLs (e.g. `monday`)
    pub day: &'static str,
    /// Display label
    pub label: &'static str,
}

/// The five bookable business days. Fixed; not derived from roster data.
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday { code: "mon", day: "monday", label: "Понедельник" },
    Weekday { code: "tue", day: "tuesday", label: "Вторник" },
    Weekday { code: "wed", day: "wednesday", label: "Среда" },
    Weekday { code: "thu", day: "thursday", label: "Четверг" },
    Weekday { code: "fri", day: "friday", label: "Пятница" },
];

/// Look up a weekday by its canonical day token (`monday`, ...).
pub fn weekday_by_day(day: &str) -> Option<&'static Weekday> {
    WEEKDAYS.iter().find(|w| w.day == day)
}

/// Look up a weekday by its short code (`mon`, ...).
pub fn weekday_by_code(code: &str) -> Option<&'static Weekday> {
    WEEKDAYS.iter().find(|w| w.code == code)
}

/// A validated (tutor, weekday, time) triple, ready for the confirmation view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSlot {
    /// Weekday code (`mon`, ...), the value that gets persisted
    pub weekday: String,
    pub weekday_label: String,
    /// Normalized `HH:MM`
    pub time: String,
    pub tutor_id: u32,
    pub tutor_name: String,
    pub tutor_picture: String,
}

/// Normalize a time token to `HH:MM`, appending `:00` when no minutes are given.
pub fn normalize_time(token: &str) -> String {
    if token.contains(':') {
        token.to_string()
    } else {
        format!("{token}:00")
    }
}

/// Resolve a requested slot against the weekday table and the roster.
///
/// Both references must resolve; an unknown day token or an unknown tutor id
/// each invalidate the whole booking attempt. The time is normalized but not
/// checked against any availability window (the roster carries none).
pub fn resolve(
    roster: &Roster,
    tutor_id: u32,
    day_token: &str,
    time_token: &str,
) -> Result<BookingSlot> {
    let weekday = weekday_by_day(day_token)
        .ok_or_else(|| Error::NotFound(format!("no business day matches '{day_token}'")))?;
    let time = normalize_time(time_token);
    let tutor = roster
        .by_id(tutor_id)
        .ok_or_else(|| Error::NotFound(format!("no tutor with id {tutor_id}")))?;
    Ok(BookingSlot {
        weekday: weekday.code.to_string(),
        weekday_label: weekday.label.to_string(),
        time,
        tutor_id: tutor.id,
        tutor_name: tutor.name.clone(),
        tutor_picture: tutor.picture.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Tutor;
    use std::collections::BTreeMap;

    fn roster() -> Roster {
        let tutors = [1, 2, 3]
            .iter()
            .map(|&id| Tutor {
                id,
                name: format!("Tutor {id}"),
                picture: format!("{id}.png"),
                price: 800.0,
                rating: 4.0,
                goals: vec![],
                about: String::new(),
            })
            .collect();
        Roster::from_parts(tutors, BTreeMap::new()).unwrap()
    }

    #[test]
    fn resolves_day_token_to_weekday_code() {
        let slot = resolve(&roster(), 2, "monday", "14").unwrap();
        assert_eq!(slot.weekday, "mon");
        assert_eq!(slot.weekday_label, "Понедельник");
        assert_eq!(slot.time, "14:00");
        assert_eq!(slot.tutor_id, 2);
        assert_eq!(slot.tutor_name, "Tutor 2");
    }

    #[test]
    fn time_with_minutes_is_kept() {
        let slot = resolve(&roster(), 1, "friday", "09:30").unwrap();
        assert_eq!(slot.time, "09:30");
    }

    #[test]
    fn unknown_day_token_is_not_found() {
        // The lookup matches the canonical day token, never the short code.
        let err = resolve(&roster(), 1, "mon", "14").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        let err = resolve(&roster(), 1, "saturday", "14").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn unknown_tutor_is_not_found_even_with_valid_day() {
        let err = resolve(&roster(), 99, "monday", "14").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn weekday_lookups() {
        assert_eq!(weekday_by_code("wed").unwrap().day, "wednesday");
        assert!(weekday_by_code("sun").is_none());
        assert_eq!(weekday_by_day("tuesday").unwrap().code, "tue");
    }
}

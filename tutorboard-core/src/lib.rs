//! # TutorBoard Core Library
//!
//! Matching and booking engine for the tutor catalog:
//! - Roster loading and lookup (read-only after startup)
//! - Filtering, sorting and random sampling of tutors
//! - Booking slot resolution against the business-day table
//! - Client submission validation
//! - Append-only JSON persistence for requests and bookings

pub mod config;
pub mod error;
pub mod matching;
pub mod roster;
pub mod service;
pub mod slots;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use service::TutorBoard;

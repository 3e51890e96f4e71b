//! HTTP API handlers for tutorboard-web

pub mod bookings;
pub mod error;
pub mod health;
pub mod requests;
pub mod tutors;

pub use bookings::{resolve_booking_slot, submit_booking};
pub use error::ApiError;
pub use health::health_routes;
pub use requests::submit_request;
pub use tutors::{list_tutors, sample_tutors, tutor_profile, tutors_by_goal};

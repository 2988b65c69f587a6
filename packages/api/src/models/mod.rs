//! # Data models
//!
//! | Model | Table | Notes |
//! |-------|-------|-------|
//! | [`User`] | `users` | login identity; unique lower-cased email, Argon2 hash, free-text role |
//! | [`Profile`] | `profiles` | 1:1 extension of a user, written in the registration transaction |
//! | [`Patient`] | `patients` | shared pool of patient records |
//! | [`Doctor`] | `doctors` | shared pool of doctor records |
//!
//! Patient and doctor records carry no owner: any signed-in account can read
//! and mutate all of them. Form payloads ([`PatientForm`], [`DoctorForm`]) are
//! validated into insertable values before anything touches the database.

mod doctor;
mod patient;
mod profile;
mod user;

pub use doctor::{Doctor, DoctorForm, NewDoctor};
pub use patient::{NewPatient, Patient, PatientForm};
pub use profile::{NewProfile, Profile};
pub use user::{normalize_email, User, DEFAULT_ROLE};

/// Rejected record form input. The display text is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Fill all fields")]
    MissingFields,
    #[error("Age must be a number")]
    InvalidAge,
}

/// Trim a required form value, rejecting blanks.
fn required(value: &str) -> Result<&str, ValidationError> {
    match value.trim() {
        "" => Err(ValidationError::MissingFields),
        trimmed => Ok(trimmed),
    }
}

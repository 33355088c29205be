// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input validation for booking creation and free-text fields.
//!
//! These checks run before anything touches the store: party size,
//! required contact fields, and the length bounds on notes and
//! transition reasons.

use thiserror::Error;

use crate::request_response::CreateBookingRequest;

/// Maximum length of a booking's internal note, in characters.
pub const MAX_NOTE_LENGTH: usize = 1000;

/// Maximum length of a transition reason, in characters.
pub const MAX_REASON_LENGTH: usize = 1000;

/// Minimum booking party size.
pub const MIN_PARTY_SIZE: i64 = 1;

/// Booking input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingInputError {
    /// Party size is below the minimum.
    #[error("Party size must be at least {minimum}")]
    PartySizeTooSmall { minimum: i64 },

    /// A required contact field is empty.
    #[error("Required contact field '{field}' must not be empty")]
    MissingContactField { field: String },

    /// The internal note exceeds the length bound.
    #[error("Internal note must be at most {max_length} characters (found {found})")]
    NoteTooLong { max_length: usize, found: usize },

    /// The transition reason exceeds the length bound.
    #[error("Reason must be at most {max_length} characters (found {found})")]
    ReasonTooLong { max_length: usize, found: usize },
}

/// Validates the user-supplied fields of a booking creation request.
///
/// # Errors
///
/// Returns a `BookingInputError` for the first failing field: party size
/// below [`MIN_PARTY_SIZE`], or an empty required contact field.
pub fn validate_create_booking(request: &CreateBookingRequest) -> Result<(), BookingInputError> {
    if request.party_size < MIN_PARTY_SIZE {
        return Err(BookingInputError::PartySizeTooSmall {
            minimum: MIN_PARTY_SIZE,
        });
    }

    let contact_fields = [
        ("customer_name", request.customer_name.as_str()),
        ("customer_email", request.customer_email.as_str()),
        ("customer_phone", request.customer_phone.as_str()),
        ("start_date", request.start_date.as_str()),
    ];
    for (name, value) in contact_fields {
        if value.trim().is_empty() {
            return Err(BookingInputError::MissingContactField {
                field: String::from(name),
            });
        }
    }

    Ok(())
}

/// Validates an internal note against the length bound.
///
/// # Errors
///
/// Returns `NoteTooLong` if the note exceeds [`MAX_NOTE_LENGTH`] characters.
pub fn validate_note(note: &str) -> Result<(), BookingInputError> {
    let found = note.chars().count();
    if found > MAX_NOTE_LENGTH {
        return Err(BookingInputError::NoteTooLong {
            max_length: MAX_NOTE_LENGTH,
            found,
        });
    }
    Ok(())
}

/// Validates an optional transition reason against the length bound.
///
/// # Errors
///
/// Returns `ReasonTooLong` if the reason exceeds [`MAX_REASON_LENGTH`]
/// characters.
pub fn validate_reason(reason: Option<&str>) -> Result<(), BookingInputError> {
    if let Some(text) = reason {
        let found = text.chars().count();
        if found > MAX_REASON_LENGTH {
            return Err(BookingInputError::ReasonTooLong {
                max_length: MAX_REASON_LENGTH,
                found,
            });
        }
    }
    Ok(())
}

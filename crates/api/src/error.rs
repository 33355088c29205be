// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::booking_input::BookingInputError;
use tour_ops::CoreError;
use tour_ops_domain::DomainError;
use tour_ops_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract: `NotFound`, `InvalidTransition`, `ValidationError`, and a
/// catch-all `Internal` for store failures. Batch partial failure is not
/// an error; it is a populated report (see the batch handlers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource does not exist or is soft-deleted.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The requested status change is not in the allowed-set for the
    /// entity's current status.
    InvalidTransition {
        /// The entity's current status.
        from: String,
        /// The requested status.
        to: String,
        /// A human-readable description of the rejection.
        message: String,
    },
    /// Malformed input was provided.
    ValidationError {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidTransition { from, to, message } => {
                write!(f, "Invalid transition from '{from}' to '{to}': {message}")
            }
            Self::ValidationError { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<BookingInputError> for ApiError {
    fn from(err: BookingInputError) -> Self {
        let message = err.to_string();
        let field = match err {
            BookingInputError::PartySizeTooSmall { .. } => String::from("party_size"),
            BookingInputError::MissingContactField { field } => field,
            BookingInputError::NoteTooLong { .. } => String::from("internal_note"),
            BookingInputError::ReasonTooLong { .. } => String::from("reason"),
        };
        Self::ValidationError { field, message }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Resource"),
                message,
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidTransition {
            from: from.clone(),
            to: to.clone(),
            message: format!("Cannot change status from '{from}' to '{to}': {reason}"),
        },
        DomainError::InvalidTourStatus { status } => ApiError::ValidationError {
            field: String::from("status"),
            message: format!("'{status}' is not a recognized tour status"),
        },
        DomainError::InvalidBookingStatus { status } => ApiError::ValidationError {
            field: String::from("status"),
            message: format!("'{status}' is not a recognized booking status"),
        },
        DomainError::InvalidPaymentStatus { status } => ApiError::ValidationError {
            field: String::from("payment_status"),
            message: format!("'{status}' is not a recognized payment status"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

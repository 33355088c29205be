// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string is not a recognized tour status token.
    InvalidTourStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// The string is not a recognized booking status token.
    InvalidBookingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// The string is not a recognized payment status token.
    InvalidPaymentStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTourStatus { status } => {
                write!(f, "Invalid tour status: '{status}'")
            }
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidPaymentStatus { status } => {
                write!(f, "Invalid payment status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from '{from}' to '{to}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

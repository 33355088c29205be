// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking workflow status and transition logic.
//!
//! A booking is created in `Pending` and advances toward `Complete`;
//! `Cancel` is reachable from every non-terminal status. Payment status
//! is tracked separately and is not part of this state machine.

use crate::error::DomainError;
use crate::rules::{self, EntityKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fulfillment status of a booking.
///
/// Wire tokens are the mixed-case literals used by the admin workflow
/// (`Pending`, `Confirmed`, `InProgress`, `Cancel`, `Complete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Submitted by the customer, awaiting confirmation.
    Pending,
    /// Confirmed by an operator.
    Confirmed,
    /// The tour is underway.
    InProgress,
    /// Cancelled; terminal.
    Cancel,
    /// Fulfilled; terminal.
    Complete,
}

impl BookingStatus {
    /// Returns the wire-format token for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "InProgress",
            Self::Cancel => "Cancel",
            Self::Complete => "Complete",
        }
    }

    /// Parses a status from its wire-format token.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            "InProgress" => Ok(Self::InProgress),
            "Cancel" => Ok(Self::Cancel),
            "Complete" => Ok(Self::Complete),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status has no outgoing transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        rules::allowed_targets(EntityKind::Booking, self.as_str()).is_empty()
    }

    /// Validates a transition from this status to another.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// a no-op, originates from a terminal status, or is not in the rule
    /// table's allowed-set.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if *self == new_status {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition to the current status is a no-op".to_string(),
            });
        }

        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal status".to_string(),
            });
        }

        if rules::can_transition(EntityKind::Booking, self.as_str(), new_status.as_str()) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking workflow rules".to_string(),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

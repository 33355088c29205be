// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour publication status and transition logic.
//!
//! A tour is created in `draft` and moves through its publication
//! lifecycle only via operator-initiated transitions. Soft deletion is
//! orthogonal to this lifecycle and never changes the status.

use crate::error::DomainError;
use crate::rules::{self, EntityKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Publication status of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    /// Being edited; not visible to customers.
    Draft,
    /// Published and bookable.
    Public,
    /// Temporarily hidden from the public site.
    Hide,
    /// Withdrawn permanently; terminal.
    Cancelled,
}

impl TourStatus {
    /// Returns the wire-format token for this status.
    ///
    /// Tokens are lowercase and used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Public => "public",
            Self::Hide => "hide",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its wire-format token.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "public" => Ok(Self::Public),
            "hide" => Ok(Self::Hide),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidTourStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status has no outgoing transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        rules::allowed_targets(EntityKind::Tour, self.as_str()).is_empty()
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

        if rules::can_transition(EntityKind::Tour, self.as_str(), new_status.as_str()) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by tour lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for TourStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

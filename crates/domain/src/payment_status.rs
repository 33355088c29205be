// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking payment status.
//!
//! Payment status is a separately-settable field with no declared
//! transition rules; it is not consulted by the transition validator and
//! payment changes are not recorded in the status ledger. The wire tokens
//! carry inconsistent casing (`pending`, `paid`, `Cancelled`) which is
//! preserved exactly for backward compatibility; internal logic works on
//! this closed enum instead of the raw strings.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Payment not yet received.
    #[serde(rename = "pending")]
    Pending,
    /// Payment received in full.
    #[serde(rename = "paid")]
    Paid,
    /// Payment cancelled or refunded.
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl PaymentStatus {
    /// Returns the wire-format token for this status.
    ///
    /// Token casing is historical and intentionally uneven.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parses a status from its wire-format token.
    ///
    /// Parsing is exact; normalization happens here at the boundary and
    /// nowhere else.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidPaymentStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure transition planning.
//!
//! Planning validates a requested status change against the rule tables
//! and, when accepted, produces the ledger entry that documents it. No
//! I/O happens here; the persistence layer applies the plan (status
//! update plus ledger insert) as a single transaction.

use crate::error::CoreError;
use tour_ops_audit::LedgerEntry;
use tour_ops_domain::{BookingStatus, EntityKind, TourStatus};

/// Plans a tour status transition.
///
/// `ledger_tail` is the `new_status` of the entity's most recent ledger
/// entry, or `None` when the ledger is empty. The produced entry chains
/// from the tail, so the first entry recorded against a tour carries no
/// previous status.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the transition is rejected by
/// the tour rule table.
pub fn plan_tour_transition(
    current: TourStatus,
    requested: TourStatus,
    ledger_tail: Option<&str>,
    actor: &str,
    changed_at: &str,
    reason: Option<&str>,
) -> Result<LedgerEntry, CoreError> {
    current.validate_transition(requested)?;

    Ok(LedgerEntry::new(
        EntityKind::Tour,
        ledger_tail.map(ToString::to_string),
        requested.as_str().to_string(),
        actor.to_string(),
        changed_at.to_string(),
        reason.map(ToString::to_string),
    ))
}

/// Plans a booking status transition.
///
/// Mirror of [`plan_tour_transition`] over the booking rule table.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the transition is rejected by
/// the booking rule table.
pub fn plan_booking_transition(
    current: BookingStatus,
    requested: BookingStatus,
    ledger_tail: Option<&str>,
    actor: &str,
    changed_at: &str,
    reason: Option<&str>,
) -> Result<LedgerEntry, CoreError> {
    current.validate_transition(requested)?;

    Ok(LedgerEntry::new(
        EntityKind::Booking,
        ledger_tail.map(ToString::to_string),
        requested.as_str().to_string(),
        actor.to_string(),
        changed_at.to_string(),
        reason.map(ToString::to_string),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_ops_domain::DomainError;

    #[test]
    fn test_accepted_tour_plan_builds_ledger_entry() {
        let entry = plan_tour_transition(
            TourStatus::Draft,
            TourStatus::Public,
            None,
            "alice",
            "2026-03-01T09:00:00Z",
            Some("spring launch"),
        )
        .expect("draft -> public is legal");

        assert_eq!(entry.kind, EntityKind::Tour);
        assert_eq!(entry.previous_status, None);
        assert_eq!(entry.new_status, "public");
        assert_eq!(entry.actor, "alice");
        assert_eq!(entry.reason.as_deref(), Some("spring launch"));
    }

    #[test]
    fn test_plan_chains_from_ledger_tail() {
        let entry = plan_tour_transition(
            TourStatus::Public,
            TourStatus::Hide,
            Some("public"),
            "alice",
            "2026-03-02T09:00:00Z",
            None,
        )
        .expect("public -> hide is legal");

        assert_eq!(entry.previous_status.as_deref(), Some("public"));
        assert_eq!(entry.new_status, "hide");
    }

    #[test]
    fn test_rejected_tour_plan_produces_no_entry() {
        let result = plan_tour_transition(
            TourStatus::Public,
            TourStatus::Draft,
            Some("public"),
            "alice",
            "2026-03-02T09:00:00Z",
            None,
        );

        match result {
            Err(CoreError::DomainViolation(DomainError::InvalidStatusTransition {
                from,
                to,
                ..
            })) => {
                assert_eq!(from, "public");
                assert_eq!(to, "draft");
            }
            other => panic!("Expected InvalidStatusTransition, got: {other:?}"),
        }
    }

    #[test]
    fn test_booking_plan_uses_booking_tokens() {
        let entry = plan_booking_transition(
            BookingStatus::Pending,
            BookingStatus::Cancel,
            None,
            "bob",
            "2026-03-03T12:00:00Z",
            Some("customer request"),
        )
        .expect("Pending -> Cancel is legal");

        assert_eq!(entry.kind, EntityKind::Booking);
        assert_eq!(entry.new_status, "Cancel");
    }

    #[test]
    fn test_terminal_booking_plan_rejected() {
        let result = plan_booking_transition(
            BookingStatus::Cancel,
            BookingStatus::Confirmed,
            Some("Cancel"),
            "bob",
            "2026-03-03T12:00:00Z",
            None,
        );
        assert!(result.is_err());
    }
}

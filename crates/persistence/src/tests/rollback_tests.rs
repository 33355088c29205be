// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional atomicity of status transitions.
//!
//! An oversized reason violates the ledger table's length constraint
//! AFTER the status update has already executed inside the same
//! transaction. If the transition were not atomic, the entity would be
//! left with a new status and no ledger row documenting it.

use super::{
    create_booking_entry, create_test_booking, create_test_persistence, create_test_tour,
    create_tour_entry,
};

#[test]
fn test_failed_tour_ledger_write_rolls_back_status_update() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    let oversized_reason = "x".repeat(1001);
    let result = persistence.apply_tour_transition(
        tour_id,
        &create_tour_entry(None, "public", "2026-03-01T09:00:00Z", Some(&oversized_reason)),
    );
    assert!(result.is_err());

    let row = persistence
        .get_tour(tour_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.status, "draft");
    assert_eq!(row.updated_at, "2026-03-01T08:00:00Z");

    assert!(persistence.get_tour_history(tour_id).expect("query").is_empty());
}

#[test]
fn test_failed_booking_ledger_write_rolls_back_status_update() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("public"))
        .expect("tour insert");
    let booking_id = persistence
        .create_booking(&create_test_booking(tour_id))
        .expect("booking insert");

    let oversized_reason = "x".repeat(1001);
    let result = persistence.apply_booking_transition(
        booking_id,
        &create_booking_entry(
            Some("Pending"),
            "Confirmed",
            "2026-03-03T11:00:00Z",
            Some(&oversized_reason),
        ),
    );
    assert!(result.is_err());

    let row = persistence
        .get_booking(booking_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.status, "Pending");

    assert!(persistence
        .get_booking_history(booking_id)
        .expect("query")
        .is_empty());
}

#[test]
fn test_later_transitions_succeed_after_a_rollback() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    let oversized_reason = "x".repeat(1001);
    let _ = persistence.apply_tour_transition(
        tour_id,
        &create_tour_entry(None, "public", "2026-03-01T09:00:00Z", Some(&oversized_reason)),
    );

    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(None, "public", "2026-03-01T09:05:00Z", Some("season open")),
        )
        .expect("connection should remain usable after rollback");

    let row = persistence
        .get_tour(tour_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.status, "public");
    assert_eq!(persistence.get_tour_history(tour_id).expect("query").len(), 1);
}

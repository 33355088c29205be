// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_booking_entry, create_test_booking, create_test_persistence, create_test_tour,
};

fn persistence_with_booking() -> (crate::Persistence, i64) {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("public"))
        .expect("tour insert");
    let booking_id = persistence
        .create_booking(&create_test_booking(tour_id))
        .expect("booking insert");
    (persistence, booking_id)
}

#[test]
fn test_create_and_get_booking() {
    let (mut persistence, booking_id) = persistence_with_booking();

    let row = persistence
        .get_booking(booking_id)
        .expect("query")
        .expect("booking exists");

    assert_eq!(row.booking_id, booking_id);
    assert_eq!(row.customer_name, "Mina Solberg");
    assert_eq!(row.party_size, 2);
    assert_eq!(row.total_price_cents, 25_000);
    assert_eq!(row.status, "Pending");
    assert_eq!(row.payment_status, "pending");
    assert_eq!(row.internal_note, None);
}

#[test]
fn test_booking_requires_existing_tour() {
    let mut persistence = create_test_persistence();

    let result = persistence.create_booking(&create_test_booking(9999));
    assert!(result.is_err());
}

#[test]
fn test_apply_booking_transition_updates_status_and_ledger() {
    let (mut persistence, booking_id) = persistence_with_booking();

    persistence
        .apply_booking_transition(
            booking_id,
            &create_booking_entry(
                Some("Pending"),
                "Confirmed",
                "2026-03-03T11:00:00Z",
                Some("deposit received"),
            ),
        )
        .expect("transition should succeed");

    let row = persistence
        .get_booking(booking_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.status, "Confirmed");

    let history = persistence.get_booking_history(booking_id).expect("query");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].previous_status.as_deref(), Some("Pending"));
    assert_eq!(history[0].new_status, "Confirmed");
    assert_eq!(history[0].reason.as_deref(), Some("deposit received"));

    let tail = persistence
        .get_booking_ledger_tail(booking_id)
        .expect("query")
        .expect("tail exists");
    assert_eq!(tail.new_status, "Confirmed");
}

#[test]
fn test_payment_update_does_not_touch_ledger() {
    let (mut persistence, booking_id) = persistence_with_booking();

    persistence
        .update_payment_status(booking_id, "paid", "2026-03-04T09:00:00Z", "ops-admin")
        .expect("payment update");

    let row = persistence
        .get_booking(booking_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.payment_status, "paid");
    assert_eq!(row.status, "Pending");

    assert!(persistence
        .get_booking_history(booking_id)
        .expect("query")
        .is_empty());
}

#[test]
fn test_internal_note_is_overwritten() {
    let (mut persistence, booking_id) = persistence_with_booking();

    persistence
        .set_internal_note(booking_id, "prefers morning slot", "2026-03-04T09:00:00Z", "guide-1")
        .expect("note update");
    persistence
        .set_internal_note(booking_id, "party grew to 3", "2026-03-05T09:00:00Z", "guide-1")
        .expect("note update");

    let row = persistence
        .get_booking(booking_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.internal_note.as_deref(), Some("party grew to 3"));
    assert_eq!(row.updated_by, "guide-1");
}

#[test]
fn test_party_size_check_constraint() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("public"))
        .expect("tour insert");

    let mut booking = create_test_booking(tour_id);
    booking.party_size = 0;

    assert!(persistence.create_booking(&booking).is_err());
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod booking_transition_tests;
mod rollback_tests;
mod tour_transition_tests;

use tour_ops_audit::LedgerEntry;
use tour_ops_domain::EntityKind;

use crate::data_models::{NewBooking, NewTour};
use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn create_test_tour(status: &str) -> NewTour {
    NewTour {
        title: String::from("Fjord Kayaking"),
        status: status.to_string(),
        price_per_person_cents: 12_500,
        is_active: 1,
        created_at: String::from("2026-03-01T08:00:00Z"),
        updated_at: String::from("2026-03-01T08:00:00Z"),
        updated_by: String::from("ops-admin"),
    }
}

pub fn create_test_booking(tour_id: i64) -> NewBooking {
    NewBooking {
        tour_id,
        customer_name: String::from("Mina Solberg"),
        customer_email: String::from("mina@example.com"),
        customer_phone: String::from("+47 555 0101"),
        start_date: String::from("2026-06-15"),
        party_size: 2,
        total_price_cents: 25_000,
        status: String::from("Pending"),
        payment_status: String::from("pending"),
        internal_note: None,
        is_active: 1,
        created_at: String::from("2026-03-02T09:00:00Z"),
        updated_at: String::from("2026-03-02T09:00:00Z"),
        updated_by: String::from("ops-admin"),
    }
}

pub fn create_tour_entry(
    previous: Option<&str>,
    new: &str,
    changed_at: &str,
    reason: Option<&str>,
) -> LedgerEntry {
    LedgerEntry::new(
        EntityKind::Tour,
        previous.map(ToString::to_string),
        new.to_string(),
        String::from("ops-admin"),
        changed_at.to_string(),
        reason.map(ToString::to_string),
    )
}

pub fn create_booking_entry(
    previous: Option<&str>,
    new: &str,
    changed_at: &str,
    reason: Option<&str>,
) -> LedgerEntry {
    LedgerEntry::new(
        EntityKind::Booking,
        previous.map(ToString::to_string),
        new.to_string(),
        String::from("ops-admin"),
        changed_at.to_string(),
        reason.map(ToString::to_string),
    )
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use tour_ops_persistence::Persistence;

use crate::handlers::{change_tour_status, create_booking, create_tour};
use crate::request_response::{CreateBookingRequest, CreateTourRequest};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn create_tour_request() -> CreateTourRequest {
    CreateTourRequest {
        title: String::from("Glacier Hike"),
        price_per_person_cents: 9_900,
    }
}

pub fn create_booking_request(tour_id: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        tour_id,
        customer_name: String::from("Mina Solberg"),
        customer_email: String::from("mina@example.com"),
        customer_phone: String::from("+47 555 0101"),
        start_date: String::from("2026-06-15"),
        party_size: 2,
    }
}

/// Creates a tour in `draft` status and returns its ID.
pub fn create_draft_tour(persistence: &mut Persistence) -> i64 {
    create_tour(persistence, &create_tour_request(), "ops-admin")
        .expect("tour creation should succeed")
        .tour_id
}

/// Creates a tour and publishes it, returning its ID.
pub fn create_public_tour(persistence: &mut Persistence) -> i64 {
    let tour_id = create_draft_tour(persistence);
    change_tour_status(persistence, tour_id, "public", "ops-admin", None)
        .expect("draft -> public should succeed");
    tour_id
}

/// Creates a booking in `Pending` status against a public tour.
pub fn create_pending_booking(persistence: &mut Persistence) -> i64 {
    let tour_id = create_public_tour(persistence);
    create_booking(persistence, &create_booking_request(tour_id), "ops-admin")
        .expect("booking creation should succeed")
        .booking_id
}

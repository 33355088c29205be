// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::{booking_status_history, bookings, tour_status_history, tours};

/// A tour row as stored.
///
/// `is_active` is the soft-delete flag (1 = live, 0 = deleted) and is
/// independent of the publication status.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct TourRow {
    pub tour_id: i64,
    pub title: String,
    pub status: String,
    pub price_per_person_cents: i64,
    pub is_active: i32,
    pub created_at: String,
    pub updated_at: String,
    pub updated_by: String,
}

/// Insertable tour record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tours)]
pub struct NewTour {
    pub title: String,
    pub status: String,
    pub price_per_person_cents: i64,
    pub is_active: i32,
    pub created_at: String,
    pub updated_at: String,
    pub updated_by: String,
}

/// One ledger row from the tour status history.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct TourStatusHistoryRow {
    pub history_id: i64,
    pub tour_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_by: String,
    pub changed_at: String,
    pub reason: Option<String>,
}

/// Insertable tour ledger record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tour_status_history)]
pub struct NewTourStatusHistory {
    pub tour_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_by: String,
    pub changed_at: String,
    pub reason: Option<String>,
}

/// A booking row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub tour_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: String,
    pub party_size: i64,
    pub total_price_cents: i64,
    pub status: String,
    pub payment_status: String,
    pub internal_note: Option<String>,
    pub is_active: i32,
    pub created_at: String,
    pub updated_at: String,
    pub updated_by: String,
}

/// Insertable booking record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub tour_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: String,
    pub party_size: i64,
    pub total_price_cents: i64,
    pub status: String,
    pub payment_status: String,
    pub internal_note: Option<String>,
    pub is_active: i32,
    pub created_at: String,
    pub updated_at: String,
    pub updated_by: String,
}

/// One ledger row from the booking status history.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct BookingStatusHistoryRow {
    pub history_id: i64,
    pub booking_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_by: String,
    pub changed_at: String,
    pub reason: Option<String>,
}

/// Insertable booking ledger record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = booking_status_history)]
pub struct NewBookingStatusHistory {
    pub booking_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub changed_by: String,
    pub changed_at: String,
    pub reason: Option<String>,
}

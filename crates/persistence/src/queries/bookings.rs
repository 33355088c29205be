// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking query operations.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{BookingRow, BookingStatusHistoryRow};
use crate::diesel_schema::{booking_status_history, bookings};
use crate::error::PersistenceError;

/// Point lookup of a booking by ID.
///
/// Returns soft-deleted rows too; callers decide whether an inactive
/// booking counts as found.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))
}

/// Query a booking's status ledger, oldest entry first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking_history(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Vec<BookingStatusHistoryRow>, PersistenceError> {
    booking_status_history::table
        .filter(booking_status_history::booking_id.eq(booking_id))
        .order((
            booking_status_history::changed_at.asc(),
            booking_status_history::history_id.asc(),
        ))
        .load::<BookingStatusHistoryRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking_history: {e}")))
}

/// Query the most recent ledger entry for a booking, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking_ledger_tail(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingStatusHistoryRow>, PersistenceError> {
    booking_status_history::table
        .filter(booking_status_history::booking_id.eq(booking_id))
        .order((
            booking_status_history::changed_at.desc(),
            booking_status_history::history_id.desc(),
        ))
        .first::<BookingStatusHistoryRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking_ledger_tail: {e}")))
}

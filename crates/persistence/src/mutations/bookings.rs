// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutation operations.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{NewBooking, NewBookingStatusHistory};
use crate::diesel_schema::{booking_status_history, bookings};
use crate::error::PersistenceError;

/// Insert a booking record.
///
/// Returns the booking ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    record: &NewBooking,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(bookings::table)
        .values(record)
        .execute(conn)?;
    crate::sqlite::get_last_insert_rowid(conn)
}

/// Update a booking's workflow status and bookkeeping columns.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    new_status: &str,
    updated_at: &str,
    updated_by: &str,
) -> Result<(), PersistenceError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::status.eq(new_status),
            bookings::updated_at.eq(updated_at),
            bookings::updated_by.eq(updated_by),
        ))
        .execute(conn)?;
    Ok(())
}

/// Insert a booking ledger row.
///
/// The ledger is append-only; no update or delete exists for this table.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking_status_history(
    conn: &mut SqliteConnection,
    record: &NewBookingStatusHistory,
) -> Result<(), PersistenceError> {
    diesel::insert_into(booking_status_history::table)
        .values(record)
        .execute(conn)?;
    Ok(())
}

/// Update a booking's payment status.
///
/// Payment status has no transition rules and no ledger; only the
/// bookkeeping columns record who touched the row last.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_payment_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    payment_status: &str,
    updated_at: &str,
    updated_by: &str,
) -> Result<(), PersistenceError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::payment_status.eq(payment_status),
            bookings::updated_at.eq(updated_at),
            bookings::updated_by.eq(updated_by),
        ))
        .execute(conn)?;
    Ok(())
}

/// Overwrite a booking's internal note.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_internal_note(
    conn: &mut SqliteConnection,
    booking_id: i64,
    note: &str,
    updated_at: &str,
    updated_by: &str,
) -> Result<(), PersistenceError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::internal_note.eq(note),
            bookings::updated_at.eq(updated_at),
            bookings::updated_by.eq(updated_by),
        ))
        .execute(conn)?;
    Ok(())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the TourOps booking backend.
//!
//! This crate stores tours, bookings, and their append-only status
//! ledgers in `SQLite` via Diesel. The one rule that everything here
//! serves: a status update and the ledger row documenting it are written
//! in the same transaction, so a failure partway leaves no inconsistent
//! partial state.
//!
//! ## Testing
//!
//! Unit and integration tests run against unique in-memory databases;
//! names are generated from an atomic counter so parallel tests never
//! collide. File-backed databases get WAL mode for read concurrency.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use diesel::connection::Connection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tour_ops_audit::LedgerEntry;
use tracing::{debug, info};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    BookingRow, BookingStatusHistoryRow, NewBooking, NewTour, TourRow, TourStatusHistoryRow,
};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for tours, bookings, and their status ledgers.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Tours
    // ========================================================================

    /// Inserts a tour and returns its database-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_tour(&mut self, record: &NewTour) -> Result<i64, PersistenceError> {
        let tour_id = mutations::tours::insert_tour(&mut self.conn, record)?;
        debug!(tour_id, "Inserted tour");
        Ok(tour_id)
    }

    /// Point lookup of a tour by ID (including soft-deleted rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_tour(&mut self, tour_id: i64) -> Result<Option<TourRow>, PersistenceError> {
        queries::tours::get_tour(&mut self.conn, tour_id)
    }

    /// Applies an accepted tour transition: status update plus ledger
    /// append, in one transaction.
    ///
    /// If either write fails, both roll back; the tour's persisted status
    /// never gets ahead of its ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails. On error nothing is
    /// persisted.
    pub fn apply_tour_transition(
        &mut self,
        tour_id: i64,
        entry: &LedgerEntry,
    ) -> Result<(), PersistenceError> {
        self.conn.transaction::<(), PersistenceError, _>(|conn| {
            mutations::tours::update_tour_status(
                conn,
                tour_id,
                &entry.new_status,
                &entry.changed_at,
                &entry.actor,
            )?;
            mutations::tours::insert_tour_status_history(
                conn,
                &data_models::NewTourStatusHistory {
                    tour_id,
                    previous_status: entry.previous_status.clone(),
                    new_status: entry.new_status.clone(),
                    changed_by: entry.actor.clone(),
                    changed_at: entry.changed_at.clone(),
                    reason: entry.reason.clone(),
                },
            )?;
            Ok(())
        })?;

        info!(tour_id, new_status = %entry.new_status, "Applied tour transition");
        Ok(())
    }

    /// Soft-deletes a tour.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the tour does not exist or is already
    /// inactive.
    pub fn soft_delete_tour(
        &mut self,
        tour_id: i64,
        deleted_at: &str,
        deleted_by: &str,
    ) -> Result<(), PersistenceError> {
        mutations::tours::soft_delete_tour(&mut self.conn, tour_id, deleted_at, deleted_by)?;
        info!(tour_id, "Soft-deleted tour");
        Ok(())
    }

    /// Returns a tour's status ledger, oldest entry first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_tour_history(
        &mut self,
        tour_id: i64,
    ) -> Result<Vec<TourStatusHistoryRow>, PersistenceError> {
        queries::tours::get_tour_history(&mut self.conn, tour_id)
    }

    /// Returns the most recent ledger entry for a tour, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_tour_ledger_tail(
        &mut self,
        tour_id: i64,
    ) -> Result<Option<TourStatusHistoryRow>, PersistenceError> {
        queries::tours::get_tour_ledger_tail(&mut self.conn, tour_id)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Inserts a booking and returns its database-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_booking(&mut self, record: &NewBooking) -> Result<i64, PersistenceError> {
        let booking_id = mutations::bookings::insert_booking(&mut self.conn, record)?;
        debug!(booking_id, "Inserted booking");
        Ok(booking_id)
    }

    /// Point lookup of a booking by ID (including soft-deleted rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<BookingRow>, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)
    }

    /// Applies an accepted booking transition: status update plus ledger
    /// append, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails. On error nothing is
    /// persisted.
    pub fn apply_booking_transition(
        &mut self,
        booking_id: i64,
        entry: &LedgerEntry,
    ) -> Result<(), PersistenceError> {
        self.conn.transaction::<(), PersistenceError, _>(|conn| {
            mutations::bookings::update_booking_status(
                conn,
                booking_id,
                &entry.new_status,
                &entry.changed_at,
                &entry.actor,
            )?;
            mutations::bookings::insert_booking_status_history(
                conn,
                &data_models::NewBookingStatusHistory {
                    booking_id,
                    previous_status: entry.previous_status.clone(),
                    new_status: entry.new_status.clone(),
                    changed_by: entry.actor.clone(),
                    changed_at: entry.changed_at.clone(),
                    reason: entry.reason.clone(),
                },
            )?;
            Ok(())
        })?;

        info!(booking_id, new_status = %entry.new_status, "Applied booking transition");
        Ok(())
    }

    /// Updates a booking's payment status.
    ///
    /// Payment changes are not validated against the booking's workflow
    /// status and do not produce ledger entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_payment_status(
        &mut self,
        booking_id: i64,
        payment_status: &str,
        updated_at: &str,
        updated_by: &str,
    ) -> Result<(), PersistenceError> {
        mutations::bookings::update_payment_status(
            &mut self.conn,
            booking_id,
            payment_status,
            updated_at,
            updated_by,
        )
    }

    /// Overwrites a booking's internal note.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_internal_note(
        &mut self,
        booking_id: i64,
        note: &str,
        updated_at: &str,
        updated_by: &str,
    ) -> Result<(), PersistenceError> {
        mutations::bookings::set_internal_note(
            &mut self.conn,
            booking_id,
            note,
            updated_at,
            updated_by,
        )
    }

    /// Returns a booking's status ledger, oldest entry first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking_history(
        &mut self,
        booking_id: i64,
    ) -> Result<Vec<BookingStatusHistoryRow>, PersistenceError> {
        queries::bookings::get_booking_history(&mut self.conn, booking_id)
    }

    /// Returns the most recent ledger entry for a booking, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking_ledger_tail(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<BookingStatusHistoryRow>, PersistenceError> {
        queries::bookings::get_booking_ledger_tail(&mut self.conn, booking_id)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour mutation operations.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{NewTour, NewTourStatusHistory};
use crate::diesel_schema::{tour_status_history, tours};
use crate::error::PersistenceError;

/// Insert a tour record.
///
/// Returns the tour ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_tour(
    conn: &mut SqliteConnection,
    record: &NewTour,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(tours::table)
        .values(record)
        .execute(conn)?;
    crate::sqlite::get_last_insert_rowid(conn)
}

/// Update a tour's publication status and bookkeeping columns.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_tour_status(
    conn: &mut SqliteConnection,
    tour_id: i64,
    new_status: &str,
    updated_at: &str,
    updated_by: &str,
) -> Result<(), PersistenceError> {
    diesel::update(tours::table.filter(tours::tour_id.eq(tour_id)))
        .set((
            tours::status.eq(new_status),
            tours::updated_at.eq(updated_at),
            tours::updated_by.eq(updated_by),
        ))
        .execute(conn)?;
    Ok(())
}

/// Insert a tour ledger row.
///
/// The ledger is append-only; no update or delete exists for this table.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_tour_status_history(
    conn: &mut SqliteConnection,
    record: &NewTourStatusHistory,
) -> Result<(), PersistenceError> {
    diesel::insert_into(tour_status_history::table)
        .values(record)
        .execute(conn)?;
    Ok(())
}

/// Soft-delete a tour by clearing its active flag.
///
/// Does not touch the publication status or the ledger; deletion is
/// orthogonal to the lifecycle.
///
/// # Errors
///
/// Returns `NotFound` if the tour does not exist or is already inactive.
pub fn soft_delete_tour(
    conn: &mut SqliteConnection,
    tour_id: i64,
    deleted_at: &str,
    deleted_by: &str,
) -> Result<(), PersistenceError> {
    let affected = diesel::update(
        tours::table
            .filter(tours::tour_id.eq(tour_id))
            .filter(tours::is_active.eq(1)),
    )
    .set((
        tours::is_active.eq(0),
        tours::updated_at.eq(deleted_at),
        tours::updated_by.eq(deleted_by),
    ))
    .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Tour {tour_id} does not exist or is already deleted"
        )));
    }
    Ok(())
}

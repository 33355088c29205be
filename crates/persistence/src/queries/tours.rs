// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour query operations.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::{TourRow, TourStatusHistoryRow};
use crate::diesel_schema::{tour_status_history, tours};
use crate::error::PersistenceError;

/// Point lookup of a tour by ID.
///
/// Returns soft-deleted rows too; callers decide whether an inactive
/// tour counts as found.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_tour(
    conn: &mut SqliteConnection,
    tour_id: i64,
) -> Result<Option<TourRow>, PersistenceError> {
    tours::table
        .filter(tours::tour_id.eq(tour_id))
        .first::<TourRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_tour: {e}")))
}

/// Query a tour's status ledger, oldest entry first.
///
/// Ordered by timestamp ascending with the row ID as a tiebreaker so
/// that entries written within the same second keep insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_tour_history(
    conn: &mut SqliteConnection,
    tour_id: i64,
) -> Result<Vec<TourStatusHistoryRow>, PersistenceError> {
    tour_status_history::table
        .filter(tour_status_history::tour_id.eq(tour_id))
        .order((
            tour_status_history::changed_at.asc(),
            tour_status_history::history_id.asc(),
        ))
        .load::<TourStatusHistoryRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_tour_history: {e}")))
}

/// Query the most recent ledger entry for a tour, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_tour_ledger_tail(
    conn: &mut SqliteConnection,
    tour_id: i64,
) -> Result<Option<TourStatusHistoryRow>, PersistenceError> {
    tour_status_history::table
        .filter(tour_status_history::tour_id.eq(tour_id))
        .order((
            tour_status_history::changed_at.desc(),
            tour_status_history::history_id.desc(),
        ))
        .first::<TourStatusHistoryRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_tour_ledger_tail: {e}")))
}

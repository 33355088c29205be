// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Single-entity operations fail fast with a typed [`ApiError`]. Batch
//! operations never fail per item; they return a populated
//! [`BatchOperationResult`] and leave earlier successes committed when a
//! later item fails.
//!
//! Actor identity is a plain string supplied by the caller; the
//! surrounding transport layer is responsible for authentication and
//! role checks before these functions run.

use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tour_ops::{BatchOperationResult, plan_booking_transition, plan_tour_transition, run_batch};
use tour_ops_domain::{BookingStatus, PaymentStatus, TourStatus};
use tour_ops_persistence::{BookingRow, NewBooking, NewTour, Persistence, TourRow};
use tracing::{info, warn};

use crate::booking_input::{validate_create_booking, validate_note, validate_reason};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    BookingResponse, CreateBookingRequest, CreateTourRequest, HistoryEntryResponse, TourResponse,
};

/// Returns the current UTC time as an RFC 3339 string.
fn current_timestamp() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

/// Loads a tour and rejects missing or soft-deleted rows.
fn load_active_tour(persistence: &mut Persistence, tour_id: i64) -> Result<TourRow, ApiError> {
    let row = persistence
        .get_tour(tour_id)?
        .filter(|tour| tour.is_active == 1);
    row.ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Tour"),
        message: format!("Tour {tour_id} does not exist"),
    })
}

/// Loads a booking and rejects missing or soft-deleted rows.
fn load_active_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingRow, ApiError> {
    let row = persistence
        .get_booking(booking_id)?
        .filter(|booking| booking.is_active == 1);
    row.ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Booking"),
        message: format!("Booking {booking_id} does not exist"),
    })
}

fn tour_response(row: TourRow, message: String) -> TourResponse {
    TourResponse {
        tour_id: row.tour_id,
        title: row.title,
        status: row.status,
        price_per_person_cents: row.price_per_person_cents,
        is_active: row.is_active == 1,
        updated_at: row.updated_at,
        updated_by: row.updated_by,
        message,
    }
}

fn booking_response(row: BookingRow, message: String) -> BookingResponse {
    BookingResponse {
        booking_id: row.booking_id,
        tour_id: row.tour_id,
        customer_name: row.customer_name,
        start_date: row.start_date,
        party_size: row.party_size,
        total_price_cents: row.total_price_cents,
        status: row.status,
        payment_status: row.payment_status,
        internal_note: row.internal_note,
        updated_at: row.updated_at,
        updated_by: row.updated_by,
        message,
    }
}

// ============================================================================
// Tours
// ============================================================================

/// Creates a new tour in `draft` status.
///
/// Creation is not a transition; no ledger entry is written. The first
/// ledger entry appears when the tour leaves `draft`.
///
/// # Errors
///
/// Returns an error if the title is blank, the price is negative, or the
/// store rejects the insert.
pub fn create_tour(
    persistence: &mut Persistence,
    request: &CreateTourRequest,
    actor: &str,
) -> Result<TourResponse, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::ValidationError {
            field: String::from("title"),
            message: String::from("Tour title must not be empty"),
        });
    }
    if request.price_per_person_cents < 0 {
        return Err(ApiError::ValidationError {
            field: String::from("price_per_person_cents"),
            message: String::from("Price must not be negative"),
        });
    }

    let now = current_timestamp()?;
    let tour_id = persistence.create_tour(&NewTour {
        title: request.title.clone(),
        status: TourStatus::Draft.as_str().to_string(),
        price_per_person_cents: request.price_per_person_cents,
        is_active: 1,
        created_at: now.clone(),
        updated_at: now,
        updated_by: actor.to_string(),
    })?;

    info!(tour_id, actor, "Created tour");
    let row = load_active_tour(persistence, tour_id)?;
    Ok(tour_response(row, format!("Tour {tour_id} created")))
}

/// Changes a tour's publication status.
///
/// Validates the request against the tour rule table, then applies the
/// status update and the ledger append as one transaction.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the tour does not exist or is
/// soft-deleted, `ValidationError` for an unknown status token or an
/// oversized reason, and `InvalidTransition` if the rule table rejects
/// the change.
pub fn change_tour_status(
    persistence: &mut Persistence,
    tour_id: i64,
    new_status: &str,
    actor: &str,
    reason: Option<&str>,
) -> Result<TourResponse, ApiError> {
    validate_reason(reason)?;
    let requested = TourStatus::from_str(new_status).map_err(translate_domain_error)?;

    let tour = load_active_tour(persistence, tour_id)?;
    let current = TourStatus::from_str(&tour.status).map_err(translate_domain_error)?;

    let tail = persistence.get_tour_ledger_tail(tour_id)?;
    let entry = plan_tour_transition(
        current,
        requested,
        tail.as_ref().map(|row| row.new_status.as_str()),
        actor,
        &current_timestamp()?,
        reason,
    )
    .map_err(translate_core_error)?;

    persistence.apply_tour_transition(tour_id, &entry)?;
    info!(tour_id, from = %current.as_str(), to = %requested.as_str(), actor, "Changed tour status");

    let row = load_active_tour(persistence, tour_id)?;
    Ok(tour_response(
        row,
        format!("Tour {tour_id} status changed to '{new_status}'"),
    ))
}

/// Soft-deletes a tour.
///
/// Orthogonal to the lifecycle: the status is untouched and no ledger
/// entry is written.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the tour does not exist or is already
/// soft-deleted.
pub fn delete_tour(
    persistence: &mut Persistence,
    tour_id: i64,
    actor: &str,
) -> Result<(), ApiError> {
    let now = current_timestamp()?;
    persistence
        .soft_delete_tour(tour_id, &now, actor)
        .map_err(|err| match err {
            tour_ops_persistence::PersistenceError::NotFound(_) => ApiError::ResourceNotFound {
                resource_type: String::from("Tour"),
                message: format!("Tour {tour_id} does not exist"),
            },
            other => other.into(),
        })
}

/// Changes the status of many tours, isolating per-item failures.
///
/// Each tour is attempted independently; a rejection or missing ID does
/// not abort the remaining IDs, and earlier successes stay committed.
/// The returned report always covers every input ID.
pub fn batch_change_tour_status(
    persistence: &mut Persistence,
    tour_ids: &[i64],
    new_status: &str,
    actor: &str,
    reason: Option<&str>,
) -> BatchOperationResult {
    let result = run_batch(tour_ids, |tour_id| {
        change_tour_status(persistence, tour_id, new_status, actor, reason)
            .map(|_| ())
            .map_err(|e| format!("Tour {tour_id}: {e}"))
    });

    if !result.is_fully_successful() {
        warn!(
            failed = result.failure_count,
            total = tour_ids.len(),
            "Batch status change completed with failures"
        );
    }
    result
}

/// Soft-deletes many tours, isolating per-item failures.
pub fn batch_delete_tours(
    persistence: &mut Persistence,
    tour_ids: &[i64],
    actor: &str,
) -> BatchOperationResult {
    run_batch(tour_ids, |tour_id| {
        delete_tour(persistence, tour_id, actor).map_err(|e| format!("Tour {tour_id}: {e}"))
    })
}

/// Returns a tour's status history, oldest entry first.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the tour does not exist or is
/// soft-deleted.
pub fn get_tour_history(
    persistence: &mut Persistence,
    tour_id: i64,
) -> Result<Vec<HistoryEntryResponse>, ApiError> {
    load_active_tour(persistence, tour_id)?;

    let rows = persistence.get_tour_history(tour_id)?;
    Ok(rows
        .into_iter()
        .map(|row| HistoryEntryResponse {
            previous_status: row.previous_status,
            new_status: row.new_status,
            changed_by: row.changed_by,
            changed_at: row.changed_at,
            reason: row.reason,
        })
        .collect())
}

// ============================================================================
// Bookings
// ============================================================================

/// Creates a booking against an existing tour.
///
/// The total price is computed as party size times the tour's current
/// per-person price. The booking starts in `Pending` workflow status
/// with `pending` payment status; creation writes no ledger entry.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the tour does not exist or is
/// soft-deleted, and `ValidationError` for a party size below 1 or an
/// empty required contact field.
pub fn create_booking(
    persistence: &mut Persistence,
    request: &CreateBookingRequest,
    actor: &str,
) -> Result<BookingResponse, ApiError> {
    validate_create_booking(request)?;
    let tour = load_active_tour(persistence, request.tour_id)?;

    let total_price_cents = request
        .party_size
        .checked_mul(tour.price_per_person_cents)
        .ok_or_else(|| ApiError::ValidationError {
            field: String::from("party_size"),
            message: String::from("Total price overflows"),
        })?;

    let now = current_timestamp()?;
    let booking_id = persistence.create_booking(&NewBooking {
        tour_id: request.tour_id,
        customer_name: request.customer_name.clone(),
        customer_email: request.customer_email.clone(),
        customer_phone: request.customer_phone.clone(),
        start_date: request.start_date.clone(),
        party_size: request.party_size,
        total_price_cents,
        status: BookingStatus::Pending.as_str().to_string(),
        payment_status: PaymentStatus::Pending.as_str().to_string(),
        internal_note: None,
        is_active: 1,
        created_at: now.clone(),
        updated_at: now,
        updated_by: actor.to_string(),
    })?;

    info!(booking_id, tour_id = request.tour_id, actor, "Created booking");
    let row = load_active_booking(persistence, booking_id)?;
    Ok(booking_response(
        row,
        format!("Booking {booking_id} created"),
    ))
}

/// Changes a booking's workflow status.
///
/// Mirror of [`change_tour_status`] over the booking rule table.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the booking does not exist or is
/// soft-deleted, `ValidationError` for an unknown status token or an
/// oversized reason, and `InvalidTransition` if the rule table rejects
/// the change.
pub fn update_booking_status(
    persistence: &mut Persistence,
    booking_id: i64,
    new_status: &str,
    actor: &str,
    reason: Option<&str>,
) -> Result<BookingResponse, ApiError> {
    validate_reason(reason)?;
    let requested = BookingStatus::from_str(new_status).map_err(translate_domain_error)?;

    let booking = load_active_booking(persistence, booking_id)?;
    let current = BookingStatus::from_str(&booking.status).map_err(translate_domain_error)?;

    let tail = persistence.get_booking_ledger_tail(booking_id)?;
    let entry = plan_booking_transition(
        current,
        requested,
        tail.as_ref().map(|row| row.new_status.as_str()),
        actor,
        &current_timestamp()?,
        reason,
    )
    .map_err(translate_core_error)?;

    persistence.apply_booking_transition(booking_id, &entry)?;
    info!(booking_id, from = %current.as_str(), to = %requested.as_str(), actor, "Changed booking status");

    let row = load_active_booking(persistence, booking_id)?;
    Ok(booking_response(
        row,
        format!("Booking {booking_id} status changed to '{new_status}'"),
    ))
}

/// Updates a booking's payment status.
///
/// Payment status has no transition rules: any recognized token is
/// accepted regardless of the booking's workflow status, and no ledger
/// entry is written. Nothing prevents marking a cancelled booking as
/// paid; see the project design notes.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the booking does not exist or is
/// soft-deleted, and `ValidationError` for an unrecognized payment
/// token (tokens are matched case-sensitively).
pub fn update_booking_payment_status(
    persistence: &mut Persistence,
    booking_id: i64,
    new_payment_status: &str,
    actor: &str,
) -> Result<BookingResponse, ApiError> {
    let requested = PaymentStatus::from_str(new_payment_status).map_err(translate_domain_error)?;

    load_active_booking(persistence, booking_id)?;

    let now = current_timestamp()?;
    persistence.update_payment_status(booking_id, requested.as_str(), &now, actor)?;
    info!(booking_id, payment_status = %requested.as_str(), actor, "Updated payment status");

    let row = load_active_booking(persistence, booking_id)?;
    Ok(booking_response(
        row,
        format!("Booking {booking_id} payment status set to '{new_payment_status}'"),
    ))
}

/// Sets a booking's internal note, replacing any existing note.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the booking does not exist or is
/// soft-deleted, and `ValidationError` if the note exceeds the length
/// bound.
pub fn add_booking_note(
    persistence: &mut Persistence,
    booking_id: i64,
    note: &str,
    actor: &str,
) -> Result<BookingResponse, ApiError> {
    validate_note(note)?;
    load_active_booking(persistence, booking_id)?;

    let now = current_timestamp()?;
    persistence.set_internal_note(booking_id, note, &now, actor)?;

    let row = load_active_booking(persistence, booking_id)?;
    Ok(booking_response(
        row,
        format!("Note saved on booking {booking_id}"),
    ))
}

/// Returns a booking's status history, oldest entry first.
///
/// Payment changes never appear here; only workflow transitions are
/// part of the audited lifecycle.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the booking does not exist or is
/// soft-deleted.
pub fn get_booking_history(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<Vec<HistoryEntryResponse>, ApiError> {
    load_active_booking(persistence, booking_id)?;

    let rows = persistence.get_booking_history(booking_id)?;
    Ok(rows
        .into_iter()
        .map(|row| HistoryEntryResponse {
            previous_status: row.previous_status,
            new_status: row.new_status,
            changed_by: row.changed_by,
            changed_at: row.changed_at,
            reason: row.reason,
        })
        .collect())
}

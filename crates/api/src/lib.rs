// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service boundary layer for the TourOps booking backend.
//!
//! Handlers orchestrate a single concern each: load the entity, validate
//! the request against the domain rule tables, and hand an accepted plan
//! to persistence to commit atomically. Errors cross this boundary as
//! [`ApiError`] values; domain and core errors never leak to callers.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod booking_input;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use booking_input::{
    BookingInputError, MAX_NOTE_LENGTH, MAX_REASON_LENGTH, MIN_PARTY_SIZE, validate_create_booking,
    validate_note, validate_reason,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_booking_note, batch_change_tour_status, batch_delete_tours, change_tour_status,
    create_booking, create_tour, delete_tour, get_booking_history, get_tour_history,
    update_booking_payment_status, update_booking_status,
};
pub use request_response::{
    BookingResponse, CreateBookingRequest, CreateTourRequest, HistoryEntryResponse, TourResponse,
};

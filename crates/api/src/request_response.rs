// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to create a new tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTourRequest {
    /// The tour title.
    pub title: String,
    /// The per-person price, in cents.
    pub price_per_person_cents: i64,
}

/// API response carrying a tour summary after a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TourResponse {
    /// The tour's canonical identifier.
    pub tour_id: i64,
    /// The tour title.
    pub title: String,
    /// The tour's publication status (wire token).
    pub status: String,
    /// The per-person price, in cents.
    pub price_per_person_cents: i64,
    /// Whether the tour is live (not soft-deleted).
    pub is_active: bool,
    /// When the tour was last updated (RFC 3339).
    pub updated_at: String,
    /// Who last updated the tour.
    pub updated_by: String,
    /// A success message.
    pub message: String,
}

/// API request to create a new booking against a tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The tour being booked.
    pub tour_id: i64,
    /// The customer's name.
    pub customer_name: String,
    /// The customer's email address.
    pub customer_email: String,
    /// The customer's phone number.
    pub customer_phone: String,
    /// The requested start date (ISO 8601 date).
    pub start_date: String,
    /// The number of people in the party.
    pub party_size: i64,
}

/// API response carrying a booking summary after a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingResponse {
    /// The booking's canonical identifier.
    pub booking_id: i64,
    /// The tour the booking is for.
    pub tour_id: i64,
    /// The customer's name.
    pub customer_name: String,
    /// The requested start date.
    pub start_date: String,
    /// The number of people in the party.
    pub party_size: i64,
    /// The total price, in cents (party size x per-person price at
    /// creation time).
    pub total_price_cents: i64,
    /// The booking's workflow status (wire token).
    pub status: String,
    /// The booking's payment status (wire token).
    pub payment_status: String,
    /// The internal free-text note, if any.
    pub internal_note: Option<String>,
    /// When the booking was last updated (RFC 3339).
    pub updated_at: String,
    /// Who last updated the booking.
    pub updated_by: String,
    /// A success message.
    pub message: String,
}

/// One ledger entry, as surfaced by the history endpoints.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntryResponse {
    /// The status before the transition; `None` on an entity's first entry.
    pub previous_status: Option<String>,
    /// The status after the transition.
    pub new_status: String,
    /// The actor who performed the transition.
    pub changed_by: String,
    /// When the transition was accepted (RFC 3339).
    pub changed_at: String,
    /// The free-text reason, if one was supplied.
    pub reason: Option<String>,
}

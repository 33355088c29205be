// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static transition rule tables.
//!
//! The rule tables are the single source of truth for which status
//! transitions are legal. The typed status enums consult these tables
//! rather than carrying their own transition matrices, so UI layers and
//! services asking the same question get the same answer.
//!
//! Tables are `'static` data, immutable for the lifetime of the process,
//! and safe for concurrent reads without locking.

/// The entity kinds that carry a status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A tour's publication lifecycle.
    Tour,
    /// A booking's fulfillment lifecycle.
    Booking,
}

impl EntityKind {
    /// Returns the string representation of the entity kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tour => "tour",
            Self::Booking => "booking",
        }
    }
}

/// One rule table row: a current status and its legal next statuses.
type RuleRow = (&'static str, &'static [&'static str]);

/// Tour publication rules. Tokens are lowercase on the wire.
///
/// `cancelled` is terminal.
const TOUR_RULES: &[RuleRow] = &[
    ("draft", &["public", "hide", "cancelled"]),
    ("public", &["hide"]),
    ("hide", &["public"]),
    ("cancelled", &[]),
];

/// Booking fulfillment rules. Tokens are mixed-case on the wire.
///
/// `Complete` and `Cancel` are terminal.
const BOOKING_RULES: &[RuleRow] = &[
    ("Pending", &["Confirmed", "Cancel"]),
    ("Confirmed", &["InProgress", "Cancel"]),
    ("InProgress", &["Complete", "Cancel"]),
    ("Complete", &[]),
    ("Cancel", &[]),
];

/// Returns the rule table for an entity kind.
const fn rule_table(kind: EntityKind) -> &'static [RuleRow] {
    match kind {
        EntityKind::Tour => TOUR_RULES,
        EntityKind::Booking => BOOKING_RULES,
    }
}

/// Returns the legal next statuses for `current`.
///
/// Unknown statuses have an empty allowed-set, the same as terminal
/// statuses. Lookup is exact and case-sensitive.
#[must_use]
pub fn allowed_targets(kind: EntityKind, current: &str) -> &'static [&'static str] {
    rule_table(kind)
        .iter()
        .find(|(status, _)| *status == current)
        .map_or(&[], |(_, targets)| targets)
}

/// Decides whether a requested status change is legal.
///
/// Returns `false` (not an error) for unknown current statuses, terminal
/// statuses, and no-op requests where `current == requested`. A same-status
/// "transition" is rejected because it has no audit value.
#[must_use]
pub fn can_transition(kind: EntityKind, current: &str, requested: &str) -> bool {
    if current == requested {
        return false;
    }
    allowed_targets(kind, current).contains(&requested)
}

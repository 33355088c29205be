// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use tour_ops_domain::EntityKind;

/// An immutable ledger entry recording one accepted status transition.
///
/// Every accepted transition must produce exactly one ledger entry, written
/// in the same transaction as the status update it documents. Entries are
/// write-once, read-many: no update or delete operation exists anywhere in
/// the system.
///
/// The entry captures:
/// - Which lifecycle it belongs to (kind)
/// - The status before the transition (`None` for an entity's first entry)
/// - The status after the transition
/// - Who performed it (actor) and when (RFC 3339 timestamp)
/// - An optional free-text reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// The entity kind whose lifecycle this entry belongs to.
    pub kind: EntityKind,
    /// The status before the transition. `None` for the first entry
    /// recorded against an entity.
    pub previous_status: Option<String>,
    /// The status after the transition.
    pub new_status: String,
    /// The actor who initiated the transition.
    pub actor: String,
    /// When the transition was accepted (RFC 3339).
    pub changed_at: String,
    /// Optional free-text reason supplied by the actor.
    pub reason: Option<String>,
}

impl LedgerEntry {
    /// Creates a new ledger entry.
    ///
    /// Once created, a ledger entry is immutable.
    #[must_use]
    pub const fn new(
        kind: EntityKind,
        previous_status: Option<String>,
        new_status: String,
        actor: String,
        changed_at: String,
        reason: Option<String>,
    ) -> Self {
        Self {
            kind,
            previous_status,
            new_status,
            actor,
            changed_at,
            reason,
        }
    }

    /// Returns true if this entry chains correctly from `previous`.
    ///
    /// The first entry of a ledger must carry no previous status; every
    /// later entry's `previous_status` must equal the prior entry's
    /// `new_status`.
    #[must_use]
    pub fn chains_from(&self, previous: Option<&Self>) -> bool {
        match previous {
            None => self.previous_status.is_none(),
            Some(prev) => self.previous_status.as_deref() == Some(prev.new_status.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(previous: Option<&str>, new: &str) -> LedgerEntry {
        LedgerEntry::new(
            EntityKind::Tour,
            previous.map(ToString::to_string),
            new.to_string(),
            String::from("alice"),
            String::from("2026-03-01T09:00:00Z"),
            None,
        )
    }

    #[test]
    fn test_entry_creation_captures_all_fields() {
        let entry = LedgerEntry::new(
            EntityKind::Booking,
            Some(String::from("Pending")),
            String::from("Confirmed"),
            String::from("bob"),
            String::from("2026-03-02T10:15:00Z"),
            Some(String::from("phone confirmation")),
        );

        assert_eq!(entry.kind, EntityKind::Booking);
        assert_eq!(entry.previous_status.as_deref(), Some("Pending"));
        assert_eq!(entry.new_status, "Confirmed");
        assert_eq!(entry.actor, "bob");
        assert_eq!(entry.changed_at, "2026-03-02T10:15:00Z");
        assert_eq!(entry.reason.as_deref(), Some("phone confirmation"));
    }

    #[test]
    fn test_first_entry_chains_from_nothing() {
        let first = entry(None, "public");
        assert!(first.chains_from(None));

        let with_previous = entry(Some("draft"), "public");
        assert!(!with_previous.chains_from(None));
    }

    #[test]
    fn test_later_entries_chain_from_ledger_tail() {
        let first = entry(None, "public");
        let second = entry(Some("public"), "hide");
        let broken = entry(Some("draft"), "hide");

        assert!(second.chains_from(Some(&first)));
        assert!(!broken.chains_from(Some(&first)));
        assert!(!first.chains_from(Some(&second)));
    }
}

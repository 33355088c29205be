// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_tour, create_tour_entry};
use crate::error::PersistenceError;

#[test]
fn test_create_and_get_tour() {
    let mut persistence = create_test_persistence();

    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert should succeed");

    let row = persistence
        .get_tour(tour_id)
        .expect("query should succeed")
        .expect("tour should exist");

    assert_eq!(row.tour_id, tour_id);
    assert_eq!(row.title, "Fjord Kayaking");
    assert_eq!(row.status, "draft");
    assert_eq!(row.price_per_person_cents, 12_500);
    assert_eq!(row.is_active, 1);
}

#[test]
fn test_get_missing_tour_returns_none() {
    let mut persistence = create_test_persistence();

    assert!(persistence.get_tour(42).expect("query").is_none());
}

#[test]
fn test_apply_transition_updates_status_and_appends_ledger() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(None, "public", "2026-03-01T09:00:00Z", Some("season open")),
        )
        .expect("transition should succeed");

    let row = persistence
        .get_tour(tour_id)
        .expect("query")
        .expect("exists");
    assert_eq!(row.status, "public");
    assert_eq!(row.updated_at, "2026-03-01T09:00:00Z");
    assert_eq!(row.updated_by, "ops-admin");

    let history = persistence.get_tour_history(tour_id).expect("query");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].previous_status, None);
    assert_eq!(history[0].new_status, "public");
    assert_eq!(history[0].changed_by, "ops-admin");
    assert_eq!(history[0].reason.as_deref(), Some("season open"));
}

#[test]
fn test_history_is_ordered_oldest_first() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(None, "public", "2026-03-01T09:00:00Z", None),
        )
        .expect("transition");
    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(Some("public"), "hide", "2026-03-05T12:00:00Z", None),
        )
        .expect("transition");
    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(Some("hide"), "public", "2026-03-09T08:30:00Z", None),
        )
        .expect("transition");

    let history = persistence.get_tour_history(tour_id).expect("query");
    let statuses: Vec<&str> = history.iter().map(|h| h.new_status.as_str()).collect();
    assert_eq!(statuses, vec!["public", "hide", "public"]);
}

#[test]
fn test_identical_timestamps_keep_insertion_order() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    // Same changed_at on both rows; the history_id tiebreaker must keep
    // the write order.
    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(None, "public", "2026-03-01T09:00:00Z", None),
        )
        .expect("transition");
    persistence
        .apply_tour_transition(
            tour_id,
            &create_tour_entry(Some("public"), "hide", "2026-03-01T09:00:00Z", None),
        )
        .expect("transition");

    let history = persistence.get_tour_history(tour_id).expect("query");
    assert_eq!(history[0].new_status, "public");
    assert_eq!(history[1].new_status, "hide");

    let tail = persistence
        .get_tour_ledger_tail(tour_id)
        .expect("query")
        .expect("tail exists");
    assert_eq!(tail.new_status, "hide");
}

#[test]
fn test_ledger_tail_of_fresh_tour_is_none() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    assert!(persistence.get_tour_ledger_tail(tour_id).expect("query").is_none());
}

#[test]
fn test_soft_delete_marks_tour_inactive() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    persistence
        .soft_delete_tour(tour_id, "2026-03-10T10:00:00Z", "ops-admin")
        .expect("delete should succeed");

    let row = persistence
        .get_tour(tour_id)
        .expect("query")
        .expect("row survives soft delete");
    assert_eq!(row.is_active, 0);
}

#[test]
fn test_soft_delete_twice_returns_not_found() {
    let mut persistence = create_test_persistence();
    let tour_id = persistence
        .create_tour(&create_test_tour("draft"))
        .expect("insert");

    persistence
        .soft_delete_tour(tour_id, "2026-03-10T10:00:00Z", "ops-admin")
        .expect("first delete");

    let result = persistence.soft_delete_tour(tour_id, "2026-03-11T10:00:00Z", "ops-admin");
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_soft_delete_missing_tour_returns_not_found() {
    let mut persistence = create_test_persistence();

    let result = persistence.soft_delete_tour(42, "2026-03-10T10:00:00Z", "ops-admin");
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

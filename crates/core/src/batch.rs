// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch orchestration with per-item failure isolation.
//!
//! A batch applies one operation to a list of entity IDs. Items are
//! attempted sequentially and independently: a failure for one ID never
//! aborts the remaining IDs, and earlier successes are not rolled back
//! when a later item fails. The caller always receives a populated
//! report, never a thrown per-item error.

use std::fmt::Display;

/// Per-item outcome report for a batch operation.
///
/// Created fresh per batch call and returned directly to the caller;
/// never persisted. ID lists preserve the input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct BatchOperationResult {
    /// Number of IDs the operation succeeded for.
    pub success_count: usize,
    /// Number of IDs the operation failed for.
    pub failure_count: usize,
    /// One message per failed ID, in input order.
    pub errors: Vec<String>,
    /// The IDs that were processed successfully, in input order.
    pub successful_ids: Vec<i64>,
    /// The IDs that failed, in input order.
    pub failed_ids: Vec<i64>,
}

impl BatchOperationResult {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful item.
    pub fn record_success(&mut self, id: i64) {
        self.success_count += 1;
        self.successful_ids.push(id);
    }

    /// Records a failed item with its error message.
    pub fn record_failure(&mut self, id: i64, message: String) {
        self.failure_count += 1;
        self.failed_ids.push(id);
        self.errors.push(message);
    }

    /// Returns true if every item succeeded.
    #[must_use]
    pub const fn is_fully_successful(&self) -> bool {
        self.failure_count == 0
    }
}

/// Applies `operation` to each ID in input order, isolating failures.
///
/// Each item is attempted exactly once and its outcome is fully recorded
/// before the next item starts. The loop never short-circuits: after the
/// call, `success_count + failure_count` equals `ids.len()`. Per-item
/// errors are captured as strings in the report rather than propagated;
/// only a failure outside the operation itself (e.g., the store being
/// unreachable before the batch starts) should reach the caller as an
/// error, and that is the caller's concern, not this helper's.
pub fn run_batch<E, F>(ids: &[i64], mut operation: F) -> BatchOperationResult
where
    E: Display,
    F: FnMut(i64) -> Result<(), E>,
{
    let mut result = BatchOperationResult::new();

    for &id in ids {
        match operation(id) {
            Ok(()) => result.record_success(id),
            Err(e) => result.record_failure(id, e.to_string()),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_yields_empty_report() {
        let result = run_batch(&[], |_| Ok::<(), String>(()));

        assert_eq!(result.success_count, 0);
        assert_eq!(result.failure_count, 0);
        assert!(result.is_fully_successful());
    }

    #[test]
    fn test_all_items_attempted_despite_failures() {
        let mut attempted = Vec::new();
        let result = run_batch(&[1, 2, 3, 4], |id| {
            attempted.push(id);
            if id % 2 == 0 {
                Err(format!("id {id} rejected"))
            } else {
                Ok(())
            }
        });

        assert_eq!(attempted, vec![1, 2, 3, 4]);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failure_count, 2);
        assert_eq!(result.successful_ids, vec![1, 3]);
        assert_eq!(result.failed_ids, vec![2, 4]);
        assert_eq!(result.errors, vec!["id 2 rejected", "id 4 rejected"]);
        assert!(!result.is_fully_successful());
    }

    #[test]
    fn test_counts_always_sum_to_input_length() {
        let ids = [10, 20, 30, 40, 50];
        let result = run_batch(&ids, |id| {
            if id == 30 {
                Err("boom")
            } else {
                Ok(())
            }
        });

        assert_eq!(result.success_count + result.failure_count, ids.len());
    }

    #[test]
    fn test_input_order_preserved_in_reports() {
        let result = run_batch(&[5, 3, 9, 1], |id| {
            if id > 4 { Ok(()) } else { Err("too small") }
        });

        assert_eq!(result.successful_ids, vec![5, 9]);
        assert_eq!(result.failed_ids, vec![3, 1]);
    }
}

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{ApplicationRecord, SubmissionBatch};

/// Reasons a selection action is refused. The display text is shown
/// to the operator as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("already applied")]
    AlreadyApplied { candidate_id: String },

    #[error("credit limit reached")]
    CreditLimitReached { credits: usize },

    #[error("no candidates selected")]
    NothingSelected,
}

/// Effect of an accepted toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// Credit-capped candidate selection for one job
///
/// Each selected candidate consumes one credit. Candidates that already
/// have an application can never be selected.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    credits: usize,
    selected: Vec<String>,
    applied: HashSet<String>,
}

impl SelectionTracker {
    pub fn new(credits: usize, applications: &[ApplicationRecord]) -> Self {
        Self {
            credits,
            selected: Vec::new(),
            applied: applied_ids(applications),
        }
    }

    /// Select or deselect a candidate
    ///
    /// Rules, in order:
    /// 1. An applied candidate is rejected
    /// 2. A selected candidate is removed, whatever the credits
    /// 3. Adding beyond the credits is rejected
    /// 4. Otherwise the candidate is added
    ///
    /// A rejection leaves the selection untouched.
    pub fn toggle(&mut self, candidate_id: &str) -> Result<SelectionChange, SelectionRejected> {
        if self.applied.contains(candidate_id) {
            tracing::debug!("Rejected selection of {}: already applied", candidate_id);
            return Err(SelectionRejected::AlreadyApplied {
                candidate_id: candidate_id.to_string(),
            });
        }

        if let Some(pos) = self.selected.iter().position(|id| id == candidate_id) {
            self.selected.remove(pos);
            tracing::debug!(
                "Deselected {} ({}/{} credits used)",
                candidate_id,
                self.selected.len(),
                self.credits
            );
            return Ok(SelectionChange::Removed);
        }

        if self.selected.len() >= self.credits {
            tracing::debug!(
                "Rejected selection of {}: credit limit {} reached",
                candidate_id,
                self.credits
            );
            return Err(SelectionRejected::CreditLimitReached {
                credits: self.credits,
            });
        }

        self.selected.push(candidate_id.to_string());
        tracing::debug!(
            "Selected {} ({}/{} credits used)",
            candidate_id,
            self.selected.len(),
            self.credits
        );
        Ok(SelectionChange::Added)
    }

    /// Selected ids in selection order
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn credits(&self) -> usize {
        self.credits
    }

    pub fn remaining_credits(&self) -> usize {
        self.credits.saturating_sub(self.selected.len())
    }

    pub fn is_selected(&self, candidate_id: &str) -> bool {
        self.selected.iter().any(|id| id == candidate_id)
    }

    pub fn is_applied(&self, candidate_id: &str) -> bool {
        self.applied.contains(candidate_id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the application snapshot, dropping selected candidates
    /// that now have an application
    pub fn sync_applications(&mut self, applications: &[ApplicationRecord]) {
        self.applied = applied_ids(applications);

        let before = self.selected.len();
        let applied = &self.applied;
        self.selected.retain(|id| !applied.contains(id));

        if self.selected.len() != before {
            tracing::debug!(
                "Dropped {} selected candidates with existing applications",
                before - self.selected.len()
            );
        }
    }

    /// Build the batch for the submission collaborator
    pub fn submission(&self, job_id: &str) -> Result<SubmissionBatch, SelectionRejected> {
        if self.selected.is_empty() {
            return Err(SelectionRejected::NothingSelected);
        }

        Ok(SubmissionBatch {
            job_id: job_id.to_string(),
            candidate_ids: self.selected.clone(),
        })
    }
}

fn applied_ids(applications: &[ApplicationRecord]) -> HashSet<String> {
    applications.iter().map(|a| a.candidate_id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApplicationStatus;

    fn application(candidate_id: &str) -> ApplicationRecord {
        ApplicationRecord {
            candidate_id: candidate_id.to_string(),
            status: ApplicationStatus::Pending,
            applied_at: None,
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut tracker = SelectionTracker::new(3, &[]);

        assert_eq!(tracker.toggle("a"), Ok(SelectionChange::Added));
        assert_eq!(tracker.toggle("b"), Ok(SelectionChange::Added));
        assert_eq!(tracker.selected_ids(), ["a", "b"]);
        assert_eq!(tracker.remaining_credits(), 1);

        assert_eq!(tracker.toggle("a"), Ok(SelectionChange::Removed));
        assert_eq!(tracker.selected_ids(), ["b"]);
        assert!(!tracker.is_selected("a"));
    }

    #[test]
    fn test_applied_candidate_always_rejected() {
        let mut tracker = SelectionTracker::new(5, &[application("a")]);

        let err = tracker.toggle("a").unwrap_err();
        assert_eq!(err.to_string(), "already applied");
        assert_eq!(tracker.count(), 0);
        assert!(tracker.is_applied("a"));
    }

    #[test]
    fn test_credit_limit() {
        let mut tracker = SelectionTracker::new(2, &[]);
        tracker.toggle("a").unwrap();
        tracker.toggle("b").unwrap();

        let err = tracker.toggle("c").unwrap_err();
        assert_eq!(err, SelectionRejected::CreditLimitReached { credits: 2 });
        assert_eq!(err.to_string(), "credit limit reached");
        assert_eq!(tracker.selected_ids(), ["a", "b"]);

        // Removal is allowed at full capacity
        assert_eq!(tracker.toggle("b"), Ok(SelectionChange::Removed));
        assert_eq!(tracker.toggle("c"), Ok(SelectionChange::Added));
    }

    #[test]
    fn test_zero_credits() {
        let mut tracker = SelectionTracker::new(0, &[]);
        assert!(matches!(
            tracker.toggle("a"),
            Err(SelectionRejected::CreditLimitReached { .. })
        ));
        assert_eq!(tracker.remaining_credits(), 0);
    }

    #[test]
    fn test_sync_applications_drops_newly_applied() {
        let mut tracker = SelectionTracker::new(3, &[]);
        tracker.toggle("a").unwrap();
        tracker.toggle("b").unwrap();

        tracker.sync_applications(&[application("a")]);

        assert_eq!(tracker.selected_ids(), ["b"]);
        assert!(tracker.toggle("a").is_err());
    }

    #[test]
    fn test_submission() {
        let mut tracker = SelectionTracker::new(3, &[]);
        assert_eq!(tracker.submission("job_1"), Err(SelectionRejected::NothingSelected));

        tracker.toggle("b").unwrap();
        tracker.toggle("a").unwrap();
        let batch = tracker.submission("job_1").unwrap();
        assert_eq!(batch.job_id, "job_1");
        assert_eq!(batch.candidate_ids, vec!["b", "a"]);

        tracker.clear();
        assert_eq!(tracker.count(), 0);
    }
}

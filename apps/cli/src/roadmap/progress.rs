//! Sequential step-unlock state machine over a career's learning roadmap.
//!
//! Status is a pure function of the persisted completed set, recomputed on
//! every read. The unlock rule only gates the *available* state: un-toggling
//! step n−1 never demotes a step n that was completed separately. That
//! asymmetry is deliberate and observable behavior; keep it.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::storage::{progress_key, ProgressStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Locked,
    Available,
    Completed,
}

/// Step 1 is never locked. Step n is completed iff n is in the set, else
/// available iff n−1 is in the set, else locked.
pub fn derive_status(step: u32, completed: &BTreeSet<u32>) -> StepStatus {
    if completed.contains(&step) {
        StepStatus::Completed
    } else if step == 1 || completed.contains(&(step - 1)) {
        StepStatus::Available
    } else {
        StepStatus::Locked
    }
}

/// Tracks one user's progress through one career's roadmap. Sole writer of
/// the persisted snapshot for its (career, user) key; every mutation writes
/// through to the store before returning.
pub struct ProgressTracker {
    store: Arc<dyn ProgressStore>,
    key: String,
    total_steps: usize,
    completed: BTreeSet<u32>,
}

impl ProgressTracker {
    /// Loads the snapshot for (career, user), defaulting to no progress when
    /// the record is absent, unreadable, or corrupt.
    pub fn load(
        store: Arc<dyn ProgressStore>,
        career_name: &str,
        user_id: &str,
        total_steps: usize,
    ) -> Self {
        let key = progress_key(career_name, user_id);
        let completed = store.get(&key).unwrap_or_default();
        Self {
            store,
            key,
            total_steps,
            completed,
        }
    }

    pub fn status_of(&self, step: u32) -> StepStatus {
        derive_status(step, &self.completed)
    }

    /// Statuses for steps 1..=N in roadmap order.
    pub fn statuses(&self) -> Vec<StepStatus> {
        (1..=self.total_steps as u32)
            .map(|step| self.status_of(step))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Whole-percent completion, rounded to nearest.
    pub fn percent_complete(&self) -> u32 {
        if self.total_steps == 0 {
            return 0;
        }
        ((self.completed.len() * 100) as f64 / self.total_steps as f64).round() as u32
    }

    /// Adds the step to the completed set, or removes it when already there.
    /// Intentionally unguarded: a locked step toggles too (reference
    /// behavior). Persists before returning.
    pub fn toggle_step(&mut self, step: u32) {
        if !self.completed.remove(&step) {
            self.completed.insert(step);
        }
        self.persist();
    }

    /// Clears all progress for this (career, user) key only. The roadmap
    /// itself is untouched.
    pub fn reset(&mut self) {
        self.completed.clear();
        if let Err(e) = self.store.remove(&self.key) {
            warn!("Failed to clear progress snapshot for {}: {e}", self.key);
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(&self.key, &self.completed) {
            // Storage failures degrade silently per the error taxonomy; the
            // in-memory set stays authoritative for this session.
            warn!("Failed to persist progress snapshot for {}: {e}", self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn tracker(store: Arc<dyn ProgressStore>, total_steps: usize) -> ProgressTracker {
        ProgressTracker::load(store, "Data Scientist", "u1", total_steps)
    }

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_no_progress_unlocks_only_step_one() {
        let t = tracker(Arc::new(MemoryStore::new()), 3);
        assert_eq!(
            t.statuses(),
            vec![StepStatus::Available, StepStatus::Locked, StepStatus::Locked]
        );
    }

    #[test]
    fn test_completing_a_step_unlocks_the_next() {
        let mut t = tracker(Arc::new(MemoryStore::new()), 3);
        t.toggle_step(1);
        assert_eq!(
            t.statuses(),
            vec![
                StepStatus::Completed,
                StepStatus::Available,
                StepStatus::Locked
            ]
        );
    }

    #[test]
    fn test_uncompleting_predecessor_keeps_later_step_completed() {
        // {1,3}: step 2 is available (1 done) and step 3 stays completed even
        // though step 2 never was — the rule gates availability, not
        // completion.
        let mut t = tracker(Arc::new(MemoryStore::new()), 3);
        t.toggle_step(1);
        t.toggle_step(3);
        assert_eq!(
            t.statuses(),
            vec![
                StepStatus::Completed,
                StepStatus::Available,
                StepStatus::Completed
            ]
        );
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut t = tracker(Arc::new(MemoryStore::new()), 3);
        t.toggle_step(1);
        t.toggle_step(2);
        assert_eq!(t.status_of(2), StepStatus::Completed);
        t.toggle_step(2);
        assert_eq!(t.status_of(2), StepStatus::Available);
        assert_eq!(t.completed_count(), 1);
    }

    #[test]
    fn test_locked_step_can_still_be_toggled() {
        let mut t = tracker(Arc::new(MemoryStore::new()), 3);
        assert_eq!(t.status_of(3), StepStatus::Locked);
        t.toggle_step(3);
        assert_eq!(t.status_of(3), StepStatus::Completed);
    }

    #[test]
    fn test_percent_complete_rounds_to_nearest() {
        let mut t = tracker(Arc::new(MemoryStore::new()), 3);
        t.toggle_step(1);
        t.toggle_step(2);
        assert_eq!(t.percent_complete(), 67); // round(200/3)
        t.toggle_step(3);
        assert_eq!(t.percent_complete(), 100);
    }

    #[test]
    fn test_percent_complete_empty_roadmap_is_zero() {
        let t = tracker(Arc::new(MemoryStore::new()), 0);
        assert_eq!(t.percent_complete(), 0);
    }

    #[test]
    fn test_toggle_writes_through_to_store() {
        let store = Arc::new(MemoryStore::new());
        let mut t = tracker(store.clone(), 3);
        t.toggle_step(1);
        t.toggle_step(2);

        let key = progress_key("Data Scientist", "u1");
        assert_eq!(store.get(&key), Some(set(&[1, 2])));
    }

    #[test]
    fn test_progress_survives_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut t = tracker(store.clone(), 3);
            t.toggle_step(1);
        }
        let t = tracker(store, 3);
        assert_eq!(t.status_of(1), StepStatus::Completed);
        assert_eq!(t.status_of(2), StepStatus::Available);
    }

    #[test]
    fn test_reset_clears_set_and_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let mut t = tracker(store.clone(), 3);
        t.toggle_step(1);
        t.toggle_step(2);
        t.reset();

        assert_eq!(t.completed_count(), 0);
        assert_eq!(t.percent_complete(), 0);
        let key = progress_key("Data Scientist", "u1");
        assert_eq!(store.get(&key), None);
    }

    #[test]
    fn test_reset_leaves_other_keys_untouched() {
        let store = Arc::new(MemoryStore::new());
        let mut other = ProgressTracker::load(store.clone(), "DevOps Engineer", "u1", 3);
        other.toggle_step(1);

        let mut t = tracker(store.clone(), 3);
        t.toggle_step(1);
        t.reset();

        let other_key = progress_key("DevOps Engineer", "u1");
        assert_eq!(store.get(&other_key), Some(set(&[1])));
    }

    #[test]
    fn test_progress_is_scoped_per_user() {
        let store = Arc::new(MemoryStore::new());
        let mut t = ProgressTracker::load(store.clone(), "Data Scientist", "u1", 3);
        t.toggle_step(1);

        let other_user = ProgressTracker::load(store, "Data Scientist", "u2", 3);
        assert_eq!(other_user.completed_count(), 0);
        assert_eq!(other_user.status_of(1), StepStatus::Available);
    }
}

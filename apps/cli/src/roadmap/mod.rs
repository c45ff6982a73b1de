// Roadmap Progress Tracker.
// Step status is derived per read from the full completed set — there is no
// transition log. All persistence goes through storage::ProgressStore.

pub mod progress;

// Skill-gap analysis core.
// Pure functions over server-supplied snapshots — no I/O, no state.
// The remote service owns scoring; this module only matches and classifies.

pub mod matcher;
pub mod severity;

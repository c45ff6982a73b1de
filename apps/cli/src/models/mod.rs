// Wire DTOs for the CareerGap service. Field names follow the remote
// camelCase JSON; the core treats all of these as read-only snapshots.

pub mod career;
pub mod user;

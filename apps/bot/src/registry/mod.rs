/// Site registry
///
/// A flat key set of monitored URLs backed by libsql. Presence of a key is
/// the only state a site carries.
pub mod migrations;
pub mod repository;

#[cfg(test)]
pub mod memory;

pub use repository::{LibsqlRegistry, SiteRegistry};

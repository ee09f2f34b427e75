//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each reimport operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod migrate;
pub mod rules;

pub use migrate::{migrate_operation, migrate_with_rules, MigrateOptions};
pub use rules::rules_operation;

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod operations;
pub mod output;
pub mod preview;
pub mod report;
pub mod rules;
pub mod scanner;

pub use apply::{update_file, FileRecord, UpdateOptions};
pub use config::{Config, DefaultsConfig};
pub use engine::{apply as apply_rules, decode, Substitution};
pub use error::{IoAction, MigrateError};
pub use log::MigrationLog;
pub use operations::{migrate_operation, migrate_with_rules, rules_operation, MigrateOptions};
pub use output::{OutputFormat, OutputFormatter, RulesResult, VersionResult};
pub use preview::{render_diff, render_rules_table, should_use_color};
pub use report::{
    render_event, render_header, render_trailer, FileChange, FileEvent, FileFailure,
    MigrationSummary, ReportStyle,
};
pub use rules::{Rule, RuleCategory, RuleSet, RuleSpec, RuleSummary, RETIRED_MODULES, RULE_TABLE};
pub use scanner::{candidate_files, normalize_extension, ScanOptions};

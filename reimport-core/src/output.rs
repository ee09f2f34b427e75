use crate::preview::render_rules_table;
use crate::report::MigrationSummary;
use crate::rules::RuleSummary;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a rules listing
#[derive(Debug, Serialize, Deserialize)]
pub struct RulesResult {
    pub rules: Vec<RuleSummary>,
    pub retired_modules: Vec<String>,
    #[serde(skip)]
    pub use_color: bool,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for MigrationSummary {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "migrate",
            "root": self.root,
            "extension": self.extension,
            "dry_run": self.dry_run,
            "summary": {
                "files_scanned": self.files_scanned,
                "files_updated": self.files_updated(),
                "files_failed": self.files_failed(),
                "walk_errors": self.walk_errors.len(),
            },
            "changes": self.changes,
            "failures": self.failures,
            "walk_errors": self.walk_errors,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        let verb = if self.dry_run { "Would update" } else { "Updated" };

        writeln!(
            output,
            "{} {} out of {} .{} files",
            verb,
            self.files_updated(),
            self.files_scanned,
            self.extension
        )
        .unwrap();

        if self.files_failed() > 0 {
            writeln!(output, "Failed to process {} files", self.files_failed()).unwrap();
        }
        if !self.walk_errors.is_empty() {
            writeln!(
                output,
                "Skipped {} unreadable entries",
                self.walk_errors.len()
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for RulesResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = render_rules_table(&self.rules, self.use_color);

        if !self.retired_modules.is_empty() {
            writeln!(
                output,
                "Retired modules: {}",
                self.retired_modules.join(", ")
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

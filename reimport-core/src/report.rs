//! Accumulates per-file outcomes into a [`MigrationSummary`] and renders the
//! human-readable console trail.

use crate::apply::FileRecord;
use crate::error::MigrateError;
use crate::preview::render_diff;
use crate::rules::{RuleSummary, RETIRED_MODULES};
use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 60;

/// One updated file and the rules that fired in it, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: PathBuf,
    pub fired: Vec<RuleSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub root: PathBuf,
    pub extension: String,
    pub dry_run: bool,
    /// Every enumerated file, including the ones that failed
    pub files_scanned: usize,
    pub changes: Vec<FileChange>,
    pub failures: Vec<FileFailure>,
    /// Directories or entries the walk could not read; not counted as files
    #[serde(default)]
    pub walk_errors: Vec<FileFailure>,
}

/// Progress notification emitted once per enumerated file
#[derive(Debug)]
pub enum FileEvent<'a> {
    Updated {
        change: &'a FileChange,
        original: &'a str,
        content: &'a str,
    },
    Unchanged {
        path: &'a Path,
    },
    Failed(&'a FileFailure),
}

impl MigrationSummary {
    pub fn new(root: &Path, extension: &str, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
            dry_run,
            files_scanned: 0,
            changes: Vec::new(),
            failures: Vec::new(),
            walk_errors: Vec::new(),
        }
    }

    pub fn files_updated(&self) -> usize {
        self.changes.len()
    }

    pub fn files_failed(&self) -> usize {
        self.failures.len()
    }

    /// True if any file or directory could not be processed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty() || !self.walk_errors.is_empty()
    }

    /// Record a processed file. Returns the change entry if it was updated.
    pub fn record_update(&mut self, record: &FileRecord<'_>) -> Option<&FileChange> {
        self.files_scanned += 1;
        if !record.changed() {
            return None;
        }

        self.changes.push(FileChange {
            path: record.path.clone(),
            fired: record.fired.iter().map(|rule| rule.summary()).collect(),
        });
        self.changes.last()
    }

    /// Record a per-path failure. Walk errors are kept apart from file
    /// failures and do not count towards `files_scanned`.
    pub fn record_failure(&mut self, error: &MigrateError) -> &FileFailure {
        let failure = FileFailure {
            path: error
                .path()
                .map_or_else(|| self.root.clone(), Path::to_path_buf),
            message: error.reason(),
        };

        let list = if error.is_walk() {
            &mut self.walk_errors
        } else {
            self.files_scanned += 1;
            &mut self.failures
        };
        list.push(failure);
        &list[list.len() - 1]
    }
}

/// How the console trail is rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStyle {
    pub use_color: bool,
    pub dry_run: bool,
    pub show_diff: bool,
}

fn banner(style: ReportStyle) -> String {
    let line = "=".repeat(BANNER_WIDTH);
    if style.use_color {
        AnsiColor::Cyan.paint(line).to_string()
    } else {
        line
    }
}

pub fn render_header(root: &Path, style: ReportStyle) -> String {
    let mut output = String::new();
    let title = if style.dry_run {
        "Starting Import Migration (dry run)"
    } else {
        "Starting Import Migration"
    };

    writeln!(output, "{}", banner(style)).unwrap();
    if style.use_color {
        writeln!(output, "{}", AnsiColor::White.bold().paint(title)).unwrap();
    } else {
        writeln!(output, "{}", title).unwrap();
    }
    writeln!(output, "{}", banner(style)).unwrap();
    writeln!(output, "Scanning: {}", root.display()).unwrap();
    if style.dry_run {
        writeln!(output, "No files will be written").unwrap();
    }
    writeln!(output).unwrap();
    output
}

/// Render one file outcome. Unchanged files produce no output.
pub fn render_event(event: &FileEvent<'_>, style: ReportStyle) -> String {
    let mut output = String::new();

    match event {
        FileEvent::Updated {
            change,
            original,
            content,
        } => {
            let label = if style.dry_run {
                "✓ Would update:"
            } else {
                "✓ Updated:"
            };
            if style.use_color {
                writeln!(
                    output,
                    "{} {}",
                    AnsiColor::Green.paint(label),
                    change.path.display()
                )
                .unwrap();
            } else {
                writeln!(output, "{} {}", label, change.path.display()).unwrap();
            }

            for fired in &change.fired {
                if style.use_color {
                    writeln!(
                        output,
                        "  {} -> {}",
                        AnsiColor::Red.paint(fired.pattern.as_str()),
                        AnsiColor::Green.paint(fired.replacement.as_str())
                    )
                    .unwrap();
                } else {
                    writeln!(output, "  {}", fired).unwrap();
                }
            }

            if style.show_diff {
                output.push_str(&render_diff(&change.path, original, content, style.use_color));
            }
            writeln!(output).unwrap();
        },
        FileEvent::Unchanged { .. } => {},
        FileEvent::Failed(failure) => {
            let label = "✗ Error processing";
            if style.use_color {
                writeln!(
                    output,
                    "{} {}: {}",
                    AnsiColor::Red.bold().paint(label),
                    failure.path.display(),
                    failure.message
                )
                .unwrap();
            } else {
                writeln!(
                    output,
                    "{} {}: {}",
                    label,
                    failure.path.display(),
                    failure.message
                )
                .unwrap();
            }
        },
    }

    output
}

/// Render the closing banner with counts, plus cleanup hints after a real run
pub fn render_trailer(summary: &MigrationSummary, style: ReportStyle) -> String {
    let mut output = String::new();
    let title = if summary.dry_run {
        "Dry Run Complete!"
    } else {
        "Migration Complete!"
    };

    writeln!(output, "{}", banner(style)).unwrap();
    if style.use_color {
        writeln!(output, "{}", AnsiColor::White.bold().paint(title)).unwrap();
    } else {
        writeln!(output, "{}", title).unwrap();
    }
    writeln!(
        output,
        "Found {} .{} files",
        summary.files_scanned, summary.extension
    )
    .unwrap();
    let verb = if summary.dry_run {
        "Would update"
    } else {
        "Updated"
    };
    writeln!(
        output,
        "{} {} out of {} files",
        verb,
        summary.files_updated(),
        summary.files_scanned
    )
    .unwrap();
    if summary.files_failed() > 0 {
        let line = format!("Failed to process {} files", summary.files_failed());
        if style.use_color {
            writeln!(output, "{}", AnsiColor::Red.paint(line)).unwrap();
        } else {
            writeln!(output, "{}", line).unwrap();
        }
    }
    if !summary.walk_errors.is_empty() {
        let line = format!("Skipped {} unreadable entries", summary.walk_errors.len());
        if style.use_color {
            writeln!(output, "{}", AnsiColor::Red.paint(line)).unwrap();
        } else {
            writeln!(output, "{}", line).unwrap();
        }
    }
    writeln!(output, "{}", banner(style)).unwrap();

    if !summary.dry_run && summary.files_updated() > 0 {
        output.push_str(&render_next_steps(&summary.root));
    }

    output
}

fn render_next_steps(root: &Path) -> String {
    let mut output = String::new();
    writeln!(output).unwrap();
    writeln!(output, "Next steps:").unwrap();
    writeln!(output, "1. Delete old directories:").unwrap();
    for module in RETIRED_MODULES {
        writeln!(output, "   rm -rf {}", root.join(module).display()).unwrap();
    }
    writeln!(output).unwrap();
    writeln!(output, "2. Run cargo check").unwrap();
    output
}

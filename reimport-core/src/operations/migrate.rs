use crate::apply::{update_file, UpdateOptions};
use crate::log::MigrationLog;
use crate::report::{FileEvent, MigrationSummary};
use crate::rules::RuleSet;
use crate::scanner::{candidate_files, ScanOptions};
use anyhow::Result;
use std::path::PathBuf;

/// Everything a migration run needs besides the rule set
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub root: PathBuf,
    pub scan: ScanOptions,
    pub dry_run: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            scan: ScanOptions::default(),
            dry_run: false,
            log_file: None,
        }
    }
}

/// High-level migrate operation - equivalent to `reimport migrate`
///
/// Runs the built-in rule table over every candidate file under the root.
pub fn migrate_operation<F>(options: &MigrateOptions, on_event: F) -> Result<MigrationSummary>
where
    F: FnMut(&FileEvent<'_>),
{
    let rules = RuleSet::builtin()?;
    migrate_with_rules(options, &rules, on_event)
}

/// Single linear pass: enumerate, update each file, record each outcome.
///
/// A missing root fails before anything is opened or written. Any per-file
/// failure is recorded in the summary and reported through `on_event`, and
/// the pass moves on to the next file.
pub fn migrate_with_rules<F>(
    options: &MigrateOptions,
    rules: &RuleSet,
    mut on_event: F,
) -> Result<MigrationSummary>
where
    F: FnMut(&FileEvent<'_>),
{
    let files = candidate_files(&options.root, &options.scan)?;

    let mut log = MigrationLog::open(options.log_file.as_deref())?;
    log.log(&format!(
        "Starting migration of {} (extension: .{}, excluded dirs: [{}], rules: {}, dry run: {})",
        options.root.display(),
        options.scan.extension,
        options.scan.excluded_dirs.join(", "),
        rules.len(),
        options.dry_run
    ))?;

    let mut summary =
        MigrationSummary::new(&options.root, &options.scan.extension, options.dry_run);
    let update_options = UpdateOptions {
        dry_run: options.dry_run,
    };

    for candidate in files {
        match candidate.and_then(|path| update_file(&path, rules, update_options)) {
            Ok(record) => {
                if let Some(change) = summary.record_update(&record) {
                    let fired: Vec<String> = change.fired.iter().map(ToString::to_string).collect();
                    log.log(&format!(
                        "{} {}: {}",
                        if options.dry_run { "Would update" } else { "Updated" },
                        change.path.display(),
                        fired.join("; ")
                    ))?;
                    on_event(&FileEvent::Updated {
                        change,
                        original: &record.original,
                        content: &record.content,
                    });
                } else {
                    on_event(&FileEvent::Unchanged { path: &record.path });
                }
            },
            Err(err) => {
                let failure = summary.record_failure(&err);
                log.log(&format!(
                    "Error processing {}: {}",
                    failure.path.display(),
                    failure.message
                ))?;
                on_event(&FileEvent::Failed(failure));
            },
        }
    }

    log.log(&format!(
        "Migration complete: {} scanned, {} updated, {} failed, {} unreadable entries",
        summary.files_scanned,
        summary.files_updated(),
        summary.files_failed(),
        summary.walk_errors.len()
    ))?;

    Ok(summary)
}

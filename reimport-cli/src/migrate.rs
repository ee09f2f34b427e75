use anyhow::Result;
use reimport_core::{
    migrate_operation, render_event, render_header, render_trailer, DefaultsConfig,
    FileEvent, MigrateError, MigrateOptions, OutputFormatter, ReportStyle, ScanOptions,
};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::OutputFormat;

/// Flag values that override the `[defaults]` table when present
#[derive(Debug, Default)]
pub struct MigrateOverrides {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub exclude_dirs: Vec<String>,
    pub log_file: Option<PathBuf>,
    pub dry_run: bool,
}

/// Merge CLI flags over config defaults
pub fn resolve_options(
    defaults: &DefaultsConfig,
    overrides: MigrateOverrides,
) -> Result<MigrateOptions> {
    let extension = overrides
        .extension
        .as_deref()
        .unwrap_or(&defaults.extension);
    let excluded_dirs = if overrides.exclude_dirs.is_empty() {
        defaults.excluded_dirs.clone()
    } else {
        overrides.exclude_dirs
    };

    Ok(MigrateOptions {
        root: overrides.root.unwrap_or_else(|| defaults.root.clone()),
        scan: ScanOptions::new(extension, excluded_dirs)?,
        dry_run: overrides.dry_run,
        log_file: overrides.log_file.or_else(|| defaults.log_file.clone()),
    })
}

pub fn handle_migrate(
    options: &MigrateOptions,
    show_diff: bool,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let style = ReportStyle {
        use_color,
        dry_run: options.dry_run,
        show_diff,
    };
    let trail = output == OutputFormat::Summary && !quiet;
    let mut stdout = io::stdout().lock();

    let summary = if trail {
        // Checked before the header so a bad root prints only the error
        if !options.root.is_dir() {
            return Err(MigrateError::MissingRoot {
                path: options.root.clone(),
            }
            .into());
        }
        write!(stdout, "{}", render_header(&options.root, style))?;
        migrate_operation(options, |event| {
            // A closed stdout must not abort the run halfway through
            let _ = write!(stdout, "{}", render_event(event, style));
        })?
    } else if output == OutputFormat::Summary {
        // Quiet drops the trail but still reports what could not be processed
        let mut stderr = io::stderr().lock();
        let plain = ReportStyle {
            use_color: false,
            ..style
        };
        migrate_operation(options, |event| {
            if let FileEvent::Failed(_) = event {
                let _ = write!(stderr, "{}", render_event(event, plain));
            }
        })?
    } else {
        migrate_operation(options, |_| {})?
    };

    match output {
        OutputFormat::Json => {
            writeln!(stdout, "{}", summary.format_json())?;
        },
        OutputFormat::Summary => {
            if trail {
                write!(stdout, "{}", render_trailer(&summary, style))?;
            } else if summary.has_failures() {
                eprint!("{}", summary.format_summary());
            }
        },
    }

    Ok(())
}

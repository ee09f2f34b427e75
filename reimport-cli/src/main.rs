use anyhow::{Context, Result};
use clap::Parser;
use reimport_core::{should_use_color, Config, MigrateError, OutputFormatter, VersionResult};
use std::process;

mod cli;
mod migrate;
mod rules;

use cli::{Cli, Commands, OutputFormat};
use migrate::MigrateOverrides;

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring .reimport/config.toml: {e:#}");
        Config::default()
    });

    let use_color = if cli.no_color {
        false
    } else {
        should_use_color(config.defaults.use_color)
    };

    let result = match cli.command {
        Commands::Migrate {
            root,
            extension,
            exclude_dirs,
            dry_run,
            diff,
            log_file,
            output,
            quiet,
        } => {
            let overrides = MigrateOverrides {
                root,
                extension,
                exclude_dirs,
                log_file,
                dry_run,
            };
            migrate::resolve_options(&config.defaults, overrides).and_then(|options| {
                migrate::handle_migrate(&options, diff, use_color, output, quiet)
            })
        },

        Commands::Rules { output } => rules::handle_rules(output, use_color),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// Invalid input exits 2, anything else 3
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<MigrateError>() {
        Some(err) if err.is_configuration() => 2,
        _ => 3,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "reimport".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let formatted = match output {
        OutputFormat::Json => version_result.format_json(),
        OutputFormat::Summary => version_result.format_summary(),
    };

    println!("{}", formatted);
    Ok(())
}

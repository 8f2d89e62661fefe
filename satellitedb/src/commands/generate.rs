// satellitedb/src/commands/generate.rs
//
// USE CASE: resolve the configuration and run the schema generator, with the
// run log scoped around the whole flow.

use anyhow::Context;
use std::path::PathBuf;
use tracing::Level;

use satellitedb_core::application::run_generation;
use satellitedb_core::infrastructure::config::ConfigPaths;
use satellitedb_core::infrastructure::generator::{DryRunGenerator, ProcessGenerator};
use satellitedb_core::infrastructure::logging::{create_log_file, file_subscriber};

use crate::cli::Cli;

const COMPONENT: &str = "satellitedb";

pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => executable_dir()?,
    };

    let log_dir = base_dir.join("logs");
    let (log_path, log_file) = create_log_file(&log_dir, COMPONENT)
        .with_context(|| format!("Failed to create log file in {:?}", log_dir))?;

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let paths = ConfigPaths::from_base_dir(&base_dir);

    let result = tracing::subscriber::with_default(file_subscriber(log_file, level), || {
        if cli.dry_run {
            run_generation(&paths, &DryRunGenerator::stdout())
        } else {
            run_generation(&paths, &ProcessGenerator::new(cli.generator))
        }
    });

    if let Err(e) = result {
        eprintln!("❌ Schema generation failed: {}", e);
        eprintln!("   See {}", log_path.display());
        std::process::exit(1);
    }

    Ok(())
}

fn executable_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot locate the satellitedb executable")?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .with_context(|| format!("Executable {:?} has no parent directory", exe))
}

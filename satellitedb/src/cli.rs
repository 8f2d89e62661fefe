// satellitedb/src/cli.rs
//
// Single source of truth for the CLI definition (Clap structs). Every flag is
// optional: a bare `satellitedb` reads config/ next to the executable and runs
// the default generator.

use clap::Parser;
use satellitedb_core::infrastructure::generator::process::DEFAULT_GENERATOR;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "satellitedb")]
#[command(about = "Resolves DB settings from YAML and runs the schema generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config/ and logs/ (default: the executable's directory)
    #[arg(long, env = "SATELLITEDB_HOME")]
    pub base_dir: Option<PathBuf>,

    /// Schema generator program, called with: db_type db_url target file_format objects
    #[arg(long, env = "SATELLITEDB_GENERATOR", default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Print the resolved request as JSON instead of running the generator
    #[arg(long)]
    pub dry_run: bool,

    /// Also write DEBUG events to the log file
    #[arg(long, short)]
    pub verbose: bool,
}

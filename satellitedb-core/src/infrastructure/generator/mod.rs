// satellitedb-core/src/infrastructure/generator/mod.rs

pub mod dry_run;
pub mod process;

pub use dry_run::DryRunGenerator;
pub use process::ProcessGenerator;

pub mod loader;

pub use loader::{ConfigPaths, load_cfg};

pub mod commands;

pub use commands::{Cli, DEFAULT_EXPORT_FILE, run};

//! Process-level plumbing shared by the server binary: layered configuration,
//! home directory resolution, logging setup and shutdown signals.

pub mod config;
pub mod logging;
pub mod paths;
pub mod shutdown;

pub use config::{AppConfig, CliArgs};
pub use logging::init_logging_from_config;

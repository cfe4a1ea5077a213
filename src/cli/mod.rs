//! CLI commands
//!
//! Command implementations for the `notedraft` binary.

mod auth;
mod config;
mod progress;
mod publish;
mod social_sets;
pub mod style;

pub use auth::{run_auth_setup, run_auth_test};
pub use config::{run_config_path, run_config_set, run_config_show};
pub use publish::{run_publish, run_publish_text};
pub use social_sets::run_social_sets;

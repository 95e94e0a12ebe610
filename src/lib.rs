pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::openai::OpenAiClient;
pub use config::cli::LocalStorage;
pub use config::params::{load_config, Params};
pub use core::{generator::ImageGenerator, headless::HeadlessRun};
pub use utils::error::{DesignerError, Result};

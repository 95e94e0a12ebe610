pub mod cli;
pub mod params;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "graphic-designer-tool")]
#[command(about = "Generate visuals and logos from a text description")]
pub struct CliConfig {
    /// Path to the YAML parameter file
    #[arg(short, long, default_value = params::DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, default_value = "7860")]
    pub port: u16,

    /// Base URL of the image generation API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = crate::adapters::openai::DEFAULT_API_BASE)]
    pub api_base: String,

    /// Generate a single visual without starting the web interface
    #[arg(long)]
    pub prompt: Option<String>,

    /// Where headless runs write generated visuals
    #[arg(long, default_value = "./output")]
    pub output_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        validate_non_empty_string("host", &self.host)?;
        validate_url("api_base", &self.api_base)?;
        validate_path("output_dir", &self.output_dir)?;
        if let Some(prompt) = &self.prompt {
            validate_non_empty_string("prompt", prompt)?;
        }
        Ok(())
    }
}

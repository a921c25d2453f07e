use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Parser)]
#[command(name = "footage-finder")]
#[command(about = "Turns a vague client brief into stock-footage search keywords")]
pub struct CliConfig {
    /// Client description of the video, e.g. "business growth but modern"
    pub description: String,

    #[arg(long, default_value = "gemini-2.5-flash")]
    pub model: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Also print marketplace search links")]
    pub links: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Injected by the binary from GEMINI_API_KEY, never taken as an
    /// argument so the secret stays out of shell history.
    #[arg(skip)]
    pub api_key: Option<String>,
}

impl CliConfig {
    pub fn with_api_key_from_env(mut self) -> Self {
        self.api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        self
    }
}

impl ConfigProvider for CliConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // Empty descriptions are the caller's job to reject, before any
        // generation call is made.
        validation::validate_non_empty_string("description", &self.description)?;
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_url("api_base", &self.api_base)?;
        Ok(())
    }
}

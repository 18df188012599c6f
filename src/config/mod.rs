pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menu-client")]
#[command(about = "Fetch a restaurant menu and pick the featured dishes")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000")]
    pub api_endpoint: String,

    /// Maximum number of featured dishes to show
    #[arg(long, default_value = "3")]
    pub limit: usize,

    /// Restrict selection to one category id
    #[arg(long)]
    pub category: Option<String>,

    /// Shuffle the top-ranked pool instead of returning it in rank order
    #[arg(long)]
    pub random: bool,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn featured_limit(&self) -> usize {
        self.limit
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        if let Some(category) = &self.category {
            validation::validate_non_empty_string("category", category)?;
        }
        Ok(())
    }
}

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration, for deployments where CLI flags are awkward.
///
/// ```toml
/// [client]
/// endpoint = "${MENU_API_URL}"
/// timeout_seconds = 30
///
/// [featured]
/// limit = 3
/// randomize = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientConfig,
    pub featured: Option<FeaturedConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedConfig {
    pub limit: Option<usize>,
    pub category: Option<String>,
    pub randomize: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn featured_limit(&self) -> usize {
        self.featured
            .as_ref()
            .and_then(|f| f.limit)
            .unwrap_or(crate::core::featured::DEFAULT_FEATURED_LIMIT)
    }

    pub fn randomize(&self) -> bool {
        self.featured
            .as_ref()
            .and_then(|f| f.randomize)
            .unwrap_or(false)
    }
}

/// Replace `${VAR_NAME}` placeholders with environment values. Unset
/// variables are left as-is so validation reports them in context.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.client.endpoint
    }

    fn featured_limit(&self) -> usize {
        self.featured_limit()
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds.unwrap_or(30)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.endpoint", &self.client.endpoint)?;
        if let Some(category) = self.featured.as_ref().and_then(|f| f.category.as_ref()) {
            validation::validate_non_empty_string("featured.category", category)?;
        }
        Ok(())
    }
}

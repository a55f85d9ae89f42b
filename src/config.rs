//! Site configuration module.
//!
//! The identity shown in every page's shell (author name, profile links,
//! copyright year) lives in an optional `config.toml` in the content root:
//!
//! ```text
//! content/
//! ├── config.toml      # Optional: site identity
//! ├── papers/
//! └── projects/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [identity]
//! name = "Achraf Hsain"                          # Nav logo, <meta author>, titles, footer
//! github = "https://github.com/AchrafHsain7"
//! scholar = "https://scholar.google.com/"
//! linkedin = "https://linkedin.com/"
//! email = "achraf@example.com"                   # Bare address; rendered as mailto:
//! copyright_year = 2025
//! ```
//!
//! Empty profile links are left out of the footer. Unknown keys are rejected
//! to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the content root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub identity: Identity,
}

/// Who the site belongs to, as rendered in the nav and footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// GitHub profile URL.
    pub github: String,
    /// Google Scholar profile URL.
    pub scholar: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// Contact address, without the `mailto:` scheme.
    pub email: String,
    pub copyright_year: u16,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Achraf Hsain".to_string(),
            github: "https://github.com/AchrafHsain7".to_string(),
            scholar: "https://scholar.google.com/".to_string(),
            linkedin: "https://linkedin.com/".to_string(),
            email: "achraf@example.com".to_string(),
            copyright_year: 2025,
        }
    }
}

impl Identity {
    /// First character of the name, shown in the nav logo badge.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "identity.name must not be empty".into(),
            ));
        }
        if self.identity.email.trim().is_empty() {
            return Err(ConfigError::Validation(
                "identity.email must not be empty".into(),
            ));
        }
        if self.identity.email.starts_with("mailto:") {
            return Err(ConfigError::Validation(
                "identity.email must be a bare address (drop the mailto: prefix)".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from the content root, falling back to defaults.
///
/// Returns `Err` if the file exists but is invalid TOML, has unknown keys,
/// or fails validation.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Printed by `--gen-config` and written by `--init` when no config exists.
pub fn stock_config_toml() -> &'static str {
    r##"# Portfolio Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity (navigation, page titles, footer)
# ---------------------------------------------------------------------------
[identity]
# Display name used in the nav logo, <meta name="author">, titles and footer.
name = "Achraf Hsain"

# Profile links shown as footer icons. Set one to "" to hide it.
github = "https://github.com/AchrafHsain7"
scholar = "https://scholar.google.com/"
linkedin = "https://linkedin.com/"

# Contact address for the footer mail icon (without "mailto:").
email = "achraf@example.com"

# Year shown in the footer copyright line.
copyright_year = 2025
"##
}

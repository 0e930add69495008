use serde::Deserialize;
use thiserror::Error;

use crate::nav::NavNode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid build configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// The slice of the host's build configuration this plugin reads.
///
/// A configuration without a `nav` key means empty navigation, which in turn
/// means every Markdown file gets dropped — that mirrors how the host treats
/// a nav-less site (nothing is reachable).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub nav: Vec<NavNode>,
}

impl BuildConfig {
    /// Parse the host's YAML configuration document.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }
}

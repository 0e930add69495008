pub mod config;
pub mod hooks;

pub use config::{BuildConfig, ConfigError};
pub use hooks::{BuildContext, PruneUnused, PLUGIN_NAME};

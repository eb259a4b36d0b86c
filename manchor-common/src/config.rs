//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file (`~/.config/manchor/config.toml`, then
//!    `/etc/manchor/config.toml` on Linux)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Default maximum accepted input length, in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Optional settings read from the TOML config file
///
/// Any field may be omitted; resolution falls through to the next tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// HTTP listen port
    pub port: Option<u16>,

    /// Path to an external classifier model file
    pub model_path: Option<PathBuf>,

    /// Maximum accepted input length in characters
    pub max_input_chars: Option<usize>,
}

impl TomlConfig {
    /// Load the config file if one exists; missing files yield defaults
    ///
    /// A file that exists but fails to parse is an error, not a silent
    /// fallback, so operator typos are surfaced at startup.
    pub fn load() -> Result<Self> {
        let path = match find_config_file() {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Locate the platform config file, if present
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("manchor").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/manchor/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Resolve the classifier model path
///
/// Priority: CLI argument, then environment variable, then TOML config.
/// `None` means no override anywhere: the service falls back to its
/// compiled-in default model.
pub fn resolve_model_path(
    cli_arg: Option<&PathBuf>,
    env_var_name: &str,
    toml_config: &TomlConfig,
) -> Option<PathBuf> {
    let mut sources = Vec::new();
    if cli_arg.is_some() {
        sources.push("command line");
    }
    if std::env::var(env_var_name).is_ok() {
        sources.push("environment");
    }
    if toml_config.model_path.is_some() {
        sources.push("TOML");
    }
    if sources.len() > 1 {
        warn!(
            "Model path set in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    if let Some(path) = cli_arg {
        return Some(path.clone());
    }
    if let Ok(path) = std::env::var(env_var_name) {
        return Some(PathBuf::from(path));
    }
    toml_config.model_path.clone()
}

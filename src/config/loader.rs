// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{CACHE_DIR_ENV, DEFAULT_CACHE_SUBDIR, DEFAULT_REGISTRY_PREFIX};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Evaluator configuration.
///
/// Every section is optional; an empty file yields the same behaviour as
/// `EvaluatorConfig::default()`.
///
/// # Fields
/// * `templates` - How input values are rendered into output path templates
/// * `registry` - How registry identifiers are recognized and resolved
///
/// # Example
/// ```yaml
/// templates:
///   list_separator: " "
/// registry:
///   prefix: "zenodo."
///   cache_dir: "/var/cache/descriptors"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub templates: TemplateConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Path template rendering options.
///
/// # Fields
/// * `list_separator` - Join rule for list-valued inputs that declare no `list-separator`
///   of their own. When unset such placeholders are left in the path untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
    pub list_separator: Option<String>,
}

/// Registry identifier options.
///
/// # Fields
/// * `prefix` - Leading token that marks a reference as a registry identifier (defaults to `zenodo.`)
/// * `cache_dir` - Directory of cached records (defaults to `$DESCRIPTOR_QUERY_CACHE`, then `$HOME/.cache/descriptor-query`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    pub prefix: Option<String>,
    pub cache_dir: Option<PathBuf>,
}

impl RegistryConfig {
    /// Get the registry prefix, using the built-in default if not configured.
    pub fn get_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_REGISTRY_PREFIX)
    }

    /// Get the cache directory, falling back to the environment and then `$HOME`.
    pub fn get_cache_dir(&self) -> PathBuf {
        if let Some(dir) = &self.cache_dir {
            return dir.clone();
        }
        if let Some(dir) = std::env::var_os(CACHE_DIR_ENV) {
            return PathBuf::from(dir);
        }
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_CACHE_SUBDIR)
    }
}

/// Load an evaluator config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EvaluatorConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(EvaluatorConfig::default());
    }
    let cfg: EvaluatorConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load an evaluator config and reject values the loader cannot work with.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<EvaluatorConfig, ConfigError> {
    let cfg = load_config(path)?;

    if let Some(prefix) = &cfg.registry.prefix {
        if prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "registry.prefix must not be empty".to_string(),
            ));
        }
    }

    Ok(cfg)
}

//! Global configuration for snapnotes (stored in ~/.config/snapnotes/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SnapError};
use crate::export::ExportFormat;
use crate::store::paths;

const CONFIG_DIR: &str = "snapnotes";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "SNAPNOTES_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Store file to use instead of `~/.snapnotes/notes.json`
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Format used by `export` when `--format` is not given
    #[serde(default)]
    pub default_export_format: Option<ExportFormat>,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    SnapError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SnapError::io_operation("read config", path.display(), e))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SnapError::Other(format!(
                "failed to parse config {}: {}",
                path.display(),
                e
            ))
        })?;

        if config
            .store_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(SnapError::invalid_value(
                "store_path",
                format!("empty path in {}", path.display()),
            ));
        }

        Ok(config)
    }

    /// Resolve the store file: explicit override, then config, then the default location
    pub fn resolve_store_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        paths::default_store_path()
    }

    /// Resolve the export format: explicit flag, then config, then Markdown
    pub fn resolve_export_format(&self, explicit: Option<ExportFormat>) -> ExportFormat {
        explicit
            .or(self.default_export_format)
            .unwrap_or_default()
    }
}

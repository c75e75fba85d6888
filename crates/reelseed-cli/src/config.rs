use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use reelseed_catalog::CatalogOptions;
use reelseed_generate::model::{DEFAULT_CUSTOMERS, DEFAULT_SAMPLE_SIZE};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "reelseed.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a generation run, read from TOML and overridden by flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub out_dir: PathBuf,
    /// Fixed seed; a random one is drawn per run when unset.
    pub seed: Option<u64>,
    pub customers: usize,
    pub sample_size: usize,
    pub include_headers: bool,
    pub catalog: CatalogOptions,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            seed: None,
            customers: DEFAULT_CUSTOMERS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            include_headers: false,
            catalog: CatalogOptions::default(),
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.sample_size > self.customers {
            return Err(ConfigError::Invalid(format!(
                "sample_size ({}) must not exceed customers ({})",
                self.sample_size, self.customers
            )));
        }
        if self.catalog.pages == 0 {
            return Err(ConfigError::Invalid(
                "catalog.pages must be at least 1".to_string(),
            ));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load `path`, or `reelseed.toml` if it exists, or the defaults.
pub fn load_config(path: Option<&Path>) -> ConfigResult<SeedConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                return Ok(SeedConfig::default());
            }
            default_path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let config: SeedConfig = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &SeedConfig) -> ConfigResult<()> {
    let encoded = toml::to_string_pretty(config)?;
    write_bytes_atomic(path, encoded.as_bytes())
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> ConfigResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::Invalid("invalid path for config file".to_string()))?;
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

//! `pushdown.toml` configuration.
//!
//! ```toml
//! [dialect]
//! version = "7.5.0"
//!
//! [columns]
//! "orders.total" = "t0_total"
//!
//! [log]
//! filter = "pushdown=debug"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PushdownError, PushdownResult};
use crate::transpiler::{MappedColumns, TranslationContext, Version};

pub const CONFIG_FILE: &str = "pushdown.toml";

/// Default `tracing` filter when neither `RUST_LOG` nor `[log] filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "pushdown=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushdownConfig {
    #[serde(default)]
    pub dialect: DialectConfig,
    /// Logical `qualifier.name` to rendered identifier. When present, only
    /// mapped columns are visible to the target.
    #[serde(default)]
    pub columns: HashMap<String, String>,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DialectConfig {
    /// `MAJOR[.MINOR[.PATCH]]`; latest known when absent.
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl PushdownConfig {
    /// Load from the first config file found, or defaults when there is none.
    pub fn load() -> PushdownResult<Self> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// `./pushdown.toml`, then `<config_dir>/pushdown/pushdown.toml`.
    pub fn locate() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("pushdown").join(CONFIG_FILE))
            .filter(|path| path.is_file())
    }

    pub fn load_from(path: &Path) -> PushdownResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> PushdownResult<Self> {
        let config: Self = toml::from_str(content)?;
        // Surface a bad version at load time rather than at first use.
        config.version()?;
        Ok(config)
    }

    pub fn version(&self) -> PushdownResult<Version> {
        match &self.dialect.version {
            Some(v) => Version::parse(v),
            None => Ok(Version::LATEST),
        }
    }

    /// Translation context for the configured dialect and column mapping.
    pub fn context(&self) -> PushdownResult<TranslationContext> {
        let ctx = TranslationContext::new(self.version()?);
        if self.columns.is_empty() {
            return Ok(ctx);
        }
        let mut mapped = MappedColumns::new();
        for (name, rendered) in &self.columns {
            if rendered.is_empty() {
                return Err(PushdownError::Config(format!(
                    "column '{}' maps to an empty identifier",
                    name
                )));
            }
            mapped = mapped.with_name(name.clone(), rendered.clone());
        }
        Ok(ctx.with_resolver(mapped))
    }
}

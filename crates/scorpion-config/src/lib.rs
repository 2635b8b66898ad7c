//! File-backed configuration for scorpionctl.
//!
//! Two JSON documents drive provisioning: the site config (network
//! prefixes shared by the whole plant) and the default-parameter
//! template. The site config merges `SCORPION_`-prefixed environment
//! overrides on top of the file; the template is read verbatim,
//! preserving document order because that order is also the push order.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Json},
};
use thiserror::Error;

use scorpion_core::{ConfigSource, CoreError, DefaultTemplate, SiteConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        CoreError::Config {
            message: err.to_string(),
        }
    }
}

// ── Default paths ───────────────────────────────────────────────────

const SITE_CONFIG_FILE: &str = "config.json";
const TEMPLATE_FILE: &str = "default_params.json";

/// Resolve the default config directory via XDG / platform conventions.
fn config_dir() -> PathBuf {
    ProjectDirs::from("", "", "scorpionctl").map_or_else(
        || PathBuf::from("."),
        |dirs| dirs.config_dir().to_path_buf(),
    )
}

// ── File-backed source ──────────────────────────────────────────────

/// `ConfigSource` over two JSON files.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    site_path: PathBuf,
    template_path: PathBuf,
}

impl FileConfigSource {
    /// Source with explicit file paths.
    pub fn new(site_path: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            site_path: site_path.into(),
            template_path: template_path.into(),
        }
    }

    /// Source rooted at the platform config directory.
    pub fn default_paths() -> Self {
        let dir = config_dir();
        Self::new(dir.join(SITE_CONFIG_FILE), dir.join(TEMPLATE_FILE))
    }

    pub fn site_path(&self) -> &Path {
        &self.site_path
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    fn load_site(&self) -> Result<SiteConfig, ConfigError> {
        if !self.site_path.exists() {
            return Err(ConfigError::Io {
                path: self.site_path.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let figment = Figment::new()
            .merge(Json::file(&self.site_path))
            .merge(Env::prefixed("SCORPION_"));
        Ok(figment.extract()?)
    }

    fn load_template(&self) -> Result<DefaultTemplate, ConfigError> {
        let raw =
            std::fs::read_to_string(&self.template_path).map_err(|source| ConfigError::Io {
                path: self.template_path.clone(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: self.template_path.clone(),
            source,
        })
    }
}

impl ConfigSource for FileConfigSource {
    fn load_site_config(&self) -> Result<SiteConfig, CoreError> {
        Ok(self.load_site()?)
    }

    fn load_default_template(&self) -> Result<DefaultTemplate, CoreError> {
        Ok(self.load_template()?)
    }
}

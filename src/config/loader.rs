//! Configuration loader with tier-based merging.
//!
//! Loads configuration from multiple tiers and merges them field-by-field.

use super::types::Config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Names an explicit config file; tier discovery is skipped when set.
pub const ENV_CONFIG_PATH: &str = "EDU_ADMIN_CONFIG_PATH";
pub const ENV_DB_PATH: &str = "EDU_ADMIN_DB_PATH";
pub const ENV_PORT: &str = "EDU_ADMIN_PORT";
pub const ENV_HELP_URL: &str = "EDU_ADMIN_HELP_URL";
pub const ENV_USER_DIR: &str = "EDU_ADMIN_USER_DIR";
pub const ENV_PROJECT_DIR: &str = "EDU_ADMIN_PROJECT_DIR";

const CONFIG_FILE: &str = "config.yaml";

/// Configuration tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    Defaults = 0,
    /// `$CWD/edu-admin/`
    Project = 1,
    /// `~/.edu-admin/`
    User = 2,
    Environment = 3,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Defaults => write!(f, "defaults"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Environment => write!(f, "environment"),
        }
    }
}

/// Directories searched for `config.yaml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub project_dir: Option<PathBuf>,
    pub user_dir: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        let user_dir = std::env::var(ENV_USER_DIR)
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".edu-admin")));

        let project_dir = std::env::var(ENV_PROJECT_DIR)
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("edu-admin")));

        Self {
            project_dir,
            user_dir,
        }
    }

    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }

    fn tier_files(&self) -> [(ConfigTier, Option<PathBuf>); 2] {
        [
            (
                ConfigTier::Project,
                self.project_dir.as_ref().map(|d| d.join(CONFIG_FILE)),
            ),
            (
                ConfigTier::User,
                self.user_dir.as_ref().map(|d| d.join(CONFIG_FILE)),
            ),
        ]
    }
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: Config,
    /// Highest-priority file that contributed, if any.
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Load from discovered tiers and the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from));
        Self::load_with(explicit, ConfigPaths::discover(), |key| std::env::var(key).ok())
    }

    /// Load with explicit paths and environment lookup.
    pub fn load_with<F>(explicit: Option<PathBuf>, paths: ConfigPaths, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut config, config_path) = match explicit {
            Some(path) => {
                let config = Config::load(&path)
                    .with_context(|| format!("loading config file {}", path.display()))?;
                (config, Some(path))
            }
            None => Self::merge_tiers(&paths)?,
        };

        apply_env_overrides(&mut config, env);
        config.validate()?;

        Ok(Self {
            config,
            config_path,
        })
    }

    fn merge_tiers(paths: &ConfigPaths) -> Result<(Config, Option<PathBuf>)> {
        let mut merged = serde_json::to_value(Config::default())?;
        let mut used = None;

        for (tier, file) in paths.tier_files() {
            let Some(file) = file else { continue };
            if !file.exists() {
                continue;
            }
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            match serde_yaml::from_str::<Value>(&content) {
                Ok(overlay) => {
                    debug!(tier = %tier, path = %file.display(), "Merging config tier");
                    merged = deep_merge(merged, overlay);
                    used = Some(file);
                }
                Err(e) => {
                    warn!(tier = %tier, path = %file.display(), error = %e, "Ignoring unparseable config file");
                }
            }
        }

        let config = serde_json::from_value(merged)?;
        Ok((config, used))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

fn apply_env_overrides<F>(config: &mut Config, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(db_path) = env(ENV_DB_PATH) {
        config.server.db_path = PathBuf::from(db_path);
    }

    if let Some(port) = env(ENV_PORT) {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(e) => warn!(value = %port, error = %e, "Ignoring invalid {}", ENV_PORT),
        }
    }

    if let Some(url) = env(ENV_HELP_URL) {
        config.branding.help_center_url = url;
    }
}

/// Merge `overlay` into `base`. Objects merge key by key; any other
/// overlay value replaces the base, except null which leaves it alone.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut target), Value::Object(source)) => {
            for (key, value) in source {
                let merged = match target.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                target.insert(key, merged);
            }
            Value::Object(target)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

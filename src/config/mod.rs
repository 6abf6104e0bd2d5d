//! Configuration system.
//!
//! Tiers, merged field by field (later wins):
//! 1. **Defaults** - `Config::default()`
//! 2. **Project** - `$CWD/edu-admin/config.yaml`
//! 3. **User** - `~/.edu-admin/config.yaml`
//! 4. **Environment** - see below
//!
//! ## Environment Variables
//! - `EDU_ADMIN_CONFIG_PATH` - Explicit config file (replaces tiers 1-3)
//! - `EDU_ADMIN_DB_PATH` - Notification database path
//! - `EDU_ADMIN_PORT` - Listen port
//! - `EDU_ADMIN_HELP_URL` - Help center URL
//! - `EDU_ADMIN_USER_DIR` - User config dir (default: `~/.edu-admin`)
//! - `EDU_ADMIN_PROJECT_DIR` - Project config dir (default: `./edu-admin`)

mod loader;
mod types;

pub use loader::{ConfigLoader, ConfigPaths, ConfigTier, deep_merge};
pub use loader::{
    ENV_CONFIG_PATH, ENV_DB_PATH, ENV_HELP_URL, ENV_PORT, ENV_PROJECT_DIR, ENV_USER_DIR,
};
pub use types::*;

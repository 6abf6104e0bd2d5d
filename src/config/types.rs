//! Configuration types and structures.

use crate::error::PanelError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Default port for the admin panel server.
pub const DEFAULT_PORT: u16 = 8080;

/// Default number of notifications shown in the header dropdown.
pub const DEFAULT_DROPDOWN_LIMIT: usize = 5;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub branding: BrandingConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// HTTP listener and storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (default: 127.0.0.1).
    #[serde(default = "default_bind")]
    pub bind: IpAddr,

    /// Port to listen on (default: 8080).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the SQLite notification database.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn default_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_path() -> PathBuf {
    PathBuf::from("edu-admin/notifications.db")
}

/// Static assets and strings referenced by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_logo_url")]
    pub logo_url: String,

    /// Logo variant for dark backgrounds (sidebar, mobile bar).
    #[serde(default = "default_logo_light_url")]
    pub logo_light_url: String,

    #[serde(default = "default_stylesheet_url")]
    pub stylesheet_url: String,

    #[serde(default = "default_icon_font_url")]
    pub icon_font_url: String,

    /// External help center, opened in a new tab.
    #[serde(default = "default_help_center_url")]
    pub help_center_url: String,

    /// Copyright holder shown after the year in the login footer.
    #[serde(default = "default_copyright")]
    pub copyright: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            logo_url: default_logo_url(),
            logo_light_url: default_logo_light_url(),
            stylesheet_url: default_stylesheet_url(),
            icon_font_url: default_icon_font_url(),
            help_center_url: default_help_center_url(),
            copyright: default_copyright(),
        }
    }
}

fn default_app_name() -> String {
    "منصة المدارس".to_string()
}

fn default_logo_url() -> String {
    "/assets/images/logo.png".to_string()
}

fn default_logo_light_url() -> String {
    "/assets/images/logo-white.png".to_string()
}

fn default_stylesheet_url() -> String {
    "/assets/css/app.css".to_string()
}

fn default_icon_font_url() -> String {
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css".to_string()
}

fn default_help_center_url() -> String {
    "https://help.example.com".to_string()
}

fn default_copyright() -> String {
    "منصة المدارس. جميع الحقوق محفوظة.".to_string()
}

/// Notification dropdown settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Maximum items listed in the header dropdown (default: 5).
    #[serde(default = "default_dropdown_limit")]
    pub dropdown_limit: usize,

    /// Maximum items on the "view all" page (default: 100).
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            dropdown_limit: default_dropdown_limit(),
            page_limit: default_page_limit(),
        }
    }
}

fn default_dropdown_limit() -> usize {
    DEFAULT_DROPDOWN_LIMIT
}

fn default_page_limit() -> usize {
    100
}

impl Config {
    /// Load configuration from a single YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the views cannot render sensibly.
    pub fn validate(&self) -> std::result::Result<(), PanelError> {
        if self.notifications.dropdown_limit == 0 {
            return Err(PanelError::invalid_value(
                "notifications.dropdown_limit",
                "must be at least 1",
            ));
        }
        if self.notifications.page_limit < self.notifications.dropdown_limit {
            return Err(PanelError::invalid_value(
                "notifications.page_limit",
                "must not be smaller than dropdown_limit",
            ));
        }
        if self.branding.help_center_url.trim().is_empty() {
            return Err(PanelError::invalid_value(
                "branding.help_center_url",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

//! Core data types shared by the views, the store and the server.

use serde::{Deserialize, Serialize};

/// The signed-in administrator as forwarded by the auth layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl CurrentUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            profile_picture_url: None,
        }
    }

    pub fn with_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture_url = Some(url.into());
        self
    }

    /// Picture URL, treating blank values as absent.
    pub fn picture_url(&self) -> Option<&str> {
        self.profile_picture_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// First character of the first name followed by the first character
    /// of the last name. Either half is empty when its name is empty.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Severity of a one-time flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl FlashKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
            FlashKind::Warning => "warning",
            FlashKind::Info => "info",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "success" => Some(FlashKind::Success),
            "error" => Some(FlashKind::Error),
            "warning" => Some(FlashKind::Warning),
            "info" => Some(FlashKind::Info),
            _ => None,
        }
    }
}

/// A one-time notice carried to the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn new(kind: FlashKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(FlashKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(FlashKind::Error, text)
    }

    /// Parse the `kind:text` form used in `?msg=` query values.
    ///
    /// An unknown or missing prefix keeps the whole value as info text.
    /// Returns `None` when there is nothing to show.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let message = match raw.split_once(':') {
            Some((prefix, text)) => match FlashKind::from_prefix(prefix) {
                Some(kind) => Self::new(kind, text.trim()),
                None => Self::new(FlashKind::Info, raw),
            },
            None => Self::new(FlashKind::Info, raw),
        };
        (!message.text.is_empty()).then_some(message)
    }

    /// Inverse of [`FlashMessage::parse`], before URL encoding.
    pub fn to_query_value(&self) -> String {
        format!("{}:{}", self.kind.as_str(), self.text)
    }
}

/// A notification as shown in the header dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: i64,
    /// Icon font class, e.g. `fa-school`.
    pub icon_glyph: String,
    /// Utility color class applied to the icon, e.g. `text-green-500`.
    pub icon_color: String,
    pub title: String,
    pub timestamp_label: String,
    pub read: bool,
}

/// Input for creating a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    pub icon_glyph: String,
    pub icon_color: String,
    pub title: String,
}

//! Notify subcommand: add a notification to the store.

use anyhow::Result;
use clap::Args;

use crate::db::{Database, now_ms};
use crate::error::PanelError;
use crate::types::NewNotification;

/// Arguments for the notify subcommand
#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Notification title
    pub title: String,

    /// Icon font class
    #[arg(long, default_value = "fa-bell")]
    pub icon: String,

    /// Color class applied to the icon
    #[arg(long, default_value = "text-indigo-500")]
    pub color: String,
}

impl NotifyArgs {
    fn to_notification(&self) -> Result<NewNotification, PanelError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PanelError::invalid_value("title", "must not be empty"));
        }
        if !self.icon.starts_with("fa-") {
            return Err(PanelError::invalid_value("icon", "must be an icon class such as fa-bell"));
        }
        Ok(NewNotification {
            icon_glyph: self.icon.clone(),
            icon_color: self.color.clone(),
            title: title.to_string(),
        })
    }
}

/// Insert the notification and return its id.
pub fn run_notify(args: &NotifyArgs, db: &Database) -> Result<i64> {
    let new = args.to_notification()?;
    db.insert_notification(&new, now_ms())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(title: &str, icon: &str) -> NotifyArgs {
        NotifyArgs {
            title: title.to_string(),
            icon: icon.to_string(),
            color: "text-green-500".to_string(),
        }
    }

    #[test]
    fn test_notify_inserts_unread() {
        let db = Database::open_in_memory().unwrap();
        let id = run_notify(&args("  مستخدم جديد ", "fa-user-plus"), &db).unwrap();
        assert!(id > 0);
        assert_eq!(db.unread_notification_count().unwrap(), 1);
        let items = db.recent_notifications(5, now_ms()).unwrap();
        assert_eq!(items[0].title, "مستخدم جديد");
    }

    #[test]
    fn test_notify_rejects_blank_title() {
        let db = Database::open_in_memory().unwrap();
        let err = run_notify(&args("   ", "fa-bell"), &db).unwrap_err();
        assert!(err.to_string().contains("title"));
        assert_eq!(db.unread_notification_count().unwrap(), 0);
    }

    #[test]
    fn test_notify_rejects_bad_icon() {
        let db = Database::open_in_memory().unwrap();
        assert!(run_notify(&args("x", "bell"), &db).is_err());
    }
}

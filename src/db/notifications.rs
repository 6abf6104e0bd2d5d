//! Notification queries for the header bell.

use super::Database;
use crate::error::PanelError;
use crate::types::{NewNotification, NotificationItem};
use anyhow::Result;
use rusqlite::params;

/// Relative label for a notification timestamp, e.g. `منذ 5 دقيقة`.
pub fn time_ago_label(ms_ago: i64) -> String {
    let seconds = ms_ago.max(0) / 1000;
    if seconds < 60 {
        "الآن".to_string()
    } else if seconds < 3600 {
        format!("منذ {} دقيقة", seconds / 60)
    } else if seconds < 86_400 {
        format!("منذ {} ساعة", seconds / 3600)
    } else {
        format!("منذ {} يوم", seconds / 86_400)
    }
}

impl Database {
    /// Store a new unread notification and return its id.
    pub fn insert_notification(&self, new: &NewNotification, created_at: i64) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO notifications (icon_glyph, icon_color, title, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![new.icon_glyph, new.icon_color, new.title, created_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn unread_notification_count(&self) -> Result<u32> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM notifications WHERE read_at IS NULL",
                [],
                |row| row.get(0),
            )?;
            Ok(u32::try_from(count).unwrap_or(u32::MAX))
        })
    }

    /// Most recent notifications, unread first, at most `limit` items.
    /// Labels are computed relative to `now`.
    pub fn recent_notifications(&self, limit: usize, now: i64) -> Result<Vec<NotificationItem>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, icon_glyph, icon_color, title, created_at, read_at
                 FROM notifications
                 ORDER BY (read_at IS NOT NULL), created_at DESC, id DESC
                 LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                let created_at: i64 = row.get(4)?;
                let read_at: Option<i64> = row.get(5)?;
                Ok(NotificationItem {
                    id: row.get(0)?,
                    icon_glyph: row.get(1)?,
                    icon_color: row.get(2)?,
                    title: row.get(3)?,
                    timestamp_label: time_ago_label(now.saturating_sub(created_at)),
                    read: read_at.is_some(),
                })
            })?;
            let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(items)
        })
    }

    /// Mark every unread notification as read. Returns how many changed.
    pub fn mark_all_notifications_read(&self, now: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE notifications SET read_at = ?1 WHERE read_at IS NULL",
                params![now],
            )?;
            Ok(changed)
        })
    }

    /// Mark one notification as read. Already-read items keep their
    /// original read time.
    pub fn mark_notification_read(&self, id: i64, now: i64) -> Result<()> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM notifications WHERE id = ?1)",
                params![id],
                |row| row.get(0),
            )?;
            if !exists {
                return Err(PanelError::NotificationNotFound(id).into());
            }
            conn.execute(
                "UPDATE notifications SET read_at = ?2 WHERE id = ?1 AND read_at IS NULL",
                params![id, now],
            )?;
            Ok(())
        })
    }
}

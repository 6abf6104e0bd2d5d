//! Main-column bodies for the pages the admin shell serves directly.

use super::header::render_notification_item;
use super::html_escape;
use super::nav::{MARK_ALL_READ_PATH, NOTIFICATIONS_PATH, PROFILE_PATH, active_sections};
use crate::types::NotificationItem;

const FALLBACK_TITLE: &str = "لوحة الإدارة";

/// Title for an admin path: the active nav label, else a fixed title
/// for the profile and notification pages.
pub fn page_title(request_path: &str) -> &'static str {
    if let Some(section) = active_sections(request_path).first() {
        return section.label;
    }
    if request_path.starts_with(NOTIFICATIONS_PATH) {
        "الإشعارات"
    } else if request_path.starts_with(PROFILE_PATH) {
        "الملف الشخصي"
    } else {
        FALLBACK_TITLE
    }
}

/// Heading card for sections whose content lives elsewhere.
pub fn render_section_body(request_path: &str) -> String {
    format!(
        r#"<section class="bg-white shadow rounded-lg p-6" data-page="{path}"><h1 class="text-2xl font-semibold text-gray-900">{title}</h1></section>"#,
        path = html_escape(request_path),
        title = html_escape(page_title(request_path)),
    )
}

/// The "view all" notifications list.
pub fn render_notifications_body(items: &[NotificationItem], unread_count: u32) -> String {
    let list = if items.is_empty() {
        r#"<p class="px-6 py-10 text-center text-gray-500" data-empty>لا توجد إشعارات</p>"#.to_string()
    } else {
        items.iter().map(render_notification_item).collect()
    };

    format!(
        r#"<section class="bg-white shadow rounded-lg" data-page="{page}"><div class="flex items-center justify-between px-6 py-4 border-b border-gray-200"><h1 class="text-2xl font-semibold text-gray-900">الإشعارات <span class="text-sm text-gray-500" data-unread-total>({unread_count} غير مقروء)</span></h1><a href="{mark_all}" class="text-sm text-indigo-600 hover:text-indigo-800">تعليم الكل كمقروء</a></div><div data-notification-list>{list}</div></section>"#,
        page = NOTIFICATIONS_PATH,
        mark_all = MARK_ALL_READ_PATH,
    )
}

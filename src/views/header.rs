//! Admin top bar: notifications bell and user menu.

use super::nav::{
    ACCOUNT_SETTINGS_PATH, MARK_ALL_READ_PATH, MenuLink, NOTIFICATIONS_PATH, PROFILE_PATH,
    render_menu_links,
};
use super::{AvatarSize, html_escape, render_avatar};
use crate::config::BrandingConfig;
use crate::types::{CurrentUser, NotificationItem};

#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    pub user: &'a CurrentUser,
    pub unread_count: u32,
    pub notifications: &'a [NotificationItem],
}

/// Badge text for the bell: none at zero, the count up to 9, then `9+`.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

fn render_badge(count: u32) -> String {
    badge_label(count)
        .map(|label| {
            format!(
                r#"<span class="absolute -top-1 -left-1 inline-flex items-center justify-center h-5 min-w-5 px-1 rounded-full bg-red-500 text-xs font-bold text-white" data-badge>{label}</span>"#
            )
        })
        .unwrap_or_default()
}

/// Link target that marks one notification read.
pub fn notification_read_path(id: i64) -> String {
    format!("{}/{}/read", NOTIFICATIONS_PATH, id)
}

pub fn render_notification_item(item: &NotificationItem) -> String {
    let background = if item.read { "" } else { " bg-indigo-50" };
    format!(
        r#"<a href="{href}" class="flex items-start px-4 py-3 hover:bg-gray-50 border-b border-gray-100{background}" data-notification="{id}" data-read="{read}"><i class="fas {glyph} {color} mt-1 ml-3"></i><div class="flex-1 min-w-0"><p class="text-sm text-gray-800">{title}</p><p class="text-xs text-gray-500 mt-1">{label}</p></div></a>"#,
        href = notification_read_path(item.id),
        id = item.id,
        read = item.read,
        glyph = html_escape(&item.icon_glyph),
        color = html_escape(&item.icon_color),
        title = html_escape(&item.title),
        label = html_escape(&item.timestamp_label),
    )
}

fn render_notifications_menu(view: &HeaderView<'_>) -> String {
    let items = if view.notifications.is_empty() {
        r#"<p class="px-4 py-6 text-center text-sm text-gray-500" data-empty>لا توجد إشعارات</p>"#
            .to_string()
    } else {
        view.notifications
            .iter()
            .map(render_notification_item)
            .collect()
    };

    format!(
        r#"<div class="relative" data-dropdown="notifications">
<button type="button" class="relative p-1 rounded-full text-gray-400 hover:text-gray-500 focus:outline-none focus:ring-2 focus:ring-indigo-500" aria-label="الإشعارات" aria-haspopup="true" aria-expanded="false" data-dropdown-toggle><i class="fas fa-bell text-xl"></i>{badge}</button>
<div class="hidden origin-top-left absolute left-0 mt-2 w-80 rounded-md shadow-lg bg-white ring-1 ring-black ring-opacity-5 z-20" role="menu" data-dropdown-menu>
<div class="flex items-center justify-between px-4 py-3 border-b border-gray-200"><h3 class="text-sm font-semibold text-gray-900">الإشعارات</h3><a href="{mark_all}" class="text-xs text-indigo-600 hover:text-indigo-800">تعليم الكل كمقروء</a></div>
<div class="max-h-64 overflow-y-auto" data-notification-list>{items}</div>
<a href="{view_all}" class="block px-4 py-2 text-center text-sm font-medium text-indigo-600 hover:bg-gray-50">عرض جميع الإشعارات</a>
</div>
</div>"#,
        badge = render_badge(view.unread_count),
        mark_all = MARK_ALL_READ_PATH,
        view_all = NOTIFICATIONS_PATH,
    )
}

fn render_user_menu(user: &CurrentUser, branding: &BrandingConfig) -> String {
    let links = [
        MenuLink::internal(PROFILE_PATH, "fa-user", "الملف الشخصي"),
        MenuLink::internal(ACCOUNT_SETTINGS_PATH, "fa-cog", "إعدادات الحساب"),
        MenuLink {
            href: &branding.help_center_url,
            icon: "fa-question-circle",
            label: "مركز المساعدة",
            external: true,
        },
        MenuLink::logout(),
    ];

    format!(
        r#"<div class="relative" data-dropdown="user-menu">
<button type="button" class="flex items-center gap-2 max-w-xs rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500" aria-label="قائمة المستخدم" aria-haspopup="true" aria-expanded="false" data-dropdown-toggle>{avatar}<span class="hidden md:block text-sm font-medium text-gray-700" data-user-first-name>{first_name}</span><i class="fas fa-chevron-down text-xs text-gray-400"></i></button>
<div class="hidden origin-top-left absolute left-0 mt-2 w-48 rounded-md shadow-lg py-1 bg-white ring-1 ring-black ring-opacity-5 z-20" role="menu" data-dropdown-menu>{links}</div>
</div>"#,
        avatar = render_avatar(user, AvatarSize::Small),
        first_name = html_escape(&user.first_name),
        links = render_menu_links(&links),
    )
}

/// Render the header partial. Both menus start closed.
pub fn render_header(view: &HeaderView<'_>, branding: &BrandingConfig) -> String {
    format!(
        r#"<header class="relative z-10 flex-shrink-0 flex h-16 bg-white shadow" data-component="admin-header">
<div class="flex-1 px-4 flex justify-end">
<div class="flex items-center gap-4">
{notifications}
{user_menu}
</div>
</div>
</header>"#,
        notifications = render_notifications_menu(view),
        user_menu = render_user_menu(view.user, branding),
    )
}

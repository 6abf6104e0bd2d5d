//! Admin navigation model and the shared nav-list renderer.

use super::html_escape;

/// How a section's href is compared with the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Active only when the path equals the href.
    Exact,
    /// Active when the path starts with the href as a literal string
    /// prefix. `/admin/schools-archive` therefore matches `/admin/schools`.
    Prefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub key: &'static str,
    pub href: &'static str,
    /// Icon font class.
    pub icon: &'static str,
    pub label: &'static str,
    pub rule: MatchRule,
}

impl NavSection {
    pub fn is_active(&self, request_path: &str) -> bool {
        match self.rule {
            MatchRule::Exact => request_path == self.href,
            MatchRule::Prefix => request_path.starts_with(self.href),
        }
    }
}

pub const PROFILE_PATH: &str = "/admin/profile";
pub const SETTINGS_PATH: &str = "/admin/settings";
pub const ACCOUNT_SETTINGS_PATH: &str = "/admin/settings/account";
pub const NOTIFICATIONS_PATH: &str = "/admin/notifications";
pub const MARK_ALL_READ_PATH: &str = "/admin/notifications/mark-all-read";
pub const LOGOUT_PATH: &str = "/logout";

pub static NAV_SECTIONS: [NavSection; 7] = [
    NavSection {
        key: "dashboard",
        href: "/admin/dashboard",
        icon: "fa-tachometer-alt",
        label: "لوحة التحكم",
        rule: MatchRule::Exact,
    },
    NavSection {
        key: "schools",
        href: "/admin/schools",
        icon: "fa-school",
        label: "المدارس",
        rule: MatchRule::Prefix,
    },
    NavSection {
        key: "users",
        href: "/admin/users",
        icon: "fa-users",
        label: "المستخدمين",
        rule: MatchRule::Prefix,
    },
    NavSection {
        key: "subscriptions",
        href: "/admin/subscriptions",
        icon: "fa-credit-card",
        label: "الاشتراكات",
        rule: MatchRule::Prefix,
    },
    NavSection {
        key: "reports",
        href: "/admin/reports",
        icon: "fa-chart-bar",
        label: "التقارير",
        rule: MatchRule::Prefix,
    },
    NavSection {
        key: "settings",
        href: "/admin/settings",
        icon: "fa-cog",
        label: "الإعدادات",
        rule: MatchRule::Prefix,
    },
    NavSection {
        key: "logs",
        href: "/admin/logs",
        icon: "fa-history",
        label: "سجلات النظام",
        rule: MatchRule::Prefix,
    },
];

pub fn active_sections(request_path: &str) -> Vec<&'static NavSection> {
    NAV_SECTIONS
        .iter()
        .filter(|section| section.is_active(request_path))
        .collect()
}

/// Where a nav list is drawn. Only sizing differs between surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSurface {
    Desktop,
    SlideOver,
}

impl NavSurface {
    pub fn as_str(self) -> &'static str {
        match self {
            NavSurface::Desktop => "desktop",
            NavSurface::SlideOver => "slide-over",
        }
    }

    fn link_size(self) -> &'static str {
        match self {
            NavSurface::Desktop => "text-sm",
            NavSurface::SlideOver => "text-base",
        }
    }
}

const ACTIVE_CLASSES: &str = "bg-indigo-800 text-white";
const INACTIVE_CLASSES: &str = "text-indigo-100 hover:bg-indigo-600";

/// Render the navigation list for one surface.
pub fn render_nav_list(request_path: &str, surface: NavSurface) -> String {
    let mut html = format!(
        r#"<nav class="mt-5 flex-1 px-2 space-y-1" data-nav="{}">"#,
        surface.as_str()
    );
    for section in &NAV_SECTIONS {
        let active = section.is_active(request_path);
        let (state_classes, current) = if active {
            (ACTIVE_CLASSES, r#" aria-current="page""#)
        } else {
            (INACTIVE_CLASSES, "")
        };
        html.push_str(&format!(
            r#"<a href="{href}" class="group flex items-center px-2 py-2 {size} font-medium rounded-md {state_classes}" data-nav-item="{key}" data-active="{active}"{current}><i class="fas {icon} ml-3 flex-shrink-0 h-6 w-6 text-indigo-300"></i>{label}</a>"#,
            href = section.href,
            size = surface.link_size(),
            key = section.key,
            icon = section.icon,
            label = html_escape(section.label),
        ));
    }
    html.push_str("</nav>");
    html
}

/// Entry in a user dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink<'a> {
    pub href: &'a str,
    pub icon: &'static str,
    pub label: &'static str,
    /// Opens in a new browsing context.
    pub external: bool,
}

impl<'a> MenuLink<'a> {
    pub const fn internal(href: &'a str, icon: &'static str, label: &'static str) -> Self {
        Self {
            href,
            icon,
            label,
            external: false,
        }
    }

    pub const fn logout() -> Self {
        Self::internal(LOGOUT_PATH, "fa-sign-out-alt", "تسجيل الخروج")
    }
}

pub fn render_menu_links(links: &[MenuLink<'_>]) -> String {
    links
        .iter()
        .map(|link| {
            let target = if link.external {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(
                r#"<a href="{href}" class="flex items-center px-4 py-2 text-sm text-gray-700 hover:bg-gray-100" role="menuitem"{target}><i class="fas {icon} ml-2 w-4 text-gray-400"></i>{label}</a>"#,
                href = html_escape(link.href),
                icon = link.icon,
                label = html_escape(link.label),
            )
        })
        .collect()
}

//! Admin navigation: desktop sidebar, mobile top bar and mobile slide-over.
//!
//! The nav list and the user identity block come from shared renderers so
//! the desktop and mobile surfaces cannot drift apart.

use super::nav::{
    LOGOUT_PATH, MenuLink, NavSurface, PROFILE_PATH, SETTINGS_PATH, render_menu_links,
    render_nav_list,
};
use super::{AvatarSize, html_escape, render_avatar};
use crate::config::BrandingConfig;
use crate::types::CurrentUser;

pub const ROLE_LABEL: &str = "مدير المنصة";

/// Name shared by the slide-over and its opener.
const SLIDEOVER_NAME: &str = "mobile-nav";

#[derive(Debug, Clone, Copy)]
pub struct SidebarView<'a> {
    pub user: &'a CurrentUser,
    pub request_path: &'a str,
}

fn render_logo(branding: &BrandingConfig, size: &str) -> String {
    format!(
        r#"<img class="{size} w-auto" src="{src}" alt="{alt}">"#,
        src = html_escape(&branding.logo_light_url),
        alt = html_escape(&branding.app_name),
    )
}

/// Avatar, full name, role and logout, identical on every surface.
fn render_user_identity(user: &CurrentUser) -> String {
    format!(
        r#"<div class="flex-shrink-0 flex items-center justify-between border-t border-indigo-800 p-4" data-user-identity><div class="flex items-center">{avatar}<div class="mr-3"><p class="text-sm font-medium text-white">{name}</p><p class="text-xs font-medium text-indigo-200">{role}</p></div></div><a href="{logout}" class="text-indigo-200 hover:text-white" aria-label="تسجيل الخروج"><i class="fas fa-sign-out-alt"></i></a></div>"#,
        avatar = render_avatar(user, AvatarSize::Medium),
        name = html_escape(&user.full_name()),
        role = ROLE_LABEL,
        logout = LOGOUT_PATH,
    )
}

fn render_mobile_bar(view: &SidebarView<'_>, branding: &BrandingConfig) -> String {
    let links = [
        MenuLink::internal(PROFILE_PATH, "fa-user", "الملف الشخصي"),
        MenuLink::internal(SETTINGS_PATH, "fa-cog", "الإعدادات"),
        MenuLink::logout(),
    ];

    format!(
        r#"<div class="md:hidden flex items-center justify-between h-16 px-4 bg-indigo-700" data-mobile-bar>
<button type="button" class="text-indigo-200 hover:text-white focus:outline-none" aria-label="فتح القائمة" aria-expanded="false" data-slideover-open="{slideover}"><i class="fas fa-bars text-xl"></i></button>
<a href="/admin/dashboard" class="flex-1 flex justify-center">{logo}</a>
<div class="relative" data-dropdown="mobile-user-menu">
<button type="button" class="flex rounded-full focus:outline-none focus:ring-2 focus:ring-white" aria-label="قائمة المستخدم" aria-haspopup="true" aria-expanded="false" data-dropdown-toggle>{avatar}</button>
<div class="hidden origin-top-left absolute left-0 mt-2 w-48 rounded-md shadow-lg py-1 bg-white ring-1 ring-black ring-opacity-5 z-30" role="menu" data-dropdown-menu>{links}</div>
</div>
</div>"#,
        slideover = SLIDEOVER_NAME,
        logo = render_logo(branding, "h-8"),
        avatar = render_avatar(view.user, AvatarSize::Small),
        links = render_menu_links(&links),
    )
}

fn render_slideover(view: &SidebarView<'_>, branding: &BrandingConfig) -> String {
    format!(
        r#"<div class="hidden fixed inset-0 flex z-40 md:hidden" role="dialog" aria-modal="true" data-slideover="{slideover}">
<div class="fixed inset-0 bg-gray-600 bg-opacity-75" aria-hidden="true" data-slideover-backdrop></div>
<div class="relative flex-1 flex flex-col max-w-xs w-full bg-indigo-700" data-slideover-panel>
<div class="absolute top-0 left-0 -ml-12 pt-2"><button type="button" class="flex items-center justify-center h-10 w-10 rounded-full text-white focus:outline-none focus:ring-2 focus:ring-inset focus:ring-white" aria-label="إغلاق القائمة" data-slideover-close><i class="fas fa-times"></i></button></div>
<div class="flex-1 h-0 pt-5 pb-4 overflow-y-auto"><div class="flex-shrink-0 flex items-center px-4">{logo}</div>{nav}</div>
{identity}
</div>
</div>"#,
        slideover = SLIDEOVER_NAME,
        logo = render_logo(branding, "h-8"),
        nav = render_nav_list(view.request_path, NavSurface::SlideOver),
        identity = render_user_identity(view.user),
    )
}

fn render_desktop(view: &SidebarView<'_>, branding: &BrandingConfig) -> String {
    format!(
        r#"<aside class="hidden md:flex md:w-64 md:flex-col md:fixed md:inset-y-0 md:right-0" data-desktop-sidebar>
<div class="flex-1 flex flex-col min-h-0 bg-indigo-700">
<div class="flex-1 flex flex-col pt-5 pb-4 overflow-y-auto"><div class="flex items-center flex-shrink-0 px-4">{logo}</div>{nav}</div>
{identity}
</div>
</aside>"#,
        logo = render_logo(branding, "h-10"),
        nav = render_nav_list(view.request_path, NavSurface::Desktop),
        identity = render_user_identity(view.user),
    )
}

/// Render all three navigation surfaces under one component root.
pub fn render_sidebar(view: &SidebarView<'_>, branding: &BrandingConfig) -> String {
    format!(
        r#"<div data-component="admin-sidebar">
{mobile_bar}
{slideover}
{desktop}
</div>"#,
        mobile_bar = render_mobile_bar(view, branding),
        slideover = render_slideover(view, branding),
        desktop = render_desktop(view, branding),
    )
}

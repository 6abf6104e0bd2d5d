//! Server-rendered views.
//!
//! Every view is a plain function from explicit inputs to an HTML string.
//! Nothing here reads ambient request or session state. Client-side
//! behavior is attached through `data-*` attributes bound by
//! [`script::INTERACTION_SCRIPT`], scoped per `data-component` root.

pub mod flash;
pub mod header;
pub mod layout;
pub mod login;
pub mod nav;
pub mod pages;
pub mod script;
pub mod sidebar;

pub use header::{HeaderView, badge_label, render_header};
pub use layout::{AdminPage, render_admin_page};
pub use login::{LoginView, render_login};
pub use nav::{MatchRule, NAV_SECTIONS, NavSection, active_sections};
pub use sidebar::{SidebarView, render_sidebar};

use crate::config::BrandingConfig;
use crate::types::{CurrentUser, FlashMessage};
use chrono::Datelike;

/// Request-scoped inputs shared by the admin shell.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub user: CurrentUser,
    pub request_path: String,
    pub flash: Option<FlashMessage>,
    pub branding: BrandingConfig,
}

impl RenderContext {
    pub fn new(user: CurrentUser, request_path: impl Into<String>, branding: BrandingConfig) -> Self {
        Self {
            user,
            request_path: request_path.into(),
            flash: None,
            branding,
        }
    }

    pub fn with_flash(mut self, flash: Option<FlashMessage>) -> Self {
        self.flash = flash;
        self
    }
}

/// Escape text for use in HTML content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Current calendar year, local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    Medium,
}

impl AvatarSize {
    fn classes(self) -> &'static str {
        match self {
            AvatarSize::Small => "h-8 w-8 text-sm",
            AvatarSize::Medium => "h-10 w-10 text-base",
        }
    }
}

/// Profile picture when set, otherwise the initials badge.
pub fn render_avatar(user: &CurrentUser, size: AvatarSize) -> String {
    let classes = size.classes();
    match user.picture_url() {
        Some(url) => format!(
            r#"<img class="{classes} rounded-full object-cover" src="{src}" alt="{alt}" data-avatar="image">"#,
            src = html_escape(url),
            alt = html_escape(&user.full_name()),
        ),
        None => format!(
            r#"<span class="{classes} rounded-full bg-indigo-500 text-white font-semibold inline-flex items-center justify-center" data-avatar="initials">{}</span>"#,
            html_escape(&user.initials())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(html_escape("مرحبا"), "مرحبا");
    }

    #[test]
    fn test_avatar_initials_fallback() {
        let html = render_avatar(&CurrentUser::new("Ahmed", "Ali"), AvatarSize::Small);
        assert!(html.contains(r#"data-avatar="initials">AA</span>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_avatar_image() {
        let user = CurrentUser::new("Ahmed", "Ali").with_picture("/media/p.png?a=1&b=2");
        let html = render_avatar(&user, AvatarSize::Medium);
        assert!(html.contains(r#"src="/media/p.png?a=1&amp;b=2""#));
        assert!(html.contains(r#"alt="Ahmed Ali""#));
        assert!(html.contains("h-10 w-10"));
    }

    #[test]
    fn test_avatar_empty_names() {
        let html = render_avatar(&CurrentUser::new("", ""), AvatarSize::Small);
        assert!(html.contains(r#"data-avatar="initials"></span>"#));
    }
}

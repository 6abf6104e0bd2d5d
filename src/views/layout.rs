//! Full admin document composing the sidebar, header and page body.

use super::flash::render_optional_flash;
use super::header::{HeaderView, render_header};
use super::script::render_script_tag;
use super::sidebar::{SidebarView, render_sidebar};
use super::{RenderContext, html_escape};
use crate::types::NotificationItem;

#[derive(Debug, Clone, Copy)]
pub struct AdminPage<'a> {
    pub title: &'a str,
    /// Pre-rendered HTML for the main column.
    pub body: &'a str,
}

pub fn render_admin_page(
    ctx: &RenderContext,
    unread_count: u32,
    notifications: &[NotificationItem],
    page: &AdminPage<'_>,
) -> String {
    let sidebar = render_sidebar(
        &SidebarView {
            user: &ctx.user,
            request_path: &ctx.request_path,
        },
        &ctx.branding,
    );
    let header = render_header(
        &HeaderView {
            user: &ctx.user,
            unread_count,
            notifications,
        },
        &ctx.branding,
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - {app_name}</title>
<link rel="stylesheet" href="{stylesheet}">
<link rel="stylesheet" href="{icon_font}">
</head>
<body class="bg-gray-100">
{sidebar}
<div class="md:pr-64 flex flex-col flex-1">
{header}
<main class="flex-1 py-6 px-4 sm:px-6 md:px-8">
{flash}{body}
</main>
</div>
{script}
</body>
</html>"#,
        title = html_escape(page.title),
        app_name = html_escape(&ctx.branding.app_name),
        stylesheet = html_escape(&ctx.branding.stylesheet_url),
        icon_font = html_escape(&ctx.branding.icon_font_url),
        flash = render_optional_flash(ctx.flash.as_ref()),
        body = page.body,
        script = render_script_tag(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrandingConfig;
    use crate::types::{CurrentUser, FlashMessage};

    fn ctx(path: &str) -> RenderContext {
        RenderContext::new(CurrentUser::new("Ahmed", "Ali"), path, BrandingConfig::default())
    }

    #[test]
    fn test_composes_partials_once() {
        let html = render_admin_page(
            &ctx("/admin/reports"),
            2,
            &[],
            &AdminPage {
                title: "التقارير",
                body: "<section data-page>body</section>",
            },
        );
        assert_eq!(html.matches(r#"data-component="admin-sidebar""#).count(), 1);
        assert_eq!(html.matches(r#"data-component="admin-header""#).count(), 1);
        assert_eq!(html.matches("<script>").count(), 1);
        assert!(html.contains("<section data-page>body</section>"));
        assert!(html.contains("data-badge>2</span>"));
        assert!(html.contains(r#"data-nav-item="reports" data-active="true""#));
    }

    #[test]
    fn test_flash_from_context() {
        let with_flash = ctx("/admin/dashboard").with_flash(Some(FlashMessage::success("تم")));
        let page = AdminPage {
            title: "t",
            body: "",
        };
        assert!(render_admin_page(&with_flash, 0, &[], &page).contains(r#"data-flash="success""#));
        assert!(!render_admin_page(&ctx("/admin/dashboard"), 0, &[], &page).contains("data-flash="));
    }
}

//! Render subcommand: print one view to stdout.
//!
//! Partials get the interaction script appended so the output can be
//! opened directly in a browser.

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::db::{Database, now_ms};
use crate::types::{CurrentUser, FlashMessage};
use crate::views::script::render_script_tag;
use crate::views::{HeaderView, LoginView, SidebarView, render_header, render_login, render_sidebar};

/// Which view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    /// Full login page
    Login,
    /// Admin header partial
    Header,
    /// Admin sidebar partial
    Sidebar,
}

/// Arguments for the render subcommand
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// View to render
    #[arg(value_enum)]
    pub view: ViewKind,

    /// Request path used for active navigation highlighting
    #[arg(long, default_value = "/admin/dashboard")]
    pub path: String,

    /// Show the session-expired banner (login only)
    #[arg(long)]
    pub expired: bool,

    /// Flash message in `kind:text` form (login only)
    #[arg(long, value_name = "MSG")]
    pub msg: Option<String>,

    /// Signed-in user's first name
    #[arg(long, default_value = "مدير")]
    pub first_name: String,

    /// Signed-in user's last name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Profile picture URL (initials are shown when omitted)
    #[arg(long, value_name = "URL")]
    pub picture: Option<String>,
}

impl RenderArgs {
    fn user(&self) -> CurrentUser {
        let user = CurrentUser::new(&self.first_name, &self.last_name);
        match &self.picture {
            Some(url) => user.with_picture(url),
            None => user,
        }
    }
}

/// Render the requested view. The header reads notifications from `db`
/// when one is given and shows an empty bell otherwise.
pub fn run_render(args: &RenderArgs, config: &Config, db: Option<&Database>) -> Result<String> {
    let branding = &config.branding;
    let html = match args.view {
        ViewKind::Login => {
            let flash = args.msg.as_deref().and_then(FlashMessage::parse);
            render_login(&LoginView::now(args.expired, flash), branding)
        }
        ViewKind::Header => {
            let user = args.user();
            let (unread_count, notifications) = match db {
                Some(db) => (
                    db.unread_notification_count()?,
                    db.recent_notifications(config.notifications.dropdown_limit, now_ms())?,
                ),
                None => (0, Vec::new()),
            };
            let view = HeaderView {
                user: &user,
                unread_count,
                notifications: &notifications,
            };
            format!("{}\n{}", render_header(&view, branding), render_script_tag())
        }
        ViewKind::Sidebar => {
            let user = args.user();
            let view = SidebarView {
                user: &user,
                request_path: &args.path,
            };
            format!("{}\n{}", render_sidebar(&view, branding), render_script_tag())
        }
    };
    Ok(html)
}

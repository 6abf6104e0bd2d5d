//! axum router and handlers for the admin panel.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::auth::user_from_headers;
use crate::config::Config;
use crate::db::{Database, now_ms};
use crate::error::{PanelError, PanelResult};
use crate::types::{CurrentUser, FlashMessage, NotificationItem};
use crate::views::nav::{MARK_ALL_READ_PATH, NOTIFICATIONS_PATH};
use crate::views::pages::{page_title, render_notifications_body, render_section_body};
use crate::views::{AdminPage, LoginView, RenderContext, render_admin_page, render_login};

const DASHBOARD_PATH: &str = "/admin/dashboard";
const EXPIRED_LOGIN_PATH: &str = "/login?expired=1";

/// Server state shared across handlers.
#[derive(Clone)]
pub struct PanelServer {
    db: Arc<Database>,
    config: Arc<Config>,
}

impl PanelServer {
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Unread count and dropdown items. Store failures degrade to an
    /// empty bell rather than failing the page.
    fn header_notifications(&self) -> (u32, Vec<NotificationItem>) {
        let limit = self.config.notifications.dropdown_limit;
        let count = self.db.unread_notification_count().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to count unread notifications");
            0
        });
        let items = self
            .db
            .recent_notifications(limit, now_ms())
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load header notifications");
                Vec::new()
            });
        (count, items)
    }

    fn render_shell(
        &self,
        user: CurrentUser,
        request_path: &str,
        flash: Option<FlashMessage>,
        body: &str,
    ) -> Html<String> {
        let (unread, items) = self.header_notifications();
        let ctx = RenderContext::new(user, request_path, self.config.branding.clone())
            .with_flash(flash);
        let page = AdminPage {
            title: page_title(request_path),
            body,
        };
        Html(render_admin_page(&ctx, unread, &items, &page))
    }
}

/// Query parameters understood by every page.
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    expired: Option<String>,
    /// Flash message in `kind:text` form.
    msg: Option<String>,
}

impl PageQuery {
    fn session_expired(&self) -> bool {
        matches!(self.expired.as_deref(), Some("1" | "true" | "yes"))
    }

    fn flash(&self) -> Option<FlashMessage> {
        self.msg.as_deref().and_then(FlashMessage::parse)
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

fn login_redirect() -> Response {
    Redirect::to(EXPIRED_LOGIN_PATH).into_response()
}

fn path_with_flash(path: &str, flash: &FlashMessage) -> String {
    format!(
        "{}?msg={}",
        path,
        urlencoding::encode(&flash.to_query_value())
    )
}

/// Path of the admin page that linked here, without query or fragment.
fn referer_admin_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(header::REFERER)?.to_str().ok()?;
    let path = match referer.find("://") {
        Some(idx) => {
            let rest = &referer[idx + 3..];
            &rest[rest.find('/')?..]
        }
        None => referer,
    };
    let path = path.split(['?', '#']).next().unwrap_or(path);
    (path.starts_with("/admin/") && !path.starts_with(MARK_ALL_READ_PATH))
        .then(|| path.to_string())
}

fn parse_notification_id(raw: &str) -> PanelResult<i64> {
    raw.parse::<i64>().map_err(|e| {
        PanelError::invalid_value("id", format!("{raw:?} is not a notification id: {e}"))
    })
}

async fn root() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

async fn login_page(
    State(state): State<PanelServer>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let view = LoginView::now(query.session_expired(), query.flash());
    Html(render_login(&view, &state.config.branding))
}

/// Any `/admin/...` page without a dedicated handler.
async fn admin_page(
    State(state): State<PanelServer>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let Some(user) = user_from_headers(&headers) else {
        debug!(path = %uri.path(), "No forwarded user, redirecting to login");
        return login_redirect();
    };
    let body = render_section_body(uri.path());
    state
        .render_shell(user, uri.path(), query.flash(), &body)
        .into_response()
}

async fn notifications_page(
    State(state): State<PanelServer>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> PanelResult<Response> {
    let Some(user) = user_from_headers(&headers) else {
        return Ok(login_redirect());
    };
    let items = state
        .db
        .recent_notifications(state.config.notifications.page_limit, now_ms())?;
    let unread = state.db.unread_notification_count()?;
    let body = render_notifications_body(&items, unread);
    Ok(state
        .render_shell(user, NOTIFICATIONS_PATH, query.flash(), &body)
        .into_response())
}

async fn mark_all_read(
    State(state): State<PanelServer>,
    headers: HeaderMap,
) -> PanelResult<Response> {
    if user_from_headers(&headers).is_none() {
        return Ok(login_redirect());
    }
    let changed = state.db.mark_all_notifications_read(now_ms())?;
    info!(changed, "Marked all notifications as read");

    let back = referer_admin_path(&headers).unwrap_or_else(|| DASHBOARD_PATH.to_string());
    let flash = FlashMessage::success("تم تعليم جميع الإشعارات كمقروءة");
    Ok(Redirect::to(&path_with_flash(&back, &flash)).into_response())
}

async fn mark_one_read(
    State(state): State<PanelServer>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> PanelResult<Response> {
    if user_from_headers(&headers).is_none() {
        return Ok(login_redirect());
    }
    let id = parse_notification_id(&id)?;
    state.db.mark_notification_read(id, now_ms())?;
    debug!(id, "Marked notification as read");
    Ok(Redirect::to(NOTIFICATIONS_PATH).into_response())
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes.
pub fn build_router(state: PanelServer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/login", get(login_page))
        .route("/admin", get(root))
        .route(NOTIFICATIONS_PATH, get(notifications_page))
        .route(MARK_ALL_READ_PATH, get(mark_all_read))
        .route("/admin/notifications/{id}/read", get(mark_one_read))
        .route("/admin/{*rest}", get(admin_page))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A running server started by [`start_server`].
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal graceful shutdown and wait for the server task to end.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            warn!(error = %e, "Server task ended abnormally");
        }
    }
}

/// Bind `addr` and serve in a background task.
pub async fn start_server(state: PanelServer, addr: SocketAddr) -> anyhow::Result<ServerHandle> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("Admin panel listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Admin panel shutting down");
            })
            .await
        {
            tracing::error!("Admin panel server error: {}", e);
        }
    });

    Ok(ServerHandle {
        addr: bound_addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

/// Serve until Ctrl-C.
pub async fn serve(config: Config, db: Database) -> anyhow::Result<()> {
    let addr = config.server.socket_addr();
    let handle = start_server(PanelServer::new(db, config), addr).await?;
    tokio::signal::ctrl_c().await?;
    handle.shutdown().await;
    Ok(())
}

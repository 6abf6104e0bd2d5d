//! Integration tests for the HTTP server.
//!
//! Each test starts a server on an ephemeral port and talks plain
//! HTTP/1.1 to it over a TCP socket.

use edu_admin_views::config::Config;
use edu_admin_views::db::{Database, now_ms};
use edu_admin_views::types::NewNotification;
use edu_admin_views::web::{PanelServer, ServerHandle, start_server};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const USER_HEADERS: &str = "x-auth-first-name: %D8%A3%D8%AD%D9%85%D8%AF\r\nx-auth-last-name: Ali\r\n";

struct TestResponse {
    status: u16,
    head: String,
    body: String,
}

impl TestResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }
}

async fn start(db: Database) -> ServerHandle {
    let state = PanelServer::new(db, Config::default());
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    start_server(state, addr).await.expect("server should start")
}

async fn get(addr: SocketAddr, path: &str, extra_headers: &str) -> TestResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n{extra_headers}\r\n"
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    TestResponse {
        status,
        head: head.to_string(),
        body: body.to_string(),
    }
}

fn notification(title: &str) -> NewNotification {
    NewNotification {
        icon_glyph: "fa-school".to_string(),
        icon_color: "text-green-500".to_string(),
        title: title.to_string(),
    }
}

#[tokio::test]
async fn health_reports_version() {
    let server = start(Database::open_in_memory().unwrap()).await;
    let resp = get(server.addr(), "/api/health", "").await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains(r#""status":"healthy""#));
    assert!(resp.body.contains(env!("CARGO_PKG_VERSION")));
    server.shutdown().await;
}

#[tokio::test]
async fn login_page_shows_expired_banner_on_request() {
    let server = start(Database::open_in_memory().unwrap()).await;

    let plain = get(server.addr(), "/login", "").await;
    assert_eq!(plain.status, 200);
    assert!(plain.body.contains(r#"data-component="login""#));
    assert!(!plain.body.contains("data-session-expired"));

    let expired = get(server.addr(), "/login?expired=1&msg=error%3Abad", "").await;
    assert!(expired.body.contains("data-session-expired"));
    assert!(expired.body.contains(r#"data-flash="error""#));
    server.shutdown().await;
}

#[tokio::test]
async fn admin_without_user_redirects_to_login() {
    let server = start(Database::open_in_memory().unwrap()).await;
    let resp = get(server.addr(), "/admin/schools", "").await;
    assert_eq!(resp.status, 303);
    assert_eq!(resp.header("location"), Some("/login?expired=1"));
    server.shutdown().await;
}

#[tokio::test]
async fn admin_page_renders_shell_for_forwarded_user() {
    let db = Database::open_in_memory().unwrap();
    db.insert_notification(&notification("مدرسة جديدة"), now_ms()).unwrap();
    let server = start(db).await;

    let resp = get(server.addr(), "/admin/schools/7", USER_HEADERS).await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("أحمد"));
    assert!(resp.body.contains("data-badge>1</span>"));
    assert!(resp.body.contains("مدرسة جديدة"));
    assert_eq!(
        resp.body
            .matches(r#"data-nav-item="schools" data-active="true""#)
            .count(),
        2
    );
    server.shutdown().await;
}

#[tokio::test]
async fn mark_all_read_returns_to_referer_with_flash() {
    let db = Database::open_in_memory().unwrap();
    db.insert_notification(&notification("a"), now_ms()).unwrap();
    db.insert_notification(&notification("b"), now_ms()).unwrap();
    let server = start(db.clone()).await;

    let headers = format!("{USER_HEADERS}Referer: http://panel.local/admin/users?page=2\r\n");
    let resp = get(server.addr(), "/admin/notifications/mark-all-read", &headers).await;
    assert_eq!(resp.status, 303);
    let location = resp.header("location").unwrap();
    assert!(location.starts_with("/admin/users?msg=success%3A"));
    assert_eq!(db.unread_notification_count().unwrap(), 0);
    server.shutdown().await;
}

#[tokio::test]
async fn mark_one_read_unknown_id_is_not_found() {
    let server = start(Database::open_in_memory().unwrap()).await;
    let resp = get(server.addr(), "/admin/notifications/99/read", USER_HEADERS).await;
    assert_eq!(resp.status, 404);
    assert!(resp.body.contains("NOTIFICATION_NOT_FOUND"));
    server.shutdown().await;
}

#[tokio::test]
async fn notifications_page_lists_store() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert_notification(&notification("تقرير جاهز"), now_ms()).unwrap();
    let server = start(db.clone()).await;

    let resp = get(server.addr(), "/admin/notifications", USER_HEADERS).await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("(1 غير مقروء)"));

    let read = get(server.addr(), &format!("/admin/notifications/{id}/read"), USER_HEADERS).await;
    assert_eq!(read.status, 303);
    assert_eq!(read.header("location"), Some("/admin/notifications"));
    assert_eq!(db.unread_notification_count().unwrap(), 0);
    server.shutdown().await;
}

#[tokio::test]
async fn mark_one_read_non_numeric_id_is_json_error() {
    let server = start(Database::open_in_memory().unwrap()).await;
    let resp = get(server.addr(), "/admin/notifications/abc/read", USER_HEADERS).await;
    assert_eq!(resp.status, 400);
    assert!(resp.header("content-type").unwrap().starts_with("application/json"));
    assert!(resp.body.contains(r#""code":"INVALID_FIELD_VALUE""#));
    server.shutdown().await;
}

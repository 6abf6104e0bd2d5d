//! HTTP server for the admin panel.
//!
//! Serves the login page and the admin shell for every `/admin/...` path,
//! plus the notification actions linked from the header.

pub mod auth;
mod server;

pub use server::{PanelServer, ServerHandle, build_router, serve, start_server};

//! Educational Platform Admin Views
//!
//! Server-rendered login page and admin shell partials, the notification
//! store behind the header bell, and the HTTP surface that serves them.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod types;
pub mod views;
pub mod web;

//! edu-admin
//!
//! Admin panel views for the educational platform: login page, header
//! and sidebar, served over HTTP or rendered from the command line.

use anyhow::Result;
use clap::Parser;
use edu_admin_views::cli::notify::run_notify;
use edu_admin_views::cli::render::{ViewKind, run_render};
use edu_admin_views::cli::{Cli, Command};
use edu_admin_views::config::ConfigLoader;
use edu_admin_views::db::Database;
use edu_admin_views::web;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let mut loader = ConfigLoader::load(cli.config.as_deref().map(Path::new))?;
    if let Some(path) = loader.config_path() {
        debug!("Loaded config from {}", path.display());
    }

    // CLI flags override every config tier
    let config = loader.config_mut();
    if let Some(db_path) = &cli.database {
        config.server.db_path = db_path.into();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;
    let config = loader.into_config();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let db = Database::open(&config.server.db_path)?;
            info!("Notifications database: {}", config.server.db_path.display());
            web::serve(config, db).await
        }
        Command::Render(args) => {
            // Only the header reads the store, and only an existing one
            let db = if args.view == ViewKind::Header && config.server.db_path.exists() {
                Some(Database::open(&config.server.db_path)?)
            } else {
                None
            };
            let html = run_render(&args, &config, db.as_ref())?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
        Command::Notify(args) => {
            let db = Database::open(&config.server.db_path)?;
            let id = run_notify(&args, &db)?;
            info!(id, "Notification added");
            println!("{}", id);
            Ok(())
        }
    }
}

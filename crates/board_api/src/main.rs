//! The Community Board API program.
//!
//! The program also includes a [library](board_api_lib). Overall, it uses the [`board_lib`]
//! crate as a main dependency.

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use board_api_lib::configure;
use board_lib::Database;
use migration::MigratorTrait;
use mkenv::prelude::*;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// The main entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }
    board_api_lib::init_env()?;

    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let db = Database::from_db_url(board_api_lib::env().db_env.db_url.db_url.get()).await?;

    migration::Migrator::up(&db.sql_conn, None).await?;

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["accept", "content-type"])
            .max_age(3600);
        #[cfg(debug_assertions)]
        let cors = cors.allow_any_origin();
        #[cfg(not(debug_assertions))]
        let cors = cors.allowed_origin(&board_api_lib::env().host.host.get());

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::<configure::CustomRootSpanBuilder>::new())
            .configure(|cfg| configure::configure(cfg, db.clone()))
    })
    .bind(("0.0.0.0", board_api_lib::env().port.get()))
    .context("Cannot bind 0.0.0.0 address")?
    .run()
    .await
    .context("Cannot create actix-web server")?;

    Ok(())
}

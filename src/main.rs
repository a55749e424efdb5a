mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod models;
mod resource;
mod routes;
mod schema;
mod utils;
mod views;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use tracing::{error, info, warn};

use crate::config::Args;
use crate::db::memory_store::MemoryAlbumStore;
use crate::db::pg_store::PgAlbumStore;
use crate::db::{build_pool, AlbumStore};
use crate::resource::AlbumResource;

#[actix_web::get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    configure_logging();
    let args = Args::parse();

    let store: Arc<dyn AlbumStore> = if args.in_memory {
        warn!("Using the in-memory album store; nothing is persisted");
        Arc::new(MemoryAlbumStore::new())
    } else {
        match build_pool(&args.database_url, args.pool_size) {
            Ok(pool) => Arc::new(PgAlbumStore::new(pool)),
            Err(e) => {
                error!("Failed to create DB pool: {e}");
                return Err(std::io::Error::other(e));
            }
        }
    };

    let resource = web::Data::new(AlbumResource::new(store, args.resource_config()));
    let renderer = web::Data::from(args.views.renderer());

    info!(
        variant = ?args.variant,
        on_missing = ?args.on_missing,
        "Starting server on {}:{}",
        args.bind,
        args.port
    );

    let mut server = HttpServer::new(move || {
        let config = *resource.config();
        App::new()
            .wrap(Logger::default())
            .app_data(resource.clone())
            .app_data(renderer.clone())
            .service(health)
            .configure(move |cfg| routes::configure(cfg, &config))
    })
    .bind((args.bind.as_str(), args.port))?;

    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    server.run().await
}

mod config;
mod services;
mod store;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = config::Config::from_env().map_err(std::io::Error::other)?;

    // The store is built once here and injected into every handler, so the
    // backends stay swappable behind the same append/list contract.
    let store = store::connect(&config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    info!(
        "Server running at http://{}:{} ({} store)",
        config.host,
        config.port,
        config.backend.name()
    );

    HttpServer::new(move || {
        App::new()
            // The frontend is served from its own origin, so every origin,
            // method and header is let through.
            .wrap(Cors::permissive())
            .app_data(web::Data::from(store.clone()))
            .route("/", web::get().to(services::status::process))
            .service(services::stars::configure_routes())
            .service(services::confessions::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

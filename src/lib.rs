#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::mock::MockRouter;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::FixtureRepository;
#[cfg(feature = "server")]
use crate::routes::mock::intercept;

pub mod domain;
pub mod dto;
pub mod fixtures;
pub mod forms;
pub mod pagination;
pub mod repository;
pub mod ui;

#[cfg(feature = "server")]
pub mod mock;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod transport;

/// Scope the mock API is mounted under.
pub const API_SCOPE: &str = "/api";
/// Base URL used when no `api_base_url` is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let router = web::Data::new(MockRouter::new(
        FixtureRepository::new(),
        server_config.mock_latency(),
    ));

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving mock API on {}:{}{API_SCOPE} with {} ms latency",
        server_config.address,
        server_config.port,
        server_config.mock_latency_ms
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(web::scope(API_SCOPE).default_service(web::to(intercept::<FixtureRepository>)))
            .app_data(router.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

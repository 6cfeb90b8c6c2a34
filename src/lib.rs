//! Search backend for matching volunteers with animal shelters.
//!
//! Recruitments and animals are searched through typed criteria compiled
//! into [`search::Predicate`] trees, lowered to SQL by the Diesel repository
//! and returned as offset pages.

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod search;
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::animal::{find_animals, find_shelter_animals};
    use crate::routes::recruitment::{
        find_completed_recruitments, find_recruitments, find_shelter_recruitments,
    };

    /// Registers the `/api` scope on an Actix app.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/api")
                .service(find_recruitments)
                .service(find_shelter_recruitments)
                .service(find_completed_recruitments)
                .service(find_animals)
                .service(find_shelter_animals),
        );
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);
        let bind_address = (server_config.address.clone(), server_config.port);

        log::info!(
            "Listening on {}:{} (database {})",
            bind_address.0,
            bind_address.1,
            server_config.database_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .configure(configure)
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

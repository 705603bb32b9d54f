mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};

use application::user_service::UserService;
use data::user_repository::PostgresUserRepository;
use infrastructure::config::AppConfig;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use presentation::handlers;
use presentation::middleware::RequestTraceMiddleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");
    let pool = create_pool(&config.database_url)
        .await
        .expect("failed to connect to database");
    run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    let user_service = UserService::new(pool, Arc::new(PostgresUserRepository));

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTraceMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .app_data(web::Data::new(user_service.clone()))
            .service(handlers::user::scope())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

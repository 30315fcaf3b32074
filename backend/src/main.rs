mod config;
mod db;
mod fields;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let host = config::host();
    let port = config::port();

    if let Err(e) = db::init_schema() {
        error!("Database initialization failed: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
    }

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .service(services::fields::configure_routes())
            .service(services::quote::configure_routes())
            .service(services::orders::configure_routes())
    })
        .bind((host.as_str(), port))?
        .run()
        .await
}

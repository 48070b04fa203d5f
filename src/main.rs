use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use xefag_backend::config::AppConfig;
use xefag_backend::repositories::mongo::MongoOrderRepository;
use xefag_backend::repositories::unavailable::UnavailableOrderRepository;
use xefag_backend::repositories::OrderRepository;
use xefag_backend::routes;
use xefag_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cfg = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let state = AppState::with_store(open_store(cfg.mongo_uri.as_deref()).await);

    tracing::info!("Server running on port {}", cfg.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(("0.0.0.0", cfg.port))?
    .run()
    .await
}

/// Never fails: without a usable database the server still comes up and
/// every store-backed route answers with a server error.
async fn open_store(uri: Option<&str>) -> Arc<dyn OrderRepository> {
    let Some(uri) = uri else {
        tracing::error!("MongoDB connection error: MONGO_URI is not set");
        return Arc::new(UnavailableOrderRepository::new("MONGO_URI is not set"));
    };

    match MongoOrderRepository::connect(uri).await {
        Ok(repo) => {
            let pinger = repo.clone();
            actix_web::rt::spawn(async move {
                match pinger.init().await {
                    Ok(()) => tracing::info!("MongoDB connected"),
                    Err(e) => tracing::error!(error = %e, "MongoDB connection error"),
                }
            });
            Arc::new(repo)
        }
        Err(e) => {
            tracing::error!(error = %e, "MongoDB connection error");
            Arc::new(UnavailableOrderRepository::new(e.to_string()))
        }
    }
}

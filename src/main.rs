use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use attraction_recommender::config::{LoggingSettings, Settings};
use attraction_recommender::core::Recommender;
use attraction_recommender::routes::{self, handle_query_payload_error, AppState};
use attraction_recommender::services::DatasetStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting attraction recommender...");

    // Load datasets off the async workers; any failure aborts startup
    let data = settings.data.clone();
    let store = tokio::task::spawn_blocking(move || {
        DatasetStore::load(&data.attractions_path, &data.bookings_path)
    })
    .await
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
    .map_err(|e| {
        error!("Failed to load datasets: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!(
        "Loaded {} attractions and {} bookings for {} users",
        store.attraction_count(),
        store.booking_count(),
        store.user_count()
    );

    let recommender = Recommender::new(Arc::new(store));

    let app_state = AppState {
        recommender,
        default_top_n: settings.recommend.default_top_n,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} with {} workers", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

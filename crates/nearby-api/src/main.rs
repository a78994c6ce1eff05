use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use nearby_core::models::LandmarkCatalog;
use nearby_core::ports::PoiSource;
use nearby_discovery::{Explorer, ManualLocationService, PoiQueryPipeline};
use nearby_overpass::OverpassClient;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nearby_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nearby_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    let settings = config.nearby.search_settings();

    tracing::info!(
        port = config.port,
        endpoint = %settings.endpoint,
        radius_meters = settings.radius_meters,
        "Starting Nearby API server"
    );

    let landmarks = match &config.nearby.landmarks_file.value {
        Some(path) => LandmarkCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load landmarks from {}", path.display()))?,
        None => LandmarkCatalog::tashkent(),
    };

    let source: Arc<dyn PoiSource> =
        Arc::new(OverpassClient::new(settings.endpoint.clone(), settings.request_timeout)?);

    let state = Arc::new(AppState::new(
        Explorer::new(ManualLocationService::new(), landmarks)
            .with_watch_options(config.nearby.watch_options()),
        PoiQueryPipeline::new(source, settings),
    ));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await?;
    Ok(())
}

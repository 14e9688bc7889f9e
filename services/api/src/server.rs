use crate::cli::ServeArgs;
use crate::infra::{cors_layer, trace_layer, AppState};
use crate::routes::with_screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use identity_screen::config::AppConfig;
use identity_screen::error::AppError;
use identity_screen::screening::{OfacApiClient, ScreeningService};
use identity_screen::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.provider.api_key.is_none() {
        warn!("OFAC_API_KEY is not set; screening requests will fail until it is configured");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let provider = Arc::new(OfacApiClient::new(&config.provider));
    info!(endpoint = provider.endpoint(), "screening provider configured");
    let screening_service = Arc::new(ScreeningService::new(provider));

    let app = with_screening_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(trace_layer())
        .layer(cors_layer());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "identity screening proxy ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository, StaticListingProvider};
use crate::routes::{match_router, ApiContext};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use jobscout::config::AppConfig;
use jobscout::error::AppError;
use jobscout::telemetry;
use jobscout::workflows::matching::{JobMatchService, MatchConfig, QualityConfig};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let match_config = MatchConfig {
        fetch_timeout: config.fetch.query_timeout,
        quality: QualityConfig {
            max_posting_age_days: config.fetch.max_posting_age_days,
            ..QualityConfig::default()
        },
        ..MatchConfig::default()
    };

    // TODO: swap StaticListingProvider for the HTTP search-provider client
    // once its credentials land in deployment config.
    let context = Arc::new(ApiContext {
        matcher: JobMatchService::new(
            Arc::new(StaticListingProvider::with_sample_postings()),
            match_config,
        ),
        profiles: InMemoryProfileRepository::default(),
    });

    let app = match_router(context)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job feed service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

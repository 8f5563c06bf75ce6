use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loc_compass::assessment::AssessmentPage;
use loc_compass::config::AppConfig;
use loc_compass::error::AppError;
use loc_compass::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{
    default_chart_renderer, load_career_catalog, load_string_bundle, AppState,
};
use crate::routes::with_assessment_routes;

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

    let bundle = load_string_bundle(&config.content)?;
    let catalog = load_career_catalog(&config.content)?;
    let page = Arc::new(Mutex::new(AssessmentPage::new(
        bundle,
        catalog,
        default_chart_renderer(),
    )));

    let app = with_assessment_routes(page)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "competency self-assessment ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use std::rc::Rc;

use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::application::{ChartAdapter, Dashboard, DashboardConfig, RefreshScheduler, TickOutcome};
use crate::domain::chart::ChartKind;
use crate::domain::errors::DashboardError;
use crate::domain::logging::LogComponent;
use crate::global_state::RunningDashboard;
use crate::infrastructure::{
    dom::DomDisplay, http::HttpSnapshotFetcher, rendering::EChartsRenderer,
};

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod format_utils;
pub mod global_state;
pub mod infrastructure;

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
}

/// Bind both charts, run the first refresh and keep refreshing.
///
/// `config` is a plain object with any of the [`DashboardConfig`] fields;
/// `undefined` or `null` selects the defaults. Calling this again replaces
/// the running dashboard.
#[wasm_bindgen(js_name = startDashboard)]
pub fn start_dashboard(config: JsValue) -> Result<(), JsValue> {
    let config = decode_config(config)?;
    install_logging(&config);

    if let Some(previous) = global_state::take() {
        previous.shutdown();
        log_info!(LogComponent::Presentation("Startup"), "♻️ Replacing running dashboard");
    }

    log_info!(
        LogComponent::Presentation("Startup"),
        "🚀 Starting dashboard, snapshot at {}",
        config.snapshot_url
    );

    let hourly = EChartsRenderer::bind(&config.hourly_container, ChartKind::Hourly)
        .and_then(|renderer| ChartAdapter::create(renderer, ChartKind::Hourly))
        .map_err(to_js_error)?;
    let daily = EChartsRenderer::bind(&config.daily_container, ChartKind::Daily)
        .and_then(|renderer| ChartAdapter::create(renderer, ChartKind::Daily))
        .map_err(to_js_error)?;

    let dashboard = Dashboard::new(
        HttpSnapshotFetcher::new(config.snapshot_url.clone()),
        DomDisplay::new(),
        hourly,
        daily,
    )
    .map_err(to_js_error)?;
    let dashboard = Rc::new(dashboard);

    let weak = Rc::downgrade(&dashboard);
    let resize_listener = event_utils::on_window_resize(move || {
        if let Some(dashboard) = weak.upgrade() {
            dashboard.resize();
        }
    });

    let scheduler = RefreshScheduler::start(Rc::clone(&dashboard), config.refresh_interval());

    global_state::install(RunningDashboard {
        dashboard,
        scheduler,
        resize_listener: Some(resize_listener),
    });
    Ok(())
}

/// Run one refresh outside the timer.
///
/// Resolves to `true` when the snapshot was rendered and `false` when a
/// refresh was already in flight; rejects with the failure message.
#[wasm_bindgen(js_name = refreshNow)]
pub async fn refresh_now() -> Result<bool, JsValue> {
    let Some(dashboard) = global_state::dashboard() else {
        return Err(JsValue::from_str("dashboard not started"));
    };

    outcome_to_js(dashboard.tick().await)
}

// Failures were already logged by the dashboard
fn outcome_to_js(outcome: TickOutcome) -> Result<bool, JsValue> {
    match outcome {
        TickOutcome::Rendered => Ok(true),
        TickOutcome::Skipped => Ok(false),
        TickOutcome::Failed(error) => Err(JsValue::from_str(&error.to_string())),
    }
}

/// Stop the refresh timer and detach the resize listener.
#[wasm_bindgen(js_name = stopDashboard)]
pub fn stop_dashboard() {
    match global_state::take() {
        Some(running) => {
            running.shutdown();
            log_info!(LogComponent::Presentation("Shutdown"), "🛑 Dashboard stopped");
        }
        None => log_debug!(LogComponent::Presentation("Shutdown"), "nothing to stop"),
    }
}

#[wasm_bindgen(js_name = isDashboardRunning)]
pub fn is_dashboard_running() -> bool {
    global_state::is_running()
}

fn decode_config(config: JsValue) -> Result<DashboardConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(DashboardConfig::default());
    }
    config
        .into_serde::<DashboardConfig>()
        .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))
}

fn install_logging(config: &DashboardConfig) {
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(
        config.log_level(),
    )));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));
}

fn to_js_error(error: impl Into<DashboardError>) -> JsValue {
    let error: DashboardError = error.into();
    log_error!(LogComponent::Presentation("Dashboard"), "❌ {error}");
    JsValue::from_str(&error.to_string())
}

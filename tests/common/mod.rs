#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;

use market_volume_dashboard::application::{ChartAdapter, Dashboard};
use market_volume_dashboard::domain::chart::{ChartKind, ChartOption};
use market_volume_dashboard::domain::errors::{DashboardError, FetchError, RenderError};
use market_volume_dashboard::domain::market_data::{SignClass, Snapshot};
use market_volume_dashboard::infrastructure::dom::{DisplaySlot, DisplaySurface};
use market_volume_dashboard::infrastructure::http::SnapshotSource;
use market_volume_dashboard::infrastructure::rendering::ChartRenderer;

pub const PRODUCER_PAYLOAD: &str = r#"{
    "last_update": "2024-06-03 10:30:00",
    "hourly_data": [
        {"hour": "09:30", "total_volume": 100, "sh_index": 3080.5, "sh_change_pct": 0.35,
         "sz_index": 9420.1, "sz_change_pct": -0.12},
        {"hour": "10:30", "total_volume": 250, "sh_index": 3085.2, "sh_change_pct": 0.5,
         "sz_index": 9410.7, "sz_change_pct": -0.22}
    ],
    "daily_data": [
        {"date": "06-01", "total_volume": 5000},
        {"date": "06-02", "total_volume": 6000}
    ]
}"#;

pub fn producer_snapshot() -> Snapshot {
    Snapshot::from_json(PRODUCER_PAYLOAD).unwrap()
}

/// Hands out queued results; fails with a transport error once drained
#[derive(Default)]
pub struct ScriptedSource {
    queue: RefCell<VecDeque<Result<Snapshot, DashboardError>>>,
    calls: RefCell<usize>,
}

impl ScriptedSource {
    pub fn new(results: impl IntoIterator<Item = Result<Snapshot, DashboardError>>) -> Self {
        Self { queue: RefCell::new(results.into_iter().collect()), calls: RefCell::new(0) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl SnapshotSource for ScriptedSource {
    async fn fetch(&self) -> Result<Snapshot, DashboardError> {
        *self.calls.borrow_mut() += 1;
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".into()).into()))
    }
}

/// Suspends the first fetch until the paired sender fires
pub struct GatedSource {
    gate: RefCell<Option<oneshot::Receiver<Snapshot>>>,
}

impl GatedSource {
    pub fn new() -> (Self, oneshot::Sender<Snapshot>) {
        let (tx, rx) = oneshot::channel();
        (Self { gate: RefCell::new(Some(rx)) }, tx)
    }
}

impl SnapshotSource for GatedSource {
    async fn fetch(&self) -> Result<Snapshot, DashboardError> {
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| FetchError::Transport("gate dropped".into()).into()),
            None => Err(FetchError::Transport("gate already used".into()).into()),
        }
    }
}

/// Display surface recording every write
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub texts: HashMap<DisplaySlot, String>,
    pub classes: HashMap<DisplaySlot, SignClass>,
    pub writes: usize,
}

impl RecordingSurface {
    pub fn text(&self, slot: DisplaySlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_text(&mut self, slot: DisplaySlot, text: &str) {
        self.writes += 1;
        self.texts.insert(slot, text.to_string());
    }

    fn set_class(&mut self, slot: DisplaySlot, class: SignClass) {
        self.writes += 1;
        self.classes.insert(slot, class);
    }
}

/// Renderer keeping every option it was given
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub options: Vec<ChartOption>,
    pub resizes: usize,
    pub reject: bool,
    /// Accept this many options, then reject every later one
    pub accept_limit: Option<usize>,
    pub calls: usize,
}

impl RecordingRenderer {
    /// Accepts the option applied at creation only
    pub fn creation_only() -> Self {
        Self { accept_limit: Some(1), ..Default::default() }
    }
}

impl ChartRenderer for RecordingRenderer {
    fn set_option(&mut self, option: &ChartOption) -> Result<(), RenderError> {
        self.calls += 1;
        let over_limit = self.accept_limit.is_some_and(|limit| self.calls > limit);
        if self.reject || over_limit {
            return Err(RenderError::Rejected("renderer offline".into()));
        }
        self.options.push(option.clone());
        Ok(())
    }

    fn resize(&mut self) {
        self.resizes += 1;
    }
}

pub type TestDashboard<S> = Dashboard<S, RecordingSurface, RecordingRenderer>;

pub fn dashboard_with<S: SnapshotSource>(source: S) -> TestDashboard<S> {
    dashboard_with_renderers(source, RecordingRenderer::default(), RecordingRenderer::default())
}

pub fn dashboard_with_renderers<S: SnapshotSource>(
    source: S,
    hourly: RecordingRenderer,
    daily: RecordingRenderer,
) -> TestDashboard<S> {
    let hourly = ChartAdapter::create(hourly, ChartKind::Hourly).unwrap();
    let daily = ChartAdapter::create(daily, ChartKind::Daily).unwrap();
    Dashboard::new(source, RecordingSurface::default(), hourly, daily).unwrap()
}

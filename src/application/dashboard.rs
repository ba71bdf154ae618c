use std::cell::{Cell, Ref, RefCell};

use strum::Display as StrumDisplay;

use crate::{
    application::chart_adapter::ChartAdapter,
    domain::{
        chart::{ChartData, ChartKind, LabeledSeries, SeriesAligner},
        errors::{DashboardError, DashboardResult, RenderError},
        logging::{LogComponent, get_logger},
        market_data::{DerivedMetrics, MetricDeriver, Snapshot},
    },
    format_utils::{format_index, format_signed_percent, format_volume},
    infrastructure::{
        dom::{DisplaySlot, DisplaySurface},
        http::SnapshotSource,
        rendering::ChartRenderer,
    },
};

pub const LAST_UPDATE_PREFIX: &str = "最后更新时间: ";
pub const VOLUME_CHANGE_PREFIX: &str = "较昨日: ";

/// Phase of the refresh cycle.
///
/// `Idle -> Fetching -> Rendering -> Idle`, or `Fetching -> Failed -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum RefreshState {
    Idle,
    Fetching,
    Rendering,
    Failed,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Rendered,
    /// Logged and swallowed; displayed data stays as it was
    Failed(DashboardError),
    /// Another tick was still in flight
    Skipped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub rendered: u64,
    pub failed: u64,
    pub skipped: u64,
}

/// Fetch → derive/align → display pipeline with its two charts.
///
/// The charts are created once by the caller and only ever updated here.
/// All work runs on one thread; the fetch is the only suspension point.
pub struct Dashboard<S, D, R>
where
    S: SnapshotSource,
    D: DisplaySurface,
    R: ChartRenderer,
{
    source: S,
    surface: RefCell<D>,
    hourly: RefCell<ChartAdapter<R>>,
    daily: RefCell<ChartAdapter<R>>,
    aligner: SeriesAligner,
    deriver: MetricDeriver,
    state: Cell<RefreshState>,
    stats: Cell<RefreshStats>,
}

impl<S, D, R> Dashboard<S, D, R>
where
    S: SnapshotSource,
    D: DisplaySurface,
    R: ChartRenderer,
{
    pub fn new(
        source: S,
        surface: D,
        hourly: ChartAdapter<R>,
        daily: ChartAdapter<R>,
    ) -> Result<Self, RenderError> {
        if hourly.kind() != ChartKind::Hourly {
            return Err(RenderError::SeriesMismatch { kind: hourly.kind().into() });
        }
        if daily.kind() != ChartKind::Daily {
            return Err(RenderError::SeriesMismatch { kind: daily.kind().into() });
        }

        Ok(Self {
            source,
            surface: RefCell::new(surface),
            hourly: RefCell::new(hourly),
            daily: RefCell::new(daily),
            aligner: SeriesAligner::new(),
            deriver: MetricDeriver::new(),
            state: Cell::new(RefreshState::Idle),
            stats: Cell::new(RefreshStats::default()),
        })
    }

    pub fn state(&self) -> RefreshState {
        self.state.get()
    }

    pub fn stats(&self) -> RefreshStats {
        self.stats.get()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> Ref<'_, D> {
        self.surface.borrow()
    }

    pub fn hourly_chart(&self) -> Ref<'_, ChartAdapter<R>> {
        self.hourly.borrow()
    }

    pub fn daily_chart(&self) -> Ref<'_, ChartAdapter<R>> {
        self.daily.borrow()
    }

    /// Run one poll-fetch-render cycle.
    ///
    /// Never fails: errors are logged and reported as [`TickOutcome::Failed`].
    /// A tick arriving while another is in flight is skipped.
    pub async fn tick(&self) -> TickOutcome {
        if self.state.get() != RefreshState::Idle {
            get_logger().warn(
                LogComponent::Application("Dashboard"),
                &format!("⏭️ Tick skipped, previous cycle still {}", self.state.get()),
            );
            self.bump(|stats| stats.skipped += 1);
            return TickOutcome::Skipped;
        }

        self.state.set(RefreshState::Fetching);
        let result = match self.source.fetch().await {
            Ok(snapshot) => {
                self.state.set(RefreshState::Rendering);
                self.render(&snapshot)
            }
            Err(error) => Err(error),
        };

        match result {
            Ok(()) => {
                self.state.set(RefreshState::Idle);
                self.bump(|stats| stats.rendered += 1);
                TickOutcome::Rendered
            }
            Err(error) => {
                self.state.set(RefreshState::Failed);
                get_logger().error(
                    LogComponent::Application("Dashboard"),
                    &format!("❌ Refresh failed: {error}"),
                );
                self.bump(|stats| stats.failed += 1);
                self.state.set(RefreshState::Idle);
                TickOutcome::Failed(error)
            }
        }
    }

    /// Push one snapshot into both charts, then the indicator slots.
    ///
    /// All or nothing: when either chart rejects its option the hourly chart
    /// is put back on its previous option and no slot is written.
    pub fn render(&self, snapshot: &Snapshot) -> DashboardResult<()> {
        let aligned = self.aligner.align(&snapshot.hourly_data, &snapshot.yesterday_hourly_data);
        let daily = LabeledSeries::from_points(&snapshot.daily_data);
        let metrics = snapshot
            .latest_hourly()
            .map(|latest| self.deriver.derive(latest, &snapshot.daily_data));

        let hourly_option = self.hourly.borrow().prepare(ChartData::Paired(&aligned))?;
        let daily_option = self.daily.borrow().prepare(ChartData::Single(&daily))?;
        let previous_hourly = self.hourly.borrow().current_option().clone();

        self.hourly.borrow_mut().apply(hourly_option)?;
        if let Err(error) = self.daily.borrow_mut().apply(daily_option) {
            if let Err(rollback) = self.hourly.borrow_mut().apply(previous_hourly) {
                get_logger().warn(
                    LogComponent::Application("Dashboard"),
                    &format!("hourly chart could not be restored: {rollback}"),
                );
            }
            return Err(error.into());
        }

        self.apply_indicators(&snapshot.last_update, metrics.as_ref());

        get_logger().info(
            LogComponent::Application("Dashboard"),
            &format!(
                "✅ Rendered snapshot {} ({} hourly, {} daily)",
                snapshot.last_update,
                aligned.len(),
                daily.len()
            ),
        );
        Ok(())
    }

    /// Resize both charts; a no-op for a chart that is mid-update.
    pub fn resize(&self) {
        for chart in [&self.hourly, &self.daily] {
            match chart.try_borrow_mut() {
                Ok(mut adapter) => adapter.resize(),
                Err(_) => get_logger().debug(
                    LogComponent::Application("Dashboard"),
                    "resize ignored, chart busy",
                ),
            }
        }
    }

    fn apply_indicators(&self, last_update: &str, metrics: Option<&DerivedMetrics>) {
        let mut surface = self.surface.borrow_mut();
        surface.set_text(DisplaySlot::LastUpdate, &format!("{LAST_UPDATE_PREFIX}{last_update}"));

        let Some(metrics) = metrics else {
            get_logger().warn(
                LogComponent::Application("Dashboard"),
                "snapshot has no hourly data, indicators left unchanged",
            );
            return;
        };

        surface.set_text(DisplaySlot::TotalVolume, &format_volume(metrics.total_volume));

        surface.set_text(DisplaySlot::ShIndex, &format_index(metrics.sh_index));
        surface.set_text(DisplaySlot::ShChange, &format_signed_percent(metrics.sh_change.pct));
        surface.set_class(DisplaySlot::ShChange, metrics.sh_change.class);

        surface.set_text(DisplaySlot::SzIndex, &format_index(metrics.sz_index));
        surface.set_text(DisplaySlot::SzChange, &format_signed_percent(metrics.sz_change.pct));
        surface.set_class(DisplaySlot::SzChange, metrics.sz_change.class);

        if let Some(change) = metrics.volume_change {
            surface.set_text(
                DisplaySlot::VolumeChange,
                &format!("{VOLUME_CHANGE_PREFIX}{}", format_signed_percent(change.pct)),
            );
            surface.set_class(DisplaySlot::VolumeChange, change.class);
        }
    }

    fn bump(&self, f: impl FnOnce(&mut RefreshStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

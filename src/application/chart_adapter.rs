use crate::{
    domain::{
        chart::{AlignedSeries, ChartData, ChartKind, ChartOption, LabeledSeries, TooltipEntry, compose_tooltip},
        errors::RenderError,
        logging::{LogComponent, get_logger},
    },
    infrastructure::rendering::ChartRenderer,
};

/// Long-lived handle on one dashboard chart.
///
/// Created once; every refresh cycle calls [`ChartAdapter::update`] with new
/// data instead of rebuilding the chart.
pub struct ChartAdapter<R: ChartRenderer> {
    kind: ChartKind,
    renderer: R,
    current: ChartOption,
}

impl<R: ChartRenderer> ChartAdapter<R> {
    /// Apply the empty option of `kind` to a freshly bound renderer.
    pub fn create(mut renderer: R, kind: ChartKind) -> Result<Self, RenderError> {
        let current = ChartOption::empty(kind);
        renderer.set_option(&current)?;
        Ok(Self { kind, renderer, current })
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Last option handed to the renderer
    pub fn current_option(&self) -> &ChartOption {
        &self.current
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Validate `data` against this chart's shape and push it to the renderer.
    pub fn update(&mut self, data: ChartData<'_>) -> Result<(), RenderError> {
        let option = self.prepare(data)?;
        self.apply(option)
    }

    /// Build the option for `data` without touching the renderer.
    pub fn prepare(&self, data: ChartData<'_>) -> Result<ChartOption, RenderError> {
        match (self.kind, data) {
            (ChartKind::Hourly, ChartData::Paired(series)) => {
                Self::check_paired(series)?;
                Ok(ChartOption::hourly(series))
            }
            (ChartKind::Daily, ChartData::Single(series)) => {
                Self::check_single(series)?;
                Ok(ChartOption::daily(series))
            }
            (kind, _) => Err(RenderError::SeriesMismatch { kind: kind.into() }),
        }
    }

    /// Hand a prepared option to the renderer; `current_option` only changes
    /// once the renderer accepted it.
    pub fn apply(&mut self, option: ChartOption) -> Result<(), RenderError> {
        self.renderer.set_option(&option)?;
        get_logger().debug(
            LogComponent::Application("ChartAdapter"),
            &format!("{} chart updated with {} points", self.kind, option.x_axis.data.len()),
        );
        self.current = option;
        Ok(())
    }

    /// Safe at any time, including before the first update.
    pub fn resize(&mut self) {
        self.renderer.resize();
    }

    /// Tooltip markup for the label at `index` of the current data
    pub fn tooltip_at(&self, index: usize) -> Option<String> {
        let label = self.current.x_axis.data.get(index)?;
        let entries: Vec<TooltipEntry> = self
            .current
            .series
            .iter()
            .map(|series| TooltipEntry {
                series_name: series.name.to_string(),
                color: series.swatch_color().to_string(),
                value: series.data.get(index).copied().flatten(),
            })
            .collect();
        Some(compose_tooltip(label, &entries))
    }

    fn check_paired(series: &AlignedSeries) -> Result<(), RenderError> {
        if series.is_consistent() {
            Ok(())
        } else {
            Err(RenderError::LengthMismatch {
                labels: series.labels.len(),
                primary: series.primary.len(),
                reference: series.reference.len(),
            })
        }
    }

    fn check_single(series: &LabeledSeries) -> Result<(), RenderError> {
        if series.is_consistent() {
            Ok(())
        } else {
            Err(RenderError::LengthMismatch {
                labels: series.labels.len(),
                primary: series.values.len(),
                reference: 0,
            })
        }
    }
}

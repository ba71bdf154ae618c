use strum::{AsRefStr, Display as StrumDisplay, EnumIter, IntoStaticStr};

use crate::domain::market_data::SeriesPoint;

/// Which of the two dashboard charts an adapter drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr, IntoStaticStr, EnumIter)]
pub enum ChartKind {
    /// Intraday trend: current vs. reference session, paired lines
    #[strum(serialize = "hourly")]
    Hourly,
    /// Daily history: single bar series
    #[strum(serialize = "daily")]
    Daily,
}

impl ChartKind {
    /// Stable container id of the chart in the page
    pub fn default_container(&self) -> &'static str {
        match self {
            ChartKind::Hourly => "hourly-chart",
            ChartKind::Daily => "daily-chart",
        }
    }
}

/// Two value arrays sharing one label axis.
///
/// `labels`, `primary` and `reference` always have the same length; a `None`
/// reference marks a position the reference period has no sample for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedSeries {
    pub labels: Vec<String>,
    pub primary: Vec<f64>,
    pub reference: Vec<Option<f64>>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.primary.len() && self.labels.len() == self.reference.len()
    }
}

/// One value array on its own label axis
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LabeledSeries {
    pub fn from_points<P: SeriesPoint>(points: &[P]) -> Self {
        Self {
            labels: points.iter().map(|p| p.label().to_string()).collect(),
            values: points.iter().map(SeriesPoint::value).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.values.len()
    }
}

/// Data accepted by a chart adapter update
#[derive(Debug, Clone, Copy)]
pub enum ChartData<'a> {
    Paired(&'a AlignedSeries),
    Single(&'a LabeledSeries),
}

/// One row of an axis tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub series_name: String,
    pub color: String,
    pub value: Option<f64>,
}

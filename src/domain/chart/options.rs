//! Declarative renderer options for the two dashboard charts.
//!
//! Field names serialize to the option schema of the chart engine
//! (`xAxis`, `areaStyle`, ...). Formatter callbacks are not part of the
//! serialized option; the renderer installs them itself.

use serde::Serialize;

use crate::domain::chart::{AlignedSeries, ChartKind, LabeledSeries};

pub const TODAY_SERIES: &str = "今日成交额";
pub const YESTERDAY_SERIES: &str = "昨日成交额";
pub const DAILY_SERIES: &str = "成交额";
pub const VALUE_AXIS_NAME: &str = "成交额(亿元)";

pub const TODAY_COLOR: &str = "#409eff";
pub const YESTERDAY_COLOR: &str = "#e6a23c";
pub const DAILY_COLOR: &str = "#188df0";

const LABEL_COLOR: &str = "#666";
const AXIS_LINE_COLOR: &str = "#ddd";
const SPLIT_LINE_COLOR: &str = "#eee";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub tooltip: TooltipOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOption>,
    pub grid: GridOption,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub series: Vec<SeriesOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipOption {
    pub trigger: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOption {
    pub data: Vec<String>,
    pub right: &'static str,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOption {
    pub left: &'static str,
    pub right: &'static str,
    pub bottom: &'static str,
    pub contain_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub axis_type: &'static str,
    pub boundary_gap: bool,
    pub data: Vec<String>,
    pub axis_line: AxisLine,
    pub axis_label: AxisLabelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub axis_type: &'static str,
    pub name: &'static str,
    pub name_text_style: TextStyle,
    pub axis_line: AxisLine,
    pub axis_label: AxisLabelStyle,
    pub split_line: SplitLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub show: bool,
    pub line_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabelStyle {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub line_style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
    /// `None` serializes as `null`, which the engine draws as a gap
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<u32>,
    pub item_style: ItemStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<ItemStyle>,
}

impl SeriesOption {
    /// Solid color used for tooltip swatches
    pub fn swatch_color(&self) -> &str {
        match &self.item_style.color {
            Fill::Solid(color) => *color,
            Fill::Gradient(gradient) => gradient
                .color_stops
                .last()
                .map(|stop| stop.color)
                .unwrap_or(DAILY_COLOR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(&'static str),
    Gradient(LinearGradient),
}

/// Vertical gradient in the engine's plain-object form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    #[serde(rename = "type")]
    pub gradient_type: &'static str,
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    pub color_stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn vertical(stops: &[(f32, &'static str)]) -> Self {
        Self {
            gradient_type: "linear",
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 1.0,
            color_stops: stops.iter().map(|&(offset, color)| ColorStop { offset, color }).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f32,
    pub color: &'static str,
}

impl ChartOption {
    /// Option for `kind` with no data, applied when the chart is created
    pub fn empty(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Hourly => Self::hourly(&AlignedSeries::default()),
            ChartKind::Daily => Self::daily(&LabeledSeries::default()),
        }
    }

    /// Today as a filled line, the reference session as a plain line
    pub fn hourly(series: &AlignedSeries) -> Self {
        let today = SeriesOption {
            name: TODAY_SERIES,
            series_type: SeriesType::Line,
            data: series.primary.iter().copied().map(Some).collect(),
            smooth: Some(true),
            symbol: Some("circle"),
            symbol_size: Some(6),
            item_style: ItemStyle { color: Fill::Solid(TODAY_COLOR) },
            line_style: Some(LineStyle { width: 3 }),
            area_style: Some(ItemStyle {
                color: Fill::Gradient(LinearGradient::vertical(&[
                    (0.0, "rgba(64, 158, 255, 0.3)"),
                    (1.0, "rgba(64, 158, 255, 0.1)"),
                ])),
            }),
        };
        let yesterday = SeriesOption {
            name: YESTERDAY_SERIES,
            series_type: SeriesType::Line,
            data: series.reference.clone(),
            smooth: Some(true),
            symbol: Some("circle"),
            symbol_size: Some(6),
            item_style: ItemStyle { color: Fill::Solid(YESTERDAY_COLOR) },
            line_style: Some(LineStyle { width: 3 }),
            area_style: None,
        };

        Self {
            tooltip: TooltipOption { trigger: "axis" },
            legend: Some(LegendOption {
                data: vec![TODAY_SERIES.to_string(), YESTERDAY_SERIES.to_string()],
                right: "10%",
                text_style: TextStyle { color: LABEL_COLOR },
            }),
            grid: GridOption::default(),
            x_axis: CategoryAxis::new(series.labels.clone(), false, None),
            y_axis: ValueAxis::volume(),
            series: vec![today, yesterday],
        }
    }

    /// One bar per trading day
    pub fn daily(series: &LabeledSeries) -> Self {
        let bars = SeriesOption {
            name: DAILY_SERIES,
            series_type: SeriesType::Bar,
            data: series.values.iter().copied().map(Some).collect(),
            smooth: None,
            symbol: None,
            symbol_size: None,
            item_style: ItemStyle {
                color: Fill::Gradient(LinearGradient::vertical(&[
                    (0.0, "#83bff6"),
                    (0.5, DAILY_COLOR),
                    (1.0, DAILY_COLOR),
                ])),
            },
            line_style: None,
            area_style: None,
        };

        Self {
            tooltip: TooltipOption { trigger: "axis" },
            legend: None,
            grid: GridOption::default(),
            x_axis: CategoryAxis::new(series.labels.clone(), true, Some(45)),
            y_axis: ValueAxis::volume(),
            series: vec![bars],
        }
    }
}

impl Default for GridOption {
    fn default() -> Self {
        Self { left: "3%", right: "4%", bottom: "3%", contain_label: true }
    }
}

impl CategoryAxis {
    fn new(data: Vec<String>, boundary_gap: bool, rotate: Option<i32>) -> Self {
        Self {
            axis_type: "category",
            boundary_gap,
            data,
            axis_line: AxisLine { show: true, line_style: TextStyle { color: AXIS_LINE_COLOR } },
            axis_label: AxisLabelStyle { color: LABEL_COLOR, rotate },
        }
    }
}

impl ValueAxis {
    fn volume() -> Self {
        Self {
            axis_type: "value",
            name: VALUE_AXIS_NAME,
            name_text_style: TextStyle { color: LABEL_COLOR },
            axis_line: AxisLine { show: false, line_style: TextStyle { color: AXIS_LINE_COLOR } },
            axis_label: AxisLabelStyle { color: LABEL_COLOR, rotate: None },
            split_line: SplitLine { line_style: TextStyle { color: SPLIT_LINE_COLOR } },
        }
    }
}

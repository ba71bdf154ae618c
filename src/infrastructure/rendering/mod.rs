pub mod echarts_renderer;

pub use echarts_renderer::EChartsRenderer;

use crate::domain::{chart::ChartOption, errors::RenderError};

/// Charting engine bound to one container.
///
/// Implementations take a complete declarative option per call and own their
/// tooltip and value-axis formatting hooks.
pub trait ChartRenderer {
    fn set_option(&mut self, option: &ChartOption) -> Result<(), RenderError>;
    fn resize(&mut self);
}

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::chart::{AlignedSeries, TooltipEntry};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::SeriesPoint;
use crate::format_utils::{PLACEHOLDER, format_volume};

/// Pairs a current-period series with a reference-period series by ordinal
/// position. Labels always come from the primary series.
#[derive(Debug, Clone, Default)]
pub struct SeriesAligner;

impl SeriesAligner {
    pub fn new() -> Self {
        Self
    }

    /// Reference values past the end of `reference` become `None`; reference
    /// samples past the end of `primary` are dropped, since the label axis is
    /// capped to the primary length.
    pub fn align<P, R>(&self, primary: &[P], reference: &[R]) -> AlignedSeries
    where
        P: SeriesPoint,
        R: SeriesPoint,
    {
        if reference.len() > primary.len() {
            get_logger().debug(
                LogComponent::Domain("SeriesAligner"),
                &format!(
                    "reference series truncated: {} samples, {} on the label axis",
                    reference.len(),
                    primary.len()
                ),
            );
        }

        let labels = primary.iter().map(|p| p.label().to_string()).collect();
        let primary_values = primary.iter().map(SeriesPoint::value).collect();
        let reference_values = (0..primary.len())
            .map(|idx| reference.get(idx).map(SeriesPoint::value))
            .collect();

        AlignedSeries { labels, primary: primary_values, reference: reference_values }
    }
}

/// Axis tooltip markup: the hovered label in bold, then one row per series
/// with a round color swatch and the formatted volume.
pub fn compose_tooltip(axis_label: &str, entries: &[TooltipEntry]) -> String {
    let mut html = format!(
        r#"<div style="font-weight:bold;margin-bottom:5px;">{}</div>"#,
        encode_text(axis_label)
    );
    for entry in entries {
        let value = match entry.value {
            Some(v) if !v.is_nan() => format_volume(v),
            _ => PLACEHOLDER.to_string(),
        };
        html.push_str(&format!(
            r#"<div><span style="display:inline-block;margin-right:5px;border-radius:50%;width:10px;height:10px;background-color:{};"></span>{}: {}</div>"#,
            encode_double_quoted_attribute(&entry.color),
            encode_text(&entry.series_name),
            value
        ));
    }
    html
}

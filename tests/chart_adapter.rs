mod common;

use common::RecordingRenderer;
use market_volume_dashboard::application::ChartAdapter;
use market_volume_dashboard::domain::chart::{AlignedSeries, ChartData, ChartKind, LabeledSeries};
use market_volume_dashboard::domain::errors::RenderError;

fn today_vs_yesterday() -> AlignedSeries {
    AlignedSeries {
        labels: vec!["09:30".into(), "10:30".into()],
        primary: vec![100.0, 250.0],
        reference: vec![Some(90.0), None],
    }
}

#[test]
fn create_applies_empty_option() {
    let adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Daily).unwrap();
    assert_eq!(adapter.renderer().options.len(), 1);
    assert!(adapter.current_option().x_axis.data.is_empty());
    assert_eq!(adapter.tooltip_at(0), None);
}

#[test]
fn create_propagates_renderer_rejection() {
    let renderer = RecordingRenderer { reject: true, ..Default::default() };
    let err = ChartAdapter::create(renderer, ChartKind::Hourly).err().unwrap();
    assert!(matches!(err, RenderError::Rejected(_)));
}

#[test]
fn update_replaces_option_without_recreating() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Hourly).unwrap();
    adapter.update(ChartData::Paired(&today_vs_yesterday())).unwrap();
    adapter.update(ChartData::Paired(&AlignedSeries::default())).unwrap();

    assert_eq!(adapter.renderer().options.len(), 3);
    assert!(adapter.current_option().series[0].data.is_empty());
}

#[test]
fn hourly_chart_rejects_single_series() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Hourly).unwrap();
    let bars = LabeledSeries { labels: vec!["06-01".into()], values: vec![5000.0] };

    let err = adapter.update(ChartData::Single(&bars)).unwrap_err();
    assert_eq!(err, RenderError::SeriesMismatch { kind: "hourly" });
    assert_eq!(adapter.renderer().options.len(), 1);
}

#[test]
fn inconsistent_lengths_never_reach_renderer() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Hourly).unwrap();
    let mut series = today_vs_yesterday();
    series.reference.pop();

    let err = adapter.update(ChartData::Paired(&series)).unwrap_err();
    assert_eq!(err, RenderError::LengthMismatch { labels: 2, primary: 2, reference: 1 });
    assert_eq!(adapter.renderer().options.len(), 1);
}

#[test]
fn resize_before_first_update_is_harmless() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Daily).unwrap();
    adapter.resize();
    assert_eq!(adapter.renderer().resizes, 1);
}

#[test]
fn hourly_tooltip_lists_both_sessions() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Hourly).unwrap();
    adapter.update(ChartData::Paired(&today_vs_yesterday())).unwrap();

    insta::assert_snapshot!(adapter.tooltip_at(1).unwrap(), @r#"<div style="font-weight:bold;margin-bottom:5px;">10:30</div><div><span style="display:inline-block;margin-right:5px;border-radius:50%;width:10px;height:10px;background-color:#409eff;"></span>今日成交额: 250亿元</div><div><span style="display:inline-block;margin-right:5px;border-radius:50%;width:10px;height:10px;background-color:#e6a23c;"></span>昨日成交额: --</div>"#);
}

#[test]
fn option_serializes_with_gaps_and_camel_case_keys() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Hourly).unwrap();
    adapter.update(ChartData::Paired(&today_vs_yesterday())).unwrap();

    let json = serde_json::to_value(adapter.current_option()).unwrap();
    assert_eq!(json["xAxis"]["data"], serde_json::json!(["09:30", "10:30"]));
    assert_eq!(json["series"][1]["data"], serde_json::json!([90.0, null]));
    assert_eq!(json["series"][0]["type"], "line");
    assert!(json["series"][1].get("areaStyle").is_none());
    assert_eq!(json["yAxis"]["name"], "成交额(亿元)");
}

#[test]
fn daily_option_is_a_single_bar_series() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Daily).unwrap();
    let bars = LabeledSeries {
        labels: vec!["06-01".into(), "06-02".into()],
        values: vec![5000.0, 12000.0],
    };
    adapter.update(ChartData::Single(&bars)).unwrap();

    let json = serde_json::to_value(adapter.current_option()).unwrap();
    assert_eq!(json["series"].as_array().unwrap().len(), 1);
    assert_eq!(json["series"][0]["type"], "bar");
    assert_eq!(json["series"][0]["itemStyle"]["color"]["type"], "linear");
    assert!(json.get("legend").is_none());
    assert!(adapter.tooltip_at(1).unwrap().contains("成交额: 12,000亿元"));
}

#[test]
fn prepare_leaves_renderer_and_current_option_alone() {
    let adapter = ChartAdapter::create(RecordingRenderer::default(), ChartKind::Hourly).unwrap();
    let option = adapter.prepare(ChartData::Paired(&today_vs_yesterday())).unwrap();

    assert_eq!(option.x_axis.data, vec!["09:30", "10:30"]);
    assert_eq!(adapter.renderer().options.len(), 1);
    assert!(adapter.current_option().x_axis.data.is_empty());
}

#[test]
fn rejected_apply_keeps_previous_option() {
    let mut adapter = ChartAdapter::create(RecordingRenderer::creation_only(), ChartKind::Hourly).unwrap();
    let option = adapter.prepare(ChartData::Paired(&today_vs_yesterday())).unwrap();

    assert!(matches!(adapter.apply(option), Err(RenderError::Rejected(_))));
    assert!(adapter.current_option().x_axis.data.is_empty());
}

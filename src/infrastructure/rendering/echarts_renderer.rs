use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::HtmlElement;

use crate::{
    domain::{
        chart::{ChartKind, ChartOption, TooltipEntry, compose_tooltip},
        errors::RenderError,
        logging::{LogComponent, get_logger},
    },
    format_utils::{AxisLabel, format_axis_scale},
    infrastructure::rendering::ChartRenderer,
};

#[wasm_bindgen]
extern "C" {
    /// Instance returned by the global `echarts.init`
    pub type EChartsInstance;

    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &HtmlElement) -> Result<EChartsInstance, JsValue>;

    /// Disposes whatever instance is attached to `dom`
    #[wasm_bindgen(js_namespace = echarts, js_name = dispose)]
    fn dispose_attached(dom: &HtmlElement);

    #[wasm_bindgen(catch, method, js_name = setOption)]
    fn apply_option(this: &EChartsInstance, option: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn resize(this: &EChartsInstance);

    #[wasm_bindgen(method)]
    fn dispose(this: &EChartsInstance);

    #[wasm_bindgen(method, js_name = isDisposed)]
    fn is_disposed(this: &EChartsInstance) -> bool;
}

/// Renderer backed by the page-global ECharts library
pub struct EChartsRenderer {
    kind: ChartKind,
    instance: EChartsInstance,
    tooltip_formatter: Closure<dyn Fn(JsValue) -> String>,
    axis_formatter: Closure<dyn Fn(f64) -> JsValue>,
}

impl EChartsRenderer {
    /// Bind a new chart instance to the element with `container_id`.
    pub fn bind(container_id: &str, kind: ChartKind) -> Result<Self, RenderError> {
        let container = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(container_id))
            .ok_or_else(|| RenderError::ContainerNotFound(container_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| RenderError::Bind(format!("'{container_id}' is not an HTML element")))?;

        // Detach any instance left by an earlier start
        dispose_attached(&container);
        let instance = echarts_init(&container).map_err(|e| RenderError::Bind(format!("{e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("ECharts"),
            &format!("📊 Bound {kind} chart to #{container_id}"),
        );

        Ok(Self {
            kind,
            instance,
            tooltip_formatter: Closure::wrap(Box::new(tooltip_from_params) as Box<dyn Fn(JsValue) -> String>),
            axis_formatter: Closure::wrap(Box::new(axis_label_to_js) as Box<dyn Fn(f64) -> JsValue>),
        })
    }

    /// Serialize `option` and hook the Rust formatters into it
    fn to_js_option(&self, option: &ChartOption) -> Result<JsValue, RenderError> {
        let js_option =
            JsValue::from_serde(option).map_err(|e| RenderError::Rejected(e.to_string()))?;

        let tooltip = Reflect::get(&js_option, &"tooltip".into())
            .map_err(|e| RenderError::Rejected(format!("{e:?}")))?;
        Reflect::set(&tooltip, &"formatter".into(), self.tooltip_formatter.as_ref())
            .map_err(|e| RenderError::Rejected(format!("{e:?}")))?;

        let axis_label = Reflect::get(&js_option, &"yAxis".into())
            .and_then(|y_axis| Reflect::get(&y_axis, &"axisLabel".into()))
            .map_err(|e| RenderError::Rejected(format!("{e:?}")))?;
        Reflect::set(&axis_label, &"formatter".into(), self.axis_formatter.as_ref())
            .map_err(|e| RenderError::Rejected(format!("{e:?}")))?;

        Ok(js_option)
    }
}

impl ChartRenderer for EChartsRenderer {
    fn set_option(&mut self, option: &ChartOption) -> Result<(), RenderError> {
        let js_option = self.to_js_option(option)?;
        self.instance.apply_option(&js_option).map_err(|e| {
            RenderError::Rejected(format!("{} chart: {e:?}", self.kind))
        })
    }

    fn resize(&mut self) {
        self.instance.resize();
    }
}

impl Drop for EChartsRenderer {
    fn drop(&mut self) {
        if !self.instance.is_disposed() {
            self.instance.dispose();
        }
    }
}

fn axis_label_to_js(value: f64) -> JsValue {
    match format_axis_scale(value) {
        AxisLabel::Scaled(text) => JsValue::from_str(&text),
        AxisLabel::Raw(raw) => JsValue::from_f64(raw),
    }
}

// Axis-triggered params: one object per series at the hovered position
fn tooltip_from_params(params: JsValue) -> String {
    let items: Vec<JsValue> = if Array::is_array(&params) {
        Array::from(&params).iter().collect()
    } else {
        vec![params]
    };

    let field = |item: &JsValue, key: &str| Reflect::get(item, &key.into()).ok();

    let axis_label = items
        .first()
        .and_then(|item| field(item, "name"))
        .and_then(|name| name.as_string())
        .unwrap_or_default();

    let entries: Vec<TooltipEntry> = items
        .iter()
        .map(|item| TooltipEntry {
            series_name: field(item, "seriesName").and_then(|v| v.as_string()).unwrap_or_default(),
            // Gradient fills arrive as objects; fall back to their base tone
            color: field(item, "color")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| crate::domain::chart::DAILY_COLOR.to_string()),
            value: field(item, "value").and_then(|v| v.as_f64()),
        })
        .collect();

    compose_tooltip(&axis_label, &entries)
}

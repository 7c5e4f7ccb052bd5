use api::ChartSpec;
use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

use super::{ChartError, ChartHandle, ChartSurface, ChartTheme};

/// Draws charts with the page's global `Chart` constructor (Chart.js).
#[derive(Debug, Clone)]
pub struct ChartJsSurface {
    container_id: String,
}

impl ChartJsSurface {
    pub fn for_container(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }

    fn container(&self, document: &Document) -> Result<Element, ChartError> {
        document
            .get_element_by_id(&self.container_id)
            .ok_or(ChartError::Unavailable("chart container"))
    }
}

impl ChartSurface for ChartJsSurface {
    type Handle = ChartJsHandle;

    fn reset(&mut self) {
        if let Ok(document) = document() {
            if let Ok(container) = self.container(&document) {
                container.set_inner_html("");
            }
        }
    }

    fn mount(
        &mut self,
        index: usize,
        spec: &ChartSpec,
        theme: &ChartTheme,
    ) -> Result<ChartJsHandle, ChartError> {
        let document = document()?;
        let container = self.container(&document)?;

        let card = document.create_element("div").map_err(js_error)?;
        card.set_class_name("chart-card");
        card.set_attribute("data-chart-index", &index.to_string())
            .map_err(js_error)?;

        let title = document.create_element("h3").map_err(js_error)?;
        title.set_class_name("chart-card__title");
        title.set_text_content(Some(&spec.title));

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ChartError::Js("canvas cast failed".into()))?;

        card.append_child(&title).map_err(js_error)?;
        card.append_child(&canvas).map_err(js_error)?;
        container.append_child(&card).map_err(js_error)?;

        let config = JSON::parse(&theme.config_for(spec).to_string()).map_err(js_error);
        let chart = config.and_then(|config| construct_chart(&canvas, &config));
        match chart {
            Ok(chart) => Ok(ChartJsHandle { chart, card }),
            Err(err) => {
                card.remove();
                Err(err)
            }
        }
    }
}

/// A live `Chart` instance and the card it was mounted in.
pub struct ChartJsHandle {
    chart: JsValue,
    card: Element,
}

impl ChartHandle for ChartJsHandle {
    fn dispose(self) {
        if let Ok(destroy) = Reflect::get(&self.chart, &JsValue::from_str("destroy")) {
            if let Ok(destroy) = destroy.dyn_into::<Function>() {
                let _ = destroy.call0(&self.chart);
            }
        }
        self.card.remove();
    }
}

fn construct_chart(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsValue, ChartError> {
    let constructor: Function = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or(ChartError::Unavailable("Chart.js"))?;

    let args = Array::of2(canvas.as_ref(), config);
    Reflect::construct(&constructor, &args).map_err(js_error)
}

fn document() -> Result<Document, ChartError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ChartError::Unavailable("document"))
}

fn js_error(value: JsValue) -> ChartError {
    let message = value
        .as_string()
        .or_else(|| {
            Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string());
    ChartError::Js(message)
}

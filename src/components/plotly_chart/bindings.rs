use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::config::PlotConfig;
use crate::catalog::GraphPayload;

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(catch, js_namespace = Plotly, js_name = react)]
	fn plotly_react(root: &HtmlElement, figure: &JsValue) -> Result<js_sys::Promise, JsValue>;

	#[wasm_bindgen(catch, js_namespace = Plotly, js_name = purge)]
	fn plotly_purge(root: &HtmlElement) -> Result<(), JsValue>;
}

/// Argument of `Plotly.react(root, figure)`.
#[derive(Serialize)]
struct Figure<'a> {
	data: &'a [Value],
	layout: &'a Map<String, Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	frames: Option<&'a [Value]>,
	config: &'a PlotConfig,
}

fn figure<'a>(payload: &'a GraphPayload, config: &'a PlotConfig) -> Figure<'a> {
	Figure {
		data: &payload.data,
		layout: &payload.layout,
		frames: payload.frames.as_deref(),
		config,
	}
}

/// Draw `payload` into `root`, reusing the existing plot when there is one.
pub fn react(root: &HtmlElement, payload: &GraphPayload, config: &PlotConfig) -> Result<(), JsValue> {
	// Plain objects, not `Map`s: Plotly reads layout keys as properties.
	let figure = figure(payload, config)
		.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
		.map_err(JsValue::from)?;
	plotly_react(root, &figure).map(|_| ())
}

pub fn purge(root: &HtmlElement) -> Result<(), JsValue> {
	plotly_purge(root)
}

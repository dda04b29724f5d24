use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, warn};

use super::bindings;
use super::config::PlotConfig;
use crate::catalog::GraphPayload;

/// A Plotly chart filling its container. Redraws whenever `payload` changes;
/// a `None` payload leaves the current drawing alone.
#[component]
pub fn PlotlyChart(
	#[prop(into)] payload: Signal<Option<Arc<GraphPayload>>>,
	#[prop(optional)] config: PlotConfig,
) -> impl IntoView {
	let chart_ref = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |_| {
		let Some(root) = chart_ref.get() else {
			return;
		};
		let Some(payload) = payload.get() else {
			return;
		};
		if payload.is_animated() {
			debug!("drawing {} series with animation frames", payload.data.len());
		} else {
			debug!("drawing {} series", payload.data.len());
		}
		if let Err(err) = bindings::react(&root, &payload, &config) {
			warn!("Plotly.react failed: {err:?}");
		}
	});

	on_cleanup(move || {
		if let Some(root) = chart_ref.try_get_untracked().flatten() {
			if let Err(err) = bindings::purge(&root) {
				debug!("Plotly.purge failed: {err:?}");
			}
		}
	});

	view! {
		<div
			node_ref=chart_ref
			class="plotly-chart"
			style="width: 100%; height: 100%;"
		/>
	}
}

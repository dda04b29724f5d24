use serde::Serialize;

/// Plotly `config` object passed alongside every figure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotConfig {
	/// Redraw on container resize.
	pub responsive: bool,
	pub displaylogo: bool,
	#[serde(rename = "scrollZoom")]
	pub scroll_zoom: bool,
}

impl Default for PlotConfig {
	fn default() -> Self {
		Self {
			responsive: true,
			displaylogo: false,
			scroll_zoom: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn default_is_responsive() {
		let value = serde_json::to_value(PlotConfig::default()).unwrap();
		assert_eq!(
			value,
			json!({"responsive": true, "displaylogo": false, "scrollZoom": false})
		);
	}
}

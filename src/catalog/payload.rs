use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Plotly figure as written by `write_json`: the series, the layout and,
/// for animated figures, the frames.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GraphPayload {
	pub data: Vec<Value>,
	#[serde(default)]
	pub layout: Map<String, Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub frames: Option<Vec<Value>>,
}

impl GraphPayload {
	pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(contents)
	}

	pub fn is_animated(&self) -> bool {
		self.frames.as_ref().is_some_and(|f| !f.is_empty())
	}
}

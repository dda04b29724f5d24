use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling the dataset catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The file stem does not split into `start_end_who`.
	#[error("invalid dataset file name '{0}': expected '<start>_<end>_<who>.json'")]
	InvalidFileName(String),

	#[error("failed to read '{path}': {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse '{name}' as a graph payload: {source}")]
	Parse {
		name: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid dataset pattern: {0}")]
	Pattern(#[from] glob::PatternError),

	#[error("failed to list dataset directory: {0}")]
	Glob(#[from] glob::GlobError),
}

//! Dataset catalog: Plotly figures keyed by a label derived from their file name.

mod error;
mod label;
mod payload;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glob::{Pattern, glob};
use indexmap::IndexMap;
use log::{debug, warn};

pub use error::CatalogError;
pub use label::{Label, derive_label};
pub use payload::GraphPayload;

/// Immutable mapping from label to graph payload, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
	entries: Arc<IndexMap<Label, Arc<GraphPayload>>>,
}

impl Catalog {
	/// Build a catalog from `(file name, file contents)` pairs.
	///
	/// Each source is validated on its own: a bad file name or unparsable
	/// contents is logged and skipped, the rest of the catalog is kept.
	pub fn from_sources<I, N, C>(sources: I) -> LoadReport
	where
		I: IntoIterator<Item = (N, C)>,
		N: AsRef<str>,
		C: AsRef<str>,
	{
		let mut builder = CatalogBuilder::new();
		let mut skipped = Vec::new();
		for (name, contents) in sources {
			let result = builder.insert_source(name.as_ref(), contents.as_ref());
			record_skip(result, &mut skipped);
		}
		LoadReport {
			catalog: builder.build(),
			skipped,
		}
	}

	/// Read every `*.json` file of `dir` into a catalog.
	///
	/// Files are visited in the order `glob` yields them. Only an unusable
	/// pattern fails the whole load; per-file failures end up in
	/// [`LoadReport::skipped`].
	pub fn load_dir(dir: impl AsRef<Path>) -> Result<LoadReport, CatalogError> {
		let dir = Pattern::escape(&dir.as_ref().to_string_lossy());
		let pattern = Path::new(&dir).join("*.json");

		let mut builder = CatalogBuilder::new();
		let mut skipped = Vec::new();
		for entry in glob(&pattern.to_string_lossy())? {
			let path = match entry {
				Ok(path) => path,
				Err(err) => {
					record_skip::<()>(Err(err.into()), &mut skipped);
					continue;
				}
			};
			let name = path
				.file_name()
				.map(|n| n.to_string_lossy().into_owned())
				.unwrap_or_default();
			let result = fs::read_to_string(&path)
				.map_err(|source| CatalogError::Read {
					path: path.clone(),
					source,
				})
				.and_then(|contents| builder.insert_source(&name, &contents));
			record_skip(result, &mut skipped);
		}

		Ok(LoadReport {
			catalog: builder.build(),
			skipped,
		})
	}

	pub fn get(&self, label: &str) -> Option<&Arc<GraphPayload>> {
		self.entries.get(label)
	}

	pub fn contains(&self, label: &str) -> bool {
		self.entries.contains_key(label)
	}

	/// Labels in discovery order.
	pub fn labels(&self) -> impl Iterator<Item = &Label> {
		self.entries.keys()
	}

	pub fn last_label(&self) -> Option<&Label> {
		self.entries.last().map(|(label, _)| label)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Outcome of a catalog load: the catalog plus every source that was left out.
#[derive(Debug, Default)]
pub struct LoadReport {
	pub catalog: Catalog,
	pub skipped: Vec<CatalogError>,
}

/// Accumulates sources into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
	entries: IndexMap<Label, Arc<GraphPayload>>,
}

impl CatalogBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse `contents` and insert it under the label derived from `name`.
	///
	/// A later source with the same label replaces the earlier payload and keeps
	/// the earlier position.
	pub fn insert_source(&mut self, name: &str, contents: &str) -> Result<Label, CatalogError> {
		let label = derive_label(name)?;
		let payload = GraphPayload::from_json(contents).map_err(|source| CatalogError::Parse {
			name: name.to_owned(),
			source,
		})?;
		if self.entries.insert(label.clone(), Arc::new(payload)).is_some() {
			debug!("{name} replaces an earlier dataset labelled '{label}'");
		}
		Ok(label)
	}

	pub fn build(self) -> Catalog {
		Catalog {
			entries: Arc::new(self.entries),
		}
	}
}

fn record_skip<T>(result: Result<T, CatalogError>, skipped: &mut Vec<CatalogError>) {
	if let Err(err) = result {
		warn!("skipping dataset: {err}");
		skipped.push(err);
	}
}

//! Dataset files embedded at compile time by `build.rs`.

use log::info;

use crate::catalog::{Catalog, LoadReport};

include!(concat!(env!("OUT_DIR"), "/embedded_graphs.rs"));

/// Build the catalog from the embedded `data/graphs/*.json` files.
pub fn load() -> LoadReport {
	let report = Catalog::from_sources(EMBEDDED_GRAPHS.iter().copied());
	info!(
		"loaded {} datasets ({} skipped)",
		report.catalog.len(),
		report.skipped.len()
	);
	report
}

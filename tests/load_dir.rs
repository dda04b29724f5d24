use std::fs;
use std::path::Path;

use graph_selector::catalog::{Catalog, CatalogError, Label};
use graph_selector::selection::Selection;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
	fs::write(dir.join(name), contents).unwrap();
}

fn figure(name: &str) -> String {
	format!(r#"{{"data": [{{"type": "scatter", "name": "{name}", "y": [1, 2]}}], "layout": {{"title": {{"text": "{name}"}}}}}}"#)
}

#[test]
fn alice_and_bob() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "2021-01_2021-02_alice.json", &figure("alice"));
	write(dir.path(), "2021-03_2021-04_bob.json", &figure("bob"));

	let report = Catalog::load_dir(dir.path()).unwrap();
	assert!(report.skipped.is_empty());
	let catalog = report.catalog;

	let labels: Vec<_> = catalog.labels().map(Label::as_str).collect();
	assert_eq!(labels, ["ALICE - 2021-01", "BOB - 2021-03"]);

	let mut selection = Selection::initial(&catalog);
	assert_eq!(selection, Selection::Selected(Label::new("BOB - 2021-03")));

	selection.select(&catalog, Label::new("BOB - 2021-03")).unwrap();
	let payload = selection.resolve(&catalog).unwrap();
	assert_eq!(payload.data[0]["name"], "bob");
	assert_eq!(payload.layout["title"]["text"], "bob");

	selection.clear();
	assert!(selection.resolve(&catalog).is_none());
}

#[test]
fn only_json_files_are_read() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "2021-01_2021-02_alice.json", &figure("alice"));
	write(dir.path(), "2021-03_2021-04_bob.txt", &figure("bob"));
	write(dir.path(), "README.md", "datasets");

	let report = Catalog::load_dir(dir.path()).unwrap();
	assert_eq!(report.catalog.len(), 1);
	assert!(report.skipped.is_empty());
}

#[test]
fn bad_files_are_skipped_not_fatal() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "2021-01_2021-02_alice.json", &figure("alice"));
	write(dir.path(), "summary.json", &figure("summary"));
	write(dir.path(), "2021-05_2021-06_carol.json", "{\"layout\": {}}");

	let report = Catalog::load_dir(dir.path()).unwrap();
	assert_eq!(report.catalog.len(), 1);
	assert!(report.catalog.contains("ALICE - 2021-01"));
	assert_eq!(report.skipped.len(), 2);
	assert!(
		report
			.skipped
			.iter()
			.any(|e| matches!(e, CatalogError::InvalidFileName(name) if name == "summary.json"))
	);
	assert!(
		report
			.skipped
			.iter()
			.any(|e| matches!(e, CatalogError::Parse { name, .. } if name == "2021-05_2021-06_carol.json"))
	);
}

#[test]
fn reloading_picks_up_new_files() {
	let dir = TempDir::new().unwrap();
	write(dir.path(), "2021-01_2021-02_alice.json", &figure("alice"));
	assert_eq!(Catalog::load_dir(dir.path()).unwrap().catalog.len(), 1);

	write(dir.path(), "2021-03_2021-04_bob.json", &figure("bob"));
	assert_eq!(Catalog::load_dir(dir.path()).unwrap().catalog.len(), 2);
}

#[test]
fn missing_directory_yields_an_empty_catalog() {
	let dir = TempDir::new().unwrap();
	let report = Catalog::load_dir(dir.path().join("nope")).unwrap();
	assert!(report.catalog.is_empty());
	assert_eq!(Selection::initial(&report.catalog), Selection::NoSelection);
}

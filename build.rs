//! Embeds `data/graphs/*.json` so the WASM bundle carries its datasets.

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use glob::{Pattern, glob};

const DATA_DIR: &str = "data/graphs";

fn main() -> Result<(), Box<dyn Error>> {
	let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
	let data_dir = manifest_dir.join(DATA_DIR);
	println!("cargo:rerun-if-changed={}", data_dir.display());

	let pattern = PathBuf::from(Pattern::escape(&data_dir.to_string_lossy())).join("*.json");

	let mut out = String::from(
		"/// File name and contents of every embedded dataset, in discovery order.\npub static EMBEDDED_GRAPHS: &[(&str, &str)] = &[\n",
	);
	for path in glob(&pattern.to_string_lossy())? {
		let path = path?;
		let (Some(name), Some(full)) = (
			path.file_name().and_then(|n| n.to_str()),
			path.to_str(),
		) else {
			println!("cargo:warning=skipping non UTF-8 path {}", path.display());
			continue;
		};
		println!("cargo:rerun-if-changed={full}");
		writeln!(out, "\t({name:?}, include_str!({full:?})),")?;
	}
	out.push_str("];\n");

	let out_path = PathBuf::from(env::var("OUT_DIR")?).join("embedded_graphs.rs");
	fs::write(out_path, out)?;
	Ok(())
}

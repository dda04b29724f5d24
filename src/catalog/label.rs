use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

use super::error::CatalogError;

/// Display label of a dataset, also its key in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
	pub fn new(label: impl Into<String>) -> Self {
		Self(label.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for Label {
	fn borrow(&self) -> &str {
		&self.0
	}
}

/// Derive the label for a file named `<start>_<end>_<who>.json`.
///
/// The stem is split on `_` and the first three tokens are used; anything after
/// the third token is ignored. The result is `"{WHO} - {start}"`.
pub fn derive_label(file_name: &str) -> Result<Label, CatalogError> {
	let stem = Path::new(file_name)
		.file_stem()
		.and_then(|s| s.to_str())
		.ok_or_else(|| CatalogError::InvalidFileName(file_name.to_owned()))?;

	let mut tokens = stem.split('_');
	match (tokens.next(), tokens.next(), tokens.next()) {
		(Some(start), Some(_end), Some(who)) => {
			Ok(Label(format!("{} - {}", who.to_uppercase(), start)))
		}
		_ => Err(CatalogError::InvalidFileName(file_name.to_owned())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uppercases_who_and_keeps_start() {
		let label = derive_label("2021-01_2021-02_alice.json").unwrap();
		assert_eq!(label.as_str(), "ALICE - 2021-01");
	}

	#[test]
	fn end_token_is_not_part_of_the_label() {
		let a = derive_label("2022-03_2022-04_ifop.json").unwrap();
		let b = derive_label("2022-03_2022-09_ifop.json").unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn extra_tokens_are_ignored() {
		let label = derive_label("2021-01_2021-02_alice_rolling.json").unwrap();
		assert_eq!(label.as_str(), "ALICE - 2021-01");
	}

	#[test]
	fn accepts_full_paths() {
		let label = derive_label("data/graphs/2021-03_2021-04_bob.json").unwrap();
		assert_eq!(label.to_string(), "BOB - 2021-03");
	}

	#[test]
	fn uppercasing_is_unicode_aware() {
		let label = derive_label("2021_2022_élabe.json").unwrap();
		assert_eq!(label.as_str(), "ÉLABE - 2021");
	}

	#[test]
	fn rejects_stems_with_fewer_than_three_tokens() {
		for name in ["alice.json", "2021-01_alice.json", ".json", ""] {
			assert!(
				matches!(derive_label(name), Err(CatalogError::InvalidFileName(_))),
				"{name} should be rejected"
			);
		}
	}
}

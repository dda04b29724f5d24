//! Dropdown selection state.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{Catalog, GraphPayload, Label};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
	#[error("no dataset labelled '{0}'")]
	UnknownLabel(Label),
}

/// Either nothing is picked, or a label that is a key of the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	#[default]
	NoSelection,
	Selected(Label),
}

impl Selection {
	/// The last label of the catalog, or nothing for an empty catalog.
	pub fn initial(catalog: &Catalog) -> Self {
		catalog
			.last_label()
			.cloned()
			.map_or(Self::NoSelection, Self::Selected)
	}

	/// Pick `label`. Labels the catalog does not know leave the state untouched.
	pub fn select(&mut self, catalog: &Catalog, label: Label) -> Result<(), SelectionError> {
		if !catalog.contains(label.as_str()) {
			return Err(SelectionError::UnknownLabel(label));
		}
		*self = Self::Selected(label);
		Ok(())
	}

	pub fn clear(&mut self) {
		*self = Self::NoSelection;
	}

	pub fn label(&self) -> Option<&Label> {
		match self {
			Self::NoSelection => None,
			Self::Selected(label) => Some(label),
		}
	}

	/// Payload to chart for this state. `None` means no chart is drawn.
	pub fn resolve(&self, catalog: &Catalog) -> Option<Arc<GraphPayload>> {
		self.label()
			.and_then(|label| catalog.get(label.as_str()))
			.cloned()
	}
}

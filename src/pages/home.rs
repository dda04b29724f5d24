use leptos::prelude::*;
use log::{info, warn};

use crate::catalog::{Catalog, Label};
use crate::components::dataset_select::DatasetSelect;
use crate::components::plotly_chart::PlotlyChart;
use crate::selection::Selection;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let catalog = use_context::<Catalog>().unwrap_or_default();

	view! { <Viewer catalog=catalog /> }
}

/// Dataset dropdown plus the chart of the selected dataset.
///
/// Starts on the last dataset of the catalog. Clearing the dropdown removes the
/// chart until another dataset is picked.
#[component]
pub fn Viewer(catalog: Catalog) -> impl IntoView {
	if catalog.is_empty() {
		return view! { <p class="viewer-empty">"No datasets available."</p> }.into_any();
	}

	let selection = RwSignal::new(Selection::initial(&catalog));
	let options: Vec<Label> = catalog.labels().cloned().collect();
	let selected = Signal::derive(move || selection.with(|s| s.label().cloned()));

	let payload = {
		let catalog = catalog.clone();
		Signal::derive(move || {
			selection.with(|s| {
				let payload = s.resolve(&catalog);
				if let (None, Some(label)) = (&payload, s.label()) {
					warn!("'{label}' is not in the catalog, nothing to draw");
				}
				payload
			})
		})
	};

	let on_select = Callback::new(move |label: Label| {
		let shown = label.to_string();
		let mut next = selection.get_untracked();
		match next.select(&catalog, label) {
			Ok(()) => {
				info!("selected {shown}");
				selection.set(next);
			}
			Err(err) => warn!("ignoring selection: {err}"),
		}
	});

	let on_clear = Callback::new(move |_: ()| {
		info!("selection cleared");
		selection.update(Selection::clear);
	});

	view! {
		<div class="viewer">
			<DatasetSelect
				options=options
				selected=selected
				on_select=on_select
				on_clear=on_clear
				placeholder="Pick a dataset"
			/>
			<Show
				when=move || payload.with(Option::is_some)
				fallback=|| view! { <p class="viewer-hint">"No dataset selected."</p> }
			>
				<div class="viewer-chart">
					<PlotlyChart payload=payload />
				</div>
			</Show>
		</div>
	}
	.into_any()
}

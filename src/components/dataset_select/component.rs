use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

use super::filter::filter_labels;
use super::menu::{KeyOutcome, Menu};
use crate::catalog::Label;

/// Searchable dropdown over dataset labels.
///
/// Typing filters the menu, pressing the control or ArrowDown opens it, Enter
/// picks the first match while it is open and Escape closes it. The clear button
/// is only shown when `clearable` is set, an `on_clear` handler is given and
/// something is selected.
#[component]
pub fn DatasetSelect(
	options: Vec<Label>,
	#[prop(into)] selected: Signal<Option<Label>>,
	on_select: Callback<Label>,
	#[prop(optional)] on_clear: Option<Callback<()>>,
	#[prop(default = true)] clearable: bool,
	#[prop(into, default = "Select...".into())] placeholder: String,
) -> impl IntoView {
	let query = RwSignal::new(String::new());
	let menu = RwSignal::new(Menu::default());
	let is_open = move || menu.with(Menu::is_open);
	let filtered = Memo::new(move |_| query.with(|q| filter_labels(&options, q)));
	let can_clear = clearable && on_clear.is_some();

	let choose = Callback::new(move |label: Label| {
		query.set(String::new());
		menu.update(Menu::close);
		on_select.run(label);
	});

	let clear = move |ev: MouseEvent| {
		ev.prevent_default();
		query.set(String::new());
		if let Some(on_clear) = on_clear {
			on_clear.run(());
		}
	};

	let on_keydown = move |ev: KeyboardEvent| {
		let key = ev.key();
		let outcome = filtered.with_untracked(|visible| {
			menu.try_update(|m| m.key(&key, visible))
				.unwrap_or(KeyOutcome::Ignored)
		});
		match outcome {
			KeyOutcome::Pick(label) => {
				ev.prevent_default();
				choose.run(label);
			}
			KeyOutcome::Opened => ev.prevent_default(),
			KeyOutcome::Closed => query.set(String::new()),
			KeyOutcome::Ignored => {}
		}
	};

	let current = move || selected.with(|s| s.as_ref().map(Label::to_string));

	view! {
		<div class=move || if is_open() { "dataset-select is-open" } else { "dataset-select" }>
			<div class="dataset-select__control">
				<input
					type="text"
					class="dataset-select__input"
					name="dataset"
					role="combobox"
					autocomplete="off"
					aria-expanded=move || is_open().to_string()
					placeholder=move || current().unwrap_or_else(|| placeholder.clone())
					prop:value=move || query.get()
					on:input=move |ev| {
						query.set(event_target_value(&ev));
						menu.update(Menu::open);
					}
					// focus stays on the input after a pick, so a press must reopen too
					on:mousedown=move |_| menu.update(Menu::open)
					on:focus=move |_| menu.update(Menu::open)
					on:blur=move |_| menu.update(Menu::close)
					on:keydown=on_keydown
				/>
				<Show when=move || can_clear && selected.with(Option::is_some)>
					<button
						type="button"
						class="dataset-select__clear"
						aria-label="Clear selection"
						on:mousedown=clear
					>
						"×"
					</button>
				</Show>
			</div>
			<Show when=is_open>
				<ul class="dataset-select__menu" role="listbox">
					{move || {
						let options = filtered.get();
						if options.is_empty() {
							return view! { <li class="dataset-select__empty">"No options"</li> }
								.into_any();
						}
						options
							.into_iter()
							.map(|label| option_view(label, selected, choose))
							.collect_view()
							.into_any()
					}}
				</ul>
			</Show>
		</div>
	}
}

fn option_view(label: Label, selected: Signal<Option<Label>>, choose: Callback<Label>) -> impl IntoView {
	let text = label.to_string();
	let is_selected = {
		let label = label.clone();
		move || selected.with(|s| s.as_ref() == Some(&label))
	};
	let is_selected_aria = is_selected.clone();

	view! {
		<li
			role="option"
			class=move || {
				if is_selected() { "dataset-select__option is-selected" } else { "dataset-select__option" }
			}
			aria-selected=move || is_selected_aria().to_string()
			// mousedown fires before the input's blur closes the menu
			on:mousedown=move |ev: MouseEvent| {
				ev.prevent_default();
				choose.run(label.clone());
			}
		>
			{text}
		</li>
	}
}

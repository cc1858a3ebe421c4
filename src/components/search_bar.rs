use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Search field. Enter or the button submits the current text; emptying the
/// field submits `""` right away so the highlight clears.
#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
	let query = RwSignal::new(String::new());

	let submit = move || on_search.run(query.get_untracked());

	view! {
		<div class="search-bar">
			<input
				type="text"
				class="search-input"
				placeholder="Search path, e.g. $.user.roles[0] or user.name"
				prop:value=move || query.get()
				on:input=move |ev| {
					let value = event_target_value(&ev);
					let cleared = value.is_empty();
					query.set(value);
					if cleared {
						on_search.run(String::new());
					}
				}
				on:keydown=move |ev: KeyboardEvent| {
					if ev.key() == "Enter" {
						submit();
					}
				}
			/>
			<button class="primary" on:click=move |_| submit()>
				"Search"
			</button>
		</div>
	}
}

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::json_input::JsonInput;
use crate::components::tree_visualizer::TreeVisualizer;
use crate::theme::Theme;

/// Input panel beside the tree panel, under a header with the theme toggle.
#[component]
pub fn Home() -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	let document = RwSignal::new(None::<Arc<Value>>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="render-error">
					<h1>"The visualizer stopped rendering"</h1>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
					<p>"Reload the page to start over."</p>
				</div>
			}
		}>

			<div class="app">
				<header class="app-header">
					<h1>"JSON Tree Visualizer"</h1>
					<button
						class="theme-toggle"
						on:click=move |_| theme.update(|t| *t = t.toggled())
					>
						{move || if theme.get().is_dark() { "☀️ Light Mode" } else { "🌙 Dark Mode" }}
					</button>
				</header>
				<main class="app-main">
					<JsonInput on_document={move |doc: Option<Arc<Value>>| document.set(doc)} />
					<TreeVisualizer document=document theme=theme />
				</main>
			</div>
		</ErrorBoundary>
	}
}

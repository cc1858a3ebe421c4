use std::sync::Arc;

use leptos::prelude::*;
use log::info;
use serde_json::Value;

use crate::document::parse_document;
use crate::tree::TreeError;

const PLACEHOLDER: &str = r#"{
  "user": {
    "name": "Ada",
    "roles": ["admin", "dev"]
  }
}"#;

fn input_error(err: &TreeError) -> &'static str {
	match err {
		TreeError::EmptyInput => "❌ Please enter JSON data",
		_ => "❌ Invalid JSON format",
	}
}

/// Text panel that turns pasted JSON into a document. `Clear` hands back
/// `None` so the visualizer drops the current tree.
#[component]
pub fn JsonInput(#[prop(into)] on_document: Callback<Option<Arc<Value>>>) -> impl IntoView {
	let text = RwSignal::new(String::new());
	let error = RwSignal::new(None::<&'static str>);

	let generate = move |_| match parse_document(&text.get_untracked()) {
		Ok(document) => {
			error.set(None);
			info!("document accepted");
			on_document.run(Some(Arc::new(document)));
		}
		Err(e) => error.set(Some(input_error(&e))),
	};

	let clear = move |_| {
		text.set(String::new());
		error.set(None);
		on_document.run(None);
	};

	view! {
		<section class="panel json-input">
			<h2>"JSON Input"</h2>
			<textarea
				class="json-textarea"
				placeholder=PLACEHOLDER
				spellcheck="false"
				prop:value=move || text.get()
				on:input=move |ev| text.set(event_target_value(&ev))
			/>
			<Show when=move || error.get().is_some()>
				<p class="input-error">{move || error.get().unwrap_or_default()}</p>
			</Show>
			<div class="button-row">
				<button class="primary" on:click=generate>
					"Generate Tree"
				</button>
				<button class="secondary" on:click=clear>
					"Clear"
				</button>
			</div>
			<p class="helper">
				"Paste any JSON document and press Generate Tree. Objects, arrays and values become boxes linked parent to child."
			</p>
		</section>
	}
}

#[cfg(test)]
#[path = "json_input_test.rs"]
mod tests;

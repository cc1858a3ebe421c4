//! JSON tree visualizer: layout and path search in [`tree`], a Leptos
//! client-side app on top.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

#[deny(missing_docs)]
pub mod document;
#[deny(missing_docs)]
pub mod theme;
#[deny(missing_docs)]
pub mod tree;

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::theme::Theme;

/// Console verbosity in every build profile. Layout and search details log
/// at `debug`.
const LOG_LEVEL: Level = Level::Debug;

/// Route `log` output and panics to the browser console.
pub fn init_logging() {
	let _ = console_log::init_with_level(LOG_LEVEL);
	console_error_panic_hook::set_once();
	info!("json-tree-canvas {} started", env!("CARGO_PKG_VERSION"));
}

/// Router with the visualizer at `/`. Owns the theme signal every page reads
/// through context.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = RwSignal::new(Theme::default());
	provide_context(theme);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.get().as_str() />
		<Title text="JSON Tree Visualizer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

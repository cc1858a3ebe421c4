use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use serde_json::Value;

use crate::theme::Theme;
use crate::tree::{LayoutConfig, MatchMode, NodeId, SearchOutcome, TreeGraph, layout_shared, search};

use super::clipboard::copy_text;
use super::search_bar::SearchBar;
use super::tree_graph::{FocusRequest, TreeGraphCanvas, export};

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);
const COPY_TIMEOUT: Duration = Duration::from_secs(2);
const HOVER_VALUE_MAX_CHARS: usize = 600;

const NO_DATA: &str = "❌ No JSON data available";

/// Status line for a finished search. `None` means the line is cleared.
fn search_message(outcome: &SearchOutcome) -> Option<String> {
	match outcome {
		SearchOutcome::Cleared => None,
		SearchOutcome::Found { path, .. } => Some(format!("✅ Match found! Path: {path}")),
		SearchOutcome::NodeNotFound { .. } => {
			Some("❌ Path exists but node not found in visualization".to_owned())
		}
		SearchOutcome::NoMatch => Some("❌ No match found!".to_owned()),
		SearchOutcome::InvalidExpression(_) => Some("⚠️ Invalid JSONPath syntax!".to_owned()),
	}
}

/// Camera request for a finished search. Misses leave the view alone.
fn focus_target(outcome: &SearchOutcome) -> Option<Option<NodeId>> {
	match outcome {
		SearchOutcome::Found { node, .. } => Some(Some(*node)),
		SearchOutcome::Cleared => Some(None),
		_ => None,
	}
}

/// Pretty-printed value for the hover card, cut short for big subtrees.
fn hover_value(value: &Value) -> String {
	let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
	if pretty.chars().count() > HOVER_VALUE_MAX_CHARS {
		let cut: String = pretty.chars().take(HOVER_VALUE_MAX_CHARS).collect();
		format!("{cut}\n...")
	} else {
		pretty
	}
}

/// A message slot that empties itself after `timeout`. Only the most recent
/// message is cleared; an older timer finding a newer message leaves it.
#[derive(Clone, Copy)]
struct Flash {
	text: RwSignal<Option<String>>,
	serial: RwSignal<u32>,
	timeout: Duration,
}

impl Flash {
	fn new(timeout: Duration) -> Self {
		Self {
			text: RwSignal::new(None),
			serial: RwSignal::new(0),
			timeout,
		}
	}

	fn show(self, message: Option<String>) {
		let serial = self.serial.get_untracked().wrapping_add(1);
		self.serial.set(serial);
		let pending = message.is_some();
		self.text.set(message);
		if pending {
			set_timeout(
				move || {
					if self.serial.get_untracked() == serial {
						self.text.set(None);
					}
				},
				self.timeout,
			);
		}
	}
}

/// Search bar, canvas and overlays for one JSON document.
///
/// Every new document is laid out from scratch; the previous tree, its
/// highlight and any hover card are discarded.
#[component]
pub fn TreeVisualizer(
	#[prop(into)] document: Signal<Option<Arc<Value>>>,
	#[prop(into)] theme: Signal<Theme>,
	#[prop(optional)] config: LayoutConfig,
) -> impl IntoView {
	let graph = RwSignal::new(None::<Arc<TreeGraph>>);
	let focus = RwSignal::new(FocusRequest::default());
	let hovered = RwSignal::new(None::<NodeId>);
	let mode = RwSignal::new(MatchMode::default());
	let status = Flash::new(STATUS_TIMEOUT);
	let copy_note = Flash::new(COPY_TIMEOUT);
	let config = StoredValue::new(config);

	Effect::new(move |_| {
		let next = document.get();
		hovered.set(None);
		let Some(next) = next else {
			graph.set(None);
			status.show(None);
			return;
		};
		match config.with_value(|c| layout_shared(next, c)) {
			Ok(laid_out) => {
				info!("laid out {} nodes", laid_out.len());
				graph.set(Some(Arc::new(laid_out)));
				status.show(None);
			}
			Err(e) => {
				warn!("layout failed: {e}");
				graph.set(None);
				status.show(Some(format!("❌ Invalid JSON structure: {e}")));
			}
		}
	});

	let on_search = move |query: String| {
		let Some(current) = graph.get_untracked() else {
			status.show(Some(NO_DATA.to_owned()));
			return;
		};
		let outcome = search(&current, &query, mode.get_untracked());
		if let Some(target) = focus_target(&outcome) {
			focus.update(|f| f.request(target));
		}
		status.show(search_message(&outcome));
	};

	let on_node_click = move |id: NodeId| {
		let Some(path) = graph
			.get_untracked()
			.and_then(|g| g.node(id).map(|n| n.path.clone()))
		else {
			return;
		};
		spawn_local(async move {
			match copy_text(&path).await {
				Ok(()) => copy_note.show(Some(format!("✅ Copied: {path}"))),
				Err(e) => {
					warn!("copy failed: {e}");
					copy_note.show(Some("❌ Failed to copy path".to_owned()));
				}
			}
		});
	};

	let on_download = move |_| {
		let Some(current) = graph.get_untracked() else {
			status.show(Some("❌ No tree to download".to_owned()));
			return;
		};
		let result = config.with_value(|c| export::download_png(&current, c, theme.get_untracked()));
		match result {
			Ok(_) => status.show(Some("✅ Tree downloaded successfully!".to_owned())),
			Err(e) => {
				warn!("export failed: {e}");
				status.show(Some("❌ Failed to download tree".to_owned()));
			}
		}
	};

	let hover_card = move || {
		let id = hovered.get()?;
		let current = graph.get()?;
		let node = current.node(id)?;
		let value = current.value(id)?;
		Some(view! {
			<div class="hover-card">
				<div class="hover-row">
					<span class="hover-label">"Path: "</span>
					<code>{node.path.clone()}</code>
				</div>
				<div class="hover-row">
					<span class="hover-label">"Type: "</span>
					<span>{node.kind.as_str()}</span>
				</div>
				<pre class="hover-value">{hover_value(value)}</pre>
			</div>
		})
	};

	let has_tree = move || graph.with(Option::is_some);

	view! {
		<section class="panel tree-visualizer">
			<div class="search-row">
				<SearchBar on_search=on_search />
				<label class="match-mode" title="Highlight the node behind the first match, even for wildcard searches">
					<input
						type="checkbox"
						prop:checked=move || mode.get() == MatchMode::Canonical
						on:change=move |ev| {
							let canonical = event_target_checked(&ev);
							mode.set(if canonical { MatchMode::Canonical } else { MatchMode::Literal });
						}
					/>
					"Canonical match"
				</label>
			</div>

			{move || status.text.get().map(|text| view! { <div class="status-message">{text}</div> })}
			{move || copy_note.text.get().map(|text| view! { <div class="copy-notification">{text}</div> })}

			<div class="tree-container">
				<TreeGraphCanvas
					graph=graph
					focus=focus
					theme=theme
					on_node_click=on_node_click
					on_hover={move |id: Option<NodeId>| hovered.set(id)}
					config=config.get_value()
				/>
				<Show
					when=has_tree
					fallback=|| view! {
						<div class="placeholder">
							<p>"No JSON data to visualize"</p>
							<p>"Enter valid JSON and click \"Generate Tree\""</p>
						</div>
					}
				>
					<button class="download-btn" title="Download tree as PNG image" on:click=on_download>
						"Download"
					</button>
				</Show>
				{hover_card}
			</div>
		</section>
	}
}

#[cfg(test)]
#[path = "tree_visualizer_test.rs"]
mod tests;

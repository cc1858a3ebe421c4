//! Display text for nodes. Truncation here never touches `value` or `path`.

use serde_json::Value;

use super::graph::{GraphNode, NodeKind, TreeGraph};

const ELLIPSIS: &str = "...";

/// Two-line node caption: the key on top, a summary underneath.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeLabel {
	/// Member name or index; `Root` for the document root.
	pub heading: String,
	/// `[n]`, `{n}` or the truncated primitive text.
	pub detail: String,
}

impl NodeLabel {
	/// Caption for `node`, a node of `graph`.
	#[must_use]
	pub fn for_node(graph: &TreeGraph, node: &GraphNode, max_chars: usize) -> Self {
		let heading = if node.is_root() {
			"Root".to_owned()
		} else {
			node.key.to_string()
		};
		let detail = match node.kind {
			NodeKind::Array => format!("[{}]", node.child_count),
			NodeKind::Object => format!("{{{}}}", node.child_count),
			NodeKind::Primitive => graph
				.value(node.id)
				.map(|v| truncate(&display_text(v), max_chars))
				.unwrap_or_default(),
		};
		Self { heading, detail }
	}
}

/// Textual form of a value: strings unquoted, everything else as JSON.
#[must_use]
pub fn display_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Keep the first `max_chars` characters, marking any cut with `...`.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
		None => text.to_owned(),
	}
}

#[cfg(test)]
#[path = "label_test.rs"]
mod tests;

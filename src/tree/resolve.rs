//! Path search: evaluate an expression, then find the node to highlight.

use log::debug;
use serde_json::Value;

use super::error::ExpressionError;
use super::expr::Expression;
use super::graph::{NodeId, TreeGraph};
use super::path::normalize;

/// How a match is tied back to a graph node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
	/// Compare the normalized input expression to node paths verbatim. A
	/// wildcard or an alternate spelling of a path can match a value without
	/// naming any node.
	#[default]
	Literal,
	/// Use the canonical path of the first matched location instead, so every
	/// match maps onto its node.
	Canonical,
}

/// Outcome of evaluating a search expression against a document.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
	/// Blank input: drop any active highlight.
	Cleared,
	/// The expression parsed but selected nothing.
	NoMatch,
	/// First match; `path` is the lookup key for the graph node.
	Matched {
		/// Copy of the matched value.
		value: Value,
		/// Canonical path, or the normalized input in literal mode.
		path: String,
	},
	/// The input could not be parsed.
	InvalidExpression(ExpressionError),
}

/// Search result tied to a laid-out graph.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
	/// Blank input: drop any active highlight.
	Cleared,
	/// The node to highlight.
	Found {
		/// Its id.
		node: NodeId,
		/// Its path.
		path: String,
	},
	/// The expression matched a value but no node carries `path`.
	NodeNotFound {
		/// The path that was looked up.
		path: String,
	},
	/// Nothing matched.
	NoMatch,
	/// The input could not be parsed.
	InvalidExpression(ExpressionError),
}

/// [`resolve_with`] in [`MatchMode::Literal`].
#[must_use]
pub fn resolve(document: &Value, expression: &str) -> MatchResult {
	resolve_with(document, expression, MatchMode::Literal)
}

/// Evaluate `expression` (auto-rooted, see [`normalize`]) and keep only the
/// first match.
#[must_use]
pub fn resolve_with(document: &Value, expression: &str, mode: MatchMode) -> MatchResult {
	let Some(normalized) = normalize(expression) else {
		return MatchResult::Cleared;
	};
	let parsed = match normalized.parse::<Expression>() {
		Ok(parsed) => parsed,
		Err(e) => {
			debug!("rejected expression {normalized:?}: {e}");
			return MatchResult::InvalidExpression(e);
		}
	};
	let Some(first) = parsed.first(document) else {
		debug!("no match for {normalized}");
		return MatchResult::NoMatch;
	};
	let path = match mode {
		MatchMode::Literal => normalized,
		MatchMode::Canonical => first.path,
	};
	MatchResult::Matched {
		value: first.value.clone(),
		path,
	}
}

impl MatchResult {
	/// Look the matched path up in `graph` by exact string equality.
	#[must_use]
	pub fn locate(self, graph: &TreeGraph) -> SearchOutcome {
		match self {
			Self::Cleared => SearchOutcome::Cleared,
			Self::NoMatch => SearchOutcome::NoMatch,
			Self::InvalidExpression(e) => SearchOutcome::InvalidExpression(e),
			Self::Matched { path, .. } => match graph.find_by_path(&path) {
				Some(node) => SearchOutcome::Found { node: node.id, path },
				None => SearchOutcome::NodeNotFound { path },
			},
		}
	}
}

/// Resolve against the document a graph was built from and locate the node.
#[must_use]
pub fn search(graph: &TreeGraph, expression: &str, mode: MatchMode) -> SearchOutcome {
	if graph.is_empty() {
		return match normalize(expression) {
			None => SearchOutcome::Cleared,
			Some(_) => SearchOutcome::NoMatch,
		};
	}
	resolve_with(graph.document(), expression, mode).locate(graph)
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;

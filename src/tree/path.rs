//! Canonical path strings and search-input normalization.
//!
//! Paths use a small JSONPath subset rooted at `$`:
//!
//! - `$.name` for object members whose name is "plain" (see [`is_plain_member`])
//! - `$['odd name']` for every other member name, with `\\` and `\'` escapes
//! - `$[3]` for array elements
//!
//! The same builder produces layout node paths and the canonical locations
//! reported by the expression evaluator, so the two always agree.

use super::graph::NodeKey;

/// Path of the document root.
pub const ROOT_PATH: &str = "$";

/// Whether `name` can be written with dotted member access and read back by
/// the expression parser unchanged.
#[must_use]
pub fn is_plain_member(name: &str) -> bool {
	!name.is_empty() && name.chars().all(is_member_char)
}

pub(crate) fn is_member_char(c: char) -> bool {
	c.is_alphanumeric() || matches!(c, '_' | '-' | '$')
}

/// Path of the child reached from `parent` via `key`.
#[must_use]
pub fn child_path(parent: &str, key: &NodeKey) -> String {
	match key {
		NodeKey::Root => ROOT_PATH.to_owned(),
		NodeKey::Index(i) => format!("{parent}[{i}]"),
		NodeKey::Member(name) if is_plain_member(name) => format!("{parent}.{name}"),
		NodeKey::Member(name) => format!("{parent}[{}]", quote(name)),
	}
}

/// Single-quote a member name for bracket access.
#[must_use]
pub fn quote(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 2);
	out.push('\'');
	for c in name.chars() {
		if matches!(c, '\\' | '\'') {
			out.push('\\');
		}
		out.push(c);
	}
	out.push('\'');
	out
}

/// Turn raw search-box input into a rooted expression.
///
/// Returns `None` for blank input, which callers treat as "clear search".
/// Input already starting with `$` is kept as typed (after trimming); input
/// starting with `.` or `[` gets a bare `$`; anything else gets `$.`.
#[must_use]
pub fn normalize(expression: &str) -> Option<String> {
	let trimmed = expression.trim();
	if trimmed.is_empty() {
		return None;
	}
	Some(if trimmed.starts_with('$') {
		trimmed.to_owned()
	} else if trimmed.starts_with(['.', '[']) {
		format!("{ROOT_PATH}{trimmed}")
	} else {
		format!("{ROOT_PATH}.{trimmed}")
	})
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;

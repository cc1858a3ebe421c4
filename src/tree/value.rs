use std::iter::Enumerate;
use std::slice;

use serde_json::{Value, map};

use super::graph::NodeKey;

/// Direct children of a JSON value in natural order: array index order or
/// object key insertion order. Primitives have none.
pub enum Children<'a> {
	/// Elements with their indices.
	Array(Enumerate<slice::Iter<'a, Value>>),
	/// Members in insertion order.
	Object(map::Iter<'a>),
	/// A primitive.
	Leaf,
}

impl<'a> Iterator for Children<'a> {
	type Item = (NodeKey, &'a Value);

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			Self::Array(iter) => iter.next().map(|(i, v)| (NodeKey::Index(i), v)),
			Self::Object(iter) => iter.next().map(|(k, v)| (NodeKey::Member(k.clone()), v)),
			Self::Leaf => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self {
			Self::Array(iter) => iter.size_hint(),
			Self::Object(iter) => iter.size_hint(),
			Self::Leaf => (0, Some(0)),
		}
	}
}

/// Iterate the direct children of `value`.
#[must_use]
pub fn children(value: &Value) -> Children<'_> {
	match value {
		Value::Array(items) => Children::Array(items.iter().enumerate()),
		Value::Object(members) => Children::Object(members.iter()),
		_ => Children::Leaf,
	}
}

/// Number of elements or keys; zero for primitives.
#[must_use]
pub fn child_count(value: &Value) -> usize {
	match value {
		Value::Array(items) => items.len(),
		Value::Object(members) => members.len(),
		_ => 0,
	}
}

//! Parser and evaluator for the search dialect.
//!
//! Supported: `$`, `.name`, `.*`, `..name`, `..*`, `..[…]`, `[n]` (negative
//! counts from the end), `[*]`, `['name']` and `["name"]`. A dotted name made
//! of digits also selects an array element, so `$.list.0` and `$.list[0]`
//! reach the same value. Filters, slices, unions and script expressions are
//! rejected as unsupported.

use std::iter::Peekable;
use std::str::CharIndices;
use std::str::FromStr;

use serde_json::Value;

use super::error::ExpressionError;
use super::graph::NodeKey;
use super::path::{ROOT_PATH, child_path, is_member_char};
use super::value::children;

/// What a segment picks out of each current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
	/// Object member by name, or array element when the name is all digits.
	Member(String),
	/// Array element; negative values count from the end.
	Index(i64),
	/// Every child.
	Wildcard,
}

/// One step of an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
	/// Select among direct children.
	Child(Selector),
	/// Select among the current values and all their descendants.
	Descendant(Selector),
}

/// A parsed search expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
	segments: Vec<Segment>,
}

/// One evaluation result: the value and its canonical path.
#[derive(Clone, Debug, PartialEq)]
pub struct Location<'a> {
	/// Canonical path of the match.
	pub path: String,
	/// The matched value inside the document.
	pub value: &'a Value,
}

impl FromStr for Expression {
	type Err = ExpressionError;

	fn from_str(source: &str) -> Result<Self, Self::Err> {
		Parser::new(source).parse()
	}
}

impl Expression {
	/// Parsed steps after the root marker.
	#[must_use]
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Every match in document order.
	#[must_use]
	pub fn evaluate<'a>(&self, document: &'a Value) -> Vec<Location<'a>> {
		let mut current = vec![Location {
			path: ROOT_PATH.to_owned(),
			value: document,
		}];
		for segment in &self.segments {
			let mut next = Vec::new();
			match segment {
				Segment::Child(selector) => {
					for loc in &current {
						select(loc, selector, &mut next);
					}
				}
				Segment::Descendant(selector) => {
					for loc in &current {
						for inner in descendants_or_self(loc) {
							select(&inner, selector, &mut next);
						}
					}
				}
			}
			current = next;
		}
		current
	}

	/// First match in document order, if any.
	#[must_use]
	pub fn first<'a>(&self, document: &'a Value) -> Option<Location<'a>> {
		self.evaluate(document).into_iter().next()
	}
}

fn select<'a>(loc: &Location<'a>, selector: &Selector, out: &mut Vec<Location<'a>>) {
	let push = |out: &mut Vec<Location<'a>>, key: NodeKey, value: &'a Value| {
		out.push(Location {
			path: child_path(&loc.path, &key),
			value,
		});
	};
	match (selector, loc.value) {
		(Selector::Wildcard, _) => {
			for (key, value) in children(loc.value) {
				push(out, key, value);
			}
		}
		(Selector::Member(name), Value::Object(members)) => {
			if let Some(value) = members.get(name) {
				push(out, NodeKey::Member(name.clone()), value);
			}
		}
		(Selector::Member(name), Value::Array(items)) => {
			let found = name
				.parse::<usize>()
				.ok()
				.and_then(|i| items.get(i).map(|v| (i, v)));
			if let Some((i, value)) = found {
				push(out, NodeKey::Index(i), value);
			}
		}
		(Selector::Index(index), Value::Array(items)) => {
			let resolved = if *index < 0 {
				usize::try_from(index.unsigned_abs())
					.ok()
					.and_then(|back| items.len().checked_sub(back))
			} else {
				usize::try_from(*index).ok()
			};
			if let Some((i, value)) = resolved.and_then(|i| items.get(i).map(|v| (i, v))) {
				push(out, NodeKey::Index(i), value);
			}
		}
		_ => {}
	}
}

/// Pre-order walk with an explicit stack so deep documents cannot exhaust
/// the call stack.
fn descendants_or_self<'a>(start: &Location<'a>) -> Vec<Location<'a>> {
	let mut out = Vec::new();
	let mut stack = vec![start.clone()];
	while let Some(loc) = stack.pop() {
		let kids: Vec<Location<'a>> = children(loc.value)
			.map(|(key, value)| Location {
				path: child_path(&loc.path, &key),
				value,
			})
			.collect();
		stack.extend(kids.into_iter().rev());
		out.push(loc);
	}
	out
}

struct Parser<'s> {
	source: &'s str,
	chars: Peekable<CharIndices<'s>>,
}

impl<'s> Parser<'s> {
	fn new(source: &'s str) -> Self {
		Self {
			source,
			chars: source.char_indices().peekable(),
		}
	}

	fn parse(mut self) -> Result<Expression, ExpressionError> {
		if self.chars.next().map(|(_, c)| c) != Some('$') {
			return Err(ExpressionError::MissingRoot);
		}
		let mut segments = Vec::new();
		while let Some((offset, c)) = self.chars.next() {
			let segment = match c {
				'.' => {
					if self.eat('.') {
						Segment::Descendant(self.after_descent(offset)?)
					} else {
						Segment::Child(self.dotted(offset)?)
					}
				}
				'[' => Segment::Child(self.bracketed(offset)?),
				found => return Err(unexpected(found, offset)),
			};
			segments.push(segment);
		}
		Ok(Expression { segments })
	}

	fn eat(&mut self, expected: char) -> bool {
		self.chars.next_if(|&(_, c)| c == expected).is_some()
	}

	fn end(&self) -> usize {
		self.source.len()
	}

	/// Selector following `..`.
	fn after_descent(&mut self, offset: usize) -> Result<Selector, ExpressionError> {
		match self.chars.peek().copied() {
			Some((at, '[')) => {
				self.chars.next();
				self.bracketed(at)
			}
			_ => self.dotted(offset + 1),
		}
	}

	/// Name or `*` following a dot.
	fn dotted(&mut self, offset: usize) -> Result<Selector, ExpressionError> {
		if self.eat('*') {
			return Ok(Selector::Wildcard);
		}
		let mut name = String::new();
		while let Some((_, c)) = self.chars.next_if(|&(_, c)| is_member_char(c)) {
			name.push(c);
		}
		if !name.is_empty() {
			return Ok(Selector::Member(name));
		}
		match self.chars.peek().copied() {
			Some((at, found)) => Err(classify(found, at)),
			None => Err(ExpressionError::UnexpectedEnd { offset }),
		}
	}

	/// Contents of `[ … ]`; the opening bracket is already consumed.
	fn bracketed(&mut self, open: usize) -> Result<Selector, ExpressionError> {
		self.skip_whitespace();
		let selector = match self.chars.peek().copied() {
			None => return Err(ExpressionError::UnexpectedEnd { offset: open }),
			Some((_, '*')) => {
				self.chars.next();
				Selector::Wildcard
			}
			Some((at, quote @ ('\'' | '"'))) => {
				self.chars.next();
				Selector::Member(self.quoted(quote, at)?)
			}
			Some((at, c)) if c == '-' || c.is_ascii_digit() => self.index(at)?,
			Some((at, found)) => return Err(classify(found, at)),
		};
		self.skip_whitespace();
		match self.chars.next() {
			Some((_, ']')) => Ok(selector),
			Some((at, found)) => Err(classify(found, at)),
			None => Err(ExpressionError::UnexpectedEnd { offset: self.end() }),
		}
	}

	fn quoted(&mut self, quote: char, start: usize) -> Result<String, ExpressionError> {
		let mut name = String::new();
		loop {
			match self.chars.next() {
				None => return Err(ExpressionError::UnterminatedString { offset: start }),
				Some((_, '\\')) => match self.chars.next() {
					Some((_, escaped)) => name.push(escaped),
					None => return Err(ExpressionError::UnterminatedString { offset: start }),
				},
				Some((_, c)) if c == quote => return Ok(name),
				Some((_, c)) => name.push(c),
			}
		}
	}

	fn index(&mut self, start: usize) -> Result<Selector, ExpressionError> {
		let mut text = String::new();
		if let Some((_, sign)) = self.chars.next_if(|&(_, c)| c == '-') {
			text.push(sign);
		}
		while let Some((_, d)) = self.chars.next_if(|&(_, c)| c.is_ascii_digit()) {
			text.push(d);
		}
		text.parse::<i64>()
			.map(Selector::Index)
			.map_err(|_| ExpressionError::InvalidIndex { text, offset: start })
	}

	fn skip_whitespace(&mut self) {
		while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
	}
}

/// Name the JSONPath feature a stray character belongs to, if any.
fn classify(found: char, offset: usize) -> ExpressionError {
	let operator = match found {
		'?' => "filter expressions",
		'(' => "script expressions",
		':' => "array slices",
		',' => "unions",
		'@' => "current-node references",
		_ => return unexpected(found, offset),
	};
	ExpressionError::Unsupported { operator, offset }
}

fn unexpected(found: char, offset: usize) -> ExpressionError {
	ExpressionError::UnexpectedChar { found, offset }
}

#[cfg(test)]
#[path = "expr_test.rs"]
mod tests;

use thiserror::Error;

/// Failures while turning input into a laid-out tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
	/// The input text was blank.
	#[error("please enter JSON data")]
	EmptyInput,

	/// The input text is not a JSON document.
	#[error("invalid JSON format: {0}")]
	MalformedInput(String),

	/// The document nests deeper than the configured bound.
	#[error("structure nests deeper than {limit} levels")]
	StructureTooDeep {
		/// The configured `max_depth`.
		limit: usize,
	},

	/// A [`LayoutConfig`](super::LayoutConfig) field is unusable.
	#[error("invalid layout configuration: {0}")]
	InvalidConfig(&'static str),
}

/// Why a search expression was rejected. Offsets are byte offsets into the
/// normalized expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionError {
	/// The expression does not begin with the root marker.
	#[error("expression must start with `$`")]
	MissingRoot,

	/// A character that cannot start or continue a segment.
	#[error("unexpected `{found}` at offset {offset}")]
	UnexpectedChar {
		/// The offending character.
		found: char,
		/// Where it sits.
		offset: usize,
	},

	/// Input stopped inside a segment.
	#[error("expression ends unexpectedly after offset {offset}")]
	UnexpectedEnd {
		/// Start of the unfinished segment.
		offset: usize,
	},

	/// A quoted member name without its closing quote.
	#[error("unterminated quoted name starting at offset {offset}")]
	UnterminatedString {
		/// Position of the opening quote.
		offset: usize,
	},

	/// Bracket contents that do not fit an `i64`.
	#[error("invalid array index `{text}` at offset {offset}")]
	InvalidIndex {
		/// The digits as written.
		text: String,
		/// Where the index starts.
		offset: usize,
	},

	/// Valid JSONPath that this dialect does not evaluate.
	#[error("{operator} are not supported (offset {offset})")]
	Unsupported {
		/// Human name of the feature, e.g. "filter expressions".
		operator: &'static str,
		/// Where the operator appears.
		offset: usize,
	},
}

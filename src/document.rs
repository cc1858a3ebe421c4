//! Text intake for the input panel. The tree core only ever sees parsed
//! values; this is where raw text becomes one.

use log::debug;
use serde_json::Value;

use crate::tree::TreeError;

/// Parse pasted text into a JSON document.
///
/// # Errors
///
/// [`TreeError::EmptyInput`] for blank text, [`TreeError::MalformedInput`]
/// when the text is not valid JSON.
pub fn parse_document(text: &str) -> Result<Value, TreeError> {
	if text.trim().is_empty() {
		return Err(TreeError::EmptyInput);
	}
	serde_json::from_str(text).map_err(|e| {
		debug!("rejected input: {e}");
		TreeError::MalformedInput(e.to_string())
	})
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

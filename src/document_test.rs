use serde_json::json;

use super::*;

#[test]
fn parses_valid_json() {
	assert_eq!(parse_document(r#"{"a": [1, null]}"#), Ok(json!({"a": [1, null]})));
	assert_eq!(parse_document("  42 "), Ok(json!(42)));
}

#[test]
fn blank_text_is_empty_input() {
	assert_eq!(parse_document(""), Err(TreeError::EmptyInput));
	assert_eq!(parse_document(" \n\t"), Err(TreeError::EmptyInput));
}

#[test]
fn garbage_is_malformed() {
	assert!(matches!(parse_document("{a: 1}"), Err(TreeError::MalformedInput(_))));
	assert!(matches!(parse_document("[1, 2"), Err(TreeError::MalformedInput(_))));
}

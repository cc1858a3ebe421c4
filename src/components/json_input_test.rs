use super::*;

#[test]
fn blank_and_malformed_get_distinct_messages() {
	assert_eq!(input_error(&TreeError::EmptyInput), "❌ Please enter JSON data");
	assert_eq!(
		input_error(&TreeError::MalformedInput("eof".into())),
		"❌ Invalid JSON format"
	);
}

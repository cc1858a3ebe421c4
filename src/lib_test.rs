use super::*;

#[test]
fn console_logs_debug_in_every_profile() {
	assert_eq!(LOG_LEVEL, Level::Debug);
	assert!(LOG_LEVEL >= Level::Info);
}

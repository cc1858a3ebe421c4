use serde_json::json;

use super::*;
use crate::tree::{LayoutConfig, layout};

#[test]
fn truncate_keeps_short_text() {
	assert_eq!(truncate("hello", 15), "hello");
	assert_eq!(truncate("exactly fifteen", 15), "exactly fifteen");
	assert_eq!(truncate("", 15), "");
}

#[test]
fn truncate_cuts_long_text() {
	assert_eq!(truncate("sixteen chars!!!", 15), "sixteen chars!!...");
	assert_eq!(truncate("ééééééééééééééééé", 15), "ééééééééééééééé...");
}

#[test]
fn display_text_by_type() {
	assert_eq!(display_text(&json!("x")), "x");
	assert_eq!(display_text(&json!(null)), "null");
	assert_eq!(display_text(&json!(true)), "true");
	assert_eq!(display_text(&json!(42)), "42");
	assert_eq!(display_text(&json!(-1.5)), "-1.5");
}

#[test]
fn labels_summarize_containers() {
	let graph = layout(&json!({"list": [1, 2, 3], "obj": {"k": "v"}})).unwrap();
	let max = LayoutConfig::default().label_max_chars;

	let root = NodeLabel::for_node(&graph, &graph.nodes[0], max);
	assert_eq!(root.heading, "Root");
	assert_eq!(root.detail, "{2}");

	let list = NodeLabel::for_node(&graph, graph.find_by_path("$.list").unwrap(), max);
	assert_eq!(list.heading, "list");
	assert_eq!(list.detail, "[3]");

	let obj = NodeLabel::for_node(&graph, graph.find_by_path("$.obj").unwrap(), max);
	assert_eq!(obj.detail, "{1}");

	let elem = NodeLabel::for_node(&graph, graph.find_by_path("$.list[1]").unwrap(), max);
	assert_eq!(elem.heading, "1");
	assert_eq!(elem.detail, "2");
}

#[test]
fn truncation_leaves_value_and_path_alone() {
	let long = "a very long string value indeed";
	let graph = layout(&json!({"description": long})).unwrap();
	let node = graph.find_by_path("$.description").unwrap();

	let label = NodeLabel::for_node(&graph, node, 15);
	assert_eq!(label.detail, "a very long str...");
	assert_eq!(graph.value(node.id), Some(&json!(long)));
	assert_eq!(node.path, "$.description");
}

use serde_json::json;

use super::*;
use crate::tree::layout;

fn view() -> TreeViewState {
	let graph = layout(&json!({"a": 1, "b": [2, 3]})).unwrap();
	let mut state = TreeViewState::new(LayoutConfig::default(), 1000.0, 500.0);
	state.set_graph(Some(Arc::new(graph)));
	state.fit_view(None);
	state
}

fn to_screen(state: &TreeViewState, x: f64, y: f64) -> (f64, f64) {
	(
		x * state.transform.k + state.transform.x,
		y * state.transform.k + state.transform.y,
	)
}

#[test]
fn hit_test_finds_node_boxes() {
	let state = view();
	let (sx, sy) = to_screen(&state, 280.0, 360.0);
	assert_eq!(state.node_at_position(sx, sy), Some(NodeId(5)));

	let (sx, sy) = to_screen(&state, 0.0, 90.0);
	assert_eq!(state.node_at_position(sx, sy), None);
}

#[test]
fn hit_test_without_graph() {
	let state = TreeViewState::new(LayoutConfig::default(), 100.0, 100.0);
	assert_eq!(state.node_at_position(50.0, 50.0), None);
}

#[test]
fn focus_glides_to_node() {
	let mut state = view();
	state.focus(Some(NodeId(5)));
	assert_eq!(state.selected, Some(NodeId(5)));
	assert!(state.glide.is_some());

	for _ in 0..100 {
		state.tick(0.016);
	}
	assert!(state.glide.is_none());
	assert_eq!(state.transform.k, scale::FOCUS_ZOOM);
	assert_eq!(to_screen(&state, 280.0, 360.0), (500.0, 250.0));
}

#[test]
fn focus_none_clears_selection() {
	let mut state = view();
	state.focus(Some(NodeId(2)));
	state.focus(None);
	assert_eq!(state.selected, None);

	state.focus(Some(NodeId(99)));
	assert_eq!(state.selected, None);
}

#[test]
fn new_graph_drops_selection() {
	let mut state = view();
	state.focus(Some(NodeId(3)));
	state.set_hover(Some(NodeId(2)));
	state.set_graph(Some(Arc::new(layout(&json!([1])).unwrap())));
	assert_eq!(state.selected, None);
	assert_eq!(state.hover.node, None);
}

#[test]
fn short_drag_is_a_click() {
	let mut state = view();
	state.begin_pan(10.0, 10.0);
	state.drag_to(11.0, 12.0);
	assert!(state.end_pan());

	state.begin_pan(10.0, 10.0);
	state.drag_to(60.0, 10.0);
	let before = state.transform.x;
	assert!(!state.end_pan());
	assert_eq!(before, state.pan.transform_start_x + 50.0);
}

#[test]
fn hover_fades_out() {
	let mut state = view();
	assert!(state.set_hover(Some(NodeId(2))));
	assert!(!state.set_hover(Some(NodeId(2))));
	for _ in 0..60 {
		state.tick(0.016);
	}
	assert!(state.hover.highlight_t > 0.9);

	state.set_hover(None);
	assert_eq!(state.hover.prev_node, Some(NodeId(2)));
	for _ in 0..200 {
		state.tick(0.016);
	}
	assert_eq!(state.hover.highlight_t, 0.0);
	assert_eq!(state.hover.prev_node, None);
}

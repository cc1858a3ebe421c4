use std::collections::HashSet;

use json_tree_canvas::tree::{
	LayoutConfig, MatchMode, MatchResult, SearchOutcome, layout, resolve, resolve_with, search,
};
use proptest::prelude::*;
use serde_json::Value;

// -- Strategy helpers --

fn arb_key() -> impl Strategy<Value = String> {
	prop_oneof![
		"[a-z_$][a-z0-9_-]{0,6}",
		"[0-9]{1,3}",
		// printable ASCII: brackets, dots, quotes and backslashes included
		"[ -~]{0,6}",
	]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::from),
		any::<i32>().prop_map(Value::from),
		"[a-zA-Z ]{0,12}".prop_map(Value::from),
	]
}

fn arb_json() -> impl Strategy<Value = Value> {
	arb_leaf().prop_recursive(5, 64, 6, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
			prop::collection::vec((arb_key(), inner), 0..6)
				.prop_map(|entries| Value::Object(entries.into_iter().collect())),
		]
	})
}

fn count_nodes(value: &Value) -> usize {
	1 + match value {
		Value::Array(items) => items.iter().map(count_nodes).sum(),
		Value::Object(map) => map.values().map(count_nodes).sum(),
		_ => 0,
	}
}

proptest! {
	#[test]
	fn one_node_per_value(doc in arb_json()) {
		let graph = layout(&doc).unwrap();
		prop_assert_eq!(graph.len(), count_nodes(&doc));
		prop_assert_eq!(graph.edges.len(), graph.len() - 1);
		prop_assert_eq!(graph.nodes.iter().filter(|n| n.is_root()).count(), 1);

		let targets: HashSet<_> = graph.edges.iter().map(|e| e.target).collect();
		let parentless: Vec<_> = graph.nodes.iter().filter(|n| !targets.contains(&n.id)).collect();
		prop_assert_eq!(parentless.len(), 1);
		prop_assert!(parentless[0].is_root());
		prop_assert_eq!(targets.len(), graph.edges.len());
	}

	#[test]
	fn paths_are_unique(doc in arb_json()) {
		let graph = layout(&doc).unwrap();
		let mut seen = HashSet::new();
		for node in &graph.nodes {
			prop_assert!(seen.insert(node.path.clone()), "duplicate path {}", node.path);
		}
	}

	#[test]
	fn children_sit_one_level_down(doc in arb_json()) {
		let config = LayoutConfig::default();
		let graph = layout(&doc).unwrap();
		for edge in &graph.edges {
			let source = graph.node(edge.source).unwrap();
			let target = graph.node(edge.target).unwrap();
			prop_assert_eq!(target.depth, source.depth + 1);
			prop_assert_eq!(target.position.y - source.position.y, config.vertical_spacing);
		}
	}

	#[test]
	fn boxes_on_a_level_never_overlap(doc in arb_json()) {
		let config = LayoutConfig::default();
		let graph = layout(&doc).unwrap();
		let max_depth = graph.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
		for depth in 0..=max_depth {
			let mut xs: Vec<f64> = graph
				.nodes
				.iter()
				.filter(|n| n.depth == depth)
				.map(|n| n.position.x)
				.collect();
			xs.sort_by(f64::total_cmp);
			for pair in xs.windows(2) {
				prop_assert!(pair[1] - pair[0] >= config.node_width - 1e-6);
			}
		}
	}

	#[test]
	fn every_node_path_resolves_to_its_value(doc in arb_json()) {
		let graph = layout(&doc).unwrap();
		for node in &graph.nodes {
			match resolve(&doc, &node.path) {
				MatchResult::Matched { value, path } => {
					prop_assert_eq!(Some(&value), graph.value(node.id));
					prop_assert_eq!(&path, &node.path);
				}
				other => prop_assert!(false, "{} resolved to {:?}", node.path, other),
			}
		}
	}

	#[test]
	fn canonical_search_always_lands_on_a_node(doc in arb_json()) {
		let graph = layout(&doc).unwrap();
		match resolve_with(&doc, "$..*", MatchMode::Canonical) {
			MatchResult::Matched { path, .. } => {
				let outcome = search(&graph, "$..*", MatchMode::Canonical);
				let found = matches!(outcome, SearchOutcome::Found { path: ref p, .. } if *p == path);
				prop_assert!(found);
			}
			MatchResult::NoMatch => prop_assert_eq!(graph.len(), 1),
			other => prop_assert!(false, "unexpected {:?}", other),
		}
	}
}

//! Two-pass tidy layout: measure subtree widths bottom-up, then place nodes
//! pre-order, centering each child row under its parent.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

use super::config::LayoutConfig;
use super::error::TreeError;
use super::graph::{GraphEdge, GraphNode, NodeId, NodeKey, NodeKind, Position, TreeGraph};
use super::path::{ROOT_PATH, child_path};
use super::value::{child_count, children};

/// Lay out `document` with [`LayoutConfig::default`].
///
/// # Errors
///
/// Returns [`TreeError::StructureTooDeep`] when nesting exceeds the default
/// depth bound.
pub fn layout(document: &Value) -> Result<TreeGraph, TreeError> {
	layout_with(document, &LayoutConfig::default())
}

/// Lay out a copy of `document`. The graph keeps that single copy; use
/// [`layout_shared`] to hand over an existing [`Arc`] instead.
///
/// # Errors
///
/// See [`layout_shared`].
pub fn layout_with(document: &Value, config: &LayoutConfig) -> Result<TreeGraph, TreeError> {
	layout_shared(Arc::new(document.clone()), config)
}

/// Lay out `document` into positioned nodes and parent to child edges.
///
/// The graph shares the document rather than copying values into nodes, so
/// its size tracks the document, not the sum of all subtrees. Every call
/// starts a fresh id sequence.
///
/// # Errors
///
/// Returns [`TreeError::InvalidConfig`] for unusable sizes and
/// [`TreeError::StructureTooDeep`] when nesting exceeds `config.max_depth`.
pub fn layout_shared(document: Arc<Value>, config: &LayoutConfig) -> Result<TreeGraph, TreeError> {
	config.validate()?;
	let extent = measure(&document, 0, config).inspect_err(|e| warn!("layout aborted: {e}"))?;

	let mut builder = Builder {
		config,
		graph: TreeGraph::for_document(Arc::clone(&document)),
		next_id: 1,
	};
	builder.place(
		Slot {
			key: NodeKey::Root,
			path: ROOT_PATH.to_owned(),
			parent: None,
			depth: 0,
			x: 0.0,
		},
		&document,
		&extent,
	);

	let graph = builder.graph;
	debug!(
		"laid out {} nodes, {} edges, width {}",
		graph.nodes.len(),
		graph.edges.len(),
		extent.width
	);
	Ok(graph)
}

/// Subtree width of a value, mirrored for each child in natural order.
struct Extent {
	width: f64,
	children: Vec<Extent>,
}

fn measure(value: &Value, depth: usize, config: &LayoutConfig) -> Result<Extent, TreeError> {
	if let Some(limit) = config.max_depth {
		if depth > limit {
			return Err(TreeError::StructureTooDeep { limit });
		}
	}
	let children = children(value)
		.map(|(_, child)| measure(child, depth + 1, config))
		.collect::<Result<Vec<_>, _>>()?;
	let width = row_width(&children, config).max(config.node_width);
	Ok(Extent { width, children })
}

/// Total span of a row of sibling subtrees including the gaps between them.
fn row_width(row: &[Extent], config: &LayoutConfig) -> f64 {
	if row.is_empty() {
		return 0.0;
	}
	#[allow(clippy::cast_precision_loss)]
	let gaps = (row.len() - 1) as f64 * config.horizontal_spacing;
	row.iter().map(|e| e.width).sum::<f64>() + gaps
}

/// Where the parent wants a child to go.
struct Slot {
	key: NodeKey,
	path: String,
	parent: Option<NodeId>,
	depth: usize,
	x: f64,
}

struct Builder<'c> {
	config: &'c LayoutConfig,
	graph: TreeGraph,
	next_id: usize,
}

impl Builder<'_> {
	fn allocate_id(&mut self) -> NodeId {
		let id = NodeId(self.next_id);
		self.next_id += 1;
		id
	}

	fn place(&mut self, slot: Slot, value: &Value, extent: &Extent) {
		let id = self.allocate_id();
		#[allow(clippy::cast_precision_loss)]
		let y = slot.depth as f64 * self.config.vertical_spacing;

		if let Some(parent) = slot.parent {
			self.graph.edges.push(GraphEdge::new(parent, id));
		}
		self.graph.nodes.push(GraphNode {
			id,
			kind: NodeKind::of(value),
			key: slot.key,
			path: slot.path.clone(),
			parent: slot.parent,
			position: Position { x: slot.x, y },
			depth: slot.depth,
			child_count: child_count(value),
			subtree_width: extent.width,
		});

		let spacing = self.config.horizontal_spacing;
		let mut cursor = slot.x - row_width(&extent.children, self.config) / 2.0;
		for ((key, child), child_extent) in children(value).zip(&extent.children) {
			let path = child_path(&slot.path, &key);
			let x = cursor + child_extent.width / 2.0;
			self.place(
				Slot {
					key,
					path,
					parent: Some(id),
					depth: slot.depth + 1,
					x,
				},
				child,
				child_extent,
			);
			cursor += child_extent.width + spacing;
		}
	}
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;

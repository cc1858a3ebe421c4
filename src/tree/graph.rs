use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::config::LayoutConfig;

/// Node identifier, assigned in pre-order starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "node_{}", self.0)
	}
}

/// Structural category of a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// A JSON object, empty or not.
	Object,
	/// A JSON array, empty or not.
	Array,
	/// Any scalar, `null` included.
	Primitive,
}

impl NodeKind {
	/// Classify a value. `null` is a primitive.
	#[must_use]
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Object(_) => Self::Object,
			Value::Array(_) => Self::Array,
			_ => Self::Primitive,
		}
	}

	/// Lowercase name as shown in the hover card.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Object => "object",
			Self::Array => "array",
			Self::Primitive => "primitive",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How a node was reached from its parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
	/// The document root. Never appears in a path.
	Root,
	/// Object member name.
	Member(String),
	/// Array element index.
	Index(usize),
}

impl fmt::Display for NodeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Root => f.write_str("root"),
			Self::Member(name) => f.write_str(name),
			Self::Index(i) => write!(f, "{i}"),
		}
	}
}

/// Center of a node box in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal placement among siblings; the root sits at 0.
	pub x: f64,
	/// `depth * vertical_spacing`.
	pub y: f64,
}

/// One visited JSON value. The value itself stays in the graph's shared
/// document; fetch it with [`TreeGraph::value`].
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Pre-order id.
	pub id: NodeId,
	/// Object, array or primitive.
	pub kind: NodeKind,
	/// Member name or index leading here from the parent.
	pub key: NodeKey,
	/// Canonical path expression from the document root.
	pub path: String,
	/// `None` only for the root.
	pub parent: Option<NodeId>,
	/// Center of the node box.
	pub position: Position,
	/// Nesting level; the root is 0 and `position.y = depth * vertical_spacing`.
	pub depth: usize,
	/// Number of elements or members; zero for primitives.
	pub child_count: usize,
	/// Horizontal span reserved for this node and its descendants.
	pub subtree_width: f64,
}

impl GraphNode {
	/// Whether this is the document root.
	#[must_use]
	pub fn is_root(&self) -> bool {
		self.key == NodeKey::Root
	}

	/// Left and right edges of the span allocated by the parent.
	#[must_use]
	pub fn span(&self) -> (f64, f64) {
		let half = self.subtree_width / 2.0;
		(self.position.x - half, self.position.x + half)
	}
}

/// Parent to child relationship.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	/// `e_<source>_<target>`.
	pub id: String,
	/// Parent node.
	pub source: NodeId,
	/// Child node.
	pub target: NodeId,
}

impl GraphEdge {
	/// Edge from `source` to `target` with its derived id.
	#[must_use]
	pub fn new(source: NodeId, target: NodeId) -> Self {
		Self {
			id: format!("e_{source}_{target}"),
			source,
			target,
		}
	}
}

/// Axis-aligned box enclosing every node box of a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Left edge.
	pub min_x: f64,
	/// Top edge.
	pub min_y: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub max_y: f64,
}

impl Bounds {
	/// Horizontal extent.
	#[must_use]
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	/// Vertical extent.
	#[must_use]
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	/// Midpoint of the box.
	#[must_use]
	pub fn center(&self) -> (f64, f64) {
		(
			f64::midpoint(self.min_x, self.max_x),
			f64::midpoint(self.min_y, self.max_y),
		)
	}
}

/// Output of one layout run. Nodes are stored in pre-order, so the root is
/// always first and `nodes[i].id == NodeId(i + 1)`.
///
/// The document is held once behind an [`Arc`]; nodes only carry the key
/// that leads to their value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeGraph {
	/// Nodes in pre-order.
	pub nodes: Vec<GraphNode>,
	/// One edge per non-root node, in pre-order of the target.
	pub edges: Vec<GraphEdge>,
	document: Arc<Value>,
}

impl TreeGraph {
	pub(crate) fn for_document(document: Arc<Value>) -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			document,
		}
	}

	/// The document this graph was laid out from.
	#[must_use]
	pub fn document(&self) -> &Arc<Value> {
		&self.document
	}

	/// Number of nodes.
	#[must_use]
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the graph has no nodes at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The root node, if any.
	#[must_use]
	pub fn root(&self) -> Option<&GraphNode> {
		self.nodes.first()
	}

	/// Node by id.
	#[must_use]
	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		id.0.checked_sub(1).and_then(|i| self.nodes.get(i))
	}

	/// The JSON value behind `id`, found by following keys down from the
	/// document root.
	#[must_use]
	pub fn value(&self, id: NodeId) -> Option<&Value> {
		let mut route = Vec::new();
		let mut cursor = self.node(id)?;
		while let Some(parent) = cursor.parent {
			route.push(&cursor.key);
			cursor = self.node(parent)?;
		}
		route
			.into_iter()
			.rev()
			.try_fold(self.document.as_ref(), |value, key| match (key, value) {
				(NodeKey::Member(name), Value::Object(members)) => members.get(name),
				(NodeKey::Index(i), Value::Array(items)) => items.get(*i),
				_ => None,
			})
	}

	/// Exact string match against stored node paths.
	#[must_use]
	pub fn find_by_path(&self, path: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.path == path)
	}

	/// Direct children of `id`, in layout order.
	pub fn children(&self, id: NodeId) -> impl Iterator<Item = &GraphNode> + '_ {
		self.edges
			.iter()
			.filter(move |e| e.source == id)
			.filter_map(|e| self.node(e.target))
	}

	/// Parent of `id`; `None` for the root.
	#[must_use]
	pub fn parent(&self, id: NodeId) -> Option<&GraphNode> {
		self.node(id)?.parent.and_then(|p| self.node(p))
	}

	/// Box around all node boxes, or `None` for an empty graph.
	#[must_use]
	pub fn bounds(&self, config: &LayoutConfig) -> Option<Bounds> {
		let (hw, hh) = (config.node_width / 2.0, config.node_height / 2.0);
		self.nodes.iter().fold(None, |acc, n| {
			let b = Bounds {
				min_x: n.position.x - hw,
				min_y: n.position.y - hh,
				max_x: n.position.x + hw,
				max_y: n.position.y + hh,
			};
			Some(match acc {
				None => b,
				Some(a) => Bounds {
					min_x: a.min_x.min(b.min_x),
					min_y: a.min_y.min(b.min_y),
					max_x: a.max_x.max(b.max_x),
					max_y: a.max_y.max(b.max_y),
				},
			})
		})
	}

	/// Hand the node and edge lists to a consumer that wants ownership.
	#[must_use]
	pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
		(self.nodes, self.edges)
	}
}

use std::sync::Arc;

use crate::theme::Theme;
use crate::tree::{GraphNode, LayoutConfig, NodeId, TreeGraph};

use super::scale;

/// Screen drags shorter than this still count as a click.
const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

impl ViewTransform {
	fn lerp(self, to: Self, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

/// Request from the surrounding UI to move the camera. `serial` changes on
/// every request so repeating the same target still fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusRequest {
	pub serial: u32,
	pub target: Option<NodeId>,
}

impl FocusRequest {
	/// Highlight and center `target`, or clear the highlight and fit the tree.
	pub fn request(&mut self, target: Option<NodeId>) {
		self.serial = self.serial.wrapping_add(1);
		self.target = target;
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<NodeId>,
	pub highlight_t: f64,
	pub prev_node: Option<NodeId>,
}

struct Glide {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

pub struct TreeViewState {
	pub graph: Option<Arc<TreeGraph>>,
	pub config: LayoutConfig,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<NodeId>,
	pub theme: Theme,
	pub width: f64,
	pub height: f64,
	glide: Option<Glide>,
}

impl TreeViewState {
	pub fn new(config: LayoutConfig, width: f64, height: f64) -> Self {
		Self {
			graph: None,
			config,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			theme: Theme::default(),
			width,
			height,
			glide: None,
		}
	}

	/// Swap in a freshly laid-out tree. Selection and hover belong to the old
	/// tree and are dropped.
	pub fn set_graph(&mut self, graph: Option<Arc<TreeGraph>>) {
		self.graph = graph;
		self.selected = None;
		self.hover = HoverState::default();
		self.pan = PanState::default();
		self.fit_view(Some(scale::FIT_DURATION));
	}

	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		self.graph.as_deref().and_then(|g| g.node(id))
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<NodeId> {
		let graph = self.graph.as_deref()?;
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let (hw, hh) = (self.config.node_width / 2.0, self.config.node_height / 2.0);
		graph
			.nodes
			.iter()
			.rev()
			.find(|n| (n.position.x - gx).abs() <= hw && (n.position.y - gy).abs() <= hh)
			.map(|n| n.id)
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<NodeId>) -> bool {
		if self.hover.node == node {
			return false;
		}
		if node.is_none() {
			self.hover.prev_node = self.hover.node.take();
		} else {
			self.hover.prev_node = None;
			self.hover.highlight_t = 0.0;
		}
		self.hover.node = node;
		true
	}

	/// Highlight `target` and glide to it, or clear the highlight and glide
	/// back to the whole tree. Unknown ids are treated as a clear.
	pub fn focus(&mut self, target: Option<NodeId>) {
		match target.and_then(|id| self.node(id)).map(|n| (n.id, n.position)) {
			Some((id, pos)) => {
				self.selected = Some(id);
				let to = scale::center(pos.x, pos.y, scale::FOCUS_ZOOM, self.width, self.height);
				self.glide_to(to, Some(scale::FOCUS_DURATION));
			}
			None => {
				self.selected = None;
				self.fit_view(Some(scale::RESET_DURATION));
			}
		}
	}

	/// Fit the whole tree into view, animated over `duration` seconds or
	/// immediately when `None`.
	pub fn fit_view(&mut self, duration: Option<f64>) {
		let bounds = self
			.graph
			.as_deref()
			.and_then(|g| g.bounds(&self.config));
		let Some(bounds) = bounds else {
			self.glide = None;
			return;
		};
		let to = scale::fit(&bounds, self.width, self.height);
		self.glide_to(to, duration);
	}

	fn glide_to(&mut self, to: ViewTransform, duration: Option<f64>) {
		match duration {
			Some(duration) if duration > 0.0 => {
				self.glide = Some(Glide {
					from: self.transform,
					to,
					elapsed: 0.0,
					duration,
				});
			}
			_ => {
				self.glide = None;
				self.transform = to;
			}
		}
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, zoom_in: bool) {
		self.glide = None;
		self.transform = scale::zoom_at(self.transform, sx, sy, zoom_in);
	}

	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.glide = None;
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if dx.hypot(dy) > CLICK_SLOP {
			self.pan.moved = true;
		}
		self.transform.x = self.pan.transform_start_x + dx;
		self.transform.y = self.pan.transform_start_y + dy;
	}

	/// Finish a pan. Returns `true` when the gesture never left the click
	/// slop, i.e. it was a click rather than a drag.
	pub fn end_pan(&mut self) -> bool {
		let was_click = self.pan.active && !self.pan.moved;
		self.pan.active = false;
		self.pan.moved = false;
		was_click
	}

	pub fn tick(&mut self, dt: f64) {
		if let Some(glide) = &mut self.glide {
			glide.elapsed += dt;
			let t = glide.elapsed / glide.duration;
			if t >= 1.0 {
				self.transform = glide.to;
				self.glide = None;
			} else {
				self.transform = glide.from.lerp(glide.to, scale::ease_out_cubic(t));
			}
		}

		let (target, speed) = if self.hover.node.is_some() {
			(1.0, 6.0)
		} else {
			(0.0, 4.0)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_node = None;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use super::error::TreeError;

pub const NODE_WIDTH: f64 = 220.0;
pub const NODE_HEIGHT: f64 = 90.0;
pub const HORIZONTAL_SPACING: f64 = 60.0;
pub const VERTICAL_SPACING: f64 = 180.0;
pub const LABEL_MAX_CHARS: usize = 15;
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Sizing and safety knobs for [`layout_with`](super::layout_with).
///
/// All lengths are in abstract layout units. `max_depth` bounds how deep the
/// recursive passes may descend; `None` lifts the bound entirely.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Unit width `W` of a single node box.
	pub node_width: f64,
	/// Height of a single node box. Only consumed by presentation and bounds.
	pub node_height: f64,
	/// Gap between adjacent sibling subtrees.
	pub horizontal_spacing: f64,
	/// Distance between consecutive depth levels.
	pub vertical_spacing: f64,
	/// Primitive labels longer than this many characters are truncated.
	pub label_max_chars: usize,
	/// Deepest allowed nesting level (the root is depth 0).
	pub max_depth: Option<usize>,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_width: NODE_WIDTH,
			node_height: NODE_HEIGHT,
			horizontal_spacing: HORIZONTAL_SPACING,
			vertical_spacing: VERTICAL_SPACING,
			label_max_chars: LABEL_MAX_CHARS,
			max_depth: Some(DEFAULT_MAX_DEPTH),
		}
	}
}

impl LayoutConfig {
	/// Replace the depth bound.
	#[must_use]
	pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Check that every length is usable for layout arithmetic.
	///
	/// # Errors
	///
	/// Returns [`TreeError::InvalidConfig`] naming the first offending field.
	pub fn validate(&self) -> Result<(), TreeError> {
		let positive = |v: f64| v.is_finite() && v > 0.0;
		if !positive(self.node_width) {
			return Err(TreeError::InvalidConfig("node_width must be positive"));
		}
		if !positive(self.node_height) {
			return Err(TreeError::InvalidConfig("node_height must be positive"));
		}
		if !self.horizontal_spacing.is_finite() || self.horizontal_spacing < 0.0 {
			return Err(TreeError::InvalidConfig(
				"horizontal_spacing must be zero or positive",
			));
		}
		if !positive(self.vertical_spacing) {
			return Err(TreeError::InvalidConfig("vertical_spacing must be positive"));
		}
		Ok(())
	}
}

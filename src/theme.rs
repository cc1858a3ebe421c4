//! Light/dark palettes. All node styling is derived here from `NodeKind`, so
//! the tree core never carries colors.

use crate::tree::NodeKind;

/// Page color scheme, toggled from the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Light background.
	#[default]
	Light,
	/// Dark background.
	Dark,
}

/// Box colors for one node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeColors {
	/// Box fill.
	pub fill: &'static str,
	/// Box outline.
	pub border: &'static str,
}

/// Every color the canvas draws with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
	/// Canvas background.
	pub background: &'static str,
	/// Dot grid.
	pub grid: &'static str,
	/// Parent to child links.
	pub edge: &'static str,
	/// Node captions.
	pub text: &'static str,
	/// Border of the search hit.
	pub highlight: &'static str,
	/// Glow around the search hit.
	pub highlight_glow: &'static str,
	/// Object boxes.
	pub object: NodeColors,
	/// Array boxes.
	pub array: NodeColors,
	/// Primitive boxes.
	pub primitive: NodeColors,
}

static LIGHT: Palette = Palette {
	background: "#fafafa",
	grid: "#d0d4da",
	edge: "#2d3748",
	text: "#ffffff",
	highlight: "#ff4444",
	highlight_glow: "rgba(255, 68, 68, 0.8)",
	object: NodeColors {
		fill: "#2c5aa0",
		border: "#1a4785",
	},
	array: NodeColors {
		fill: "#1e8a5e",
		border: "#0d6e47",
	},
	primitive: NodeColors {
		fill: "#b07c32",
		border: "#8e6126",
	},
};

static DARK: Palette = Palette {
	background: "#1a1a2e",
	grid: "#2e2e4a",
	edge: "#8fa3bf",
	text: "#f5f5f5",
	highlight: "#ff5c5c",
	highlight_glow: "rgba(255, 92, 92, 0.85)",
	object: NodeColors {
		fill: "#5859a4",
		border: "#3d3e7a",
	},
	array: NodeColors {
		fill: "#3e8970",
		border: "#2a6350",
	},
	primitive: NodeColors {
		fill: "#a48449",
		border: "#7a6133",
	},
};

impl Theme {
	/// The other theme.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Value for the `data-theme` attribute.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Whether this is [`Theme::Dark`].
	#[must_use]
	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}

	/// Colors for this theme.
	#[must_use]
	pub fn palette(self) -> &'static Palette {
		match self {
			Self::Light => &LIGHT,
			Self::Dark => &DARK,
		}
	}
}

impl Palette {
	/// Fill and border for `kind`.
	#[must_use]
	pub fn node_colors(&self, kind: NodeKind) -> NodeColors {
		match kind {
			NodeKind::Object => self.object,
			NodeKind::Array => self.array,
			NodeKind::Primitive => self.primitive,
		}
	}
}

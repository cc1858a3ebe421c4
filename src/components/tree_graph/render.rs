use web_sys::CanvasRenderingContext2d;

use crate::theme::Palette;
use crate::tree::label::{NodeLabel, truncate};
use crate::tree::{Bounds, GraphNode, LayoutConfig, NodeId, NodeKind, TreeGraph};

use super::scale::ease_out_cubic;
use super::state::{TreeViewState, ViewTransform};

const GRID_GAP: f64 = 20.0;
const CORNER_RADIUS: f64 = 10.0;
const BORDER_WIDTH: f64 = 3.0;
const HIGHLIGHT_BORDER_WIDTH: f64 = 4.0;
const EDGE_WIDTH: f64 = 3.0;
const FONT: &str = "600 22px 'Segoe UI', Arial, sans-serif";
const LINE_HEIGHT: f64 = 30.0;

/// Per-frame emphasis layered on top of the plain tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decorations {
	pub selected: Option<NodeId>,
	pub hovered: Option<NodeId>,
	/// Eased hover intensity in `0.0..=1.0`.
	pub hover_t: f64,
}

pub fn render(state: &TreeViewState, ctx: &CanvasRenderingContext2d) {
	let palette = state.theme.palette();
	ctx.set_fill_style_str(palette.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, palette, ctx);

	let Some(graph) = state.graph.as_deref() else {
		return;
	};
	let decorations = Decorations {
		selected: state.selected,
		hovered: state.hover.node.or(state.hover.prev_node),
		hover_t: ease_out_cubic(state.hover.highlight_t),
	};
	let t = state.transform;
	let viewport = Bounds {
		min_x: -t.x / t.k,
		min_y: -t.y / t.k,
		max_x: (state.width - t.x) / t.k,
		max_y: (state.height - t.y) / t.k,
	};
	paint_tree(
		graph,
		&state.config,
		palette,
		t,
		&decorations,
		Some(&viewport),
		ctx,
	);
}

/// Draw edges then nodes under `transform`. Nodes outside `viewport` (world
/// space) are skipped; pass `None` to draw everything.
pub fn paint_tree(
	graph: &TreeGraph,
	config: &LayoutConfig,
	palette: &Palette,
	transform: ViewTransform,
	decorations: &Decorations,
	viewport: Option<&Bounds>,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.save();
	let _ = ctx.translate(transform.x, transform.y);
	let _ = ctx.scale(transform.k, transform.k);

	draw_edges(graph, config, palette, ctx);

	let visible = |n: &GraphNode| {
		viewport.is_none_or(|v| {
			let (hw, hh) = (config.node_width / 2.0, config.node_height / 2.0);
			n.position.x + hw >= v.min_x
				&& n.position.x - hw <= v.max_x
				&& n.position.y + hh >= v.min_y
				&& n.position.y - hh <= v.max_y
		})
	};
	for node in graph.nodes.iter().filter(|n| visible(n)) {
		draw_node(graph, node, config, palette, decorations, ctx);
	}
	ctx.restore();
}

fn draw_grid(state: &TreeViewState, palette: &Palette, ctx: &CanvasRenderingContext2d) {
	let t = state.transform;
	let gap = GRID_GAP * t.k;
	// Too dense to read when zoomed far out.
	if gap < 6.0 {
		return;
	}
	let (ox, oy) = (t.x.rem_euclid(gap), t.y.rem_euclid(gap));
	let size = t.k.max(0.5);
	ctx.set_fill_style_str(palette.grid);
	let mut y = oy;
	while y < state.height {
		let mut x = ox;
		while x < state.width {
			ctx.fill_rect(x, y, size, size);
			x += gap;
		}
		y += gap;
	}
}

/// Curved link from the bottom of each parent box to the top of the child.
fn draw_edges(
	graph: &TreeGraph,
	config: &LayoutConfig,
	palette: &Palette,
	ctx: &CanvasRenderingContext2d,
) {
	let hh = config.node_height / 2.0;
	ctx.set_stroke_style_str(palette.edge);
	ctx.set_line_width(EDGE_WIDTH);
	ctx.begin_path();
	for edge in &graph.edges {
		let (Some(source), Some(target)) = (graph.node(edge.source), graph.node(edge.target)) else {
			continue;
		};
		let (x1, y1) = (source.position.x, source.position.y + hh);
		let (x2, y2) = (target.position.x, target.position.y - hh);
		let mid = f64::midpoint(y1, y2);
		ctx.move_to(x1, y1);
		ctx.bezier_curve_to(x1, mid, x2, mid, x2, y2);
	}
	ctx.stroke();
}

fn draw_node(
	graph: &TreeGraph,
	node: &GraphNode,
	config: &LayoutConfig,
	palette: &Palette,
	decorations: &Decorations,
	ctx: &CanvasRenderingContext2d,
) {
	let (w, h) = (config.node_width, config.node_height);
	let (left, top) = (node.position.x - w / 2.0, node.position.y - h / 2.0);
	let colors = palette.node_colors(node.kind);
	let selected = decorations.selected == Some(node.id);
	let hovered = decorations.hovered == Some(node.id);

	ctx.save();
	if selected {
		ctx.set_shadow_color(palette.highlight_glow);
		ctx.set_shadow_blur(12.0);
	} else if hovered && decorations.hover_t > 0.01 {
		ctx.set_shadow_color(&format!("rgba(0, 0, 0, {})", 0.45 * decorations.hover_t));
		ctx.set_shadow_blur(16.0 * decorations.hover_t);
	} else {
		ctx.set_shadow_color("rgba(0, 0, 0, 0.3)");
		ctx.set_shadow_blur(6.0);
		ctx.set_shadow_offset_y(3.0);
	}
	rounded_rect(ctx, left, top, w, h, CORNER_RADIUS);
	ctx.set_fill_style_str(colors.fill);
	ctx.fill();
	ctx.restore();

	rounded_rect(ctx, left, top, w, h, CORNER_RADIUS);
	if selected {
		ctx.set_stroke_style_str(palette.highlight);
		ctx.set_line_width(HIGHLIGHT_BORDER_WIDTH);
	} else {
		ctx.set_stroke_style_str(colors.border);
		ctx.set_line_width(BORDER_WIDTH);
	}
	ctx.stroke();

	let label = NodeLabel::for_node(graph, node, config.label_max_chars);
	let heading = truncate(&label.heading, config.label_max_chars);
	let heading = if node.kind == NodeKind::Primitive {
		format!("{heading}:")
	} else {
		heading
	};
	ctx.set_fill_style_str(palette.text);
	ctx.set_font(FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let (cx, cy) = (node.position.x, node.position.y);
	let _ = ctx.fill_text_with_max_width(&heading, cx, cy - LINE_HEIGHT / 2.0, w - 16.0);
	let _ = ctx.fill_text_with_max_width(&label.detail, cx, cy + LINE_HEIGHT / 2.0, w - 16.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

//! Viewport math: zoom limits, fitting, centering and export framing.

use crate::tree::Bounds;

use super::state::ViewTransform;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom used when centering on a search hit.
pub const FOCUS_ZOOM: f64 = 1.0;
/// Fraction of the content size kept free around it when fitting.
pub const FIT_PADDING: f64 = 0.2;
pub const WHEEL_STEP: f64 = 1.1;

/// Camera animation lengths, in seconds.
pub const FIT_DURATION: f64 = 0.8;
pub const RESET_DURATION: f64 = 0.6;
pub const FOCUS_DURATION: f64 = 0.6;

pub const EXPORT_PIXEL_RATIO: f64 = 2.0;
/// World-space margin around the tree in exported images.
pub const EXPORT_MARGIN: f64 = 40.0;
/// Largest canvas edge browsers reliably allocate.
pub const MAX_CANVAS_EDGE: f64 = 8192.0;
/// Pixel count browsers still allocate for a canvas; Safari stops at 4096².
pub const MAX_CANVAS_AREA: f64 = 16_777_216.0;

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn clamp_zoom(k: f64) -> f64 {
	k.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Transform that shows all of `bounds` inside a `width` by `height` viewport.
pub fn fit(bounds: &Bounds, width: f64, height: f64) -> ViewTransform {
	let padded = 1.0 + FIT_PADDING;
	let k = clamp_zoom(f64::min(
		width / (bounds.width() * padded),
		height / (bounds.height() * padded),
	));
	let (cx, cy) = bounds.center();
	center(cx, cy, k, width, height)
}

/// Transform that puts world point `(x, y)` in the middle of the viewport.
pub fn center(x: f64, y: f64, k: f64, width: f64, height: f64) -> ViewTransform {
	ViewTransform {
		x: width / 2.0 - x * k,
		y: height / 2.0 - y * k,
		k,
	}
}

/// Zoom by one wheel step around screen point `(sx, sy)`, keeping the world
/// point under the cursor fixed.
pub fn zoom_at(t: ViewTransform, sx: f64, sy: f64, zoom_in: bool) -> ViewTransform {
	let factor = if zoom_in { WHEEL_STEP } else { 1.0 / WHEEL_STEP };
	let k = clamp_zoom(t.k * factor);
	let ratio = k / t.k;
	ViewTransform {
		x: sx - (sx - t.x) * ratio,
		y: sy - (sy - t.y) * ratio,
		k,
	}
}

/// Pixel size and transform for rendering a whole tree offscreen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportFrame {
	pub width: u32,
	pub height: u32,
	pub transform: ViewTransform,
}

/// Scale drops below [`EXPORT_PIXEL_RATIO`] when either edge or the total
/// pixel count would pass the canvas limits. Sizes round down so the area
/// cap holds exactly.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn export_frame(bounds: &Bounds) -> ExportFrame {
	let (w, h) = (
		bounds.width() + 2.0 * EXPORT_MARGIN,
		bounds.height() + 2.0 * EXPORT_MARGIN,
	);
	let ratio = EXPORT_PIXEL_RATIO
		.min(MAX_CANVAS_EDGE / w)
		.min(MAX_CANVAS_EDGE / h)
		.min((MAX_CANVAS_AREA / (w * h)).sqrt());
	ExportFrame {
		width: (w * ratio).floor() as u32,
		height: (h * ratio).floor() as u32,
		transform: ViewTransform {
			x: (EXPORT_MARGIN - bounds.min_x) * ratio,
			y: (EXPORT_MARGIN - bounds.min_y) * ratio,
			k: ratio,
		},
	}
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;

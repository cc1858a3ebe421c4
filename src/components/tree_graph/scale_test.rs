use super::*;

fn bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Bounds {
	Bounds {
		min_x,
		min_y,
		max_x,
		max_y,
	}
}

#[test]
fn fit_centers_content() {
	let b = bounds(-100.0, 0.0, 100.0, 100.0);
	let t = fit(&b, 800.0, 600.0);
	let (cx, cy) = b.center();
	assert!((cx * t.k + t.x - 400.0).abs() < 1e-9);
	assert!((cy * t.k + t.y - 300.0).abs() < 1e-9);
}

#[test]
fn fit_leaves_padding() {
	let b = bounds(0.0, 0.0, 1000.0, 100.0);
	let t = fit(&b, 600.0, 600.0);
	assert!((t.k - 600.0 / 1200.0).abs() < 1e-9);
	assert!(b.width() * t.k < 600.0);
}

#[test]
fn fit_respects_zoom_limits() {
	let tiny = bounds(0.0, 0.0, 1.0, 1.0);
	assert_eq!(fit(&tiny, 800.0, 600.0).k, MAX_ZOOM);

	let huge = bounds(0.0, 0.0, 1.0e7, 10.0);
	assert_eq!(fit(&huge, 800.0, 600.0).k, MIN_ZOOM);
}

#[test]
fn center_puts_point_mid_screen() {
	let t = center(280.0, 360.0, 1.0, 1000.0, 500.0);
	assert_eq!((t.x, t.y, t.k), (220.0, -110.0, 1.0));
}

#[test]
fn zoom_keeps_cursor_point_fixed() {
	let t = ViewTransform { x: 50.0, y: 20.0, k: 1.0 };
	let (sx, sy) = (300.0, 200.0);
	let before = ((sx - t.x) / t.k, (sy - t.y) / t.k);
	let z = zoom_at(t, sx, sy, true);
	let after = ((sx - z.x) / z.k, (sy - z.y) / z.k);
	assert!((before.0 - after.0).abs() < 1e-9);
	assert!((before.1 - after.1).abs() < 1e-9);
	assert!(z.k > t.k);
}

#[test]
fn zoom_is_clamped() {
	let t = ViewTransform { x: 0.0, y: 0.0, k: MAX_ZOOM };
	assert_eq!(zoom_at(t, 0.0, 0.0, true).k, MAX_ZOOM);
	let t = ViewTransform { x: 0.0, y: 0.0, k: MIN_ZOOM };
	assert_eq!(zoom_at(t, 0.0, 0.0, false).k, MIN_ZOOM);
}

#[test]
fn export_frame_covers_bounds_with_margin() {
	let b = bounds(-110.0, -45.0, 110.0, 45.0);
	let frame = export_frame(&b);
	assert_eq!(frame.transform.k, EXPORT_PIXEL_RATIO);
	assert_eq!(frame.width, 600);
	assert_eq!(frame.height, 340);
	assert_eq!(b.min_x * frame.transform.k + frame.transform.x, EXPORT_MARGIN * EXPORT_PIXEL_RATIO);
}

#[test]
fn export_frame_shrinks_for_huge_trees() {
	let b = bounds(0.0, 0.0, 100_000.0, 500.0);
	let frame = export_frame(&b);
	assert!(f64::from(frame.width) <= MAX_CANVAS_EDGE + 1.0);
	assert!(frame.transform.k < 1.0);
}

#[test]
fn export_frame_caps_total_pixels() {
	let b = bounds(0.0, 0.0, 8000.0, 6000.0);
	let frame = export_frame(&b);
	let (w, h) = (f64::from(frame.width), f64::from(frame.height));
	assert!(w <= MAX_CANVAS_EDGE && h <= MAX_CANVAS_EDGE);
	assert!(w * h <= MAX_CANVAS_AREA);
	assert!(w * h > MAX_CANVAS_AREA * 0.99);
	assert!(frame.transform.k < 1.0);
}

#[test]
fn easing_endpoints() {
	assert_eq!(ease_out_cubic(0.0), 0.0);
	assert_eq!(ease_out_cubic(1.0), 1.0);
	assert!(ease_out_cubic(0.5) > 0.5);
}

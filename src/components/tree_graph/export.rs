//! PNG download of the whole tree, independent of the current viewport.

use log::info;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement};

use crate::theme::Theme;
use crate::tree::{LayoutConfig, TreeGraph};

use super::render::{self, Decorations};
use super::scale;

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("no tree to download")]
	EmptyTree,
	#[error("browser document unavailable")]
	NoDocument,
	#[error("2D canvas unavailable")]
	Canvas,
	#[error("browser rejected the export: {0}")]
	Js(String),
}

impl From<JsValue> for ExportError {
	fn from(value: JsValue) -> Self {
		Self::Js(format!("{value:?}"))
	}
}

/// Render `graph` into an offscreen canvas and trigger a download. Returns
/// the file name handed to the browser.
pub fn download_png(
	graph: &TreeGraph,
	config: &LayoutConfig,
	theme: Theme,
) -> Result<String, ExportError> {
	let bounds = graph.bounds(config).ok_or(ExportError::EmptyTree)?;
	let frame = scale::export_frame(&bounds);
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(ExportError::NoDocument)?;

	let canvas: HtmlCanvasElement = document
		.create_element("canvas")?
		.dyn_into()
		.map_err(|_| ExportError::Canvas)?;
	canvas.set_width(frame.width);
	canvas.set_height(frame.height);
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(ExportError::Canvas)?
		.dyn_into()
		.map_err(|_| ExportError::Canvas)?;

	let palette = theme.palette();
	ctx.set_fill_style_str(palette.background);
	ctx.fill_rect(0.0, 0.0, f64::from(frame.width), f64::from(frame.height));
	render::paint_tree(
		graph,
		config,
		palette,
		frame.transform,
		&Decorations::default(),
		None,
		&ctx,
	);

	let data_url = canvas.to_data_url_with_type("image/png")?;
	#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
	let file_name = format!("json-tree-{}.png", js_sys::Date::now() as u64);
	let anchor: HtmlAnchorElement = document
		.create_element("a")?
		.dyn_into()
		.map_err(|_| ExportError::Canvas)?;
	anchor.set_download(&file_name);
	anchor.set_href(&data_url);
	anchor.click();

	info!(
		"exported {} nodes as {file_name} ({}x{})",
		graph.len(),
		frame.width,
		frame.height
	);
	Ok(file_name)
}

//! Write text to the system clipboard.

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("browser document unavailable")]
	NoDocument,
	#[error("copy command was refused")]
	Refused,
	#[error("clipboard call failed: {0}")]
	Js(String),
}

impl From<JsValue> for ClipboardError {
	fn from(value: JsValue) -> Self {
		Self::Js(format!("{value:?}"))
	}
}

/// Copy `text`, preferring the async Clipboard API and falling back to a
/// hidden textarea plus `execCommand("copy")` where that API is missing or
/// rejects the write (non-secure contexts).
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
	if let Some(clipboard) = async_clipboard() {
		match JsFuture::from(clipboard.write_text(text)).await {
			Ok(_) => return Ok(()),
			Err(e) => warn!("clipboard API rejected write, falling back: {e:?}"),
		}
	}
	copy_with_textarea(text)
}

fn async_clipboard() -> Option<Clipboard> {
	let navigator = web_sys::window()?.navigator();
	let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
	if clipboard.is_undefined() || clipboard.is_null() {
		return None;
	}
	clipboard.dyn_into().ok()
}

fn copy_with_textarea(text: &str) -> Result<(), ClipboardError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(ClipboardError::NoDocument)?;
	let body = document.body().ok_or(ClipboardError::NoDocument)?;
	let area: HtmlTextAreaElement = document
		.create_element("textarea")?
		.dyn_into()
		.map_err(|_| ClipboardError::NoDocument)?;
	area.set_value(text);
	let style = area.style();
	style.set_property("position", "fixed")?;
	style.set_property("left", "-9999px")?;
	style.set_property("opacity", "0")?;
	body.append_child(&area)?;
	area.select();

	let copied = document
		.dyn_into::<HtmlDocument>()
		.map_err(|_| ClipboardError::NoDocument)
		.and_then(|html| html.exec_command("copy").map_err(ClipboardError::from));
	area.remove();

	debug!("textarea copy fallback: {copied:?}");
	if copied? { Ok(()) } else { Err(ClipboardError::Refused) }
}

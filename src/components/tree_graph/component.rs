use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::theme::Theme;
use crate::tree::{LayoutConfig, NodeId, TreeGraph};

use super::render;
use super::state::{FocusRequest, TreeViewState};

const FRAME_DT: f64 = 0.016;

type SharedState = Rc<RefCell<Option<TreeViewState>>>;

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (f64::from(p.client_width()), f64::from(p.client_height())))
		.unwrap_or((800.0, 600.0))
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		f64::from(ev.client_x()) - rect.left(),
		f64::from(ev.client_y()) - rect.top(),
	))
}

/// Pan/zoom canvas for a laid-out JSON tree.
///
/// Clicking a node reports it through `on_node_click`; hovering reports
/// through `on_hover`. Each new `focus` request highlights and centers its
/// target, or clears the highlight and fits the tree when the target is
/// `None`.
#[component]
pub fn TreeGraphCanvas(
	#[prop(into)] graph: Signal<Option<Arc<TreeGraph>>>,
	#[prop(into)] focus: Signal<FocusRequest>,
	#[prop(into)] theme: Signal<Theme>,
	#[prop(into)] on_node_click: Callback<NodeId>,
	#[prop(into)] on_hover: Callback<Option<NodeId>>,
	#[prop(optional)] config: LayoutConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas;
		let Some(window): Option<Window> = web_sys::window() else {
			return;
		};
		let (w, h) = parent_size(&canvas);
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		{
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
		}

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				log::error!("2D canvas context unavailable");
				return;
			}
		};

		let mut initial = TreeViewState::new(config.clone(), w, h);
		initial.theme = theme.get_untracked();
		initial.set_graph(graph.get_untracked());
		initial.fit_view(None);
		*state_init.borrow_mut() = Some(initial);

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
			{
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
			}
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// A new document replaces the whole tree.
	let state_graph = state.clone();
	Effect::new(move |_| {
		let next = graph.get();
		if let Some(ref mut s) = *state_graph.borrow_mut() {
			s.set_graph(next);
		}
	});

	let state_focus = state.clone();
	Effect::new(move |_| {
		let request = focus.get();
		if request.serial == 0 {
			return;
		}
		if let Some(ref mut s) = *state_focus.borrow_mut() {
			s.focus(request.target);
		}
	});

	let state_theme = state.clone();
	Effect::new(move |_| {
		let next = theme.get();
		if let Some(ref mut s) = *state_theme.borrow_mut() {
			s.theme = next;
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_pan(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let mut hover_changed = None;
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.pan.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				if s.set_hover(hovered) {
					hover_changed = Some(hovered);
				}
			}
		}
		if let Some(hovered) = hover_changed {
			if let Some(canvas) = canvas_ref.get() {
				let cursor = if hovered.is_some() { "pointer" } else { "grab" };
				let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
			}
			on_hover.run(hovered);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let clicked = local_point(canvas_ref, &ev).and_then(|(x, y)| {
			let mut guard = state_mu.borrow_mut();
			let s = guard.as_mut()?;
			if s.end_pan() {
				s.node_at_position(x, y)
			} else {
				None
			}
		});
		if let Some(id) = clicked {
			on_node_click.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut left_node = false;
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_pan();
			left_node = s.set_hover(None);
		}
		if left_node {
			on_hover.run(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y() < 0.0);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="tree-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::error::CanvasError;
use super::render;
use super::state::MindMapState;
use crate::layout::{MapConfig, MapNode};

/// Longest frame step fed to the transition, so a backgrounded tab does not
/// skip the animation entirely.
const MAX_FRAME_SECS: f64 = 0.1;

type SharedState = Rc<RefCell<Option<MindMapState>>>;
type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::NoContext)
}

/// Sizes the canvas to its parent and returns the new dimensions.
fn fit_to_parent(canvas: &HtmlCanvasElement) -> Result<(f64, f64), CanvasError> {
	let parent = canvas.parent_element().ok_or(CanvasError::Detached)?;
	let (w, h) = (parent.client_width().max(0), parent.client_height().max(0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	Ok((w as f64, h as f64))
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	let _ = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor);
}

struct Handles {
	state: SharedState,
	animate: SharedClosure,
	resize_cb: SharedClosure,
}

fn mount(
	canvas: HtmlCanvasElement,
	nodes: Vec<MapNode>,
	config: MapConfig,
	handles: &Handles,
) -> Result<(), CanvasError> {
	let window: Window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = fit_to_parent(&canvas)?;
	let ctx = context_2d(&canvas)?;
	*handles.state.borrow_mut() = Some(MindMapState::new(config, nodes, w, h));
	info!("mind map canvas mounted at {w}x{h}");

	if handles.resize_cb.borrow().is_none() {
		let (state_resize, canvas_resize) = (handles.state.clone(), canvas.clone());
		*handles.resize_cb.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = match fit_to_parent(&canvas_resize) {
				Ok(size) => size,
				Err(err) => {
					error!("mind map resize failed: {err}");
					return;
				}
			};
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *handles.resize_cb.borrow() {
			window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
		}
	}

	if handles.animate.borrow().is_some() {
		return Ok(());
	}
	let (state_anim, animate_inner) = (handles.state.clone(), handles.animate.clone());
	let mut last_frame = js_sys::Date::now();
	*handles.animate.borrow_mut() = Some(Closure::new(move || {
		let now = js_sys::Date::now();
		let dt = ((now - last_frame) / 1000.0).clamp(0.0, MAX_FRAME_SECS);
		last_frame = now;
		if let Some(ref mut s) = *state_anim.borrow_mut() {
			s.tick(dt);
			render::render(s, &ctx);
		}
		if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *handles.animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

#[component]
pub fn MindMapCanvas(
	#[prop(into)] nodes: Signal<Vec<MapNode>>,
	#[prop(optional)] config: Option<MapConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let handles = Handles {
		state: state.clone(),
		animate: Rc::new(RefCell::new(None)),
		resize_cb: Rc::new(RefCell::new(None)),
	};
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let nodes = nodes.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(err) = mount(canvas, nodes, config.clone(), &handles) {
			error!("mind map canvas setup failed: {err}");
		}
	});

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut s) = *state_click.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(idx) if s.is_center(idx) => s.toggle(),
				Some(idx) => debug!("clicked category node {idx}"),
				None => {}
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
			let over_center = hovered.is_some_and(|idx| s.is_center(idx));
			set_cursor(&canvas, if over_center { "pointer" } else { "default" });
		}
	};

	let state_ml = state;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="mind-map-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}

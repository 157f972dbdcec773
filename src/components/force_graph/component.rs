use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::frame_loop::FrameLoop;
use super::render;
use super::state::GraphView;
use super::types::GraphData;

/// Simulation step per animation frame, in seconds.
const FRAME_DT: f32 = 0.016;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Pointer position relative to the canvas.
fn pointer(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Interactive force-directed drawing of a graph. The canvas fills the width
/// of its parent; the layout restarts whenever `data` changes.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 560.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let graph_view: Rc<RefCell<Option<GraphView>>> = Rc::new(RefCell::new(None));
	let frames = StoredValue::new_local(FrameLoop::<Closure<dyn FnMut()>>::shared());

	on_cleanup(move || {
		let Some(frames) = frames.try_get_value() else {
			return;
		};
		let pending = frames.borrow_mut().stop();
		if let (Some(id), Some(window)) = (pending, web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
	});

	let view_init = graph_view.clone();
	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		debug!(
			"Laying out {} nodes and {} links",
			graph.nodes.len(),
			graph.links.len()
		);
		*view_init.borrow_mut() = Some(GraphView::new(&graph, width, height));

		// One animation loop per canvas; later data only swaps the view.
		let shared = frames.get_value();
		if shared.borrow().is_running() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			warn!("Canvas has no 2d context, graph will not be drawn");
			return;
		};
		let (view_anim, weak) = (view_init.clone(), Rc::downgrade(&shared));
		let callback: Closure<dyn FnMut()> = Closure::new(move || {
			if let Some(v) = view_anim.borrow_mut().as_mut() {
				v.tick(FRAME_DT);
				render::draw(v, &ctx);
			}
			if let Some(frames) = weak.upgrade() {
				frames.borrow_mut().schedule(request_frame);
			}
		});
		let mut frame_loop = shared.borrow_mut();
		frame_loop.start(callback);
		frame_loop.schedule(request_frame);
	});

	let view_md = graph_view.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(v) = view_md.borrow_mut().as_mut() {
			v.press(x, y);
		}
	};

	let view_mm = graph_view.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(v) = view_mm.borrow_mut().as_mut() {
			v.drag(x, y);
		}
	};

	let view_mu = graph_view.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(v) = view_mu.borrow_mut().as_mut() {
			v.release();
		}
	};

	let view_ml = graph_view.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(v) = view_ml.borrow_mut().as_mut() {
			v.leave();
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(v) = graph_view.borrow_mut().as_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			v.viewport.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; width: 100%; cursor: grab;"
		/>
	}
}

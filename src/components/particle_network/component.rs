use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::state::{FrameThrottle, NetworkState, backing_size};
use super::types::NetworkConfig;

/// Browser resources owned by one running network.
#[derive(Default)]
struct LoopHandles {
	frame: Option<Closure<dyn FnMut(f64)>>,
	frame_id: Option<i32>,
	resize: Option<Closure<dyn FnMut()>>,
	visibility: Option<Closure<dyn FnMut()>>,
}

impl LoopHandles {
	fn schedule(handles: &Rc<RefCell<Self>>) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let id = handles
			.borrow()
			.frame
			.as_ref()
			.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		handles.borrow_mut().frame_id = id;
	}

	fn cancel(&mut self) {
		let Some(id) = self.frame_id.take() else {
			return;
		};
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(id);
		}
	}

	#[cfg(test)]
	fn is_idle(&self) -> bool {
		self.frame.is_none()
			&& self.frame_id.is_none()
			&& self.resize.is_none()
			&& self.visibility.is_none()
	}

	fn teardown(&mut self) {
		self.cancel();
		self.frame = None;
		let (resize, visibility) = (self.resize.take(), self.visibility.take());
		if resize.is_none() && visibility.is_none() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(cb) = resize {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let (Some(document), Some(cb)) = (window.document(), visibility) {
			let _ = document
				.remove_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
		}
	}
}

fn document_hidden() -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.is_some_and(|d| d.hidden())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	let client = |f: fn(&web_sys::Element) -> i32| {
		parent
			.as_ref()
			.map(|p| f(p) as f64)
			.filter(|v| *v > 0.0)
	};
	(
		width.unwrap_or_else(|| client(web_sys::Element::client_width).unwrap_or(800.0)),
		height.unwrap_or_else(|| client(web_sys::Element::client_height).unwrap_or(600.0)),
	)
}

// Resizing the backing store clears it and resets the transform, so skip it
// when nothing changed.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
	let dpr = web_sys::window()
		.map(|win| win.device_pixel_ratio())
		.filter(|d| *d > 0.0)
		.unwrap_or(1.0);
	let (pw, ph) = backing_size(w, h, dpr);
	if canvas.width() != pw || canvas.height() != ph {
		canvas.set_width(pw);
		canvas.set_height(ph);
	}
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// Decorative animated point network filling its parent element.
#[component]
pub fn ParticleNetworkCanvas(
	#[prop(default = NetworkConfig::hero())] config: NetworkConfig,
	#[prop(default = "particle-network")] class: &'static str,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
	let handles = Rc::new(RefCell::new(LoopHandles::default()));
	let (state_init, throttle_init, handles_init) =
		(state.clone(), throttle.clone(), handles.clone());

	Effect::new(move |_| {
		// A rerun must not leave the previous closures attached.
		handles_init.borrow_mut().teardown();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("particle network: 2d context unavailable");
			return;
		};

		let (w, h) = measure(&canvas, width, height);
		fit_canvas(&canvas, &ctx, w, h);
		let network = NetworkState::generate(&config, w, h, &mut rand::thread_rng());
		log::info!(
			"particle network mounted: {} points in {}x{}",
			network.points.len(),
			w,
			h
		);
		*state_init.borrow_mut() = Some(network);

		let (state_resize, canvas_resize, ctx_resize) =
			(state_init.clone(), canvas.clone(), ctx.clone());
		handles_init.borrow_mut().resize = Some(Closure::new(move || {
			let (nw, nh) = measure(&canvas_resize, width, height);
			fit_canvas(&canvas_resize, &ctx_resize, nw, nh);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
			log::debug!("particle network resized to {}x{}", nw, nh);
		}));

		let (throttle_vis, handles_vis) = (throttle_init.clone(), handles_init.clone());
		handles_init.borrow_mut().visibility = Some(Closure::new(move || {
			if document_hidden() {
				handles_vis.borrow_mut().cancel();
				log::debug!("particle network paused");
			} else if handles_vis.borrow().frame_id.is_none() {
				throttle_vis.borrow_mut().reset();
				LoopHandles::schedule(&handles_vis);
				log::debug!("particle network resumed");
			}
		}));

		let (state_frame, throttle_frame, handles_frame) =
			(state_init.clone(), throttle_init.clone(), handles_init.clone());
		handles_init.borrow_mut().frame = Some(Closure::new(move |now: f64| {
			handles_frame.borrow_mut().frame_id = None;
			if document_hidden() {
				return;
			}
			let mut throttle = throttle_frame.borrow_mut();
			if throttle.ready(now) {
				if let Some(ref mut s) = *state_frame.borrow_mut() {
					s.update_connections();
					render::render(s, &ctx);
					s.advance(throttle.step());
				}
			}
			drop(throttle);
			LoopHandles::schedule(&handles_frame);
		}));

		{
			let h = handles_init.borrow();
			if let Some(ref cb) = h.resize {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let (Some(document), Some(cb)) = (window.document(), h.visibility.as_ref()) {
				let _ = document.add_event_listener_with_callback(
					"visibilitychange",
					cb.as_ref().unchecked_ref(),
				);
			}
		}
		if !document_hidden() {
			LoopHandles::schedule(&handles_init);
		}
	});

	let handles_cleanup = SendWrapper::new(handles);
	on_cleanup(move || {
		handles_cleanup.borrow_mut().teardown();
		log::debug!("particle network unmounted");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			aria-hidden="true"
			style="display: block; width: 100%; height: 100%; pointer-events: none;"
		/>
	}
}

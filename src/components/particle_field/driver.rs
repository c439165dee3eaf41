//! Browser frame loop feeding the renderer.
//!
//! A [`FieldDriver`] owns the `requestAnimationFrame` chain plus the pointer
//! and resize listeners for one background. Each frame it steps the
//! [`AnimationState`], mirrors the parameters onto the container as CSS custom
//! properties and paints the field. Stopping (or dropping) the driver cancels
//! the pending frame and removes the listeners.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement,
	PointerEvent, Window,
};

use super::field::FieldBuffer;
use super::render::{self, RenderContext};
use super::state::{AnimationState, DriverConfig, FrameParams};
use super::theme::MotionStyle;

/// Everything a frame touches.
struct FrameLoop {
	state: AnimationState,
	field: FieldBuffer,
	motion: MotionStyle,
	ctx: CanvasRenderingContext2d,
	canvas: HtmlCanvasElement,
	container: HtmlElement,
	frame_id: Option<i32>,
	running: bool,
}

impl FrameLoop {
	fn frame(&mut self) {
		let params = self.state.step();
		publish(&self.container, &params);

		let FrameLoop {
			field,
			motion,
			ctx,
			canvas,
			..
		} = self;
		let frame = RenderContext {
			width: canvas.width() as f64,
			height: canvas.height() as f64,
			center_x_percent: params.center_x_percent,
			center_y_percent: params.center_y_percent,
			tick: params.tick,
			field,
		};
		render::render(ctx, &frame, motion);
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
		self.state.resize(width, height);
	}
}

/// Mirror frame parameters as custom properties for CSS consumers.
fn publish(container: &HtmlElement, params: &FrameParams) {
	let style = HtmlElement::style(container);
	let _ = style.set_property("--ring-x", &params.center_x_percent.to_string());
	let _ = style.set_property("--ring-y", &params.center_y_percent.to_string());
	let _ = style.set_property("--ring-radius", &params.ring_radius.to_string());
	let _ = style.set_property("--animation-tick", &params.tick.to_string());
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running particle background.
pub struct FieldDriver {
	window: Window,
	inner: Rc<RefCell<FrameLoop>>,
	animate: FrameCallback,
	on_pointer: Closure<dyn FnMut(PointerEvent)>,
	on_resize: Closure<dyn FnMut()>,
}

impl FieldDriver {
	/// Size the canvas to the viewport, install listeners and schedule the first frame.
	pub fn start(
		canvas: HtmlCanvasElement,
		container: HtmlElement,
		ctx: CanvasRenderingContext2d,
		field: FieldBuffer,
		motion: MotionStyle,
		config: DriverConfig,
	) -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or("no window")?;
		let (w, h) = viewport_size(&window);

		let mut frame_loop = FrameLoop {
			state: AnimationState::new(w, h, config),
			field,
			motion,
			ctx,
			canvas,
			container,
			frame_id: None,
			running: true,
		};
		frame_loop.resize(w, h);
		let inner = Rc::new(RefCell::new(frame_loop));

		let inner_pointer = inner.clone();
		let on_pointer = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
			if let Ok(mut l) = inner_pointer.try_borrow_mut() {
				l.state.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
			}
		});

		let inner_resize = inner.clone();
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			if let Ok(mut l) = inner_resize.try_borrow_mut() {
				l.resize(nw, nh);
			}
		});

		let animate: FrameCallback = Rc::new(RefCell::new(None));
		let (inner_anim, animate_inner) = (inner.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let Ok(mut l) = inner_anim.try_borrow_mut() else {
				return;
			};
			if !l.running {
				return;
			}
			l.frame();
			l.frame_id = None;
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				l.frame_id = win.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
			}
		}));
		// Drop detaches listeners; attach them only after this exists.
		let driver = Self {
			window,
			inner,
			animate,
			on_pointer,
			on_resize,
		};

		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		driver
			.window
			.add_event_listener_with_callback_and_add_event_listener_options(
				"pointermove",
				driver.on_pointer.as_ref().unchecked_ref(),
				&options,
			)?;
		driver
			.window
			.add_event_listener_with_callback("resize", driver.on_resize.as_ref().unchecked_ref())?;

		let id = match driver.animate.borrow().as_ref() {
			Some(cb) => Some(driver.window.request_animation_frame(cb.as_ref().unchecked_ref())?),
			None => None,
		};
		driver.inner.borrow_mut().frame_id = id;

		debug!("ring-field: frame loop started at {}x{}", w, h);
		Ok(driver)
	}

	/// Cancel the pending frame and detach listeners. Safe to call twice.
	pub fn stop(&self) {
		let Ok(mut l) = self.inner.try_borrow_mut() else {
			warn!("ring-field: stop requested mid-frame");
			return;
		};
		if !l.running {
			return;
		}
		l.running = false;
		if let Some(id) = l.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		let _ = self.window.remove_event_listener_with_callback(
			"pointermove",
			self.on_pointer.as_ref().unchecked_ref(),
		);
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		debug!("ring-field: frame loop stopped");
	}
}

impl Drop for FieldDriver {
	fn drop(&mut self) {
		self.stop();
		// Break the closure's reference to itself.
		self.animate.borrow_mut().take();
	}
}

/// Handle for a driver kept alive in the per-thread registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DriverId(u32);

thread_local! {
	static DRIVERS: RefCell<HashMap<DriverId, FieldDriver>> = RefCell::new(HashMap::new());
	static NEXT_ID: Cell<u32> = const { Cell::new(0) };
}

/// Keep `driver` running until [`release`] is called with the returned id.
pub fn retain(driver: FieldDriver) -> DriverId {
	let id = DriverId(NEXT_ID.with(|n| {
		let id = n.get();
		n.set(id.wrapping_add(1));
		id
	}));
	DRIVERS.with(|d| d.borrow_mut().insert(id, driver));
	id
}

/// Stop and drop a retained driver.
pub fn release(id: DriverId) {
	let driver = DRIVERS.with(|d| d.borrow_mut().remove(&id));
	drop(driver);
}

//! Leptos component mounting the particle background.
//!
//! The component renders a container with a canvas. Once mounted it probes
//! the canvas for a 2D context: with one, the field is baked and a
//! [`FieldDriver`] starts painting; without one, the canvas is hidden and the
//! static orb fallback is spawned instead. The driver is stopped when the
//! component is cleaned up.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::driver::{self, DriverId, FieldDriver};
use super::field::FieldBuffer;
use super::host::{BackgroundHost, Orb, mount_background};
use super::state::DriverConfig;
use super::theme::Theme;
use super::types::FieldConfig;

/// Browser-backed [`BackgroundHost`].
struct WebHost {
	container: HtmlElement,
	canvas: HtmlCanvasElement,
	ctx: Option<CanvasRenderingContext2d>,
	theme: Theme,
	driver_config: DriverConfig,
	started: Option<DriverId>,
}

impl WebHost {
	fn new(
		container: HtmlElement,
		canvas: HtmlCanvasElement,
		theme: Theme,
		driver_config: DriverConfig,
	) -> Self {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
		Self {
			container,
			canvas,
			ctx,
			theme,
			driver_config,
			started: None,
		}
	}
}

impl BackgroundHost for WebHost {
	fn supports_paint(&self) -> bool {
		self.ctx.is_some()
	}

	fn register_painter(&mut self, field: FieldBuffer) -> bool {
		let Some(ctx) = self.ctx.take() else {
			return false;
		};
		match FieldDriver::start(
			self.canvas.clone(),
			self.container.clone(),
			ctx,
			field,
			self.theme.motion.clone(),
			self.driver_config.clone(),
		) {
			Ok(d) => {
				self.started = Some(driver::retain(d));
				true
			}
			Err(e) => {
				warn!("ring-field: failed to start frame loop: {:?}", e);
				false
			}
		}
	}

	fn prepare_fallback(&mut self) {
		// `style()` alone resolves to the leptos element extension method.
		let _ = HtmlElement::style(&self.canvas).set_property("display", "none");
	}

	fn spawn_orb(&mut self, orb: &Orb) {
		let Some(document) = self.container.owner_document() else {
			return;
		};
		let Ok(el) = document.create_element("div") else {
			return;
		};
		let Ok(el) = el.dyn_into::<HtmlElement>() else {
			return;
		};
		el.set_class_name(orb.class);
		let style = HtmlElement::style(&el);
		let _ = style.set_property("left", &format!("{}%", orb.left_percent));
		let _ = style.set_property("top", &format!("{}%", orb.top_percent));
		let _ = style.set_property("width", &format!("{}px", orb.size));
		let _ = style.set_property("height", &format!("{}px", orb.size));
		if let Err(e) = self.container.append_child(&el) {
			warn!("ring-field: failed to add fallback orb: {:?}", e);
		}
	}
}

/// Resolve the configured theme, falling back to the default.
fn resolve_theme(name: &str) -> Theme {
	Theme::by_name(name).unwrap_or_else(|| {
		warn!("ring-field: unknown theme {:?}, using default", name);
		Theme::default()
	})
}

/// Full-viewport animated particle background.
///
/// The field is baked once from `config` when the component mounts; later
/// changes to the signal are ignored. Resizing the window only moves the
/// field's center.
#[component]
pub fn ParticleBackground(#[prop(into)] config: Signal<FieldConfig>) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let started: Arc<Mutex<Option<DriverId>>> = Arc::new(Mutex::new(None));
	let mounted = Arc::new(Mutex::new(false));
	let started_init = started.clone();

	Effect::new(move |_| {
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		let Ok(mut once) = mounted.lock() else {
			return;
		};
		if *once {
			return;
		}
		*once = true;

		let config = config.get_untracked();
		let theme = resolve_theme(&config.theme);
		let container: HtmlElement = container.into();
		let mut host = WebHost::new(container, canvas, theme.clone(), config.driver_config());

		mount_background(&mut host, || {
			FieldBuffer::generate(config.count, config.seed, &theme.field, &theme.palette)
		});

		if let (Some(id), Ok(mut slot)) = (host.started, started_init.lock()) {
			*slot = Some(id);
		}
	});

	on_cleanup(move || {
		if let Some(id) = started.lock().ok().and_then(|mut s| s.take()) {
			driver::release(id);
		}
	});

	view! {
		<div
			node_ref=container_ref
			id="particle-bg"
			class="particle-bg"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; overflow: hidden;"
		>
			<canvas style="display: block;" node_ref=canvas_ref />
		</div>
	}
}

//! ring-field: animated particle background for the portfolio site.
//!
//! This crate provides a WASM-based canvas background that bakes a seeded
//! particle field once and animates it every frame, with a static fallback
//! for hosts that cannot paint.

use js_sys::Float64Array;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	FieldBuffer, FieldConfig, FieldError, ParticleBackground, ParticleDescriptor, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ring-field: logging initialized");
}

/// Load options from a script element with id="field-config".
/// Expected format: JSON with optional { seed, count, theme, sidebar_width }
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"ring-field: loaded config, {} particles, theme {}",
				config.count, config.theme
			);
			Some(config)
		}
		Err(e) => {
			warn!("ring-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Bake a field and return its flat buffer for use from page scripts.
///
/// Unknown theme names fall back to the default theme.
#[wasm_bindgen(js_name = bakeField)]
pub fn bake_field(seed: u32, count: u32, theme: &str) -> Float64Array {
	let theme = Theme::by_name(theme).unwrap_or_default();
	let field = FieldBuffer::generate(count as usize, seed as u64, &theme.field, &theme.palette);
	Float64Array::from(field.values())
}

/// Main application component.
/// Loads options from the DOM and mounts the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config_signal />
	}
}

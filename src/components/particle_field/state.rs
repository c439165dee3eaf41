//! Animation state advanced once per frame by the driver.
//!
//! Pointer and resize listeners only write into [`AnimationState`]; the frame
//! callback calls [`AnimationState::step`] and hands the resulting
//! [`FrameParams`] to the renderer.

/// Driver constants.
#[derive(Clone, Debug)]
pub struct DriverConfig {
	/// Tick advance per frame.
	pub tick_step: f64,
	/// Fraction of the remaining pointer distance covered per frame.
	pub pointer_damping: f64,
	/// Width of the fixed sidebar the field centers beside, in pixels.
	pub sidebar_width: f64,
	/// Vertical center before drift, as a percentage.
	pub center_y_percent: f64,
	/// Amplitude of the slow center drift, in percent.
	pub drift: f64,
	/// How far the center shifts against the pointer, in percent.
	pub parallax: f64,
	pub ring_radius: f64,
	pub breathing: f64,
}

impl Default for DriverConfig {
	fn default() -> Self {
		Self {
			tick_step: 0.02,
			pointer_damping: 0.05,
			sidebar_width: 260.0,
			center_y_percent: 40.0,
			drift: 5.0,
			parallax: 3.0,
			ring_radius: 480.0,
			breathing: 20.0,
		}
	}
}

/// Parameters published to the renderer every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
	/// Animation time for this frame.
	pub tick: f64,
	/// Field center after drift and parallax, in percent of the width.
	pub center_x_percent: f64,
	/// Field center after drift and parallax, in percent of the height.
	pub center_y_percent: f64,
	/// Breathing ring radius, mirrored for CSS consumers.
	pub ring_radius: f64,
}

/// Mutable per-session animation state. Single writer: the driver.
#[derive(Clone, Debug)]
pub struct AnimationState {
	pub tick: f64,
	/// Smoothed pointer, normalized to [-1, 1].
	pub pointer_x: f64,
	pub pointer_y: f64,
	/// Latest raw pointer, normalized to [-1, 1].
	pub target_pointer_x: f64,
	pub target_pointer_y: f64,
	pub viewport_width: f64,
	pub viewport_height: f64,
	/// Visual center of the content area, as a percentage of the width.
	pub center_x_percent: f64,
	config: DriverConfig,
}

impl AnimationState {
	pub fn new(width: f64, height: f64, config: DriverConfig) -> Self {
		let mut state = Self {
			tick: 0.0,
			pointer_x: 0.0,
			pointer_y: 0.0,
			target_pointer_x: 0.0,
			target_pointer_y: 0.0,
			viewport_width: width,
			viewport_height: height,
			center_x_percent: 50.0,
			config,
		};
		state.resize(width, height);
		state
	}

	pub fn config(&self) -> &DriverConfig {
		&self.config
	}

	/// Record a raw pointer position in client pixels.
	pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
		self.target_pointer_x = normalize(client_x, self.viewport_width);
		self.target_pointer_y = normalize(client_y, self.viewport_height);
	}

	/// Recompute the content center for a new viewport size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport_width = width;
		self.viewport_height = height;
		self.center_x_percent = content_center_percent(width, self.config.sidebar_width);
	}

	/// Advance one frame and return the parameters to paint it with.
	pub fn step(&mut self) -> FrameParams {
		let cfg = &self.config;
		self.tick += cfg.tick_step;
		self.pointer_x += (self.target_pointer_x - self.pointer_x) * cfg.pointer_damping;
		self.pointer_y += (self.target_pointer_y - self.pointer_y) * cfg.pointer_damping;

		let drift_x = (self.tick * 0.5).cos() * cfg.drift;
		let drift_y = (self.tick * 0.7).sin() * cfg.drift;

		FrameParams {
			tick: self.tick,
			center_x_percent: self.center_x_percent + drift_x - self.pointer_x * cfg.parallax,
			center_y_percent: cfg.center_y_percent + drift_y - self.pointer_y * cfg.parallax,
			ring_radius: cfg.ring_radius + (self.tick * 2.0).sin() * cfg.breathing,
		}
	}
}

/// Map a client coordinate to [-1, 1] across `extent`.
fn normalize(value: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	((value / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Horizontal center of the area right of the sidebar, in percent.
pub fn content_center_percent(width: f64, sidebar_width: f64) -> f64 {
	if width <= 0.0 {
		return 50.0;
	}
	let sidebar = sidebar_width.clamp(0.0, width);
	let center = sidebar + (width - sidebar) / 2.0;
	center / width * 100.0
}

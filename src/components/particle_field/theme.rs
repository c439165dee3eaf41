//! Visual theming for the particle field.
//!
//! Bundles the palette particles are colored from with the motion and fade
//! constants the renderer animates them with.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t).round() as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t).round() as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t).round() as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors a field is baked from.
///
/// Particles blend from `start` (left edge) to `end` (right edge); those in
/// the lower band of the field drift further toward `accent`.
#[derive(Clone, Debug)]
pub struct FieldPalette {
	pub start: Color,
	pub end: Color,
	pub accent: Color,
}

/// Per-frame motion and fade constants.
#[derive(Clone, Debug)]
pub struct MotionStyle {
	/// Radial pulse speed (radians per tick unit).
	pub tide_frequency: f64,
	/// Angular rock speed (radians per tick unit).
	pub sway_frequency: f64,
	/// Peak angular deviation in radians.
	pub sway_magnitude: f64,
	/// Distance from center where particles start to appear.
	pub fade_start: f64,
	/// Distance from center where particles reach full opacity.
	pub fade_end: f64,
	/// Opacity multiplier applied after the radial fade.
	pub alpha_scale: f64,
	/// Particles fainter than this are skipped.
	pub visibility_threshold: f64,
}

/// Shape of the baked field.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Radius the particle band is centered on.
	pub center_radius: f64,
	/// Full width of the band (particles land in `center_radius ± spread / 2`).
	pub radius_spread: f64,
	pub tide_min: f64,
	pub tide_range: f64,
	pub size_base: f64,
	pub size_variance: f64,
	/// Width multiplier over the particle size (pill length).
	pub stretch: f64,
	/// Height multiplier over the particle size (pill thickness).
	pub squash: f64,
	/// Normalized screen y below which the accent blend starts.
	pub lower_band: f64,
	/// Strongest accent blend at the bottom edge.
	pub accent_weight: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub palette: FieldPalette,
	pub field: FieldStyle,
	pub motion: MotionStyle,
}

impl FieldStyle {
	fn standard() -> Self {
		Self {
			center_radius: 550.0,
			radius_spread: 900.0,
			tide_min: 10.0,
			tide_range: 25.0,
			size_base: 1.3,
			size_variance: 1.5,
			stretch: 1.5,
			squash: 0.9,
			lower_band: 0.65,
			accent_weight: 0.6,
		}
	}
}

impl MotionStyle {
	fn standard() -> Self {
		Self {
			tide_frequency: 0.8,
			sway_frequency: 0.5,
			sway_magnitude: 0.15,
			fade_start: 200.0,
			fade_end: 400.0,
			alpha_scale: 0.7,
			visibility_threshold: 0.01,
		}
	}
}

impl Theme {
	/// Yellow through magenta into blue (default)
	pub fn ripple() -> Self {
		Self {
			name: "ripple",
			palette: FieldPalette {
				start: Color::rgb(255, 255, 0),
				end: Color::rgb(66, 133, 244),
				accent: Color::rgb(255, 0, 255),
			},
			field: FieldStyle::standard(),
			motion: MotionStyle::standard(),
		}
	}

	/// Cool greens and violets with a slower, wider sway
	pub fn aurora() -> Self {
		Self {
			name: "aurora",
			palette: FieldPalette {
				start: Color::rgb(64, 224, 170),
				end: Color::rgb(122, 92, 230),
				accent: Color::rgb(40, 120, 200),
			},
			field: FieldStyle::standard(),
			motion: MotionStyle {
				sway_frequency: 0.35,
				sway_magnitude: 0.22,
				..MotionStyle::standard()
			},
		}
	}

	/// Warm orange into deep red, tighter band
	pub fn ember() -> Self {
		Self {
			name: "ember",
			palette: FieldPalette {
				start: Color::rgb(255, 190, 90),
				end: Color::rgb(200, 40, 50),
				accent: Color::rgb(120, 30, 80),
			},
			field: FieldStyle {
				radius_spread: 700.0,
				..FieldStyle::standard()
			},
			motion: MotionStyle {
				tide_frequency: 1.1,
				..MotionStyle::standard()
			},
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"ripple" => Some(Self::ripple()),
			"aurora" => Some(Self::aurora()),
			"ember" => Some(Self::ember()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::ripple()
	}
}

//! Particle field baking and the flat buffer handed to the renderer.
//!
//! The field is generated once per session. Every per-particle constant the
//! renderer needs is baked here so painting a frame draws no randomness.

use log::{debug, warn};
use thiserror::Error;

use super::rng::Lcg;
use super::theme::{Color, FieldPalette, FieldStyle};

/// Values per particle in a [`FieldBuffer`].
pub const STRIDE: usize = 10;

/// Largest field [`FieldBuffer::generate`] will bake.
pub const MAX_PARTICLES: usize = 20_000;

/// Viewport the colors are baked against.
const REFERENCE_WIDTH: f64 = 1920.0;
const REFERENCE_HEIGHT: f64 = 1080.0;
const REFERENCE_CENTER_X: f64 = 0.6;
const REFERENCE_CENTER_Y: f64 = 0.4;

/// Static per-particle parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
	/// Resting angle around the center, in [0, 2π).
	pub angle: f64,
	/// Resting distance from the center, in pixels.
	pub base_radius: f64,
	/// Peak radial pulse, in pixels.
	pub tide_amplitude: f64,
	/// Phase offset of the radial pulse.
	pub tide_phase: f64,
	/// Phase offset of the angular rock.
	pub sway_phase: f64,
	/// Ellipse radius along the heading.
	pub width: f64,
	/// Ellipse radius across the heading.
	pub height: f64,
	/// Opaque fill color; alpha is applied per frame.
	pub color: Color,
}

impl ParticleDescriptor {
	fn write(&self, out: &mut Vec<f64>) {
		out.extend_from_slice(&[
			self.angle,
			self.base_radius,
			self.tide_amplitude,
			self.tide_phase,
			self.sway_phase,
			self.width,
			self.height,
			self.color.r as f64,
			self.color.g as f64,
			self.color.b as f64,
		]);
	}

	/// Reads one particle from a validated stride-sized chunk.
	fn read(chunk: &[f64]) -> Self {
		Self {
			angle: chunk[0],
			base_radius: chunk[1],
			tide_amplitude: chunk[2],
			tide_phase: chunk[3],
			sway_phase: chunk[4],
			width: chunk[5],
			height: chunk[6],
			color: Color::rgb(chunk[7] as u8, chunk[8] as u8, chunk[9] as u8),
		}
	}
}

/// Reasons a serialized field is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
	#[error("field payload is {0} bytes, not a whole number of f64 values")]
	TruncatedValue(usize),
	#[error("field payload holds {0} values, not a multiple of the per-particle stride")]
	PartialParticle(usize),
	#[error("particle {index} has a non-finite value")]
	NonFinite { index: usize },
	#[error("particle {index} has a color channel outside 0..=255")]
	ColorOutOfRange { index: usize },
}

/// Flat fixed-stride encoding of a baked field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldBuffer {
	values: Vec<f64>,
}

impl FieldBuffer {
	/// Bake `count` particles from `seed`, capped at [`MAX_PARTICLES`].
	pub fn generate(
		count: usize,
		seed: u64,
		style: &FieldStyle,
		palette: &FieldPalette,
	) -> Self {
		let count = if count > MAX_PARTICLES {
			warn!(
				"ring-field: {} particles requested, capping at {}",
				count, MAX_PARTICLES
			);
			MAX_PARTICLES
		} else {
			count
		};
		let mut rng = Lcg::new(seed);
		let mut values = Vec::with_capacity(count * STRIDE);

		for _ in 0..count {
			bake_particle(&mut rng, style, palette).write(&mut values);
		}

		debug!("ring-field: baked {} particles from seed {}", count, seed);
		Self { values }
	}

	/// Wrap raw values, validating stride and ranges.
	pub fn from_values(values: Vec<f64>) -> Result<Self, FieldError> {
		if values.len() % STRIDE != 0 {
			return Err(FieldError::PartialParticle(values.len()));
		}
		for (index, chunk) in values.chunks_exact(STRIDE).enumerate() {
			if chunk.iter().any(|v| !v.is_finite()) {
				return Err(FieldError::NonFinite { index });
			}
			if chunk[7..].iter().any(|c| !(0.0..=255.0).contains(c)) {
				return Err(FieldError::ColorOutOfRange { index });
			}
		}
		Ok(Self { values })
	}

	/// Decode a little-endian byte payload.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, FieldError> {
		if bytes.len() % 8 != 0 {
			return Err(FieldError::TruncatedValue(bytes.len()));
		}
		let values = bytes
			.chunks_exact(8)
			.map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
			.collect();
		Self::from_values(values)
	}

	/// Little-endian byte payload, suitable for handing across contexts.
	pub fn to_bytes(&self) -> Vec<u8> {
		self.values.iter().flat_map(|v| v.to_le_bytes()).collect()
	}

	pub fn values(&self) -> &[f64] {
		&self.values
	}

	pub fn len(&self) -> usize {
		self.values.len() / STRIDE
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<ParticleDescriptor> {
		let start = index.checked_mul(STRIDE)?;
		self.values
			.get(start..start + STRIDE)
			.map(ParticleDescriptor::read)
	}

	pub fn iter(&self) -> impl Iterator<Item = ParticleDescriptor> + '_ {
		self.values.chunks_exact(STRIDE).map(ParticleDescriptor::read)
	}
}

fn bake_particle(
	rng: &mut Lcg,
	style: &FieldStyle,
	palette: &FieldPalette,
) -> ParticleDescriptor {
	let angle = rng.next_angle();
	let base_radius = style.center_radius + (rng.next_f64() - 0.5) * style.radius_spread;
	let tide_amplitude = style.tide_min + rng.next_f64() * style.tide_range;
	let tide_phase = rng.next_angle();
	let sway_phase = rng.next_angle();
	let size = style.size_base + rng.next_f64() * style.size_variance;

	ParticleDescriptor {
		angle,
		base_radius,
		tide_amplitude,
		tide_phase,
		sway_phase,
		width: size * style.stretch,
		height: size * style.squash,
		color: bake_color(angle, base_radius, style, palette),
	}
}

/// Color from the particle's approximate resting spot on a reference screen.
fn bake_color(angle: f64, radius: f64, style: &FieldStyle, palette: &FieldPalette) -> Color {
	let nx = REFERENCE_CENTER_X + angle.cos() * radius / REFERENCE_WIDTH;
	let ny = REFERENCE_CENTER_Y + angle.sin() * radius / REFERENCE_HEIGHT;

	let base = palette.start.lerp(palette.end, nx);
	if ny > style.lower_band && style.lower_band < 1.0 {
		let t = ((ny - style.lower_band) / (1.0 - style.lower_band)).clamp(0.0, 1.0);
		base.lerp(palette.accent, t * style.accent_weight)
	} else {
		base
	}
}

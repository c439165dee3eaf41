//! Closed-form particle kinematics.
//!
//! A particle's position at any tick follows from its descriptor alone:
//! a radial tide and an angular sway, both sinusoidal. Velocity comes from
//! differentiating those expressions, so orientation needs no history.

use super::field::ParticleDescriptor;
use super::theme::MotionStyle;

/// Where a particle is and where it faces, relative to the field center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePose {
	/// Offset from the center.
	pub dx: f64,
	pub dy: f64,
	/// Distance from the center.
	pub distance: f64,
	/// Heading of the instantaneous velocity, in radians.
	pub heading: f64,
}

/// Pose of `particle` at `tick`.
pub fn pose(particle: &ParticleDescriptor, tick: f64, motion: &MotionStyle) -> ParticlePose {
	let tide_arg = tick * motion.tide_frequency + particle.tide_phase;
	let sway_arg = tick * motion.sway_frequency + particle.sway_phase;

	let radius = particle.base_radius + tide_arg.sin() * particle.tide_amplitude;
	let angle = particle.angle + sway_arg.cos() * motion.sway_magnitude;
	let (sin_a, cos_a) = angle.sin_cos();

	// d/dtick of radius and angle
	let radius_rate = tide_arg.cos() * motion.tide_frequency * particle.tide_amplitude;
	let angle_rate = -sway_arg.sin() * motion.sway_frequency * motion.sway_magnitude;

	let vx = radius_rate * cos_a - radius * angle_rate * sin_a;
	let vy = radius_rate * sin_a + radius * angle_rate * cos_a;

	ParticlePose {
		dx: cos_a * radius,
		dy: sin_a * radius,
		distance: radius.abs(),
		heading: vy.atan2(vx),
	}
}

/// Radial fade: transparent inside `fade_start`, full at `fade_end`, scaled
/// by `alpha_scale`. Always within [0, 1].
pub fn opacity(distance: f64, motion: &MotionStyle) -> f64 {
	let band = motion.fade_end - motion.fade_start;
	let t = if band > 0.0 {
		(distance - motion.fade_start) / band
	} else if distance >= motion.fade_start {
		1.0
	} else {
		0.0
	};
	if t.is_nan() {
		return 0.0;
	}
	(t.clamp(0.0, 1.0) * motion.alpha_scale).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::{Color, Theme};

	fn particle() -> ParticleDescriptor {
		ParticleDescriptor {
			angle: 0.7,
			base_radius: 420.0,
			tide_amplitude: 18.0,
			tide_phase: 1.3,
			sway_phase: 2.1,
			width: 3.0,
			height: 1.8,
			color: Color::rgb(10, 20, 30),
		}
	}

	#[test]
	fn opacity_is_clamped_for_any_distance() {
		let motion = Theme::default().motion;
		for d in [-1e9, -500.0, -1.0, 0.0, 199.0, 250.0, 399.0, 400.0, 1e4, f64::INFINITY] {
			let a = opacity(d, &motion);
			assert!((0.0..=1.0).contains(&a), "distance {d} gave {a}");
		}
		assert_eq!(opacity(-50.0, &motion), 0.0);
		assert_eq!(opacity(1e4, &motion), motion.alpha_scale);
		assert!((opacity(300.0, &motion) - 0.5 * motion.alpha_scale).abs() < 1e-12);
	}

	#[test]
	fn opacity_with_collapsed_band_steps() {
		let motion = MotionStyle {
			fade_start: 300.0,
			fade_end: 300.0,
			alpha_scale: 2.0,
			..Theme::default().motion
		};
		assert_eq!(opacity(299.0, &motion), 0.0);
		assert_eq!(opacity(300.0, &motion), 1.0);
	}

	#[test]
	fn pose_stays_on_tide_band() {
		let motion = Theme::default().motion;
		let p = particle();
		for i in 0..500 {
			let pose = pose(&p, i as f64 * 0.02, &motion);
			assert!((pose.distance - p.base_radius).abs() <= p.tide_amplitude + 1e-9);
			assert!((pose.dx.hypot(pose.dy) - pose.distance).abs() < 1e-9);
		}
	}

	#[test]
	fn heading_matches_numerical_derivative() {
		let motion = Theme::default().motion;
		let p = particle();
		let h = 1e-6;
		for tick in [0.0, 0.4, 3.3, 17.9] {
			let a = pose(&p, tick - h, &motion);
			let b = pose(&p, tick + h, &motion);
			let expected = (b.dy - a.dy).atan2(b.dx - a.dx);
			let got = pose(&p, tick, &motion).heading;
			let delta = expected - got;
			assert!(
				delta.sin().abs() < 1e-4 && delta.cos() > 0.0,
				"tick {tick}: {expected} vs {got}"
			);
		}
	}

	#[test]
	fn pose_is_pure() {
		let motion = Theme::default().motion;
		let p = particle();
		assert_eq!(pose(&p, 5.0, &motion), pose(&p, 5.0, &motion));
	}
}

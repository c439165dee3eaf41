//! Per-frame painting of the particle field.
//!
//! Each particle is placed analytically from its descriptor and the frame's
//! tick; nothing is carried between frames. Transforms are wrapped in
//! save/restore per particle so none leak into the next one.

use super::field::FieldBuffer;
use super::motion;
use super::surface::Surface;
use super::theme::MotionStyle;

/// Inputs for painting one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Field center as a percentage of the surface width.
	pub center_x_percent: f64,
	/// Field center as a percentage of the surface height.
	pub center_y_percent: f64,
	/// Animation time the particles are placed at.
	pub tick: f64,
	/// Baked particles to paint.
	pub field: &'a FieldBuffer,
}

impl RenderContext<'_> {
	/// Center in surface pixels.
	pub fn center(&self) -> (f64, f64) {
		(
			self.center_x_percent / 100.0 * self.width,
			self.center_y_percent / 100.0 * self.height,
		)
	}
}

/// Paints one frame and returns how many particles were drawn.
pub fn render<S: Surface>(
	surface: &mut S,
	frame: &RenderContext<'_>,
	motion: &MotionStyle,
) -> usize {
	surface.clear(frame.width, frame.height);

	if frame.field.is_empty() || frame.width <= 0.0 || frame.height <= 0.0 {
		return 0;
	}

	let (cx, cy) = frame.center();
	let mut drawn = 0;

	for particle in frame.field.iter() {
		let pose = motion::pose(&particle, frame.tick, motion);
		let alpha = motion::opacity(pose.distance, motion);
		if alpha < motion.visibility_threshold {
			continue;
		}

		surface.save();
		surface.translate(cx + pose.dx, cy + pose.dy);
		// Pills are drawn long along x; face them along the heading.
		surface.rotate(pose.heading);
		surface.set_fill(particle.color.with_alpha(alpha));
		surface.fill_ellipse(particle.width, particle.height);
		surface.restore();
		drawn += 1;
	}

	drawn
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::{Color, Theme};

	#[derive(Clone, Debug, PartialEq)]
	enum Call {
		Clear,
		Save,
		Restore,
		Translate(u64, u64),
		Rotate(u64),
		Fill(Color),
		Ellipse(u64, u64),
	}

	/// Records every primitive as exact bit patterns.
	#[derive(Default)]
	struct Recorder {
		calls: Vec<Call>,
	}

	impl Recorder {
		fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
			self.calls.iter().filter(|c| pred(c)).count()
		}
	}

	impl Surface for Recorder {
		fn clear(&mut self, _: f64, _: f64) {
			self.calls.push(Call::Clear);
		}
		fn save(&mut self) {
			self.calls.push(Call::Save);
		}
		fn restore(&mut self) {
			self.calls.push(Call::Restore);
		}
		fn translate(&mut self, x: f64, y: f64) {
			self.calls.push(Call::Translate(x.to_bits(), y.to_bits()));
		}
		fn rotate(&mut self, angle: f64) {
			self.calls.push(Call::Rotate(angle.to_bits()));
		}
		fn set_fill(&mut self, color: Color) {
			self.calls.push(Call::Fill(color));
		}
		fn fill_ellipse(&mut self, rx: f64, ry: f64) {
			self.calls.push(Call::Ellipse(rx.to_bits(), ry.to_bits()));
		}
	}

	fn frame(field: &FieldBuffer, tick: f64) -> RenderContext<'_> {
		RenderContext {
			width: 1280.0,
			height: 800.0,
			center_x_percent: 60.0,
			center_y_percent: 40.0,
			tick,
			field,
		}
	}

	fn baked(count: usize) -> FieldBuffer {
		let theme = Theme::default();
		FieldBuffer::generate(count, 12345, &theme.field, &theme.palette)
	}

	#[test]
	fn identical_inputs_paint_identically() {
		let field = baked(300);
		let motion = Theme::default().motion;
		let (mut a, mut b) = (Recorder::default(), Recorder::default());
		let drawn_a = render(&mut a, &frame(&field, 3.7), &motion);
		let drawn_b = render(&mut b, &frame(&field, 3.7), &motion);
		assert_eq!(drawn_a, drawn_b);
		assert_eq!(a.calls, b.calls);
	}

	#[test]
	fn invisible_particles_issue_no_draw_calls() {
		let field = baked(500);
		let mut motion = Theme::default().motion;
		// Push the fade out past every particle.
		motion.fade_start = 5_000.0;
		motion.fade_end = 6_000.0;
		let mut rec = Recorder::default();
		assert_eq!(render(&mut rec, &frame(&field, 1.0), &motion), 0);
		assert_eq!(rec.calls, vec![Call::Clear]);
	}

	#[test]
	fn draw_calls_match_drawn_count() {
		let field = baked(800);
		let motion = Theme::default().motion;
		let mut rec = Recorder::default();
		let drawn = render(&mut rec, &frame(&field, 0.0), &motion);

		// Inner particles fade out, the rest are drawn.
		assert!(drawn > 0 && drawn < field.len());
		assert_eq!(rec.count(|c| matches!(c, Call::Ellipse(..))), drawn);
		assert_eq!(rec.count(|c| matches!(c, Call::Save)), drawn);
		assert_eq!(rec.count(|c| matches!(c, Call::Restore)), drawn);
	}

	#[test]
	fn every_save_is_restored_before_the_next_particle() {
		let field = baked(200);
		let motion = Theme::default().motion;
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&field, 9.1), &motion);

		let mut depth = 0i32;
		for call in &rec.calls {
			match call {
				Call::Save => {
					assert_eq!(depth, 0);
					depth += 1;
				}
				Call::Restore => depth -= 1,
				Call::Translate(..) | Call::Rotate(..) => assert_eq!(depth, 1),
				_ => {}
			}
		}
		assert_eq!(depth, 0);
	}

	#[test]
	fn fill_alpha_is_within_unit_range() {
		let field = baked(400);
		let motion = Theme::default().motion;
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&field, 2.2), &motion);
		for call in &rec.calls {
			if let Call::Fill(color) = call {
				assert!(color.a >= motion.visibility_threshold && color.a <= 1.0);
			}
		}
	}

	#[test]
	fn empty_field_draws_nothing() {
		let field = FieldBuffer::default();
		let mut rec = Recorder::default();
		assert_eq!(render(&mut rec, &frame(&field, 0.0), &Theme::default().motion), 0);
		assert_eq!(rec.calls, vec![Call::Clear]);
	}

	#[test]
	fn frame_does_not_touch_descriptors() {
		let field = baked(50);
		let before = field.clone();
		let mut rec = Recorder::default();
		render(&mut rec, &frame(&field, 12.0), &Theme::default().motion);
		assert_eq!(field, before);
	}
}

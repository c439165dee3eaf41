//! Drawing primitives the renderer paints through.
//!
//! The renderer only needs a handful of 2D canvas operations; keeping them
//! behind a trait lets frames be painted onto something other than a browser
//! canvas (tests count draw calls this way).

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Minimal 2D drawing surface.
pub trait Surface {
	/// Clear the whole surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Push the current transform.
	fn save(&mut self);
	/// Pop back to the last saved transform.
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64);
	fn rotate(&mut self, angle: f64);
	fn set_fill(&mut self, color: Color);
	/// Fill an axis-aligned ellipse centered at the current origin.
	fn fill_ellipse(&mut self, radius_x: f64, radius_y: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn set_fill(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn fill_ellipse(&mut self, radius_x: f64, radius_y: f64) {
		self.begin_path();
		let _ = self.ellipse(0.0, 0.0, radius_x, radius_y, 0.0, 0.0, TAU);
		self.fill();
	}
}

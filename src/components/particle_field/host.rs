//! Mounting decision between the live painter and the static fallback.
//!
//! The host environment is behind [`BackgroundHost`] so the decision can be
//! exercised without a browser. The web implementation lives in the
//! component module.

use log::{info, warn};

use super::field::FieldBuffer;

/// A static decorative orb shown when live painting is unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
	/// CSS class distinguishing the orb's color and animation.
	pub class: &'static str,
	/// Offset from the top-left corner, in percent of the container.
	pub left_percent: f64,
	pub top_percent: f64,
	/// Diameter in pixels.
	pub size: f64,
}

/// Orbs spawned by the fallback, in creation order.
pub const FALLBACK_ORBS: [Orb; 3] = [
	Orb {
		class: "floating-orb orb-1",
		left_percent: 62.0,
		top_percent: 18.0,
		size: 420.0,
	},
	Orb {
		class: "floating-orb orb-2",
		left_percent: 28.0,
		top_percent: 58.0,
		size: 320.0,
	},
	Orb {
		class: "floating-orb orb-3",
		left_percent: 78.0,
		top_percent: 70.0,
		size: 260.0,
	},
];

/// Environment the background is mounted into.
pub trait BackgroundHost {
	/// Whether the host can run the per-frame painter.
	fn supports_paint(&self) -> bool;
	/// Hand the baked field to the painter and start it.
	/// Returns `false` when the painter could not be started.
	fn register_painter(&mut self, field: FieldBuffer) -> bool;
	/// Called once before the fallback orbs are spawned.
	fn prepare_fallback(&mut self) {}
	/// Create one static decorative element.
	fn spawn_orb(&mut self, orb: &Orb);
}

/// How a background ended up mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mounted {
	Painter,
	Fallback,
}

/// Register the painter when supported, otherwise spawn the fallback orbs.
///
/// `bake` only runs when a painter will consume the field. A painter that
/// fails to start also ends in the fallback.
pub fn mount_background<H, F>(host: &mut H, bake: F) -> Mounted
where
	H: BackgroundHost,
	F: FnOnce() -> FieldBuffer,
{
	if host.supports_paint() {
		let field = bake();
		info!("ring-field: painting {} particles", field.len());
		if host.register_painter(field) {
			return Mounted::Painter;
		}
		warn!("ring-field: painter failed to start, using static fallback");
	} else {
		info!("ring-field: paint unsupported, using static fallback");
	}

	host.prepare_fallback();
	for orb in &FALLBACK_ORBS {
		host.spawn_orb(orb);
	}
	Mounted::Fallback
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FakeHost {
		paint: bool,
		starts: bool,
		registered: Vec<usize>,
		prepared: usize,
		orbs: Vec<Orb>,
	}

	impl FakeHost {
		fn new(paint: bool) -> Self {
			Self {
				paint,
				starts: true,
				registered: Vec::new(),
				prepared: 0,
				orbs: Vec::new(),
			}
		}
	}

	impl BackgroundHost for FakeHost {
		fn supports_paint(&self) -> bool {
			self.paint
		}
		fn register_painter(&mut self, field: FieldBuffer) -> bool {
			self.registered.push(field.len());
			self.starts
		}
		fn prepare_fallback(&mut self) {
			self.prepared += 1;
		}
		fn spawn_orb(&mut self, orb: &Orb) {
			self.orbs.push(*orb);
		}
	}

	#[test]
	fn supported_host_registers_once() {
		let mut host = FakeHost::new(true);
		let mounted = mount_background(&mut host, FieldBuffer::default);
		assert_eq!(mounted, Mounted::Painter);
		assert_eq!(host.registered, vec![0]);
		assert_eq!(host.prepared, 0);
		assert!(host.orbs.is_empty());
	}

	#[test]
	fn failed_painter_falls_back() {
		let mut host = FakeHost::new(true);
		host.starts = false;
		let mounted = mount_background(&mut host, FieldBuffer::default);
		assert_eq!(mounted, Mounted::Fallback);
		assert_eq!(host.registered, vec![0]);
		assert_eq!(host.prepared, 1);
		assert_eq!(host.orbs, FALLBACK_ORBS.to_vec());
	}

	#[test]
	fn unsupported_host_skips_baking() {
		let mut host = FakeHost::new(false);
		let mounted = mount_background(&mut host, || panic!("field baked for fallback"));
		assert_eq!(mounted, Mounted::Fallback);
		assert!(host.registered.is_empty());
		assert_eq!(host.prepared, 1);
		assert_eq!(host.orbs, FALLBACK_ORBS.to_vec());
	}
}

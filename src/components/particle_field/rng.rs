//! Seeded linear-congruential generator.
//!
//! Not cryptographic. It only has to make a given seed always bake the same
//! field.

use std::f64::consts::TAU;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Deterministic pseudo-random sequence in [0, 1).
#[derive(Clone, Debug)]
pub struct Lcg {
	state: u64,
}

impl Lcg {
	pub fn new(seed: u64) -> Self {
		Self {
			state: seed % MODULUS,
		}
	}

	/// Next value in [0, 1).
	pub fn next_f64(&mut self) -> f64 {
		self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
		self.state as f64 / MODULUS as f64
	}

	/// Next angle in [0, 2π).
	pub fn next_angle(&mut self) -> f64 {
		self.next_f64() * TAU
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_values_for_default_seed() {
		let mut rng = Lcg::new(12345);
		assert_eq!(rng.next_f64(), 96382.0 / 233280.0);
		assert_eq!(rng.next_f64(), 3239.0 / 233280.0);
	}

	#[test]
	fn stays_in_unit_interval() {
		let mut rng = Lcg::new(7);
		for _ in 0..10_000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = Lcg::new(42);
		let mut b = Lcg::new(42);
		for _ in 0..100 {
			assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
		}
	}
}

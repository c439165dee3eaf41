//! Page-supplied configuration for the particle background.

use serde::Deserialize;

use super::state::DriverConfig;

/// Options read from the page. Every field is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Seed for the particle generator. The same seed always bakes the same field.
	pub seed: u64,
	/// Number of particles to bake.
	pub count: usize,
	/// Theme preset name ("ripple", "aurora" or "ember").
	pub theme: String,
	/// Width of the fixed sidebar, in pixels. The field centers in the space beside it.
	pub sidebar_width: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			seed: 12345,
			count: 2000,
			theme: "ripple".to_string(),
			sidebar_width: DriverConfig::default().sidebar_width,
		}
	}
}

impl FieldConfig {
	/// Driver constants with this page's sidebar width.
	pub fn driver_config(&self) -> DriverConfig {
		DriverConfig {
			sidebar_width: self.sidebar_width,
			..DriverConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config: FieldConfig = serde_json::from_str(r#"{ "count": 600 }"#).unwrap();
		assert_eq!(config.count, 600);
		assert_eq!(config.seed, 12345);
		assert_eq!(config.theme, "ripple");
		assert_eq!(config.driver_config().sidebar_width, 260.0);
	}

	#[test]
	fn full_json() {
		let config: FieldConfig = serde_json::from_str(
			r#"{ "seed": 7, "count": 0, "theme": "ember", "sidebar_width": 0 }"#,
		)
		.unwrap();
		assert_eq!(
			config,
			FieldConfig {
				seed: 7,
				count: 0,
				theme: "ember".into(),
				sidebar_width: 0.0,
			}
		);
	}

	#[test]
	fn wrong_types_are_errors() {
		assert!(serde_json::from_str::<FieldConfig>(r#"{ "count": "lots" }"#).is_err());
	}
}

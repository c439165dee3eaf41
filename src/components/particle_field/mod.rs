//! Animated ring particle background.
//!
//! Renders a seeded field of pill-shaped particles orbiting a slowly drifting
//! center on an HTML canvas:
//! - Particles are baked once from a deterministic seed into a flat buffer
//! - Each frame places every particle analytically (radial tide, angular sway)
//! - Particles fade out toward the center and face their direction of travel
//! - Hosts without canvas painting get a static orb fallback
//!
//! # Example
//!
//! ```ignore
//! use ring_field::{FieldConfig, ParticleBackground};
//!
//! let config = FieldConfig { count: 800, ..Default::default() };
//! view! { <ParticleBackground config=config /> }
//! ```

mod component;
mod driver;
pub mod field;
pub mod host;
pub mod motion;
pub mod render;
mod rng;
pub mod state;
pub mod surface;
pub mod theme;
mod types;

pub use component::ParticleBackground;
pub use field::{FieldBuffer, FieldError, ParticleDescriptor};
pub use host::{BackgroundHost, FALLBACK_ORBS, Mounted, Orb, mount_background};
pub use render::{RenderContext, render};
pub use state::{AnimationState, DriverConfig, FrameParams};
pub use surface::Surface;
pub use theme::{Color, Theme};
pub use types::FieldConfig;

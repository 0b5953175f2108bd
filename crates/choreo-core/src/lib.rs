//! Scroll-progress choreography for the product page.
//!
//! Platform-free: the web front-end feeds progress and viewport changes in
//! and applies the returned [`Frame`]s; everything here runs on the host.

pub mod choreographer;
pub mod color;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod device;
pub mod easing;
pub mod error;
pub mod layout;
pub mod model;
pub mod rotation;
pub mod stagger;
pub mod table;
pub mod timeline;
pub mod window;

pub use choreographer::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use device::*;
pub use easing::*;
pub use error::*;
pub use layout::*;
pub use model::*;
pub use rotation::*;
pub use stagger::*;
pub use table::*;
pub use timeline::*;
pub use window::*;

//! Camera rig for the product view.
//!
//! The camera sits on a sphere around the model and auto-rotates at a constant
//! rate. Zoom, pan and manual rotation are not exposed.

/// Orbit rig component, camera spawning and the auto-rotate system.
pub mod orbit_rig;

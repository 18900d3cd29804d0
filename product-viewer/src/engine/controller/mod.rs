//! Pointer-driven yaw control for the product model.
//!
//! Pointer moves set a target yaw; every frame the first mesh of the loaded
//! model eases a fixed fraction of the way toward it.

/// Target/current yaw state, pointer mapping and the per-frame easing system.
pub mod pointer_yaw;

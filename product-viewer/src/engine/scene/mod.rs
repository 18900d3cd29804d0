//! Static scene composition around the product model.
//!
//! Lighting, the ground shadow plane, and visibility gating of everything that
//! waits for the model to load.

/// Ground plane that catches the model's shadow.
pub mod ground;

/// Ambient and spot lighting.
pub mod lighting;

/// Hides the model subtree while loading and reveals it once ready.
pub mod suspense;

//! Rendering module
//!
//! `scene` turns the simulation state into rectangles; on the web the
//! `CanvasPainter` draws them with a Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use scene::{DrawRect, scene};

//! Platform abstraction layer
//!
//! - `input`: keyboard mapping shared by every frontend
//! - `web`: browser canvas, sprite loading and config lookup (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::Command;

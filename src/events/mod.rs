//! Event types and observers.
//!
//! Submodules:
//! - [`switchfullscreen`] – toggle the window between windowed and fullscreen
pub mod switchfullscreen;

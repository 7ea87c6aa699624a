//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – current and last column of a sprite-sheet animation
//! - [`assetname`] – display name of an asset
//! - [`facing`] – four-way facing that selects horizontal mirroring
//! - [`inputcontrolled`] – marker for the keyboard-driven player
//! - [`mapposition`] – integer world-space position
//! - [`sprite`] – texture key and the region of it to draw
//! - [`stats`] – health, experience and movement speed
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod assetname;
pub mod facing;
pub mod inputcontrolled;
pub mod mapposition;
pub mod sprite;
pub mod stats;
pub mod zindex;

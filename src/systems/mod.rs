//! Game systems.
//!
//! Submodules overview
//! - [`input`] – read hardware input and derive the player's intent
//! - [`playercontroller`] – move and turn the player from its intent
//! - [`render`] – draw the world using Raylib
//! - [`animation`] – step sprite-sheet frames on a fixed cadence

pub mod animation;
pub mod input;
pub mod playercontroller;
pub mod render;

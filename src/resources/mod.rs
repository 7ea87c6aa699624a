//! ECS resources made available to systems.
//!
//! Overview
//! - `framecounter` – rendered-frame counter pacing animation steps
//! - `fullscreen` – presence marks the window as fullscreen
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `playerinput` – the player's movement intent for this frame
//! - `texturestore` – loaded textures keyed by string IDs
pub mod framecounter;
pub mod fullscreen;
pub mod gameconfig;
pub mod input;
pub mod playerinput;
pub mod texturestore;

//! Game systems.
//!
//! This module groups all ECS systems that advance input, gameplay and
//! rendering.
//!
//! Submodules overview
//! - [`connect`] – turn clicks into connections, links and the outcome trial
//! - [`gameconfig`] – push [`crate::resources::gameconfig::GameConfig`] changes to the window
//! - [`gamestate`] – check for pending state transitions, restart and outcome timers
//! - [`highlight`] – raise the glow of the dot under the cursor
//! - [`hud`] – spawn and rewrite the HUD text lines
//! - [`input`] – read the keyboard and update [`crate::resources::input::InputState`]
//! - [`pointer`] – pick dots under the cursor and emit click events
//! - [`render`] – draw dots, links, HUD and debug overlays using Raylib
//! - [`time`] – update simulation time and delta, process timers
//! - [`tween`] – grow links from their start to their end

pub mod connect;
pub mod gameconfig;
pub mod gamestate;
pub mod highlight;
pub mod hud;
pub mod input;
pub mod pointer;
pub mod render;
pub mod time;
pub mod tween;

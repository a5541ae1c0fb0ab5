//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `camera3d` – perspective camera plus clip range
//! - `connections` – click-order connection graph of the current round
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window, camera and gameplay settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `pointer` – cursor position and hovered dot for the current frame
//! - `rng` – seedable random source
//! - `session` – dots, graph, outcome and generation of the running game
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – frame clock
pub mod camera3d;
pub mod connections;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod pointer;
pub mod rng;
pub mod session;
pub mod systemsstore;
pub mod windowsize;
pub mod worldtime;

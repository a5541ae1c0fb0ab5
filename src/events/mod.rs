//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`pointer`] – mouse clicks resolved to a dot (or to nothing)
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`timer`] – one-shot timer expiry
pub mod gamestate;
pub mod pointer;
pub mod switchdebug;
pub mod timer;

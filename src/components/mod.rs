//! ECS components for entities.
//!
//! Submodules overview:
//! - [`dot`] – clickable dot identity and its connected flag
//! - [`dynamictext`] – HUD text content and which HUD line it fills
//! - [`glow`] – emissive colour and hover intensity of a dot
//! - [`link`] – drawn line between two dots
//! - [`screenposition`] – screen-space position for HUD elements
//! - [`timer`] – one-shot countdown for the outcome delay
//! - [`tween`] – per-frame progress of a link's growth animation
//! - [`worldposition`] – 3D position in the scene

pub mod dot;
pub mod dynamictext;
pub mod glow;
pub mod link;
pub mod screenposition;
pub mod timer;
pub mod tween;
pub mod worldposition;

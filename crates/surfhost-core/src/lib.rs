//! Surfhost core crate.
//!
//! Front-end control logic for an externally implemented rendering engine:
//! when to bring the engine up, (re)bind or resize its output, tick frames,
//! and which pointer or pinch events to forward.

pub mod engine;
pub mod surface;
pub mod input;

pub mod assets;
pub mod config;
pub mod logging;
pub mod view;
pub mod window;

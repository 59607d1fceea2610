//! Desktop/mobile host runtime.
//!
//! Owns the `winit` EventLoop and Window and plays the platform's role for a
//! [`RenderView`](crate::view::RenderView): surface callbacks, frame ticks and
//! raw input.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

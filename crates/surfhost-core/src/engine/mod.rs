//! Engine boundary.
//!
//! The rendering engine is an external collaborator. Everything in this crate
//! talks to it through the [`Engine`] trait, a small set of one-way calls with
//! no return values and no declared failures.
//!
//! Calls may arrive from two host contexts (surface callbacks and input
//! dispatch). Implementations are expected to confine those calls to a single
//! internal context or synchronize internally; this crate does not enforce it.

mod call;
mod recording;
mod traced;

pub use call::EngineCall;
pub use recording::RecordingEngine;
pub use traced::TracedEngine;

use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use crate::input::MouseButton;
use crate::surface::TargetId;

/// Capability interface of the external rendering engine.
pub trait Engine {
    /// One-time engine construction.
    fn engine_init(&self);

    /// Application-specific scene population.
    fn scene_init(&self);

    /// Enters the engine's run state.
    fn engine_start(&self);

    /// Associates engine output with `target`.
    fn bind(&self, target: TargetId, width: u32, height: u32);

    /// Informs the engine of new output dimensions without rebinding.
    fn resize(&self, width: u32, height: u32);

    /// Advances engine time by one tick.
    fn advance_simulation(&self);

    /// Submits one frame of draw work.
    fn render_frame(&self);

    /// Adds a directory the engine searches for resources.
    fn register_search_path(&self, path: &Path);

    /// Single-pointer press (`down == true`) or release at pixel coordinates.
    fn button_event(&self, button: MouseButton, down: bool, x: i32, y: i32);

    /// Single-pointer motion at pixel coordinates.
    fn pointer_move(&self, x: i32, y: i32);

    /// Relative scale change from a two-pointer gesture.
    fn pinch(&self, scale: f32);
}

macro_rules! forward_engine {
    () => {
        fn engine_init(&self) {
            (**self).engine_init()
        }
        fn scene_init(&self) {
            (**self).scene_init()
        }
        fn engine_start(&self) {
            (**self).engine_start()
        }
        fn bind(&self, target: TargetId, width: u32, height: u32) {
            (**self).bind(target, width, height)
        }
        fn resize(&self, width: u32, height: u32) {
            (**self).resize(width, height)
        }
        fn advance_simulation(&self) {
            (**self).advance_simulation()
        }
        fn render_frame(&self) {
            (**self).render_frame()
        }
        fn register_search_path(&self, path: &Path) {
            (**self).register_search_path(path)
        }
        fn button_event(&self, button: MouseButton, down: bool, x: i32, y: i32) {
            (**self).button_event(button, down, x, y)
        }
        fn pointer_move(&self, x: i32, y: i32) {
            (**self).pointer_move(x, y)
        }
        fn pinch(&self, scale: f32) {
            (**self).pinch(scale)
        }
    };
}

impl<T: Engine + ?Sized> Engine for &T {
    forward_engine!();
}

impl<T: Engine + ?Sized> Engine for Arc<T> {
    forward_engine!();
}

impl<T: Engine + ?Sized> Engine for Rc<T> {
    forward_engine!();
}

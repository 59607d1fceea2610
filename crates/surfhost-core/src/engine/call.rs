use std::fmt;
use std::path::PathBuf;

use crate::input::MouseButton;
use crate::surface::TargetId;

use super::Engine;

/// A single engine invocation as a value.
///
/// Mirrors the [`Engine`] trait one-to-one. Used for recording, logging and
/// for asserting emitted call sequences in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    EngineInit,
    SceneInit,
    EngineStart,
    Bind { target: TargetId, width: u32, height: u32 },
    Resize { width: u32, height: u32 },
    AdvanceSimulation,
    RenderFrame,
    RegisterSearchPath(PathBuf),
    ButtonEvent { button: MouseButton, down: bool, x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    Pinch(f32),
}

impl EngineCall {
    /// Issues this call against `engine`.
    pub fn apply<E: Engine + ?Sized>(&self, engine: &E) {
        match self {
            EngineCall::EngineInit => engine.engine_init(),
            EngineCall::SceneInit => engine.scene_init(),
            EngineCall::EngineStart => engine.engine_start(),
            EngineCall::Bind { target, width, height } => engine.bind(*target, *width, *height),
            EngineCall::Resize { width, height } => engine.resize(*width, *height),
            EngineCall::AdvanceSimulation => engine.advance_simulation(),
            EngineCall::RenderFrame => engine.render_frame(),
            EngineCall::RegisterSearchPath(path) => engine.register_search_path(path),
            EngineCall::ButtonEvent { button, down, x, y } => {
                engine.button_event(*button, *down, *x, *y)
            }
            EngineCall::PointerMove { x, y } => engine.pointer_move(*x, *y),
            EngineCall::Pinch(scale) => engine.pinch(*scale),
        }
    }
}

impl fmt::Display for EngineCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineCall::EngineInit => f.write_str("engine_init"),
            EngineCall::SceneInit => f.write_str("scene_init"),
            EngineCall::EngineStart => f.write_str("engine_start"),
            EngineCall::Bind { target, width, height } => {
                write!(f, "bind({target}, {width}x{height})")
            }
            EngineCall::Resize { width, height } => write!(f, "resize({width}x{height})"),
            EngineCall::AdvanceSimulation => f.write_str("advance_simulation"),
            EngineCall::RenderFrame => f.write_str("render_frame"),
            EngineCall::RegisterSearchPath(path) => {
                write!(f, "register_search_path({})", path.display())
            }
            EngineCall::ButtonEvent { button, down, x, y } => {
                let dir = if *down { "down" } else { "up" };
                write!(f, "button_event({button:?} {dir} @ {x},{y})")
            }
            EngineCall::PointerMove { x, y } => write!(f, "pointer_move({x},{y})"),
            EngineCall::Pinch(scale) => write!(f, "pinch({scale})"),
        }
    }
}

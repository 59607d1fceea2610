use std::path::Path;

use crate::input::MouseButton;
use crate::surface::TargetId;

use super::{Engine, EngineCall};

/// Decorator that logs each call at `trace` level before forwarding it.
#[derive(Debug, Clone, Default)]
pub struct TracedEngine<E> {
    inner: E,
}

impl<E: Engine> TracedEngine<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    fn forward(&self, call: EngineCall) {
        log::trace!("engine <- {call}");
        call.apply(&self.inner);
    }
}

impl<E: Engine> Engine for TracedEngine<E> {
    fn engine_init(&self) {
        self.forward(EngineCall::EngineInit);
    }

    fn scene_init(&self) {
        self.forward(EngineCall::SceneInit);
    }

    fn engine_start(&self) {
        self.forward(EngineCall::EngineStart);
    }

    fn bind(&self, target: TargetId, width: u32, height: u32) {
        self.forward(EngineCall::Bind { target, width, height });
    }

    fn resize(&self, width: u32, height: u32) {
        self.forward(EngineCall::Resize { width, height });
    }

    fn advance_simulation(&self) {
        self.forward(EngineCall::AdvanceSimulation);
    }

    fn render_frame(&self) {
        self.forward(EngineCall::RenderFrame);
    }

    fn register_search_path(&self, path: &Path) {
        self.forward(EngineCall::RegisterSearchPath(path.to_path_buf()));
    }

    fn button_event(&self, button: MouseButton, down: bool, x: i32, y: i32) {
        self.forward(EngineCall::ButtonEvent { button, down, x, y });
    }

    fn pointer_move(&self, x: i32, y: i32) {
        self.forward(EngineCall::PointerMove { x, y });
    }

    fn pinch(&self, scale: f32) {
        self.forward(EngineCall::Pinch(scale));
    }
}

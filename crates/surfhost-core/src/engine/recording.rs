use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::input::MouseButton;
use crate::surface::TargetId;

use super::{Engine, EngineCall};

/// Engine that records every call in arrival order.
///
/// Thread-safe, so one instance can be shared between the surface and input
/// contexts behind an `Arc`.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<EngineCall>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.lock().clone()
    }

    /// Drains recorded calls, leaving the log empty.
    pub fn take(&self) -> Vec<EngineCall> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Replays the recorded log against another engine.
    pub fn replay<E: Engine + ?Sized>(&self, target: &E) {
        for call in self.lock().iter() {
            call.apply(target);
        }
    }

    fn push(&self, call: EngineCall) {
        self.lock().push(call);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EngineCall>> {
        // A panic while recording leaves the log intact; keep using it.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Engine for RecordingEngine {
    fn engine_init(&self) {
        self.push(EngineCall::EngineInit);
    }

    fn scene_init(&self) {
        self.push(EngineCall::SceneInit);
    }

    fn engine_start(&self) {
        self.push(EngineCall::EngineStart);
    }

    fn bind(&self, target: TargetId, width: u32, height: u32) {
        self.push(EngineCall::Bind { target, width, height });
    }

    fn resize(&self, width: u32, height: u32) {
        self.push(EngineCall::Resize { width, height });
    }

    fn advance_simulation(&self) {
        self.push(EngineCall::AdvanceSimulation);
    }

    fn render_frame(&self) {
        self.push(EngineCall::RenderFrame);
    }

    fn register_search_path(&self, path: &Path) {
        self.push(EngineCall::RegisterSearchPath(path.to_path_buf()));
    }

    fn button_event(&self, button: MouseButton, down: bool, x: i32, y: i32) {
        self.push(EngineCall::ButtonEvent { button, down, x, y });
    }

    fn pointer_move(&self, x: i32, y: i32) {
        self.push(EngineCall::PointerMove { x, y });
    }

    fn pinch(&self, scale: f32) {
        self.push(EngineCall::Pinch(scale));
    }
}

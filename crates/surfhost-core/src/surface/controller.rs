use crate::engine::Engine;

use super::state::{SurfaceAction, SurfaceEvent, SurfaceState, TargetId};

/// Drives engine bring-up, target binding and per-frame calls from platform
/// surface callbacks.
///
/// Owns its [`SurfaceState`] exclusively. Callbacks are expected on the host's
/// rendering context, in delivery order.
pub struct SurfaceLifecycleController<E> {
    state: SurfaceState,
    engine: E,
}

impl<E: Engine> SurfaceLifecycleController<E> {
    pub fn new(engine: E) -> Self {
        Self { state: SurfaceState::new(), engine }
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn ready(&self) -> bool {
        self.state.ready()
    }

    /// Surface created. Runs engine bring-up the first time only.
    pub fn on_create(&mut self) {
        if self.handle(SurfaceEvent::Create) == SurfaceAction::BringUp {
            log::debug!("engine started");
        }
    }

    /// Surface target or size (re)reported by the platform.
    pub fn on_target_changed(&mut self, target: TargetId, width: u32, height: u32) {
        match self.handle(SurfaceEvent::TargetChanged { target, width, height }) {
            SurfaceAction::Rebind { .. } => {
                log::debug!("surface bound to {target} at {width}x{height}");
            }
            SurfaceAction::Resize { .. } => {
                log::debug!("surface resized to {width}x{height}");
            }
            _ if !self.state.initialized() => {
                log::trace!("target {target} reported before create; ignored");
            }
            _ => {}
        }
    }

    /// One display frame.
    pub fn on_frame_tick(&mut self) {
        self.handle(SurfaceEvent::FrameTick);
    }

    fn handle(&mut self, event: SurfaceEvent) -> SurfaceAction {
        let (next, action) = self.state.step(event);
        self.state = next;
        action.issue(&self.engine);
        action
    }
}

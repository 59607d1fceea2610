use std::fmt;

use crate::engine::Engine;

/// Opaque identity of a rendering target (framebuffer / native surface).
///
/// The platform may swap the underlying target without a size change; a new
/// id is the only signal of that.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// Platform surface callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceEvent {
    /// Rendering surface created.
    Create,
    /// The current target and/or its size were (re)reported.
    TargetChanged { target: TargetId, width: u32, height: u32 },
    /// Once per display frame.
    FrameTick,
}

/// Engine work decided by a single transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceAction {
    None,
    /// `engine_init`, `scene_init`, `engine_start`.
    BringUp,
    /// `bind` followed by `resize`.
    Rebind { target: TargetId, width: u32, height: u32 },
    /// `resize` only.
    Resize { width: u32, height: u32 },
    /// `advance_simulation` followed by `render_frame`.
    Frame,
}

impl SurfaceAction {
    /// Issues the action's calls, in order, against `engine`.
    pub fn issue<E: Engine + ?Sized>(self, engine: &E) {
        match self {
            SurfaceAction::None => {}
            SurfaceAction::BringUp => {
                engine.engine_init();
                engine.scene_init();
                engine.engine_start();
            }
            SurfaceAction::Rebind { target, width, height } => {
                engine.bind(target, width, height);
                engine.resize(width, height);
            }
            SurfaceAction::Resize { width, height } => engine.resize(width, height),
            SurfaceAction::Frame => {
                engine.advance_simulation();
                engine.render_frame();
            }
        }
    }
}

/// Lifecycle state of the rendering surface.
///
/// `bound_target`, `width` and `height` change only as the consequence of a
/// `TargetChanged` event; they are never set speculatively.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SurfaceState {
    initialized: bool,
    bound_target: Option<TargetId>,
    width: u32,
    height: u32,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn bound_target(&self) -> Option<TargetId> {
        self.bound_target
    }

    /// Last size communicated to the engine.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Frame ticks reach the engine only when this holds.
    pub fn ready(&self) -> bool {
        self.initialized && self.bound_target.is_some()
    }

    /// Pure transition: returns the next state and the engine work to issue.
    pub fn step(self, event: SurfaceEvent) -> (SurfaceState, SurfaceAction) {
        match event {
            SurfaceEvent::Create => {
                if self.initialized {
                    return (self, SurfaceAction::None);
                }
                (Self { initialized: true, ..self }, SurfaceAction::BringUp)
            }

            SurfaceEvent::TargetChanged { target, width, height } => {
                // Target reports before bring-up are out of order; ignore them.
                if !self.initialized {
                    return (self, SurfaceAction::None);
                }

                if self.bound_target != Some(target) {
                    let next = Self { bound_target: Some(target), width, height, ..self };
                    (next, SurfaceAction::Rebind { target, width, height })
                } else if (width, height) != (self.width, self.height) {
                    (Self { width, height, ..self }, SurfaceAction::Resize { width, height })
                } else {
                    (self, SurfaceAction::None)
                }
            }

            SurfaceEvent::FrameTick => {
                if self.ready() {
                    (self, SurfaceAction::Frame)
                } else {
                    (self, SurfaceAction::None)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineCall, RecordingEngine};

    fn changed(target: u64, width: u32, height: u32) -> SurfaceEvent {
        SurfaceEvent::TargetChanged { target: TargetId(target), width, height }
    }

    fn created() -> SurfaceState {
        SurfaceState::new().step(SurfaceEvent::Create).0
    }

    #[test]
    fn create_brings_up_once() {
        let (s, a) = SurfaceState::new().step(SurfaceEvent::Create);
        assert!(s.initialized());
        assert_eq!(a, SurfaceAction::BringUp);

        let (s2, a2) = s.step(SurfaceEvent::Create);
        assert_eq!(s2, s);
        assert_eq!(a2, SurfaceAction::None);
    }

    #[test]
    fn target_change_before_create_is_ignored() {
        let (s, a) = SurfaceState::new().step(changed(1, 100, 200));
        assert_eq!(a, SurfaceAction::None);
        assert_eq!(s.bound_target(), None);
        assert!(!s.ready());
    }

    #[test]
    fn first_target_binds_and_becomes_ready() {
        let (s, a) = created().step(changed(1, 100, 200));
        assert_eq!(a, SurfaceAction::Rebind { target: TargetId(1), width: 100, height: 200 });
        assert_eq!(s.bound_target(), Some(TargetId(1)));
        assert_eq!(s.size(), (100, 200));
        assert!(s.ready());
    }

    #[test]
    fn same_target_new_size_only_resizes() {
        let (s, _) = created().step(changed(1, 100, 200));
        let (s, a) = s.step(changed(1, 150, 250));
        assert_eq!(a, SurfaceAction::Resize { width: 150, height: 250 });
        assert_eq!(s.size(), (150, 250));
        assert_eq!(s.bound_target(), Some(TargetId(1)));
    }

    #[test]
    fn new_target_same_size_rebinds() {
        let (s, _) = created().step(changed(1, 100, 200));
        let (s, a) = s.step(changed(2, 100, 200));
        assert_eq!(a, SurfaceAction::Rebind { target: TargetId(2), width: 100, height: 200 });
        assert_eq!(s.bound_target(), Some(TargetId(2)));
    }

    #[test]
    fn repeated_identical_report_is_idempotent() {
        let (mut s, _) = created().step(changed(3, 64, 64));
        for _ in 0..5 {
            let (next, a) = s.step(changed(3, 64, 64));
            assert_eq!(a, SurfaceAction::None);
            assert_eq!(next, s);
            s = next;
        }
    }

    #[test]
    fn frame_tick_gated_on_ready() {
        assert_eq!(SurfaceState::new().step(SurfaceEvent::FrameTick).1, SurfaceAction::None);
        assert_eq!(created().step(SurfaceEvent::FrameTick).1, SurfaceAction::None);

        let (bound, _) = created().step(changed(1, 1, 1));
        assert_eq!(bound.step(SurfaceEvent::FrameTick).1, SurfaceAction::Frame);
    }

    #[test]
    fn rebind_issues_bind_then_resize() {
        let engine = RecordingEngine::new();
        SurfaceAction::Rebind { target: TargetId(9), width: 4, height: 5 }.issue(&engine);
        assert_eq!(
            engine.take(),
            vec![
                EngineCall::Bind { target: TargetId(9), width: 4, height: 5 },
                EngineCall::Resize { width: 4, height: 5 },
            ]
        );
    }

    #[test]
    fn bring_up_and_frame_issue_in_order() {
        let engine = RecordingEngine::new();
        SurfaceAction::BringUp.issue(&engine);
        SurfaceAction::Frame.issue(&engine);
        SurfaceAction::None.issue(&engine);
        assert_eq!(
            engine.take(),
            vec![
                EngineCall::EngineInit,
                EngineCall::SceneInit,
                EngineCall::EngineStart,
                EngineCall::AdvanceSimulation,
                EngineCall::RenderFrame,
            ]
        );
    }
}

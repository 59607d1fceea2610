use crate::engine::Engine;

use super::gesture::{GestureDisambiguator, GesturePhase};
use super::scale_detector::{ScaleDetector, ScaleDetectorConfig};
use super::types::{EventResult, MouseButton, TouchInput, TouchPhase};

/// Routes raw touches through a [`ScaleDetector`] and then a
/// [`GestureDisambiguator`], one dispatch pass per touch.
///
/// The detector always sees the touch first, so a pinch that starts in this
/// pass already suppresses the pointer half of the same pass.
pub struct TouchRouter<E> {
    detector: ScaleDetector,
    gestures: GestureDisambiguator<E>,
    primary: Option<u64>,
}

impl<E: Engine> TouchRouter<E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, ScaleDetectorConfig::default())
    }

    pub fn with_config(engine: E, config: ScaleDetectorConfig) -> Self {
        Self {
            detector: ScaleDetector::new(config),
            gestures: GestureDisambiguator::new(engine),
            primary: None,
        }
    }

    pub fn gestures(&self) -> &GestureDisambiguator<E> {
        &self.gestures
    }

    /// Direct access for non-touch sources (mouse, trackpad pinch).
    pub fn gestures_mut(&mut self) -> &mut GestureDisambiguator<E> {
        &mut self.gestures
    }

    pub fn on_touch(&mut self, touch: TouchInput) -> EventResult {
        if let Some(signal) = self.detector.on_touch(&touch) {
            self.gestures.on_scale_signal(signal);
        }

        let result = if self.claim_primary(&touch) {
            self.route_primary(touch)
        } else if touch.phase == TouchPhase::Move {
            EventResult::Unhandled
        } else {
            EventResult::Handled
        };

        // The detector consumed this touch as part of a pinch.
        if self.gestures.phase() == GesturePhase::Pinching {
            EventResult::Handled
        } else {
            result
        }
    }

    fn claim_primary(&mut self, touch: &TouchInput) -> bool {
        match (self.primary, touch.phase) {
            (None, TouchPhase::Start) => {
                self.primary = Some(touch.id);
                true
            }
            (primary, _) => primary == Some(touch.id),
        }
    }

    fn route_primary(&mut self, touch: TouchInput) -> EventResult {
        // Touch carries no button; the engine sees it as the primary one.
        let button = MouseButton::Left;
        let TouchInput { x, y, .. } = touch;

        match touch.phase {
            TouchPhase::Start => self.gestures.on_pointer_down(x, y, button),
            TouchPhase::Move => self.gestures.on_pointer_move(x, y),
            TouchPhase::End => {
                self.primary = None;
                self.gestures.on_pointer_up(x, y, button)
            }
            TouchPhase::Cancel => {
                self.primary = None;
                self.gestures.on_pointer_cancel(x, y, button)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineCall, RecordingEngine};

    fn router() -> TouchRouter<RecordingEngine> {
        TouchRouter::new(RecordingEngine::new())
    }

    fn t(id: u64, phase: TouchPhase, x: f32, y: f32) -> TouchInput {
        TouchInput::new(id, phase, x, y)
    }

    #[test]
    fn single_finger_drags() {
        let mut r = router();
        r.on_touch(t(0, TouchPhase::Start, 10.0, 10.0));
        r.on_touch(t(0, TouchPhase::Move, 12.0, 11.0));
        r.on_touch(t(0, TouchPhase::End, 12.0, 11.0));

        let b = MouseButton::Left;
        assert_eq!(
            r.gestures().engine().take(),
            vec![
                EngineCall::ButtonEvent { button: b, down: true, x: 10, y: 10 },
                EngineCall::PointerMove { x: 12, y: 11 },
                EngineCall::ButtonEvent { button: b, down: false, x: 12, y: 11 },
            ]
        );
    }

    #[test]
    fn second_finger_turns_drag_into_pinch() {
        let mut r = router();
        r.on_touch(t(0, TouchPhase::Start, 0.0, 0.0));
        r.gestures().engine().take();

        assert!(r.on_touch(t(1, TouchPhase::Start, 100.0, 0.0)).is_handled());
        assert_eq!(r.gestures().phase(), GesturePhase::Pinching);

        // Primary finger moves inward: span 100 -> 50.
        assert!(r.on_touch(t(0, TouchPhase::Move, 50.0, 0.0)).is_handled());
        assert_eq!(r.gestures().engine().take(), vec![EngineCall::Pinch(0.5)]);
    }

    #[test]
    fn drag_does_not_resume_after_pinch_without_new_down() {
        let mut r = router();
        r.on_touch(t(0, TouchPhase::Start, 0.0, 0.0));
        r.on_touch(t(1, TouchPhase::Start, 100.0, 0.0));
        r.on_touch(t(1, TouchPhase::End, 100.0, 0.0));
        r.gestures().engine().take();
        assert_eq!(r.gestures().phase(), GesturePhase::Idle);

        assert_eq!(r.on_touch(t(0, TouchPhase::Move, 5.0, 5.0)), EventResult::Unhandled);
        r.on_touch(t(0, TouchPhase::End, 5.0, 5.0));
        assert!(r.gestures().engine().is_empty());

        r.on_touch(t(2, TouchPhase::Start, 7.0, 7.0));
        r.on_touch(t(2, TouchPhase::Move, 8.0, 8.0));
        assert_eq!(r.gestures().engine().take().len(), 2);
    }

    #[test]
    fn secondary_move_outside_pinch_is_unhandled() {
        let mut r = router();
        r.on_touch(t(0, TouchPhase::Start, 0.0, 0.0));
        // Too close to begin a pinch.
        r.on_touch(t(1, TouchPhase::Start, 2.0, 0.0));

        assert_eq!(r.on_touch(t(1, TouchPhase::Move, 3.0, 0.0)), EventResult::Unhandled);
    }
}

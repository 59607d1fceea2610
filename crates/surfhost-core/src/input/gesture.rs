use crate::engine::Engine;

use super::types::{EventResult, MouseButton, ScaleSignal};

/// Current interpretation of the input stream.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

/// Input delivered to the disambiguator. Coordinates are pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureEvent {
    PinchBegin,
    PinchUpdate(f32),
    PinchEnd,
    PointerDown { x: i32, y: i32, button: MouseButton },
    PointerMove { x: i32, y: i32 },
    PointerUp { x: i32, y: i32, button: MouseButton },
    /// Platform aborted the pointer stream (e.g. the view lost the gesture).
    PointerCancel { x: i32, y: i32, button: MouseButton },
}

impl From<ScaleSignal> for GestureEvent {
    fn from(signal: ScaleSignal) -> Self {
        match signal {
            ScaleSignal::Begin => GestureEvent::PinchBegin,
            ScaleSignal::Update(scale) => GestureEvent::PinchUpdate(scale),
            ScaleSignal::End => GestureEvent::PinchEnd,
        }
    }
}

/// Engine call decided by a single transition; at most one per event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureAction {
    None,
    Button { button: MouseButton, down: bool, x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Pinch(f32),
}

impl GestureAction {
    pub fn issue<E: Engine + ?Sized>(self, engine: &E) {
        match self {
            GestureAction::None => {}
            GestureAction::Button { button, down, x, y } => engine.button_event(button, down, x, y),
            GestureAction::Move { x, y } => engine.pointer_move(x, y),
            GestureAction::Pinch(scale) => engine.pinch(scale),
        }
    }
}

impl GesturePhase {
    /// Pure transition.
    ///
    /// `Pinching` overrides everything: while it holds, no pointer event is
    /// forwarded. Leaving it goes to `Idle`, so a drag needs a fresh down.
    pub fn step(self, event: GestureEvent) -> (GesturePhase, GestureAction, EventResult) {
        use GestureEvent as Ev;
        use GesturePhase::{Dragging, Idle, Pinching};

        match (self, event) {
            (_, Ev::PinchBegin) => (Pinching, GestureAction::None, EventResult::Handled),
            (Pinching, Ev::PinchUpdate(scale)) => {
                (Pinching, GestureAction::Pinch(scale), EventResult::Handled)
            }
            (Pinching, Ev::PinchEnd) => (Idle, GestureAction::None, EventResult::Handled),
            // Scale signals outside a pinch carry nothing to forward.
            (phase, Ev::PinchUpdate(_) | Ev::PinchEnd) => {
                (phase, GestureAction::None, EventResult::Handled)
            }

            (Pinching, Ev::PointerDown { .. } | Ev::PointerUp { .. } | Ev::PointerCancel { .. }) => {
                (Pinching, GestureAction::None, EventResult::Handled)
            }
            (Idle | Dragging, Ev::PointerDown { x, y, button }) => (
                Dragging,
                GestureAction::Button { button, down: true, x, y },
                EventResult::Handled,
            ),

            (Dragging, Ev::PointerMove { x, y }) => {
                (Dragging, GestureAction::Move { x, y }, EventResult::Handled)
            }
            (phase, Ev::PointerMove { .. }) => (phase, GestureAction::None, EventResult::Unhandled),

            (Dragging, Ev::PointerUp { x, y, button } | Ev::PointerCancel { x, y, button }) => (
                Idle,
                GestureAction::Button { button, down: false, x, y },
                EventResult::Handled,
            ),
            (Idle, Ev::PointerUp { .. } | Ev::PointerCancel { .. }) => {
                (Idle, GestureAction::None, EventResult::Handled)
            }
        }
    }
}

/// Turns raw pointer events and scale-gesture signals into drag or pinch
/// calls on the engine, with pinch taking strict priority.
pub struct GestureDisambiguator<E> {
    phase: GesturePhase,
    engine: E,
}

impl<E: Engine> GestureDisambiguator<E> {
    pub fn new(engine: E) -> Self {
        Self { phase: GesturePhase::Idle, engine }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn on_pinch_begin(&mut self) -> EventResult {
        self.handle(GestureEvent::PinchBegin)
    }

    pub fn on_pinch_update(&mut self, scale: f32) -> EventResult {
        self.handle(GestureEvent::PinchUpdate(scale))
    }

    pub fn on_pinch_end(&mut self) -> EventResult {
        self.handle(GestureEvent::PinchEnd)
    }

    pub fn on_scale_signal(&mut self, signal: ScaleSignal) -> EventResult {
        self.handle(signal.into())
    }

    // Platform coordinates are truncated to whole pixels.

    pub fn on_pointer_down(&mut self, x: f32, y: f32, button: MouseButton) -> EventResult {
        self.handle(GestureEvent::PointerDown { x: x as i32, y: y as i32, button })
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> EventResult {
        self.handle(GestureEvent::PointerMove { x: x as i32, y: y as i32 })
    }

    pub fn on_pointer_up(&mut self, x: f32, y: f32, button: MouseButton) -> EventResult {
        self.handle(GestureEvent::PointerUp { x: x as i32, y: y as i32, button })
    }

    pub fn on_pointer_cancel(&mut self, x: f32, y: f32, button: MouseButton) -> EventResult {
        self.handle(GestureEvent::PointerCancel { x: x as i32, y: y as i32, button })
    }

    /// Applies one event and issues at most one engine call.
    pub fn handle(&mut self, event: GestureEvent) -> EventResult {
        let prev = self.phase;
        let (next, action, result) = prev.step(event);
        self.phase = next;

        if prev != next {
            log::trace!("gesture phase {prev:?} -> {next:?}");
        }
        let signal = matches!(event, GestureEvent::PinchBegin | GestureEvent::PinchEnd);
        if action == GestureAction::None && !signal {
            log::trace!("dropped {event:?} in {prev:?}");
        }

        action.issue(&self.engine);
        result
    }
}

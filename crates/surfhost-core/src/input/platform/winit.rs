use winit::event::{MouseButton as WinitMouseButton, Touch, TouchPhase as WinitTouchPhase};

use crate::input::{MouseButton, ScaleSignal, TouchInput, TouchPhase};

/// Translates a winit touch into a raw [`TouchInput`] in physical pixels.
pub(crate) fn translate_touch(touch: &Touch) -> TouchInput {
    TouchInput {
        id: touch.id,
        phase: map_touch_phase(touch.phase),
        x: touch.location.x as f32,
        y: touch.location.y as f32,
    }
}

pub(crate) fn map_touch_phase(phase: WinitTouchPhase) -> TouchPhase {
    match phase {
        WinitTouchPhase::Started => TouchPhase::Start,
        WinitTouchPhase::Moved => TouchPhase::Move,
        WinitTouchPhase::Ended => TouchPhase::End,
        WinitTouchPhase::Cancelled => TouchPhase::Cancel,
    }
}

/// Translates a trackpad pinch step into a scale signal.
///
/// winit reports the change as a delta around zero; the engine expects a
/// relative factor around one.
pub(crate) fn translate_pinch(phase: WinitTouchPhase, delta: f64) -> ScaleSignal {
    match phase {
        WinitTouchPhase::Started => ScaleSignal::Begin,
        WinitTouchPhase::Moved => ScaleSignal::Update((1.0 + delta) as f32),
        WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => ScaleSignal::End,
    }
}

pub(crate) fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

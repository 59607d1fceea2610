/// Pointer button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Maps an Android `MotionEvent` button bit to a button.
    ///
    /// Touch input reports no button (0); it and any unknown bit fall back to
    /// `Left`, which is what a single-finger drag means to the engine.
    pub fn from_android_button(code: i32) -> Self {
        match code {
            1 => MouseButton::Left,
            2 => MouseButton::Right,
            4 => MouseButton::Middle,
            8 => MouseButton::Back,
            16 => MouseButton::Forward,
            _ => MouseButton::Left,
        }
    }
}

/// Result returned to the platform for each dispatched pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was consumed.
    Handled,
    /// Event was not consumed; the platform may route it elsewhere.
    Unhandled,
}

impl EventResult {
    #[inline]
    pub fn is_handled(self) -> bool {
        self == EventResult::Handled
    }
}

/// Signals of a two-pointer scale gesture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScaleSignal {
    Begin,
    /// Relative scale since the previous update.
    Update(f32),
    End,
}

/// Phase of a single touch pointer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One raw touch sample in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchInput {
    /// Platform pointer id, stable for the lifetime of the touch.
    pub id: u64,
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
}

impl TouchInput {
    pub fn new(id: u64, phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { id, phase, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_button_bits_map_to_buttons() {
        assert_eq!(MouseButton::from_android_button(1), MouseButton::Left);
        assert_eq!(MouseButton::from_android_button(2), MouseButton::Right);
        assert_eq!(MouseButton::from_android_button(4), MouseButton::Middle);
        assert_eq!(MouseButton::from_android_button(8), MouseButton::Back);
        assert_eq!(MouseButton::from_android_button(16), MouseButton::Forward);
    }

    #[test]
    fn touch_and_unknown_codes_fall_back_to_left() {
        assert_eq!(MouseButton::from_android_button(0), MouseButton::Left);
        assert_eq!(MouseButton::from_android_button(32), MouseButton::Left);
        assert_eq!(MouseButton::from_android_button(-1), MouseButton::Left);
    }
}

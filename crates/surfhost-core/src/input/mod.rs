//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Host code translates platform events into [`TouchInput`]s / pointer calls;
//! [`GestureDisambiguator`] decides what reaches the engine.

mod gesture;
mod router;
mod scale_detector;
mod types;

pub(crate) mod platform;

pub use gesture::{GestureAction, GestureDisambiguator, GestureEvent, GesturePhase};
pub use router::TouchRouter;
pub use scale_detector::{ScaleDetector, ScaleDetectorConfig};
pub use types::{EventResult, MouseButton, ScaleSignal, TouchInput, TouchPhase};

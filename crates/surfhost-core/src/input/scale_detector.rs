use super::types::{ScaleSignal, TouchInput, TouchPhase};

/// Scale detector tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleDetectorConfig {
    /// Minimum span, in pixels, before two pointers count as a pinch.
    pub min_span: f32,
}

impl Default for ScaleDetectorConfig {
    fn default() -> Self {
        Self { min_span: 16.0 }
    }
}

#[derive(Debug, Copy, Clone)]
struct TrackedPointer {
    id: u64,
    x: f32,
    y: f32,
}

/// Two-pointer scale gesture detector.
///
/// Fed raw touches; produces [`ScaleSignal`]s. The span is the diameter of the
/// pointer cloud (twice the mean distance from the centroid), so for two
/// pointers it is their distance.
#[derive(Debug, Clone, Default)]
pub struct ScaleDetector {
    config: ScaleDetectorConfig,
    pointers: Vec<TrackedPointer>,
    in_progress: bool,
    prev_span: f32,
}

impl ScaleDetector {
    pub fn new(config: ScaleDetectorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    fn reset(&mut self) {
        self.pointers.clear();
        self.in_progress = false;
        self.prev_span = 0.0;
    }

    /// Consumes one touch and returns the signal it produced, if any.
    pub fn on_touch(&mut self, touch: &TouchInput) -> Option<ScaleSignal> {
        match touch.phase {
            TouchPhase::Start => {
                self.upsert(touch);
                if self.in_progress {
                    // Pointer set changed mid-gesture; avoid a jump in scale.
                    self.prev_span = self.span();
                    None
                } else {
                    self.try_begin()
                }
            }

            TouchPhase::Move => {
                let Some(p) = self.pointers.iter_mut().find(|p| p.id == touch.id) else {
                    return None;
                };
                p.x = touch.x;
                p.y = touch.y;

                if !self.in_progress {
                    return self.try_begin();
                }

                let span = self.span();
                let prev = std::mem::replace(&mut self.prev_span, span);
                if prev > 0.0 && span > 0.0 {
                    Some(ScaleSignal::Update(span / prev))
                } else {
                    None
                }
            }

            TouchPhase::End => {
                self.remove(touch.id);
                if !self.in_progress {
                    return None;
                }
                if self.pointers.len() < 2 {
                    self.in_progress = false;
                    Some(ScaleSignal::End)
                } else {
                    self.prev_span = self.span();
                    None
                }
            }

            // A cancel aborts the whole stream: every tracked pointer is
            // forgotten, so a new pinch needs fresh pointer starts.
            TouchPhase::Cancel => {
                let was_in_progress = self.in_progress;
                self.reset();
                was_in_progress.then_some(ScaleSignal::End)
            }
        }
    }

    fn try_begin(&mut self) -> Option<ScaleSignal> {
        if self.pointers.len() < 2 {
            return None;
        }
        let span = self.span();
        if span <= self.config.min_span {
            return None;
        }
        self.in_progress = true;
        self.prev_span = span;
        Some(ScaleSignal::Begin)
    }

    fn upsert(&mut self, touch: &TouchInput) {
        match self.pointers.iter_mut().find(|p| p.id == touch.id) {
            Some(p) => {
                p.x = touch.x;
                p.y = touch.y;
            }
            None => self.pointers.push(TrackedPointer { id: touch.id, x: touch.x, y: touch.y }),
        }
    }

    fn remove(&mut self, id: u64) {
        self.pointers.retain(|p| p.id != id);
    }

    fn span(&self) -> f32 {
        let n = self.pointers.len();
        if n == 0 {
            return 0.0;
        }
        let n = n as f32;
        let (sx, sy) = self.pointers.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let (cx, cy) = (sx / n, sy / n);

        let mean = self
            .pointers
            .iter()
            .map(|p| ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt())
            .sum::<f32>()
            / n;

        mean * 2.0
    }
}

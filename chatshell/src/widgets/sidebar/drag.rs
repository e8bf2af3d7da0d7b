use std::time::{Duration, Instant};

use super::model::{
    MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH, NARROW_SIDEBAR_WIDTH,
};

/// Minimum spacing between two applied width updates of one gesture.
pub(crate) const DRAG_THROTTLE: Duration = Duration::from_millis(20);
/// Gestures shorter than this are treated as a click on the drag handle.
pub(crate) const CLICK_THRESHOLD: Duration = Duration::from_millis(300);

/// How a finished gesture was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureKind {
    Click,
    Drag,
}

/// Snapshot of one pointer-drag gesture on the sidebar handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    start_x: f32,
    start_width: u32,
    started_at: Instant,
    last_update_at: Option<Instant>,
}

impl DragSession {
    /// Start a gesture at pointer `start_x` over a sidebar of `start_width`.
    pub(crate) fn begin(start_x: f32, start_width: u32, now: Instant) -> Self {
        Self {
            start_x,
            start_width,
            started_at: now,
            last_update_at: None,
        }
    }

    pub(crate) fn start_width(&self) -> u32 {
        self.start_width
    }

    /// Return the width for a pointer at `x`, or `None` while throttled.
    pub(crate) fn on_move(&mut self, x: f32, now: Instant) -> Option<u32> {
        if let Some(last) = self.last_update_at {
            if now.saturating_duration_since(last) < DRAG_THROTTLE {
                return None;
            }
        }

        self.last_update_at = Some(now);
        Some(resolve_width(self.start_width, x - self.start_x))
    }

    /// Classify the gesture ending at `now`.
    pub(crate) fn classify(&self, now: Instant) -> GestureKind {
        if now.saturating_duration_since(self.started_at) < CLICK_THRESHOLD {
            GestureKind::Click
        } else {
            GestureKind::Drag
        }
    }
}

/// Width for a drag of `delta` pixels from `start_width`: capped at the
/// maximum, snapped to the narrow width below the minimum.
pub(crate) fn resolve_width(start_width: u32, delta: f32) -> u32 {
    let candidate =
        (start_width as f32 + delta).round().min(MAX_SIDEBAR_WIDTH as f32);

    if candidate < MIN_SIDEBAR_WIDTH as f32 {
        NARROW_SIDEBAR_WIDTH
    } else {
        candidate as u32
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::widgets::sidebar::model::DEFAULT_SIDEBAR_WIDTH;

    fn at(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn given_any_delta_when_resolved_then_width_is_narrow_or_in_bounds() {
        for start in [NARROW_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH, 300, 500] {
            for delta in (-800..=800).step_by(7) {
                let width = resolve_width(start, delta as f32);
                assert!(
                    width == NARROW_SIDEBAR_WIDTH
                        || (MIN_SIDEBAR_WIDTH..=MAX_SIDEBAR_WIDTH)
                            .contains(&width),
                    "start {start} delta {delta} produced {width}"
                );
            }
        }
    }

    #[test]
    fn given_drag_just_below_minimum_when_resolved_then_width_snaps_narrow() {
        let delta = MIN_SIDEBAR_WIDTH as f32 - DEFAULT_SIDEBAR_WIDTH as f32;

        assert_eq!(
            resolve_width(DEFAULT_SIDEBAR_WIDTH, delta - 1.0),
            NARROW_SIDEBAR_WIDTH
        );
        assert_eq!(
            resolve_width(DEFAULT_SIDEBAR_WIDTH, delta),
            MIN_SIDEBAR_WIDTH
        );
    }

    #[test]
    fn given_first_move_when_handled_then_update_is_applied() {
        let base = Instant::now();
        let mut session = DragSession::begin(10.0, DEFAULT_SIDEBAR_WIDTH, base);

        assert_eq!(
            session.on_move(30.0, at(base, 1)),
            Some(DEFAULT_SIDEBAR_WIDTH + 20)
        );
    }

    #[test]
    fn given_moves_inside_throttle_window_when_handled_then_they_are_dropped() {
        let base = Instant::now();
        let mut session = DragSession::begin(0.0, DEFAULT_SIDEBAR_WIDTH, base);
        assert!(session.on_move(5.0, at(base, 0)).is_some());

        assert!(session.on_move(6.0, at(base, 19)).is_none());
        assert_eq!(
            session.on_move(7.0, at(base, 20)),
            Some(DEFAULT_SIDEBAR_WIDTH + 7)
        );
    }

    #[test]
    fn given_gesture_durations_when_classified_then_boundary_is_300ms() {
        let base = Instant::now();
        let session = DragSession::begin(0.0, DEFAULT_SIDEBAR_WIDTH, base);

        assert_eq!(session.classify(at(base, 299)), GestureKind::Click);
        assert_eq!(session.classify(at(base, 300)), GestureKind::Drag);
        assert_eq!(session.classify(at(base, 301)), GestureKind::Drag);
    }
}

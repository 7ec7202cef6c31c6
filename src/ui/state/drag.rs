// SPDX-License-Identifier: MPL-2.0
//! Drag-session state.
//!
//! A drag session spans one press-to-release interval. Everything it needs
//! is frozen at the press: the anchor coordinate, the interpretation mode,
//! the frame index, and the pan offset. Later moves are always computed
//! against these anchors, never against the previous move.

use iced::{Point, Vector};

/// How drag deltas are interpreted for the duration of one session.
///
/// The mode is derived from the scale at press time: `Rotate` iff the scale
/// is exactly base, `Pan` otherwise. It is never recomputed mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Rotate,
    Pan,
}

/// Manages one drag session's frozen anchors.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag session is currently active.
    pub is_dragging: bool,

    /// Interpretation of deltas for this session.
    pub mode: DragMode,

    /// Pointer coordinate at drag start.
    pub anchor: Option<Point>,

    /// Frame index frozen at drag start; all rotation during the session is
    /// computed relative to this, which keeps long drags drift-free.
    pub frame_at_drag_start: usize,

    /// Pan offset frozen at drag start.
    pub pan_at_drag_start: Vector,
}

impl DragState {
    /// Starts a drag session, freezing all anchors.
    pub fn start(&mut self, anchor: Point, mode: DragMode, frame: usize, pan: Vector) {
        self.is_dragging = true;
        self.mode = mode;
        self.anchor = Some(anchor);
        self.frame_at_drag_start = frame;
        self.pan_at_drag_start = pan;
    }

    /// Ends the drag session.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.anchor = None;
    }

    /// Horizontal distance from the anchor, if a session is active.
    #[must_use]
    pub fn delta_x(&self, current: Point) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let anchor = self.anchor?;
        Some(current.x - anchor.x)
    }

    /// Pan offset implied by the pointer position: the frozen pan plus the
    /// full displacement since the anchor.
    #[must_use]
    pub fn pan_target(&self, current: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }
        let anchor = self.anchor?;
        Some(Vector::new(
            self.pan_at_drag_start.x + (current.x - anchor.x),
            self.pan_at_drag_start.y + (current.y - anchor.y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.anchor.is_none());
    }

    #[test]
    fn start_freezes_all_anchors() {
        let mut state = DragState::default();
        state.start(
            Point::new(120.0, 80.0),
            DragMode::Pan,
            7,
            Vector::new(3.0, -4.0),
        );

        assert!(state.is_dragging);
        assert_eq!(state.mode, DragMode::Pan);
        assert_eq!(state.anchor, Some(Point::new(120.0, 80.0)));
        assert_eq!(state.frame_at_drag_start, 7);
    }

    #[test]
    fn delta_x_measures_from_the_anchor() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), DragMode::Rotate, 0, Vector::default());

        assert_abs_diff_eq!(state.delta_x(Point::new(160.0, 90.0)).unwrap(), 60.0);
        assert_abs_diff_eq!(state.delta_x(Point::new(40.0, 50.0)).unwrap(), -60.0);
    }

    #[test]
    fn pan_target_adds_displacement_to_frozen_pan() {
        let mut state = DragState::default();
        state.start(
            Point::new(10.0, 10.0),
            DragMode::Pan,
            0,
            Vector::new(100.0, 200.0),
        );

        let target = state.pan_target(Point::new(40.0, 20.0)).unwrap();
        assert_abs_diff_eq!(target.x, 130.0);
        assert_abs_diff_eq!(target.y, 210.0);
    }

    #[test]
    fn queries_return_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.delta_x(Point::new(0.0, 0.0)).is_none());
        assert!(state.pan_target(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn stop_ends_the_session() {
        let mut state = DragState::default();
        state.start(Point::ORIGIN, DragMode::Rotate, 2, Vector::default());
        state.stop();

        assert!(!state.is_dragging);
        assert!(state.delta_x(Point::new(10.0, 0.0)).is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state for the viewer.
//!
//! Scale and pan live together because their lifecycles are coupled: the pan
//! offset is only meaningful while magnified, and snapping back to the base
//! scale atomically clears it so the next drag rotates again.

pub use crate::config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, ZOOM_STEP_FACTOR};

use crate::ui::state::drag::DragMode;
use iced::Vector;

/// Magnification factor, guaranteed to be within `[1.0, 4.0]`.
///
/// This type ensures that scale values are always valid, eliminating the
/// need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a display percentage (1.0 → 100).
    #[must_use]
    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Returns whether the scale is at the base (unmagnified) value.
    #[must_use]
    pub fn is_base(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Increases scale by one multiplicative step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 * ZOOM_STEP_FACTOR)
    }

    /// Decreases scale by one multiplicative step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 / ZOOM_STEP_FACTOR)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(MIN_ZOOM_SCALE)
    }
}

/// Owns the magnification factor and the 2D pan offset.
#[derive(Debug, Clone, Default)]
pub struct ZoomPanState {
    scale: ZoomScale,
    pan_offset: Vector,
}

impl ZoomPanState {
    /// Current magnification.
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// Current pan offset. Always `(0, 0)` at base scale.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.pan_offset
    }

    /// Drag interpretation implied by the current scale: rotate at base
    /// scale, pan while magnified.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        if self.scale.is_base() {
            DragMode::Rotate
        } else {
            DragMode::Pan
        }
    }

    /// Zooms in one step. Returns whether the scale changed.
    pub fn zoom_in(&mut self) -> bool {
        let new_scale = self.scale.zoom_in();
        let changed = new_scale != self.scale;
        self.scale = new_scale;
        changed
    }

    /// Zooms out one step. Returns whether the scale changed.
    ///
    /// Landing back on the base scale clears the pan offset in the same
    /// mutation, so rotation control is regained without an extra step.
    pub fn zoom_out(&mut self) -> bool {
        let new_scale = self.scale.zoom_out();
        let changed = new_scale != self.scale;
        self.scale = new_scale;
        if self.scale.is_base() {
            self.pan_offset = Vector::default();
        }
        changed
    }

    /// Replaces the pan offset. Ignored at base scale, where panning has no
    /// meaning.
    pub fn set_pan_offset(&mut self, offset: Vector) {
        if !self.scale.is_base() {
            self.pan_offset = offset;
        }
    }

    /// Restores base scale and a zero pan offset.
    pub fn reset(&mut self) {
        self.scale = ZoomScale::default();
        self.pan_offset = Vector::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_scale_is_base() {
        let state = ZoomPanState::default();
        assert!(state.scale().is_base());
        assert_eq!(state.drag_mode(), DragMode::Rotate);
    }

    #[test]
    fn repeated_zoom_in_clamps_at_max() {
        let mut state = ZoomPanState::default();
        for _ in 0..20 {
            state.zoom_in();
        }
        assert_abs_diff_eq!(state.scale().value(), MAX_ZOOM_SCALE);
        assert!(state.scale().is_max());
        assert!(!state.zoom_in());
    }

    #[test]
    fn repeated_zoom_out_clamps_at_base() {
        let mut state = ZoomPanState::default();
        state.zoom_in();
        for _ in 0..20 {
            state.zoom_out();
        }
        assert_abs_diff_eq!(state.scale().value(), MIN_ZOOM_SCALE);
        assert!(!state.zoom_out());
    }

    #[test]
    fn zooming_while_magnified_selects_pan_mode() {
        let mut state = ZoomPanState::default();
        state.zoom_in();
        assert_eq!(state.drag_mode(), DragMode::Pan);
    }

    #[test]
    fn returning_to_base_scale_clears_pan() {
        let mut state = ZoomPanState::default();
        state.zoom_in();
        state.set_pan_offset(Vector::new(40.0, -12.0));
        assert_abs_diff_eq!(state.pan_offset().x, 40.0);

        state.zoom_out();
        assert!(state.scale().is_base());
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
        assert_abs_diff_eq!(state.pan_offset().y, 0.0);
        assert_eq!(state.drag_mode(), DragMode::Rotate);
    }

    #[test]
    fn pan_is_ignored_at_base_scale() {
        let mut state = ZoomPanState::default();
        state.set_pan_offset(Vector::new(10.0, 10.0));
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
    }

    #[test]
    fn reset_restores_base_scale_and_zero_pan() {
        let mut state = ZoomPanState::default();
        state.zoom_in();
        state.zoom_in();
        state.set_pan_offset(Vector::new(5.0, 6.0));

        state.reset();
        assert!(state.scale().is_base());
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
    }
}

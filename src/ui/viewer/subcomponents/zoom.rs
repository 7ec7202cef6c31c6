// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan sub-component encapsulating ZoomPanState and its handlers.

use crate::ui::state::{DragMode, ZoomPanState, ZoomScale};
use iced::Vector;

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying zoom/pan state.
    pub inner: ZoomPanState,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom in by one multiplicative step.
    ZoomIn,
    /// Zoom out by one multiplicative step.
    ZoomOut,
    /// Replace the pan offset (from a pan drag).
    SetPanOffset(Vector),
    /// Restore base scale and zero pan.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Scale changed.
    ScaleChanged,
    /// Pan offset changed.
    PanChanged,
}

impl State {
    /// Handle a zoom message.
    ///
    /// Zoom actions are never concurrent with a drag session; the
    /// orchestrator ends any in-progress drag before routing them here.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomIn => {
                if self.inner.zoom_in() {
                    Effect::ScaleChanged
                } else {
                    Effect::None
                }
            }
            Message::ZoomOut => {
                if self.inner.zoom_out() {
                    Effect::ScaleChanged
                } else {
                    Effect::None
                }
            }
            Message::SetPanOffset(offset) => {
                self.inner.set_pan_offset(offset);
                Effect::PanChanged
            }
            Message::Reset => {
                self.inner.reset();
                Effect::ScaleChanged
            }
        }
    }

    /// Current magnification.
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.inner.scale()
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.inner.pan_offset()
    }

    /// Drag interpretation for a session starting now.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.inner.drag_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_in_changes_scale() {
        let mut state = State::default();
        let effect = state.handle(Message::ZoomIn);
        assert!(matches!(effect, Effect::ScaleChanged));
        assert_abs_diff_eq!(state.scale().value(), 1.5);
    }

    #[test]
    fn zoom_out_at_base_reports_no_effect() {
        let mut state = State::default();
        let effect = state.handle(Message::ZoomOut);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn zoom_in_at_max_reports_no_effect() {
        let mut state = State::default();
        for _ in 0..10 {
            state.handle(Message::ZoomIn);
        }
        let effect = state.handle(Message::ZoomIn);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn reset_clears_scale_and_pan() {
        let mut state = State::default();
        state.handle(Message::ZoomIn);
        state.handle(Message::SetPanOffset(Vector::new(12.0, -8.0)));

        state.handle(Message::Reset);
        assert!(state.scale().is_base());
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
        assert_eq!(state.drag_mode(), DragMode::Rotate);
    }
}

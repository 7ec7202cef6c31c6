// SPDX-License-Identifier: MPL-2.0
//! Controls-overlay visibility sub-component.
//!
//! Visibility is a pure function of pointer presence: the control cluster
//! shows while the cursor is over the viewer and hides when it leaves.
//! There is no time-based auto-hide.

/// Overlay visibility state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether the control cluster is visible.
    pub controls_visible: bool,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered the viewer bounds.
    CursorEntered,
    /// Pointer left the viewer bounds.
    CursorExited,
}

/// Effects produced by overlay visibility changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Visibility changed.
    VisibilityChanged(bool),
}

impl State {
    /// Handle an overlay message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let visible = match msg {
            Message::CursorEntered => true,
            Message::CursorExited => false,
        };

        if self.controls_visible == visible {
            Effect::None
        } else {
            self.controls_visible = visible;
            Effect::VisibilityChanged(visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_enter_shows_controls() {
        let mut state = State::default();
        let effect = state.handle(Message::CursorEntered);
        assert!(state.controls_visible);
        assert!(matches!(effect, Effect::VisibilityChanged(true)));
    }

    #[test]
    fn cursor_exit_hides_controls() {
        let mut state = State {
            controls_visible: true,
        };
        let effect = state.handle(Message::CursorExited);
        assert!(!state.controls_visible);
        assert!(matches!(effect, Effect::VisibilityChanged(false)));
    }

    #[test]
    fn redundant_events_report_no_effect() {
        let mut state = State::default();
        assert!(matches!(state.handle(Message::CursorExited), Effect::None));
        state.handle(Message::CursorEntered);
        assert!(matches!(state.handle(Message::CursorEntered), Effect::None));
    }
}

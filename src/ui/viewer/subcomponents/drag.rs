// SPDX-License-Identifier: MPL-2.0
//! Input normalizer sub-component.
//!
//! Collapses the pointer sources (mouse drag, single-contact touch drag
//! delivered as pointer events) into one normalized signal per session: a
//! signed horizontal delta for rotation, or a 2D pan target while magnified.
//! Only the primary contact participates; a second button or contact joining
//! mid-drag is ignored for the whole session. Multi-touch gestures such as
//! pinch are not handled here.

use crate::ui::state::{DragMode, DragState};
use iced::{Point, Vector};

/// Drag sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying drag-session state.
    pub inner: DragState,
}

/// Messages for the drag sub-component. `Pressed` carries the session
/// anchors from the orchestrator so the session is frozen in one step.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary contact went down: start a session.
    Pressed {
        position: Point,
        mode: DragMode,
        current_frame: usize,
        pan_offset: Vector,
    },
    /// Contact moved while down.
    Moved(Point),
    /// Primary contact released.
    Released,
    /// Pointer left the viewer bounds; the session ends with no partial state.
    CursorExited,
}

/// Effects produced by drag input.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A session started; the orchestrator must stop autoplay first.
    SessionStarted,
    /// Rotation input: total horizontal delta from the session anchor.
    Rotate { anchor_frame: usize, delta_x: f32 },
    /// Pan input: absolute pan target for the current pointer position.
    Pan(Vector),
    /// The session ended.
    SessionEnded,
}

impl State {
    /// Handle a drag message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed {
                position,
                mode,
                current_frame,
                pan_offset,
            } => {
                // A press while a session is active is a secondary contact;
                // the first registered contact keeps the session.
                if self.inner.is_dragging {
                    return Effect::None;
                }
                self.inner.start(position, mode, current_frame, pan_offset);
                Effect::SessionStarted
            }
            Message::Moved(position) => match self.inner.mode {
                _ if !self.inner.is_dragging => Effect::None,
                DragMode::Rotate => match self.inner.delta_x(position) {
                    Some(delta_x) => Effect::Rotate {
                        anchor_frame: self.inner.frame_at_drag_start,
                        delta_x,
                    },
                    None => Effect::None,
                },
                DragMode::Pan => match self.inner.pan_target(position) {
                    Some(target) => Effect::Pan(target),
                    None => Effect::None,
                },
            },
            Message::Released | Message::CursorExited => {
                if self.inner.is_dragging {
                    self.inner.stop();
                    Effect::SessionEnded
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Check if a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging
    }

    /// Ends any active session (used when a zoom action preempts the drag).
    pub fn cancel(&mut self) {
        self.inner.stop();
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the frame index together with the drag, zoom, autoplay,
//! and overlay sub-components, routes input to them, and translates their
//! effects into frame changes. Side effects the application must perform
//! (fullscreen, title updates) are reported through [`Effect`].

use crate::frame_sequence::FrameSequence;
use crate::media::{FrameImage, LoadedFrame};
use crate::ui::state::rotation;
use crate::ui::viewer::subcomponents::{autoplay, drag, overlay, zoom};
use crate::ui::viewer::{controls, empty_state, pane};
use iced::{event, keyboard, window, Element, Point};
use std::time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The decoded frame set arrived.
    FramesLoaded(Vec<LoadedFrame>),
    Controls(controls::Message),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// One autoplay cadence tick elapsed.
    AutoplayTick,
    /// Primary button went down over the pane.
    PanePressed,
    /// Pointer moved over the pane (widget-local coordinates).
    PaneMoved(Point),
    /// Primary button released over the pane.
    PaneReleased,
    /// Pointer entered the pane bounds.
    PaneEntered,
    /// Pointer left the pane bounds.
    PaneExited,
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The displayed frame index changed.
    FrameChanged(usize),
    ToggleFullscreen,
    ExitFullscreen,
}

/// Complete viewer component state.
pub struct State {
    sequence: FrameSequence,
    frames: Vec<LoadedFrame>,
    is_loading: bool,
    current_frame: usize,
    initial_auto_rotate: bool,
    zoom_enabled: bool,
    pub drag: drag::State,
    pub zoom: zoom::State,
    pub autoplay: autoplay::State,
    pub overlay: overlay::State,
    cursor_position: Option<Point>,
    last_click: Option<Instant>,
}

impl State {
    /// Creates a viewer for the given sequence. Frame decoding happens
    /// elsewhere; the viewer shows its loading state until
    /// [`Message::FramesLoaded`] arrives.
    #[must_use]
    pub fn new(
        sequence: FrameSequence,
        auto_rotate: bool,
        speed: autoplay::RotationSpeed,
        zoom_enabled: bool,
    ) -> Self {
        let is_loading = !sequence.is_empty();
        Self {
            sequence,
            frames: Vec::new(),
            is_loading,
            current_frame: 0,
            initial_auto_rotate: auto_rotate,
            zoom_enabled,
            drag: drag::State::default(),
            zoom: zoom::State::default(),
            autoplay: autoplay::State::new(auto_rotate, speed),
            overlay: overlay::State::default(),
            cursor_position: None,
            last_click: None,
        }
    }

    /// Zero-based index of the displayed frame.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Number of frames in the mounted sequence.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    /// The decoded image for the displayed frame, or `None` while loading,
    /// for an empty sequence, or when the frame failed to decode.
    #[must_use]
    pub fn current_image(&self) -> Option<&FrameImage> {
        self.frames.get(self.current_frame).and_then(LoadedFrame::image)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The autoplay tick interval, while the scheduler is running and there
    /// is something to advance. The application derives its timer
    /// subscription from this, so a stopped viewer has no timer at all.
    #[must_use]
    pub fn autoplay_interval(&self) -> Option<Duration> {
        if self.autoplay.is_running() && !self.frames.is_empty() {
            Some(self.autoplay.speed().interval())
        } else {
            None
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::FramesLoaded(frames) => {
                self.is_loading = false;
                self.frames = frames;
                self.current_frame = 0;
                Effect::None
            }
            Message::Controls(control) => self.handle_controls(control),
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::AutoplayTick => match self.autoplay.handle(autoplay::Message::Tick) {
                autoplay::Effect::Advance => self.step(1),
                _ => Effect::None,
            },
            Message::PanePressed => self.handle_pane_pressed(),
            Message::PaneMoved(position) => {
                self.cursor_position = Some(position);
                let effect = self.drag.handle(drag::Message::Moved(position));
                self.handle_drag_effect(effect)
            }
            Message::PaneReleased => {
                self.drag.handle(drag::Message::Released);
                Effect::None
            }
            Message::PaneEntered => {
                self.overlay.handle(overlay::Message::CursorEntered);
                Effect::None
            }
            Message::PaneExited => {
                self.cursor_position = None;
                self.overlay.handle(overlay::Message::CursorExited);
                // Leaving the pane ends the session with no partial state.
                self.drag.handle(drag::Message::CursorExited);
                Effect::None
            }
        }
    }

    fn handle_pane_pressed(&mut self) -> Effect {
        let now = Instant::now();
        let is_double_click = self
            .last_click
            .is_some_and(|last| now.duration_since(last) < DOUBLE_CLICK_THRESHOLD);
        self.last_click = Some(now);

        if is_double_click {
            self.drag.cancel();
            self.last_click = None;
            return Effect::ToggleFullscreen;
        }

        let Some(position) = self.cursor_position else {
            return Effect::None;
        };

        // The scheduler yields before the session anchors are frozen, so a
        // tick can never land between press and first move.
        self.autoplay.handle(autoplay::Message::DragStarted);
        self.drag.handle(drag::Message::Pressed {
            position,
            mode: self.zoom.drag_mode(),
            current_frame: self.current_frame,
            pan_offset: self.zoom.pan_offset(),
        });
        Effect::None
    }

    fn handle_drag_effect(&mut self, effect: drag::Effect) -> Effect {
        match effect {
            drag::Effect::Rotate {
                anchor_frame,
                delta_x,
            } => {
                let count = self.sequence.len();
                if count == 0 {
                    return Effect::None;
                }
                self.set_frame(rotation::frame_for_drag(anchor_frame, delta_x, count))
            }
            drag::Effect::Pan(target) => {
                self.zoom.handle(zoom::Message::SetPanOffset(target));
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_controls(&mut self, message: controls::Message) -> Effect {
        use controls::Message::*;

        match message {
            ToggleAutoplay => {
                self.autoplay.handle(autoplay::Message::Toggle);
                Effect::None
            }
            ZoomIn => self.apply_zoom(zoom::Message::ZoomIn),
            ZoomOut => self.apply_zoom(zoom::Message::ZoomOut),
            Reset => self.reset(),
            ToggleFullscreen => Effect::ToggleFullscreen,
        }
    }

    /// Routes a zoom action, ending any in-progress drag first so the old
    /// session cannot keep applying deltas under a different magnification.
    fn apply_zoom(&mut self, message: zoom::Message) -> Effect {
        if !self.zoom_enabled {
            return Effect::None;
        }
        self.drag.cancel();
        self.zoom.handle(message);
        Effect::None
    }

    /// Restores the initial presentation: first frame, base zoom, zero pan,
    /// and the autoplay phase requested at startup.
    fn reset(&mut self) -> Effect {
        self.drag.cancel();
        self.zoom.handle(zoom::Message::Reset);
        self.autoplay
            .handle(autoplay::Message::SetRunning(self.initial_auto_rotate));
        self.set_frame(0)
    }

    fn step(&mut self, delta: i64) -> Effect {
        let count = self.sequence.len();
        if count == 0 {
            return Effect::None;
        }
        self.set_frame(rotation::step_frame(self.current_frame, delta, count))
    }

    fn set_frame(&mut self, frame: usize) -> Effect {
        if frame == self.current_frame {
            return Effect::None;
        }
        self.current_frame = frame;
        Effect::FrameChanged(frame)
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return Effect::None;
        };

        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => self.step(1),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => self.step(-1),
            keyboard::Key::Named(keyboard::key::Named::Space) => {
                self.autoplay.handle(autoplay::Message::Toggle);
                Effect::None
            }
            keyboard::Key::Named(keyboard::key::Named::F11) => Effect::ToggleFullscreen,
            keyboard::Key::Named(keyboard::key::Named::Escape) => Effect::ExitFullscreen,
            keyboard::Key::Character("+" | "=") => self.apply_zoom(zoom::Message::ZoomIn),
            keyboard::Key::Character("-") => self.apply_zoom(zoom::Message::ZoomOut),
            keyboard::Key::Character("r") => self.reset(),
            _ => Effect::None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if self.sequence.is_empty() {
            return empty_state::view();
        }

        if self.is_loading {
            return pane::loading_view();
        }

        pane::view(pane::ViewModel {
            frame: self.frames.get(self.current_frame),
            scale: self.zoom.scale(),
            pan_offset: self.zoom.pan_offset(),
            current_index: self.current_frame,
            total_count: self.sequence.len(),
            is_dragging: self.drag.is_dragging(),
            controls_visible: self.overlay.controls_visible,
            autoplay_running: self.autoplay.is_running(),
            zoom_enabled: self.zoom_enabled,
        })
    }

    #[cfg(test)]
    fn press_at(&mut self, position: Point) -> Effect {
        self.handle_message(Message::PaneMoved(position));
        self.handle_message(Message::PanePressed)
    }
}

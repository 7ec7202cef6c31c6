// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are routed to the viewer unless a widget captured them.
//! The autoplay timer is derived from viewer state each update, so it only
//! exists while the scheduler is running.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, time, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Window open events carry the id the fullscreen task needs.
        if let event::Event::Window(iced::window::Event::Opened { .. }) = &event {
            return Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event,
            }));
        }

        if let event::Event::Keyboard(..) = &event {
            return match status {
                event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event,
                })),
                event::Status::Captured => None,
            };
        }

        None
    })
}

pub fn create_autoplay_subscription(viewer: &component::State) -> Subscription<Message> {
    match viewer.autoplay_interval() {
        Some(interval) => {
            time::every(interval).map(|_| Message::Viewer(component::Message::AutoplayTick))
        }
        None => Subscription::none(),
    }
}

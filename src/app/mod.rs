// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer component.
//!
//! The `App` struct resolves launch options against the persisted config,
//! mounts the frame sequence, and translates viewer effects into window-level
//! side effects such as fullscreen mode changes. Policy decisions (option
//! precedence, window sizing) live here so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::frame_sequence::FrameSequence;
use crate::media;
use crate::ui::viewer::component;
use crate::ui::viewer::subcomponents::autoplay::RotationSpeed;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

const APP_NAME: &str = "SpinLens";

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state bridging the viewer and the window.
pub struct App {
    viewer: component::State,
    /// Display name of the mounted directory, for the window title.
    directory_name: Option<String>,
    fullscreen: bool,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("frame_count", &self.viewer.frame_count())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Launch options after merging the command line with the persisted config.
/// Precedence is command line, then config file, then built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub auto_rotate: bool,
    pub speed: RotationSpeed,
    pub zoom_enabled: bool,
}

pub fn resolve_options(flags: &Flags, config: &Config) -> ResolvedOptions {
    let auto_rotate =
        flags.auto_rotate || config.auto_rotate.unwrap_or(config::DEFAULT_AUTO_ROTATE);

    // The command line is validated in main; a bad value can only come from
    // a hand-edited config file, which falls back to the default cadence.
    let speed_ms = flags
        .speed_ms
        .or(config.rotation_speed_ms)
        .unwrap_or(config::DEFAULT_ROTATION_SPEED_MS);
    let speed = RotationSpeed::new(speed_ms).unwrap_or_else(|err| {
        eprintln!("Ignoring configured rotation speed: {err}");
        RotationSpeed::default()
    });

    let zoom_enabled = if flags.no_zoom {
        false
    } else {
        config.zoom_enabled.unwrap_or(config::DEFAULT_ZOOM_ENABLED)
    };

    ResolvedOptions {
        auto_rotate,
        speed,
        zoom_enabled,
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous frame
    /// decoding for the directory received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            Config::default()
        });
        let options = resolve_options(&flags, &loaded);

        let sequence = match flags.directory.as_deref() {
            Some(directory) => {
                FrameSequence::from_directory(directory).unwrap_or_else(|err| {
                    eprintln!("Failed to mount frame directory: {err}");
                    FrameSequence::default()
                })
            }
            None => FrameSequence::default(),
        };

        let directory_name = flags
            .directory
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned());

        let viewer = component::State::new(
            sequence.clone(),
            options.auto_rotate,
            options.speed,
            options.zoom_enabled,
        );

        let task = if sequence.is_empty() {
            Task::none()
        } else {
            // Frame decoding is CPU-bound; keep it off the runtime threads.
            Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || media::load_sequence(&sequence))
                        .await
                        .unwrap_or_default()
                },
                |frames| Message::Viewer(component::Message::FramesLoaded(frames)),
            )
        };

        let app = App {
            viewer,
            directory_name,
            fullscreen: false,
            window_id: None,
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.directory_name {
            Some(name) if self.viewer.frame_count() > 0 => format!(
                "{name} ({}/{}) - {APP_NAME}",
                self.viewer.current_frame() + 1,
                self.viewer.frame_count()
            ),
            Some(name) => format!("{name} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_autoplay_subscription(&self.viewer),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                if let component::Message::RawEvent { window, .. } = &viewer_message {
                    self.window_id = Some(*window);
                }

                let effect = self.viewer.handle_message(viewer_message);
                self.handle_viewer_effect(effect)
            }
            Message::FullscreenModeReported(mode) => {
                self.fullscreen = mode == window::Mode::Fullscreen;
                Task::none()
            }
        }
    }

    fn handle_viewer_effect(&mut self, effect: component::Effect) -> Task<Message> {
        match effect {
            // The title closure picks the new index up on the next render.
            component::Effect::None | component::Effect::FrameChanged(_) => Task::none(),
            component::Effect::ToggleFullscreen => self.update_fullscreen_mode(!self.fullscreen),
            component::Effect::ExitFullscreen => self.update_fullscreen_mode(false),
        }
    }

    /// Requests a window mode change and resynchronizes the tracked flag
    /// from what the host actually applied, so a rejected request leaves
    /// `fullscreen` unchanged.
    fn update_fullscreen_mode(&mut self, desired: bool) -> Task<Message> {
        if self.fullscreen == desired {
            return Task::none();
        }

        let Some(window_id) = self.window_id else {
            return Task::none();
        };

        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
            .chain(window::mode(window_id).map(Message::FullscreenModeReported))
    }

    fn view(&self) -> Element<'_, Message> {
        self.viewer.view().map(Message::Viewer)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;
use std::path::PathBuf;

/// Launch options parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory holding the rotation frames.
    pub directory: Option<PathBuf>,
    /// Autoplay interval override in milliseconds.
    pub speed_ms: Option<u64>,
    /// Start spinning as soon as the frames load.
    pub auto_rotate: bool,
    /// Disable zoom controls and gestures.
    pub no_zoom: bool,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// The host reported the actual window mode after a fullscreen request.
    FullscreenModeReported(iced::window::Mode),
}

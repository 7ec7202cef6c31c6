// SPDX-License-Identifier: MPL-2.0
//! Viewer control cluster: autoplay toggle, zoom buttons, reset, fullscreen.

use iced::{
    alignment::Vertical,
    widget::{button, Row, Text},
    Element,
};

/// Snapshot of the state the control cluster renders from.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub autoplay_running: bool,
    pub zoom_enabled: bool,
    pub zoom_percent: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleAutoplay,
    ZoomIn,
    ZoomOut,
    Reset,
    ToggleFullscreen,
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let autoplay_label = if ctx.autoplay_running {
        "Pause"
    } else {
        "Play"
    };

    let autoplay_button = button(Text::new(autoplay_label))
        .on_press(Message::ToggleAutoplay)
        .padding([6, 12]);

    let reset_button = button(Text::new("Reset"))
        .on_press(Message::Reset)
        .padding([6, 12]);

    let fullscreen_button = button(Text::new("Fullscreen"))
        .on_press(Message::ToggleFullscreen)
        .padding([6, 12]);

    let mut row = Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(autoplay_button);

    if ctx.zoom_enabled {
        let zoom_out_button = button(Text::new("\u{2212}"))
            .on_press(Message::ZoomOut)
            .padding([6, 12]);

        let zoom_label = Text::new(format!("{:.0}%", ctx.zoom_percent)).size(14);

        let zoom_in_button = button(Text::new("+"))
            .on_press(Message::ZoomIn)
            .padding([6, 12]);

        row = row
            .push(zoom_out_button)
            .push(zoom_label)
            .push(zoom_in_button);
    }

    row.push(reset_button).push(fullscreen_button).into()
}

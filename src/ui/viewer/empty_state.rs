// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the mounted directory holds no frames.

use super::component::Message;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view() -> Element<'static, Message> {
    let title = Text::new("No frames to display").size(24);
    let subtitle = Text::new("Point the viewer at a directory of rotation frames").size(16);

    let content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the current frame with zoom, pan, the frame
//! counter, and the hover-activated control cluster.

use crate::media::LoadedFrame;
use crate::ui::state::ZoomScale;
use crate::ui::viewer::{component::Message, controls};
use iced::mouse;
use iced::widget::{mouse_area, progress_bar, responsive, Column, Container, Image, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding, Size, Vector,
};

pub struct ViewModel<'a> {
    pub frame: Option<&'a LoadedFrame>,
    pub scale: ZoomScale,
    pub pan_offset: Vector,
    pub current_index: usize,
    pub total_count: usize,
    pub is_dragging: bool,
    pub controls_visible: bool,
    pub autoplay_running: bool,
    pub zoom_enabled: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    responsive(move |available_size: Size| view_inner(&model, available_size)).into()
}

/// Centered placeholder shown while the frame set decodes.
pub fn loading_view() -> Element<'static, Message> {
    Container::new(Text::new("Loading frames\u{2026}").size(18))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Padding that centers the frame, shifted by the pan offset. The offset is
/// unbounded in state; the render clamps each edge at zero.
fn centering_padding(frame_size: Size, available: Size, pan: Vector) -> Padding {
    let horizontal = (available.width - frame_size.width) / 2.0;
    let vertical = (available.height - frame_size.height) / 2.0;

    Padding {
        top: (vertical + pan.y).max(0.0),
        right: (horizontal - pan.x).max(0.0),
        bottom: (vertical - pan.y).max(0.0),
        left: (horizontal + pan.x).max(0.0),
    }
}

fn view_inner<'a>(model: &ViewModel<'a>, available_size: Size) -> Element<'a, Message> {
    let scale = model.scale.value();

    let frame_element: Element<'a, Message> = match model.frame.and_then(LoadedFrame::image) {
        Some(image) => {
            let width = (image.width as f32 * scale).max(1.0);
            let height = (image.height as f32 * scale).max(1.0);
            let padding = centering_padding(
                Size::new(width, height),
                available_size,
                model.pan_offset,
            );

            Container::new(
                Image::new(image.handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height)),
            )
            .padding(padding)
            .into()
        }
        None => Container::new(Text::new("Frame unavailable").size(18))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let stage = mouse_area(
        Container::new(frame_element)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::PanePressed)
    .on_release(Message::PaneReleased)
    .on_enter(Message::PaneEntered)
    .on_exit(Message::PaneExited)
    .on_move(Message::PaneMoved)
    .interaction(interaction);

    let counter = Text::new(format!(
        "{} / {}",
        model.current_index + 1,
        model.total_count
    ))
    .size(14);

    let progress = Container::new(progress_bar(
        0.0..=model.total_count as f32,
        (model.current_index + 1) as f32,
    ))
    .width(Length::Fixed(200.0))
    .height(Length::Fixed(6.0));

    let mut footer = Column::new()
        .spacing(8)
        .align_x(Horizontal::Center)
        .push(counter)
        .push(progress);

    if model.controls_visible {
        let cluster = controls::view(controls::ViewContext {
            autoplay_running: model.autoplay_running,
            zoom_enabled: model.zoom_enabled,
            zoom_percent: model.scale.percent(),
        })
        .map(Message::Controls);
        footer = footer.push(cluster);
    }

    let footer_layer = Container::new(footer)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(16);

    Stack::new().push(stage).push(footer_layer).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn centering_padding_splits_the_leftover_space() {
        let padding = centering_padding(
            Size::new(200.0, 100.0),
            Size::new(400.0, 300.0),
            Vector::default(),
        );
        assert_abs_diff_eq!(padding.left, 100.0);
        assert_abs_diff_eq!(padding.right, 100.0);
        assert_abs_diff_eq!(padding.top, 100.0);
        assert_abs_diff_eq!(padding.bottom, 100.0);
    }

    #[test]
    fn pan_offset_shifts_the_frame() {
        let padding = centering_padding(
            Size::new(200.0, 100.0),
            Size::new(400.0, 300.0),
            Vector::new(30.0, -20.0),
        );
        assert_abs_diff_eq!(padding.left, 130.0);
        assert_abs_diff_eq!(padding.right, 70.0);
        assert_abs_diff_eq!(padding.top, 80.0);
        assert_abs_diff_eq!(padding.bottom, 120.0);
    }

    #[test]
    fn padding_never_goes_negative_for_oversized_frames() {
        let padding = centering_padding(
            Size::new(800.0, 600.0),
            Size::new(400.0, 300.0),
            Vector::new(1000.0, 1000.0),
        );
        assert_abs_diff_eq!(padding.right, 0.0);
        assert_abs_diff_eq!(padding.bottom, 0.0);
    }
}

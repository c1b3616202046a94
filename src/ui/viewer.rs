// SPDX-License-Identifier: MPL-2.0
//! Media area: the loaded media at the current brightness, with the level
//! indicator stacked on top.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::indicator::{self, IndicatorView};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{image, Column, Container, Image, Stack, Text};
use iced::{Background, ContentFit, Element, Length, Theme};

/// Everything the media area needs to render.
pub struct ViewContext<'a> {
    pub media: Option<&'a image::Handle>,
    /// Opacity of the media element.
    pub brightness: f32,
    /// `None` while the indicator is not attached.
    pub indicator: Option<IndicatorView>,
    pub empty_text: String,
    pub hint_text: String,
}

fn backdrop(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(palette::BLACK)),
        ..Default::default()
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(handle) = ctx.media else {
        let empty = Column::new()
            .push(Text::new(ctx.empty_text).size(typography::BODY))
            .push(
                Text::new(ctx.hint_text)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .spacing(spacing::XS)
            .align_x(Horizontal::Center);
        return Container::new(empty)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    };

    let media = Container::new(
        Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(ctx.brightness),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(backdrop);

    let mut stack = Stack::new().push(media);
    if let Some(overlay) = ctx.indicator.and_then(indicator::view) {
        stack = stack.push(overlay);
    }
    stack.width(Length::Fill).height(Length::Fill).into()
}

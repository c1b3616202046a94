// SPDX-License-Identifier: MPL-2.0
//! Level indicator: a brightness icon and the current percentage, stacked
//! over the top-left corner of the media.

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{svg, Container, Row, Space, Svg, Text};
use iced::{Element, Length};
use std::sync::OnceLock;

static ICON_DATA: &[u8] = include_bytes!("../../assets/icons/brightness.svg");

fn icon_handle() -> svg::Handle {
    static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| svg::Handle::from_memory(ICON_DATA))
        .clone()
}

/// Values the indicator displays.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView {
    /// Opacity of the whole indicator, driven by its fade.
    pub opacity: f32,
    /// Opacity of the icon alone, equal to the brightness.
    pub icon_opacity: f32,
    pub label: String,
}

/// Renders the indicator, or nothing while it is fully transparent.
pub fn view<'a, Message: 'a>(indicator: IndicatorView) -> Option<Element<'a, Message>> {
    if indicator.opacity <= 0.0 {
        return None;
    }

    let icon = Svg::new(icon_handle())
        .width(Length::Fixed(sizing::INDICATOR_ICON))
        .height(Length::Fixed(sizing::INDICATOR_ICON))
        .opacity(indicator.icon_opacity * indicator.opacity)
        .style(styles::overlay::indicator_icon);

    let label = Text::new(indicator.label).size(typography::DISPLAY);

    let content = Row::new()
        .push(Container::new(icon).padding(sizing::INDICATOR_ICON_MARGIN))
        .push(
            Container::new(label)
                .width(Length::Fixed(sizing::INDICATOR_LABEL_WIDTH))
                .height(Length::Fixed(sizing::INDICATOR_HEIGHT))
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        )
        .push(Space::new().width(Length::Fixed(sizing::INDICATOR_LABEL_MARGIN)))
        .align_y(Vertical::Center);

    let boxed = Container::new(content).style(styles::overlay::indicator(indicator.opacity));

    Some(
        Container::new(boxed)
            .padding(sizing::INDICATOR_OFFSET)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top)
            .into(),
    )
}

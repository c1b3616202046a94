// SPDX-License-Identifier: MPL-2.0
//! Styles of the level indicator drawn over the media.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

fn faded(color: Color, alpha: f32, fade: f32) -> Color {
    Color {
        a: alpha * fade.clamp(0.0, 1.0),
        ..color
    }
}

/// Rounded dark box of the indicator, faded as a whole by `fade`.
pub fn indicator(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            BLACK,
            opacity::OVERLAY_STRONG,
            fade,
        ))),
        text_color: Some(faded(WHITE, opacity::OPAQUE, fade)),
        border: Border {
            radius: radius::INDICATOR.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// White indicator icon.
pub fn indicator_icon(_theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style { color: Some(WHITE) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn indicator_background_fades_with_overlay() {
        let theme = Theme::Dark;
        let visible = indicator(1.0)(&theme);
        let half = indicator(0.5)(&theme);
        let hidden = indicator(0.0)(&theme);

        let alpha = |style: &container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => f32::NAN,
        };
        assert_abs_diff_eq!(alpha(&visible), opacity::OVERLAY_STRONG);
        assert_abs_diff_eq!(alpha(&half), opacity::OVERLAY_STRONG * 0.5);
        assert_abs_diff_eq!(alpha(&hidden), 0.0);
    }
}

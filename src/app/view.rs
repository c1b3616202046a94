// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Windowed mode shows a toolbar with the settings button and any pending
//! notice above the media. Fullscreen shows the media alone. The settings
//! dialog is stacked over either.

use super::{Message, Screen};
use crate::domain::settings::{DialogLabels, FieldValues, Schema};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::indicator::IndicatorView;
use crate::ui::{settings, styles, viewer};
use iced::alignment::Vertical;
use iced::widget::{image, Button, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub schema: Option<&'a Schema>,
    pub values: &'a FieldValues,
    pub labels: &'a DialogLabels,
    pub media: Option<&'a image::Handle>,
    pub brightness: f32,
    pub indicator: Option<IndicatorView>,
    pub fullscreen: bool,
    pub notice: Option<&'a str>,
}

/// Renders the viewer, with the settings dialog on top when it is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let media = viewer::view(viewer::ViewContext {
        media: ctx.media,
        brightness: ctx.brightness,
        indicator: ctx.indicator,
        empty_text: ctx.i18n.tr("viewer-empty"),
        hint_text: ctx.i18n.tr("viewer-hint"),
    });

    let base: Element<'_, Message> = if ctx.fullscreen {
        media
    } else {
        Column::new()
            .push(toolbar(ctx.i18n, ctx.schema, ctx.notice))
            .push(media)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    match (ctx.screen, ctx.schema) {
        (Screen::Settings, Some(schema)) => {
            let dialog = settings::view(settings::ViewContext {
                schema,
                values: ctx.values,
                labels: ctx.labels,
            })
            .map(Message::Settings);
            Stack::new()
                .push(base)
                .push(dialog)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        _ => base,
    }
}

fn toolbar<'a>(
    i18n: &I18n,
    schema: Option<&'a Schema>,
    notice: Option<&str>,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center);

    if let Some(schema) = schema {
        row = row.push(
            Button::new(Text::new(schema.open_label.as_str()).size(typography::BODY))
                .on_press(Message::OpenSettings)
                .style(styles::button::secondary),
        );
    }

    row = row.push(Space::new().width(Length::Fill));

    if let Some(key) = notice {
        row = row.push(
            Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::notice),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .style(styles::container::toolbar)
        .into()
}

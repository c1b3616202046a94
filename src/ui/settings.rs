// SPDX-License-Identifier: MPL-2.0
//! Settings dialog view.
//!
//! One pick list per field, laid out from the store's localized [`Schema`],
//! with the Save / Close buttons and a "Reset to default" action below.

use crate::domain::settings::{DialogLabels, FieldId, FieldValues, Schema};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{pick_list, Button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Messages emitted by the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Selected(FieldId, String),
    Save,
    Close,
    Reset,
}

/// Everything the dialog needs to render.
pub struct ViewContext<'a> {
    pub schema: &'a Schema,
    pub values: &'a FieldValues,
    pub labels: &'a DialogLabels,
}

fn field_row<'a>(
    id: FieldId,
    label: &'a str,
    options: &'a [String],
    selected: Option<&'a str>,
) -> Element<'a, Message> {
    let selected = selected.and_then(|value| options.iter().find(|option| *option == value));
    let picker = pick_list(options, selected, move |option: String| {
        Message::Selected(id, option)
    })
    .width(Length::Fixed(sizing::PICK_LIST_WIDTH))
    .text_size(typography::BODY);

    Row::new()
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(picker)
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .into()
}

/// Renders the dialog centered in the available space.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut fields = Column::new().spacing(spacing::SM);
    for field in &ctx.schema.fields {
        fields = fields.push(field_row(
            field.id,
            &field.label,
            &field.options,
            ctx.values.get(field.id),
        ));
    }

    let buttons = Row::new()
        .push(
            Button::new(Text::new(ctx.labels.reset.as_str()).size(typography::CAPTION))
                .on_press(Message::Reset)
                .style(styles::button::link),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Button::new(Text::new(ctx.labels.save.as_str()))
                .on_press(Message::Save)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::primary),
        )
        .push(
            Button::new(Text::new(ctx.labels.close.as_str()))
                .on_press(Message::Close)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::secondary),
        )
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    let dialog = Column::new()
        .push(Text::new(ctx.schema.title.as_str()).size(typography::TITLE_MD))
        .push(fields)
        .push(buttons)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::DIALOG_WIDTH));

    Container::new(Container::new(dialog).style(styles::container::panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into()
}

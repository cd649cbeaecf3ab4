use crate::model::Study;
use crate::utils::{format_dicom_date, pluralize};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text, Button, Space};
use iced::{Background, Border, Length, Theme};

/// Summary row for one study: date, modalities, description, instance count
/// and how many of its series are tracked.
pub fn study_item<'a, Message: 'a>(
    study: &'a Study,
    tracked_series: usize,
    is_active: bool,
) -> Button<'a, Message> {
    let date = study
        .date
        .as_deref()
        .map(format_dicom_date)
        .unwrap_or_default();
    let header = row![
        text(date).size(14),
        Space::with_width(Length::Fill),
        text(study.modalities.as_deref().unwrap_or_default()).size(14),
    ];

    let description = text(study.description.as_deref().unwrap_or_default())
        .size(13)
        .wrapping(Wrapping::Word);

    let mut footer = row![].spacing(12);
    if let Some(count) = study.num_instances {
        footer = footer.push(text(pluralize(count, "instance")).size(12));
    }
    if tracked_series > 0 {
        footer = footer.push(text(format!("◉ {tracked_series} tracked")).size(12));
    }

    button(column![header, description, footer].spacing(4))
        .width(Length::Fill)
        .padding([8, 12])
        .style(move |theme, status| study_item_style(theme, status, is_active))
}

fn study_item_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let background = match (is_active, status) {
        (true, _) => palette.secondary.strong.color,
        (false, iced::widget::button::Status::Hovered) => palette.background.strong.color,
        (false, _) => palette.background.weak.color,
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    }
}

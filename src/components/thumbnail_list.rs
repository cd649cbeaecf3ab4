use crate::model::{ComponentType, DisplaySet, ThumbnailLayout};
use crate::utils::pluralize;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, scrollable, text, Column, Image, Row};
use iced::{Alignment, Background, Border, Element, Length, Theme};

/// Lists display sets as selectable thumbnails. The entry whose id equals
/// `thumbnail_active` is highlighted; pressing any entry produces
/// `on_press(id)`.
pub fn thumbnail_list<'a, Message: Clone + 'a>(
    display_sets: &'a [DisplaySet],
    thumbnail_active: Option<&str>,
    layout: ThumbnailLayout,
    size: f32,
    on_press: impl Fn(&'a str) -> Message,
) -> Element<'a, Message> {
    let items = display_sets.iter().map(|display_set| -> Element<'a, Message> {
        let id = display_set.display_set_instance_uid.as_str();
        let is_active = thumbnail_active == Some(id);
        thumbnail(display_set, is_active, size)
            .on_press(on_press(id))
            .into()
    });

    match layout {
        ThumbnailLayout::Horizontal => scrollable(Row::with_children(items).spacing(8).padding(8))
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            ))
            .width(Length::Fill)
            .into(),
        ThumbnailLayout::Vertical => Column::with_children(items)
            .spacing(8)
            .padding(8)
            .width(Length::Fill)
            .into(),
    }
}

fn thumbnail<'a, Message: 'a>(
    display_set: &'a DisplaySet,
    is_active: bool,
    size: f32,
) -> iced::widget::Button<'a, Message> {
    let preview: Element<'a, Message> = match (&display_set.component_type, &display_set.image) {
        (ComponentType::ThumbnailNoImage, _) | (_, None) => container(
            text(display_set.image_alt_text.as_deref().unwrap_or("No image"))
                .size(12)
                .wrapping(Wrapping::Word),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(placeholder_style)
        .into(),
        (_, Some(handle)) => Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
    };

    let mut details = column![].spacing(2).width(Length::Fixed(size));
    if let Some(description) = display_set.description.as_deref() {
        details = details.push(text(description).size(12).wrapping(Wrapping::Word));
    }

    let mut counts = row![].spacing(6);
    if let Some(number) = display_set.series_number {
        counts = counts.push(text(format!("S:{number}")).size(11));
    }
    if let Some(instances) = display_set.num_instances {
        counts = counts.push(text(pluralize(instances, "image")).size(11));
    }
    details = details.push(counts);

    if let Some(date) = display_set.series_date.as_deref() {
        details = details.push(text(date).size(11));
    }
    if display_set.component_type == ComponentType::ThumbnailTracked {
        details = details.push(text("◉ tracked").size(11));
    }
    if display_set.is_draggable() {
        details = details.push(text("⠿ drag to viewport").size(10));
    }

    button(column![preview, details].spacing(4))
        .padding(6)
        .style(move |theme, status| thumbnail_style(theme, status, is_active))
}

fn placeholder_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            color: palette.background.weak.color,
            width: 1.0,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    }
}

fn thumbnail_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let border_color = if is_active {
        palette.primary.strong.color
    } else if matches!(status, iced::widget::button::Status::Hovered) {
        palette.background.strong.color
    } else {
        palette.background.weak.color
    };

    iced::widget::button::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: if is_active { 2.0 } else { 1.0 },
            radius: iced::border::Radius::new(6.0),
        },
        ..Default::default()
    }
}

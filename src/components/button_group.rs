use iced::widget::text::Wrapping;
use iced::widget::{button, container, text, Button, Container, Row};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// One segment of a [`button_group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub is_active: bool,
}

/// A pill-shaped strip of equally wide buttons. Pressing a segment produces
/// `on_press(key)`; the strip itself never changes which one is active.
pub fn button_group<'a, Message: Clone + 'a>(
    segments: &[Segment<'a>],
    on_press: impl Fn(&'a str) -> Message,
) -> Container<'a, Message> {
    let count = segments.len();
    let row = segments
        .iter()
        .enumerate()
        .fold(Row::new().spacing(0), |row, (index, segment)| {
            let position = SegmentPosition::of(index, count);
            row.push(
                segment_button(segment, position)
                    .on_press(on_press(segment.key))
                    .width(Length::FillPortion(1)),
            )
        });

    container(row)
        .padding(3)
        .width(Length::Fill)
        .style(group_container_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Only,
    First,
    Middle,
    Last,
}

impl SegmentPosition {
    fn of(index: usize, count: usize) -> Self {
        match (index, count) {
            (_, 1) => Self::Only,
            (0, _) => Self::First,
            (i, n) if i + 1 == n => Self::Last,
            _ => Self::Middle,
        }
    }

    fn radius(self) -> iced::border::Radius {
        let (left, right) = match self {
            Self::Only => (999.0, 999.0),
            Self::First => (999.0, 10.0),
            Self::Middle => (10.0, 10.0),
            Self::Last => (10.0, 999.0),
        };
        iced::border::Radius {
            top_left: left,
            top_right: right,
            bottom_right: right,
            bottom_left: left,
        }
    }
}

fn segment_button<'a, Message: 'a>(
    segment: &Segment<'a>,
    position: SegmentPosition,
) -> Button<'a, Message> {
    let is_active = segment.is_active;
    let content = container(text(segment.label).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 12]);

    button(content)
        .padding(0)
        .style(move |theme, status| segment_style(theme, status, is_active, position))
}

fn group_container_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segment_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::button::Style {
    use iced::widget::button::Status;

    let palette = theme.extended_palette();
    let (idle, hovered, pressed) = if is_active {
        (
            palette.primary.strong.color,
            palette.primary.base.color,
            palette.primary.base.color.scale_alpha(0.9),
        )
    } else {
        (
            palette.background.strong.color.scale_alpha(0.4),
            palette.background.base.color.scale_alpha(0.8),
            palette.background.base.color.scale_alpha(0.9),
        )
    };

    let background_color = match status {
        Status::Active => idle,
        Status::Hovered => hovered,
        Status::Pressed => pressed,
        Status::Disabled => idle.scale_alpha(0.5),
    };

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: position.radius(),
        },
        shadow: Shadow::default(),
    }
}

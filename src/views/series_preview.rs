use crate::message::Message;
use crate::model::InstanceRecord;
use crate::utils::format_dicom_date;
use iced::widget::{button, column, text, Image};
use iced::{Element, Length};

pub fn series_preview(
    selected: Option<&InstanceRecord>,
    is_tracked: bool,
) -> Element<'_, Message> {
    let Some(record) = selected else {
        return text("Select a series thumbnail to preview it").into();
    };

    let mut content = column![
        text(record.series_description.as_deref().unwrap_or("Untitled series")).size(18),
        text(format!("SeriesInstanceUID: {}", record.series_instance_uid)).size(12),
    ]
    .spacing(8);

    if let Some(name) = record.patient_name.as_deref() {
        content = content.push(text(format!("Patient: {name} ({})", record.patient_id)).size(12));
    }
    if let Some(date) = record.series_date.as_deref() {
        let date = format_dicom_date(date);
        content = content.push(text(format!("Series date: {date}")).size(12));
    }

    let track_label = if is_tracked {
        "Stop tracking series"
    } else {
        "Track series"
    };
    content = content.push(button(track_label).on_press(Message::ToggleTracking));

    match &record.thumbnail {
        Some(handle) => content
            .push(
                Image::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into(),
        None => content.push(text("No frame preview available")).into(),
    }
}

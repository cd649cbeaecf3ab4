use crate::components::button_group::{button_group, Segment};
use crate::components::{Handlers, StudyBrowser};
use crate::message::Message;
use crate::model::catalog::PRIMARY_TAB;
use crate::model::loader::load_instance;
use crate::model::{BrowserOptions, Catalog, StudyBrowserProps, ThumbnailLayout};
use crate::views::series_preview;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Space};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;
use std::collections::BTreeSet;

const APP_TITLE: &str = "Study Browser";
const THUMBNAIL_EDGE: u32 = 128;

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run()
}

/// Owns the imported studies and every piece of browser state except the
/// highlighted thumbnail.
pub struct App {
    catalog: Catalog,
    browser: StudyBrowser,
    props: Option<StudyBrowserProps>,
    active_tab_name: String,
    expanded_studies: Vec<String>,
    tracked_series: BTreeSet<String>,
    selected_display_set: Option<String>,
    options: BrowserOptions,
    last_error: Option<String>,
    props_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            browser: StudyBrowser::new(),
            props: None,
            active_tab_name: PRIMARY_TAB.to_string(),
            expanded_studies: Vec::new(),
            tracked_series: BTreeSet::new(),
            selected_display_set: None,
            options: BrowserOptions::default(),
            last_error: None,
            props_error: None,
        }
    }
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFiles => Task::perform(
                async {
                    match AsyncFileDialog::new().pick_files().await {
                        Some(handles) if !handles.is_empty() => handles
                            .into_iter()
                            .map(|handle| {
                                load_instance(handle.path().to_path_buf(), THUMBNAIL_EDGE)
                            })
                            .collect(),
                        _ => Vec::new(),
                    }
                },
                Message::FilesLoaded,
            ),
            Message::FilesLoaded(results) => {
                let mut errors = Vec::new();
                let mut added = 0;
                for result in results {
                    match result {
                        Ok(record) => {
                            if self.catalog.add(record) {
                                added += 1;
                            }
                        }
                        Err(err) => errors.push(err.to_string()),
                    }
                }
                log::info!(
                    "Imported {added} instance(s), {} failed, {} total",
                    errors.len(),
                    self.catalog.len()
                );

                self.last_error = if errors.is_empty() {
                    None
                } else {
                    Some(errors.join("\n"))
                };
                self.refresh();
                Task::none()
            }
            Message::Browser(event) => {
                let handlers = Handlers::new(Message::SelectTab)
                    .on_click_study(Message::ToggleStudy)
                    .on_click_thumbnail(Message::SelectDisplaySet);

                match self.browser.update(event, &handlers) {
                    Some(message) => self.update(message),
                    None => Task::none(),
                }
            }
            Message::SelectTab(name) => {
                if self.active_tab_name != name {
                    self.active_tab_name = name;
                    self.refresh();
                }
                Task::none()
            }
            Message::ToggleStudy(uid) => {
                if let Some(position) = self.expanded_studies.iter().position(|id| *id == uid) {
                    self.expanded_studies.remove(position);
                } else {
                    self.expanded_studies.push(uid);
                }
                self.refresh();
                Task::none()
            }
            Message::SelectDisplaySet(id) => {
                // A press on the selected series clears it, matching the highlight.
                self.selected_display_set =
                    (self.selected_display_set.as_deref() != Some(id.as_str())).then_some(id);
                Task::none()
            }
            Message::ToggleTracking => {
                if let Some(id) = &self.selected_display_set {
                    if !self.tracked_series.remove(id) {
                        self.tracked_series.insert(id.clone());
                    }
                    self.refresh();
                }
                Task::none()
            }
            Message::SetThumbnailLayout(layout) => {
                if self.options.thumbnail_layout != layout {
                    self.options.thumbnail_layout = layout;
                    self.refresh();
                }
                Task::none()
            }
        }
    }

    /// Rebuilds the props handed to the browser from the owned state. A
    /// rejected rebuild keeps the last accepted props on screen.
    fn refresh(&mut self) {
        if self.catalog.is_empty() {
            self.props = None;
            self.props_error = None;
            return;
        }

        let tabs = self.catalog.tabs(&self.tracked_series);
        match StudyBrowserProps::new(
            tabs,
            self.active_tab_name.clone(),
            self.expanded_studies.clone(),
        ) {
            Ok(props) => {
                self.props = Some(props.with_options(self.options));
                self.props_error = None;
            }
            Err(err) => {
                log::error!("Rejected study browser input: {err}");
                self.props_error = Some(err.to_string());
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let pick_button = button("Import DICOM Files").on_press(Message::PickFiles);

        let layout_toggle = button_group(
            &[
                Segment {
                    key: "vertical",
                    label: "Vertical",
                    is_active: self.options.thumbnail_layout == ThumbnailLayout::Vertical,
                },
                Segment {
                    key: "horizontal",
                    label: "Horizontal",
                    is_active: self.options.thumbnail_layout == ThumbnailLayout::Horizontal,
                },
            ],
            |key| {
                Message::SetThumbnailLayout(if key == "horizontal" {
                    ThumbnailLayout::Horizontal
                } else {
                    ThumbnailLayout::Vertical
                })
            },
        )
        .width(Length::Fixed(240.0));

        let toolbar = row![
            pick_button,
            text(format!("{} instance(s) imported", self.catalog.len())),
            Space::with_width(Length::Fill),
            layout_toggle,
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let browser_content: Element<'_, Message> = match (&self.props, &self.props_error) {
            (Some(props), _) => self.browser.view(props).map(Message::Browser),
            (None, Some(error)) => text(error).wrapping(Wrapping::Word).into(),
            (None, None) => text("Import DICOM instances to browse their studies").into(),
        };
        let browser_panel = container(browser_content)
            .padding(16)
            .width(Length::FillPortion(2))
            .height(Length::Fill);

        let selected = self
            .selected_display_set
            .as_deref()
            .and_then(|id| self.catalog.representative(id));
        let is_tracked = self
            .selected_display_set
            .as_ref()
            .is_some_and(|id| self.tracked_series.contains(id));
        let preview_panel = container(series_preview(selected, is_tracked))
            .padding(16)
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center);

        let mut content = column![row![browser_panel, preview_panel]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill)]
        .spacing(16);

        let errors = self.last_error.iter().chain(
            self.props_error
                .iter()
                .filter(|_| self.props.is_some()),
        );
        for error in errors {
            content = content.push(text(error).size(16).wrapping(Wrapping::Word));
        }

        column![toolbar, content]
            .padding(20)
            .spacing(20)
            .align_x(Alignment::Start)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

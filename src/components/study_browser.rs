//! Tabbed list of studies with expandable thumbnail lists.
//!
//! The owner keeps the active tab and the expanded studies and passes them in
//! through [`StudyBrowserProps`] on every render. The browser itself only
//! remembers which thumbnail is highlighted; everything else is reported back
//! through [`Handlers`].

use super::button_group::{button_group, Segment};
use super::study_item::study_item;
use super::thumbnail_list::thumbnail_list;
use crate::model::{BrowserError, DisplaySet, Study, StudyBrowserProps};
use iced::widget::{column, container, scrollable, text, Column};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TabPressed(String),
    StudyPressed(String),
    ThumbnailPressed(String),
}

type Callback<'a, Message> = Box<dyn Fn(String) -> Message + 'a>;

/// Maps browser interactions onto the owner's messages.
pub struct Handlers<'a, Message> {
    on_click_tab: Callback<'a, Message>,
    on_click_study: Option<Callback<'a, Message>>,
    on_click_thumbnail: Option<Callback<'a, Message>>,
}

impl<'a, Message> Handlers<'a, Message> {
    pub fn new(on_click_tab: impl Fn(String) -> Message + 'a) -> Self {
        Self {
            on_click_tab: Box::new(on_click_tab),
            on_click_study: None,
            on_click_thumbnail: None,
        }
    }

    pub fn on_click_study(mut self, handler: impl Fn(String) -> Message + 'a) -> Self {
        self.on_click_study = Some(Box::new(handler));
        self
    }

    pub fn on_click_thumbnail(mut self, handler: impl Fn(String) -> Message + 'a) -> Self {
        self.on_click_thumbnail = Some(Box::new(handler));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabButton<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ThumbnailSection<'a> {
    pub display_sets: &'a [DisplaySet],
    pub thumbnail_active: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct StudyRow<'a> {
    pub study: &'a Study,
    pub tracked_series: usize,
    pub is_active: bool,
    pub thumbnails: Option<ThumbnailSection<'a>>,
}

/// Everything one render shows, derived from the props and the highlight.
#[derive(Debug, Clone)]
pub struct RenderPlan<'a> {
    pub tabs: Vec<TabButton<'a>>,
    pub studies: Vec<StudyRow<'a>>,
}

#[derive(Debug, Default)]
pub struct StudyBrowser {
    thumbnail_active: Option<String>,
}

impl StudyBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thumbnail_active(&self) -> Option<&str> {
        self.thumbnail_active.as_deref()
    }

    /// Applies an interaction and returns the owner's message for it, if the
    /// owner registered a handler.
    pub fn update<Message>(
        &mut self,
        event: Event,
        handlers: &Handlers<'_, Message>,
    ) -> Option<Message> {
        match event {
            Event::TabPressed(name) => {
                log::debug!("Tab pressed: {name}");
                Some((handlers.on_click_tab)(name))
            }
            Event::StudyPressed(uid) => {
                log::debug!("Study pressed: {uid}");
                handlers.on_click_study.as_ref().map(|handler| handler(uid))
            }
            Event::ThumbnailPressed(id) => {
                if self.thumbnail_active.as_deref() == Some(id.as_str()) {
                    self.thumbnail_active = None;
                } else {
                    self.thumbnail_active = Some(id.clone());
                }
                log::debug!(
                    "Thumbnail pressed: {id} (highlighted: {:?})",
                    self.thumbnail_active
                );

                // The owner gets the id that was pressed, not the resulting highlight.
                handlers
                    .on_click_thumbnail
                    .as_ref()
                    .map(|handler| handler(id))
            }
        }
    }

    pub fn plan<'a>(
        &'a self,
        props: &'a StudyBrowserProps,
    ) -> Result<RenderPlan<'a>, BrowserError> {
        let active_tab = props.active_tab()?;

        let tabs = props
            .tabs()
            .iter()
            .map(|tab| TabButton {
                name: &tab.name,
                label: &tab.label,
                is_active: tab.name == props.active_tab_name(),
            })
            .collect();

        let studies = active_tab
            .studies
            .iter()
            .map(|study| {
                let is_active = props.is_expanded(&study.study_instance_uid);
                let thumbnails = (is_active && !study.display_sets.is_empty()).then(|| {
                    ThumbnailSection {
                        display_sets: &study.display_sets,
                        thumbnail_active: self.thumbnail_active(),
                    }
                });

                StudyRow {
                    study,
                    tracked_series: study.tracked_series(),
                    is_active,
                    thumbnails,
                }
            })
            .collect();

        Ok(RenderPlan { tabs, studies })
    }

    pub fn view<'a>(&'a self, props: &'a StudyBrowserProps) -> Element<'a, Event> {
        let plan = match self.plan(props) {
            Ok(plan) => plan,
            Err(err) => {
                log::error!("Study browser cannot render: {err}");
                return container(text("No studies to show").size(14))
                    .width(Length::Fill)
                    .padding(16)
                    .align_x(Alignment::Center)
                    .into();
            }
        };

        let options = props.options();
        let segments: Vec<Segment<'a>> = plan
            .tabs
            .iter()
            .map(|tab| Segment {
                key: tab.name,
                label: tab.label,
                is_active: tab.is_active,
            })
            .collect();
        let tab_strip = container(button_group(&segments, |name| {
            Event::TabPressed(name.to_string())
        }))
        .padding(12)
        .width(Length::Fill);

        let studies = plan
            .studies
            .iter()
            .fold(Column::new().spacing(4), |column, row| {
                let uid = row.study.study_instance_uid.clone();
                let column = column.push(
                    study_item(row.study, row.tracked_series, row.is_active)
                        .on_press(Event::StudyPressed(uid)),
                );

                match row.thumbnails {
                    Some(section) => column.push(thumbnail_list(
                        section.display_sets,
                        section.thumbnail_active,
                        options.thumbnail_layout,
                        options.thumbnail_size,
                        |id| Event::ThumbnailPressed(id.to_string()),
                    )),
                    None => column,
                }
            });

        column![tab_strip, scrollable(studies).height(Length::Fill)]
            .width(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentType, Tab};

    fn display_set(id: &str, tracked: bool) -> DisplaySet {
        let component_type = if tracked {
            ComponentType::ThumbnailTracked
        } else {
            ComponentType::Thumbnail
        };
        DisplaySet::new(id, component_type).tracked(tracked)
    }

    fn tabs() -> Vec<Tab> {
        vec![
            Tab::new(
                "A",
                "Primary",
                vec![Study::new("a.1").with_display_sets(vec![display_set("T0", false)])],
            ),
            Tab::new(
                "B",
                "Recent",
                vec![
                    Study::new("b.1").with_display_sets(vec![
                        display_set("T1", true),
                        display_set("T2", false),
                        display_set("T3", true),
                    ]),
                    Study::new("b.2"),
                ],
            ),
        ]
    }

    fn props(active: &str, expanded: &[&str]) -> StudyBrowserProps {
        StudyBrowserProps::new(
            tabs(),
            active,
            expanded.iter().map(|uid| uid.to_string()).collect(),
        )
        .expect("valid props")
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Outer {
        Tab(String),
        Study(String),
        Thumbnail(String),
    }

    fn all_handlers() -> Handlers<'static, Outer> {
        Handlers::new(Outer::Tab)
            .on_click_study(Outer::Study)
            .on_click_thumbnail(Outer::Thumbnail)
    }

    fn study_uids<'a>(plan: &RenderPlan<'a>) -> Vec<&'a str> {
        plan.studies
            .iter()
            .map(|row| row.study.study_instance_uid.as_str())
            .collect()
    }

    #[test]
    fn renders_only_active_tab_studies() {
        let browser = StudyBrowser::new();
        let props = props("B", &[]);
        let plan = browser.plan(&props).expect("plan");

        assert_eq!(study_uids(&plan), vec!["b.1", "b.2"]);
        assert_eq!(
            plan.tabs,
            vec![
                TabButton {
                    name: "A",
                    label: "Primary",
                    is_active: false
                },
                TabButton {
                    name: "B",
                    label: "Recent",
                    is_active: true
                },
            ]
        );
    }

    #[test]
    fn tab_click_reports_without_switching() {
        let mut browser = StudyBrowser::new();
        let handlers = all_handlers();
        let props = props("B", &[]);

        let message = browser.update(Event::TabPressed("A".to_string()), &handlers);
        assert_eq!(message, Some(Outer::Tab("A".to_string())));

        let plan = browser.plan(&props).expect("plan");
        assert_eq!(study_uids(&plan), vec!["b.1", "b.2"]);
        assert_eq!(browser.thumbnail_active(), None);
    }

    #[test]
    fn counts_tracked_series_per_study() {
        let browser = StudyBrowser::new();
        let props = props("B", &[]);
        let plan = browser.plan(&props).expect("plan");

        let counts: Vec<_> = plan.studies.iter().map(|row| row.tracked_series).collect();
        assert_eq!(counts, vec![2, 0]);
    }

    #[test]
    fn expansion_follows_props() {
        let browser = StudyBrowser::new();

        let collapsed = props("B", &[]);
        let plan = browser.plan(&collapsed).expect("plan");
        assert!(plan.studies.iter().all(|row| !row.is_active));
        assert!(plan.studies.iter().all(|row| row.thumbnails.is_none()));

        let expanded = props("B", &["b.1"]);
        let plan = browser.plan(&expanded).expect("plan");
        assert!(plan.studies[0].is_active);
        let section = plan.studies[0].thumbnails.expect("thumbnails shown");
        assert_eq!(section.display_sets.len(), 3);
        assert!(plan.studies[1].thumbnails.is_none());
    }

    #[test]
    fn expanded_study_without_display_sets_has_no_thumbnails() {
        let browser = StudyBrowser::new();
        let props = props("B", &["b.2"]);
        let plan = browser.plan(&props).expect("plan");

        assert!(plan.studies[1].is_active);
        assert!(plan.studies[1].thumbnails.is_none());
    }

    #[test]
    fn study_click_does_not_expand() {
        let mut browser = StudyBrowser::new();
        let props = props("B", &[]);

        let message = browser.update(Event::StudyPressed("b.1".to_string()), &all_handlers());
        assert_eq!(message, Some(Outer::Study("b.1".to_string())));

        let plan = browser.plan(&props).expect("plan");
        assert!(!plan.studies[0].is_active);
    }

    #[test]
    fn thumbnail_highlight_toggles() {
        let mut browser = StudyBrowser::new();
        let handlers = all_handlers();

        browser.update(Event::ThumbnailPressed("T1".to_string()), &handlers);
        assert_eq!(browser.thumbnail_active(), Some("T1"));

        browser.update(Event::ThumbnailPressed("T1".to_string()), &handlers);
        assert_eq!(browser.thumbnail_active(), None);

        browser.update(Event::ThumbnailPressed("T1".to_string()), &handlers);
        browser.update(Event::ThumbnailPressed("T2".to_string()), &handlers);
        assert_eq!(browser.thumbnail_active(), Some("T2"));
    }

    #[test]
    fn thumbnail_callback_receives_pressed_id() {
        let mut browser = StudyBrowser::new();
        let handlers = all_handlers();

        let on = browser.update(Event::ThumbnailPressed("T1".to_string()), &handlers);
        assert_eq!(on, Some(Outer::Thumbnail("T1".to_string())));

        let off = browser.update(Event::ThumbnailPressed("T1".to_string()), &handlers);
        assert_eq!(off, Some(Outer::Thumbnail("T1".to_string())));
        assert_eq!(browser.thumbnail_active(), None);
    }

    #[test]
    fn highlight_is_passed_to_expanded_lists() {
        let mut browser = StudyBrowser::new();
        browser.update(Event::ThumbnailPressed("T3".to_string()), &all_handlers());

        let props = props("B", &["b.1"]);
        let plan = browser.plan(&props).expect("plan");
        let section = plan.studies[0].thumbnails.expect("thumbnails shown");
        assert_eq!(section.thumbnail_active, Some("T3"));
    }

    #[test]
    fn missing_optional_handlers_are_skipped() {
        let mut browser = StudyBrowser::new();
        let handlers = Handlers::new(Outer::Tab);

        assert_eq!(
            browser.update(Event::StudyPressed("b.1".to_string()), &handlers),
            None
        );
        assert_eq!(
            browser.update(Event::ThumbnailPressed("T1".to_string()), &handlers),
            None
        );
        assert_eq!(browser.thumbnail_active(), Some("T1"));
    }
}

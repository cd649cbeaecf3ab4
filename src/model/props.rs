use super::error::BrowserError;
use super::study::Tab;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailLayout {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserOptions {
    pub thumbnail_layout: ThumbnailLayout,
    pub thumbnail_size: f32,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            thumbnail_layout: ThumbnailLayout::default(),
            thumbnail_size: 96.0,
        }
    }
}

/// Input handed down by the owner of the browser on every render.
///
/// Construction checks the structural invariants up front so rendering never
/// has to discover a malformed tab, study or display set.
#[derive(Debug, Clone)]
pub struct StudyBrowserProps {
    tabs: Vec<Tab>,
    active_tab_name: String,
    expanded_study_instance_uids: Vec<String>,
    options: BrowserOptions,
}

impl StudyBrowserProps {
    pub fn new(
        tabs: Vec<Tab>,
        active_tab_name: impl Into<String>,
        expanded_study_instance_uids: Vec<String>,
    ) -> Result<Self, BrowserError> {
        let active_tab_name = active_tab_name.into();
        validate_tabs(&tabs)?;
        if !tabs.iter().any(|tab| tab.name == active_tab_name) {
            return Err(BrowserError::UnknownActiveTab(active_tab_name));
        }

        Ok(Self {
            tabs,
            active_tab_name,
            expanded_study_instance_uids,
            options: BrowserOptions::default(),
        })
    }

    pub fn with_options(mut self, options: BrowserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_name(&self) -> &str {
        &self.active_tab_name
    }

    pub fn options(&self) -> BrowserOptions {
        self.options
    }

    pub fn active_tab(&self) -> Result<&Tab, BrowserError> {
        self.tabs
            .iter()
            .find(|tab| tab.name == self.active_tab_name)
            .ok_or_else(|| BrowserError::UnknownActiveTab(self.active_tab_name.clone()))
    }

    pub fn is_expanded(&self, study_instance_uid: &str) -> bool {
        self.expanded_study_instance_uids
            .iter()
            .any(|uid| uid == study_instance_uid)
    }
}

fn validate_tabs(tabs: &[Tab]) -> Result<(), BrowserError> {
    if tabs.is_empty() {
        return Err(BrowserError::NoTabs);
    }

    let mut names = HashSet::new();
    for tab in tabs {
        if tab.name.is_empty() {
            return Err(BrowserError::EmptyTabName);
        }
        if !names.insert(tab.name.as_str()) {
            return Err(BrowserError::DuplicateTab(tab.name.clone()));
        }

        let mut study_uids = HashSet::new();
        for study in &tab.studies {
            let uid = study.study_instance_uid.as_str();
            if uid.is_empty() {
                return Err(BrowserError::EmptyStudyUid {
                    tab: tab.name.clone(),
                });
            }
            if !study_uids.insert(uid) {
                return Err(BrowserError::DuplicateStudy {
                    tab: tab.name.clone(),
                    uid: uid.to_string(),
                });
            }

            let mut display_set_uids = HashSet::new();
            for display_set in &study.display_sets {
                let id = display_set.display_set_instance_uid.as_str();
                if id.is_empty() {
                    return Err(BrowserError::EmptyDisplaySetUid {
                        study: uid.to_string(),
                    });
                }
                if !display_set_uids.insert(id) {
                    return Err(BrowserError::DuplicateDisplaySet {
                        study: uid.to_string(),
                        uid: id.to_string(),
                    });
                }
                if display_set
                    .drag_data
                    .as_ref()
                    .is_some_and(|data| data.kind.is_empty())
                {
                    return Err(BrowserError::EmptyDragType {
                        display_set: id.to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentType, DisplaySet, Study};

    fn tabs() -> Vec<Tab> {
        vec![
            Tab::new("A", "Primary", vec![Study::new("1.1")]),
            Tab::new("B", "Recent", vec![Study::new("2.1"), Study::new("2.2")]),
        ]
    }

    #[test]
    fn finds_active_tab() {
        let props = StudyBrowserProps::new(tabs(), "B", vec![]).expect("valid props");
        let tab = props.active_tab().expect("active tab");
        assert_eq!(tab.label, "Recent");
        assert_eq!(tab.studies.len(), 2);
    }

    #[test]
    fn rejects_empty_tabs() {
        let err = StudyBrowserProps::new(Vec::new(), "A", vec![]).unwrap_err();
        assert_eq!(err, BrowserError::NoTabs);
    }

    #[test]
    fn rejects_unknown_active_tab() {
        let err = StudyBrowserProps::new(tabs(), "C", vec![]).unwrap_err();
        assert_eq!(err, BrowserError::UnknownActiveTab("C".to_string()));
    }

    #[test]
    fn rejects_duplicate_tab_names() {
        let mut tabs = tabs();
        tabs.push(Tab::new("A", "Again", Vec::new()));
        let err = StudyBrowserProps::new(tabs, "A", vec![]).unwrap_err();
        assert_eq!(err, BrowserError::DuplicateTab("A".to_string()));
    }

    #[test]
    fn rejects_duplicate_studies_within_a_tab() {
        let tabs = vec![Tab::new(
            "A",
            "Primary",
            vec![Study::new("1.1"), Study::new("1.1")],
        )];
        let err = StudyBrowserProps::new(tabs, "A", vec![]).unwrap_err();
        assert_eq!(
            err,
            BrowserError::DuplicateStudy {
                tab: "A".to_string(),
                uid: "1.1".to_string()
            }
        );
    }

    #[test]
    fn same_study_may_appear_in_several_tabs() {
        let tabs = vec![
            Tab::new("A", "Primary", vec![Study::new("1.1")]),
            Tab::new("B", "All", vec![Study::new("1.1")]),
        ];
        assert!(StudyBrowserProps::new(tabs, "A", vec![]).is_ok());
    }

    #[test]
    fn rejects_malformed_display_sets() {
        let blank = vec![Tab::new(
            "A",
            "Primary",
            vec![Study::new("1.1")
                .with_display_sets(vec![DisplaySet::new("", ComponentType::Thumbnail)])],
        )];
        assert_eq!(
            StudyBrowserProps::new(blank, "A", vec![]).unwrap_err(),
            BrowserError::EmptyDisplaySetUid {
                study: "1.1".to_string()
            }
        );

        let duplicated = vec![Tab::new(
            "A",
            "Primary",
            vec![Study::new("1.1").with_display_sets(vec![
                DisplaySet::new("x", ComponentType::Thumbnail),
                DisplaySet::new("x", ComponentType::ThumbnailNoImage),
            ])],
        )];
        assert_eq!(
            StudyBrowserProps::new(duplicated, "A", vec![]).unwrap_err(),
            BrowserError::DuplicateDisplaySet {
                study: "1.1".to_string(),
                uid: "x".to_string()
            }
        );

        let untyped_drag = vec![Tab::new(
            "A",
            "Primary",
            vec![Study::new("1.1").with_display_sets(vec![DisplaySet::new(
                "x",
                ComponentType::Thumbnail,
            )
            .with_drag_data("")])],
        )];
        assert_eq!(
            StudyBrowserProps::new(untyped_drag, "A", vec![]).unwrap_err(),
            BrowserError::EmptyDragType {
                display_set: "x".to_string()
            }
        );
    }

    #[test]
    fn expansion_is_membership() {
        let props =
            StudyBrowserProps::new(tabs(), "B", vec!["2.2".to_string()]).expect("valid props");
        assert!(props.is_expanded("2.2"));
        assert!(!props.is_expanded("2.1"));
    }

    #[test]
    fn options_default_to_vertical_layout() {
        let props = StudyBrowserProps::new(tabs(), "A", vec![]).expect("valid props");
        assert_eq!(props.options().thumbnail_layout, ThumbnailLayout::Vertical);

        let props = props.with_options(BrowserOptions {
            thumbnail_layout: ThumbnailLayout::Horizontal,
            thumbnail_size: 64.0,
        });
        assert_eq!(props.options().thumbnail_layout, ThumbnailLayout::Horizontal);
    }
}

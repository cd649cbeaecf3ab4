use iced::widget::image::Handle;

/// How a display set is drawn by the thumbnail list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentType {
    #[default]
    Thumbnail,
    ThumbnailTracked,
    ThumbnailNoImage,
}

/// Data exposed to a compatible drop target. `kind` must match what the
/// target accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragData {
    pub kind: String,
}

#[derive(Debug, Clone)]
pub struct DisplaySet {
    pub display_set_instance_uid: String,
    pub component_type: ComponentType,
    pub is_tracked: bool,
    pub image: Option<Handle>,
    pub image_alt_text: Option<String>,
    pub series_date: Option<String>,
    pub series_number: Option<i32>,
    pub num_instances: Option<u32>,
    pub description: Option<String>,
    pub drag_data: Option<DragData>,
}

impl DisplaySet {
    pub fn new(
        display_set_instance_uid: impl Into<String>,
        component_type: ComponentType,
    ) -> Self {
        Self {
            display_set_instance_uid: display_set_instance_uid.into(),
            component_type,
            is_tracked: false,
            image: None,
            image_alt_text: None,
            series_date: None,
            series_number: None,
            num_instances: None,
            description: None,
            drag_data: None,
        }
    }

    pub fn tracked(mut self, is_tracked: bool) -> Self {
        self.is_tracked = is_tracked;
        self
    }

    pub fn with_drag_data(mut self, kind: impl Into<String>) -> Self {
        self.drag_data = Some(DragData { kind: kind.into() });
        self
    }

    pub fn is_draggable(&self) -> bool {
        self.drag_data.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Study {
    pub study_instance_uid: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub num_instances: Option<u32>,
    pub modalities: Option<String>,
    pub display_sets: Vec<DisplaySet>,
}

impl Study {
    pub fn new(study_instance_uid: impl Into<String>) -> Self {
        Self {
            study_instance_uid: study_instance_uid.into(),
            ..Default::default()
        }
    }

    pub fn with_display_sets(mut self, display_sets: Vec<DisplaySet>) -> Self {
        self.display_sets = display_sets;
        self
    }

    pub fn tracked_series(&self) -> usize {
        tracked_series(&self.display_sets)
    }
}

#[derive(Debug, Clone)]
pub struct Tab {
    pub name: String,
    pub label: String,
    pub studies: Vec<Study>,
}

impl Tab {
    pub fn new(name: impl Into<String>, label: impl Into<String>, studies: Vec<Study>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            studies,
        }
    }
}

/// Number of display sets flagged as tracked.
pub fn tracked_series(display_sets: &[DisplaySet]) -> usize {
    display_sets
        .iter()
        .filter(|display_set| display_set.is_tracked)
        .count()
}

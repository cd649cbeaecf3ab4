use crate::components::Event;
use crate::model::{InstanceRecord, LoadError, ThumbnailLayout};

#[derive(Debug, Clone)]
pub enum Message {
    PickFiles,
    FilesLoaded(Vec<Result<InstanceRecord, LoadError>>),
    Browser(Event),
    SelectTab(String),
    ToggleStudy(String),
    SelectDisplaySet(String),
    ToggleTracking,
    SetThumbnailLayout(ThumbnailLayout),
}

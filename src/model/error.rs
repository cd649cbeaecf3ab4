use std::path::PathBuf;
use thiserror::Error;

/// Rejected study browser input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("at least one tab is required")]
    NoTabs,

    #[error("tab name cannot be empty")]
    EmptyTabName,

    #[error("duplicate tab name: {0}")]
    DuplicateTab(String),

    #[error("active tab not found: {0}")]
    UnknownActiveTab(String),

    #[error("tab {tab} contains a study without a StudyInstanceUID")]
    EmptyStudyUid { tab: String },

    #[error("tab {tab} lists study {uid} more than once")]
    DuplicateStudy { tab: String, uid: String },

    #[error("study {study} contains a display set without an id")]
    EmptyDisplaySetUid { study: String },

    #[error("study {study} lists display set {uid} more than once")]
    DuplicateDisplaySet { study: String, uid: String },

    #[error("display set {display_set} has drag data without a type")]
    EmptyDragType { display_set: String },
}

#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("{}: failed to open DICOM file ({message})", path.display())]
    Open { path: PathBuf, message: String },

    #[error("{}: missing required attribute {attribute}", path.display())]
    MissingAttribute {
        path: PathBuf,
        attribute: &'static str,
    },
}

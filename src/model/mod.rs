pub mod catalog;
pub mod error;
pub mod loader;
pub mod props;
pub mod study;

pub use catalog::Catalog;
pub use error::{BrowserError, LoadError};
pub use loader::InstanceRecord;
pub use props::{BrowserOptions, StudyBrowserProps, ThumbnailLayout};
pub use study::{tracked_series, ComponentType, DisplaySet, DragData, Study, Tab};

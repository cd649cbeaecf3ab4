pub mod button_group;
pub mod study_browser;
pub mod study_item;
pub mod thumbnail_list;

pub use study_browser::{Event, Handlers, RenderPlan, StudyBrowser};

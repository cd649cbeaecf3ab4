pub mod formatting;

pub use formatting::{format_dicom_date, join_modalities, pluralize};

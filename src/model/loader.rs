use super::error::LoadError;
use crate::image_pipeline::ThumbnailPipeline;
use dicom::object::{open_file, DefaultDicomObject};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// The attributes of one imported instance the browser groups on.
#[derive(Debug, Clone, Default)]
pub struct InstanceRecord {
    pub file_path: PathBuf,
    pub patient_id: String,
    pub patient_name: Option<String>,
    pub study_instance_uid: String,
    pub study_date: Option<String>,
    pub study_description: Option<String>,
    pub series_instance_uid: String,
    pub series_number: Option<i32>,
    pub series_date: Option<String>,
    pub series_description: Option<String>,
    pub modality: Option<String>,
    pub sop_instance_uid: String,
    pub thumbnail: Option<Handle>,
}

pub fn load_instance(path: PathBuf, thumbnail_size: u32) -> Result<InstanceRecord, LoadError> {
    log::info!("Loading DICOM file: {}", path.display());
    let object = open_file(&path).map_err(|err| {
        let error = LoadError::Open {
            path: path.clone(),
            message: err.to_string(),
        };
        log::error!("{error}");
        error
    })?;

    let study_instance_uid = required_text(&object, &path, "StudyInstanceUID")?;
    let series_instance_uid = required_text(&object, &path, "SeriesInstanceUID")?;
    let sop_instance_uid = required_text(&object, &path, "SOPInstanceUID")?;

    let thumbnail = match ThumbnailPipeline::new(thumbnail_size).render(&object) {
        Ok(handle) => handle,
        Err(err) => {
            log::warn!("{}: no thumbnail ({err})", path.display());
            None
        }
    };

    Ok(InstanceRecord {
        patient_id: attribute_text(&object, "PatientID")
            .unwrap_or_else(|| "Unknown".to_string()),
        patient_name: attribute_text(&object, "PatientName"),
        study_instance_uid,
        study_date: attribute_text(&object, "StudyDate"),
        study_description: attribute_text(&object, "StudyDescription"),
        series_instance_uid,
        series_number: attribute_text(&object, "SeriesNumber")
            .and_then(|value| value.parse().ok()),
        series_date: attribute_text(&object, "SeriesDate"),
        series_description: attribute_text(&object, "SeriesDescription"),
        modality: attribute_text(&object, "Modality"),
        sop_instance_uid,
        thumbnail,
        file_path: path,
    })
}

fn required_text(
    object: &DefaultDicomObject,
    path: &Path,
    attribute: &'static str,
) -> Result<String, LoadError> {
    attribute_text(object, attribute).ok_or_else(|| {
        let error = LoadError::MissingAttribute {
            path: path.to_path_buf(),
            attribute,
        };
        log::error!("{error}");
        error
    })
}

fn attribute_text(object: &DefaultDicomObject, name: &str) -> Option<String> {
    object
        .element_by_name(name)
        .ok()
        .and_then(|element| element.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

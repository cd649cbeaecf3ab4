use super::loader::InstanceRecord;
use super::study::{ComponentType, DisplaySet, Study, Tab};
use crate::utils::{format_dicom_date, join_modalities};
use std::collections::{BTreeSet, HashMap};

pub const PRIMARY_TAB: &str = "primary";
pub const RECENT_TAB: &str = "recent";
pub const ALL_TAB: &str = "all";

/// Drag type accepted by viewport drop targets.
pub const DISPLAY_SET_DRAG_TYPE: &str = "displayset";

/// Every imported instance, in import order.
#[derive(Debug, Default)]
pub struct Catalog {
    instances: Vec<InstanceRecord>,
}

impl Catalog {
    /// Returns `false` when the SOP instance was already imported.
    pub fn add(&mut self, record: InstanceRecord) -> bool {
        if self
            .instances
            .iter()
            .any(|existing| existing.sop_instance_uid == record.sop_instance_uid)
        {
            log::warn!(
                "Skipping duplicate instance {} from {}",
                record.sop_instance_uid,
                record.file_path.display()
            );
            return false;
        }

        self.instances.push(record);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// First instance of the series a display set was built from.
    pub fn representative(&self, display_set_uid: &str) -> Option<&InstanceRecord> {
        self.instances
            .iter()
            .find(|instance| instance.series_instance_uid == display_set_uid)
    }

    /// Studies in the order they were first imported.
    pub fn studies(&self, tracked: &BTreeSet<String>) -> Vec<Study> {
        let mut study_index: HashMap<&str, usize> = HashMap::new();
        let mut grouped: Vec<Vec<&InstanceRecord>> = Vec::new();

        for instance in &self.instances {
            let index = *study_index
                .entry(instance.study_instance_uid.as_str())
                .or_insert_with(|| {
                    grouped.push(Vec::new());
                    grouped.len() - 1
                });
            grouped[index].push(instance);
        }

        grouped
            .into_iter()
            .map(|instances| build_study(&instances, tracked))
            .collect()
    }

    /// The primary, recent and all-studies tabs.
    pub fn tabs(&self, tracked: &BTreeSet<String>) -> Vec<Tab> {
        let all = self.studies(tracked);

        let primary_patient = self
            .instances
            .first()
            .map(|instance| instance.patient_id.as_str());
        let primary_uids: BTreeSet<&str> = self
            .instances
            .iter()
            .filter(|instance| Some(instance.patient_id.as_str()) == primary_patient)
            .map(|instance| instance.study_instance_uid.as_str())
            .collect();
        let primary = all
            .iter()
            .filter(|study| primary_uids.contains(study.study_instance_uid.as_str()))
            .cloned()
            .collect();

        let mut recent = all.clone();
        recent.sort_by(|a, b| match (&a.date, &b.date) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        vec![
            Tab::new(PRIMARY_TAB, "Primary", primary),
            Tab::new(RECENT_TAB, "Recent", recent),
            Tab::new(ALL_TAB, "All", all),
        ]
    }
}

fn build_study(instances: &[&InstanceRecord], tracked: &BTreeSet<String>) -> Study {
    let Some(first) = instances.first() else {
        return Study::default();
    };

    let mut series_index: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<Vec<&InstanceRecord>> = Vec::new();
    for instance in instances {
        let index = *series_index
            .entry(instance.series_instance_uid.as_str())
            .or_insert_with(|| {
                series.push(Vec::new());
                series.len() - 1
            });
        series[index].push(instance);
    }

    let mut display_sets: Vec<DisplaySet> = series
        .iter()
        .map(|members| build_display_set(members, tracked))
        .collect();
    display_sets.sort_by_key(|display_set| display_set.series_number.unwrap_or(i32::MAX));

    Study {
        study_instance_uid: first.study_instance_uid.clone(),
        // Stored as YYYYMMDD so the recent tab can sort on it.
        date: first.study_date.clone(),
        description: first.study_description.clone(),
        num_instances: Some(instances.len() as u32),
        modalities: join_modalities(
            instances
                .iter()
                .filter_map(|instance| instance.modality.as_deref()),
        ),
        display_sets,
    }
}

fn build_display_set(members: &[&InstanceRecord], tracked: &BTreeSet<String>) -> DisplaySet {
    let first = members[0];
    let uid = first.series_instance_uid.clone();
    let image = members
        .iter()
        .find_map(|instance| instance.thumbnail.clone());
    let is_tracked = tracked.contains(&uid);

    let component_type = if is_tracked {
        ComponentType::ThumbnailTracked
    } else if image.is_none() {
        ComponentType::ThumbnailNoImage
    } else {
        ComponentType::Thumbnail
    };

    let mut display_set = DisplaySet::new(uid, component_type)
        .tracked(is_tracked)
        .with_drag_data(DISPLAY_SET_DRAG_TYPE);
    display_set.image = image;
    display_set.image_alt_text = first.series_description.clone();
    display_set.series_date = first.series_date.as_deref().map(format_dicom_date);
    display_set.series_number = first.series_number;
    display_set.num_instances = Some(members.len() as u32);
    display_set.description = first.series_description.clone();
    display_set
}

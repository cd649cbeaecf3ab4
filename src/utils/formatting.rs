/// Renders a DICOM `DA` value (`YYYYMMDD`) as `YYYY-MM-DD`. Anything else is
/// shown as stored.
pub fn format_dicom_date(value: &str) -> String {
    let value = value.trim();
    if value.len() == 8 && value.bytes().all(|byte| byte.is_ascii_digit()) {
        format!("{}-{}-{}", &value[0..4], &value[4..6], &value[6..8])
    } else {
        value.to_string()
    }
}

/// Distinct modalities in first-seen order, joined with `/`.
pub fn join_modalities<'a>(modalities: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut seen: Vec<&str> = Vec::new();
    for modality in modalities {
        let modality = modality.trim();
        if !modality.is_empty() && !seen.contains(&modality) {
            seen.push(modality);
        }
    }

    if seen.is_empty() {
        None
    } else {
        Some(seen.join("/"))
    }
}

pub fn pluralize(count: u32, singular: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {singular}{suffix}")
}

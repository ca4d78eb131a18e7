use crate::model::responses::SampleLocation;
use once_cell::sync::Lazy;
use regex::Regex;

static WELL_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)(\d+)$").unwrap_or_else(|e| panic!("invalid well regex: {e}"))
});

/// Flattens a nested location into `(container type, label)` pairs, outermost first
///
/// Missing labels are returned as empty strings.
#[must_use]
pub fn parse_sample_location(location: &SampleLocation) -> Vec<(String, String)> {
    let mut levels = Vec::new();
    let mut current = Some(location);
    while let Some(level) = current {
        levels.push((
            level.location_type.clone(),
            level.display.clone().unwrap_or_default(),
        ));
        current = level.child.as_deref();
    }
    levels
}

/// Formats a location as `container/position`, e.g. `PLATE_12/A01`
///
/// Labels are joined with `/` from the outermost container down, up to and including
/// the first container of type `stop_at`. If no container has that type the whole
/// chain is used.
#[must_use]
pub fn sample_location_string(location: &SampleLocation, stop_at: &str) -> String {
    let mut labels = Vec::new();
    for (container, label) in parse_sample_location(location) {
        labels.push(label);
        if container == stop_at {
            break;
        }
    }
    labels.join("/")
}

/// Zero-pads the number of a well name to two digits: `A1` becomes `A01`
///
/// Names that are not letters followed by digits are returned unchanged.
#[must_use]
pub fn sanitize_well_name(name: &str) -> String {
    match WELL_NAME.captures(name) {
        Some(caps) => format!("{}{:0>2}", &caps[1], &caps[2]),
        None => name.to_string(),
    }
}

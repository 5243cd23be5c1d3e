//! Per-service data patches.
//!
//! A couple of catalog sources carry stale or missing hours; rather than
//! editing exports we can't regenerate, the reply composer consults this
//! id-keyed table first. Tech debt if it grows: more than a handful of rows
//! means the source data needs fixing instead.

/// (service id, hours string shown to the user)
///
/// Ids here must match what the catalog sources actually produce: `kgh-1`
/// is the hospital's id in the static dataset.
const HOURS_OVERRIDES: &[(&str, &str)] = &[("kgh-1", "Open 24/7, Monday to Sunday")];

pub fn hours_override(service_id: &str) -> Option<&'static str> {
    HOURS_OVERRIDES
        .iter()
        .find(|(id, _)| *id == service_id)
        .map(|(_, hours)| *hours)
}

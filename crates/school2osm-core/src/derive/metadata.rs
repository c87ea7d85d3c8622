use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{CoreError, Result};
use crate::models::NamedUnit;
use crate::osm::TagMap;

use super::RuleContext;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(super) fn dates(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let record = ctx.record;
    if let Some(raw) = &record.date_created {
        let date = parse_registry_date(raw)?;
        tags.insert("DATE_CREATED", date.format(DATE_FORMAT).to_string());
    }
    if let Some(raw) = &record.date_changed {
        let date = parse_registry_date(raw)?;
        tags.insert("DATE_UPDATED", date.format(DATE_FORMAT).to_string());
    }
    Ok(())
}

pub(super) fn registry_metadata(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let record = ctx.record;

    let named = |unit: Option<&NamedUnit>| unit.and_then(|unit| unit.name.clone());
    if let Some(municipality) = named(record.municipality.as_ref()) {
        tags.insert("MUNICIPALITY", municipality);
    }
    if let Some(county) = named(record.county.as_ref()) {
        tags.insert("COUNTY", county);
    }
    if let Some(characteristic) = &record.characteristic {
        tags.insert("DEPARTMENT", characteristic.as_str());
    }
    if let Some(language) = named(record.written_language.as_ref()) {
        tags.insert("LANGUAGE", language);
    }

    if !record.business_codes.is_empty() {
        let codes = record
            .business_codes
            .iter()
            .map(|code| format!("{}.{}", code.priority, code.name))
            .collect::<Vec<_>>()
            .join("; ");
        tags.insert("ENTITY_CODES", codes);
    }
    if !record.school_categories.is_empty() {
        let categories = record
            .school_categories
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tags.insert("SCHOOL_CODES", categories);
    }

    if record.is_special_school {
        tags.insert("SPECIAL_NEEDS", "Spesialskole");
    }
    Ok(())
}

/// Calendar date of a registry timestamp. Accepts RFC 3339, naive date-times
/// with optional fractional seconds, and plain dates.
pub fn parse_registry_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|err| CoreError::InvalidTimestamp(format!("{raw:?}: {err}")))
}

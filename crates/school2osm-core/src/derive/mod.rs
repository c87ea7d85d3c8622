//! Tag derivation rules.
//!
//! Every rule reads the record and writes zero or more tags. Rules run in
//! [`RULES`] order against a scratch [`TagMap`] each, and a rule's tags are
//! merged only when it succeeds, so one failing rule never leaves partial
//! output behind.

mod address;
mod contact;
mod grades;
mod metadata;
mod operator;

use thiserror::Error;

use crate::error::{CoreError, Result};
use crate::models::SchoolRecord;
use crate::normalize::normalize_name;
use crate::osm::TagMap;

pub use address::address_line;
pub use contact::{normalize_phone, website_from_url};
pub use grades::{grade_span, grades_value, isced_level};
pub use metadata::parse_registry_date;
pub use operator::owner_operator;

/// Business code for "other services connected to teaching".
pub const OTHER_SERVICES_CODE: &str = "85.609";

#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub record: &'a SchoolRecord,
    /// Node latitude, zero when unknown.
    pub lat: f64,
    /// Node longitude, zero when unknown.
    pub lon: f64,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn new(record: &'a SchoolRecord) -> Self {
        let (lat, lon) = record.position();
        Self { record, lat, lon }
    }

    #[must_use]
    pub fn needs_geocoding(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

pub type RuleFn = fn(&RuleContext<'_>, &mut TagMap) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub name: &'static str,
    pub apply: RuleFn,
}

pub const RULES: &[TagRule] = &[
    TagRule { name: "identity", apply: identity },
    TagRule { name: "name", apply: name },
    TagRule { name: "contact", apply: contact::contact },
    TagRule { name: "phone", apply: contact::phone },
    TagRule { name: "capacity", apply: capacity },
    TagRule { name: "grades", apply: grades::grades },
    TagRule { name: "other_services", apply: other_services },
    TagRule { name: "operator_type", apply: operator::operator_type },
    TagRule { name: "operator", apply: operator::operator_name },
    TagRule { name: "dates", apply: metadata::dates },
    TagRule { name: "metadata", apply: metadata::registry_metadata },
    TagRule { name: "location_source", apply: location_source },
    TagRule { name: "address", apply: address::address },
    TagRule { name: "geocode", apply: geocode },
];

#[derive(Debug, Error)]
#[error("rule `{rule}` failed: {source}")]
pub struct RuleError {
    pub rule: &'static str,
    #[source]
    pub source: CoreError,
}

#[derive(Debug, Default)]
pub struct Derivation {
    pub tags: TagMap,
    pub failures: Vec<RuleError>,
}

impl Derivation {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs every rule for one record.
#[must_use]
pub fn derive_tags(ctx: &RuleContext<'_>) -> Derivation {
    let mut derivation = Derivation::default();
    for rule in RULES {
        let mut scratch = TagMap::new();
        match (rule.apply)(ctx, &mut scratch) {
            Ok(()) => derivation.tags.extend(scratch),
            Err(source) => derivation.failures.push(RuleError {
                rule: rule.name,
                source,
            }),
        }
    }
    derivation
}

fn identity(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    tags.insert("amenity", "school");
    tags.insert("ref:udir_nsr", ctx.record.org_num.as_str());
    Ok(())
}

fn name(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let record = ctx.record;
    let normalized = normalize_name(&record.name, record.characteristic.as_deref());
    tags.insert("name", normalized.name.as_str());
    if normalized.is_changed() {
        tags.insert("ORIGINAL_NAME", normalized.original);
    }
    Ok(())
}

fn capacity(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    if let Some(pupils) = ctx.record.num_pupils.filter(|pupils| *pupils > 0) {
        tags.insert("capacity", pupils.to_string());
    }
    Ok(())
}

fn other_services(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let has_code = ctx
        .record
        .business_codes
        .iter()
        .any(|code| code.code == OTHER_SERVICES_CODE);
    if has_code {
        tags.insert("OTHER_SERVICES", "yes");
    }
    Ok(())
}

fn location_source(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    if let Some(source) = ctx
        .record
        .coordinate
        .as_ref()
        .and_then(|coordinate| coordinate.geo_source.as_deref())
    {
        tags.insert("LOCATION_SOURCE", source);
    }
    Ok(())
}

fn geocode(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    if ctx.needs_geocoding() {
        tags.insert("GEOCODE", "yes");
    }
    Ok(())
}

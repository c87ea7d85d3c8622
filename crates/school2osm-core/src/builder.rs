use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::derive::{RuleContext, derive_tags};
use crate::error::CoreError;
use crate::models::SchoolRecord;
use crate::osm::{Document, EntityId};

/// What happens to a record when one of its rules fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Leave the record out of the document and report it.
    #[default]
    Reject,
    /// Drop the failed rule's tags and keep the node.
    BestEffort,
}

impl FailurePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "best-effort" | "best_effort" | "besteffort" => Ok(Self::BestEffort),
            other => Err(CoreError::Validation(format!(
                "unknown failure policy `{other}` (expected reject or best-effort)"
            ))),
        }
    }
}

/// A record left out of the document.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("record {org_num} ({name}) rejected by rule `{rule}`: {message}")]
pub struct RejectedRecord {
    pub org_num: String,
    pub name: String,
    pub rule: String,
    pub message: String,
}

/// Rule name reported for entries that do not deserialize.
pub const PARSE_RULE: &str = "parse";

impl RejectedRecord {
    #[must_use]
    pub fn unparsed(org_num: impl Into<String>, name: impl Into<String>, err: &CoreError) -> Self {
        Self {
            org_num: org_num.into(),
            name: name.into(),
            rule: PARSE_RULE.to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub processed: usize,
    pub written: usize,
    pub geocode_needed: usize,
    pub rejected: Vec<RejectedRecord>,
}

impl ConversionReport {
    /// Counts records that never reached conversion as processed and rejected.
    pub fn add_rejected<I>(&mut self, rejected: I)
    where
        I: IntoIterator<Item = RejectedRecord>,
    {
        for record in rejected {
            self.processed += 1;
            self.rejected.push(record);
        }
    }
}

/// Deserializes one raw register entry. On failure the rejection is named by
/// the raw `Orgnr` and `Navn` values when they are present.
pub fn decode_record(raw: Value) -> Result<SchoolRecord, RejectedRecord> {
    let org_num = raw_label(&raw, "Orgnr");
    let name = raw_label(&raw, "Navn");
    serde_json::from_value(raw)
        .map_err(|err| RejectedRecord::unparsed(org_num, name, &CoreError::from(err)))
}

fn raw_label(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(value)) => value.trim().to_string(),
        Some(Value::Number(value)) => value.to_string(),
        _ => String::new(),
    }
}

/// Converts one record into a node of `document`.
///
/// Under [`FailurePolicy::Reject`] the first failed rule rejects the record
/// and nothing is added. Under [`FailurePolicy::BestEffort`] failures are
/// logged and the node is added without the failed rules' tags.
pub fn build_school_node(
    record: &SchoolRecord,
    document: &mut Document,
    policy: FailurePolicy,
) -> Result<EntityId, RejectedRecord> {
    let ctx = RuleContext::new(record);
    let derivation = derive_tags(&ctx);

    if let Some(failure) = derivation.failures.first() {
        match policy {
            FailurePolicy::Reject => {
                return Err(RejectedRecord {
                    org_num: record.org_num.clone(),
                    name: record.name.clone(),
                    rule: failure.rule.to_string(),
                    message: failure.source.to_string(),
                });
            }
            FailurePolicy::BestEffort => {
                for failure in &derivation.failures {
                    warn!(
                        "record {}: rule `{}` skipped: {}",
                        record.org_num, failure.rule, failure.source
                    );
                }
            }
        }
    }

    Ok(document.add_node(Some(ctx.lat), Some(ctx.lon), derivation.tags))
}

/// Converts `records` in order, appending one node per accepted record.
pub fn convert_records<'a, I>(
    records: I,
    document: &mut Document,
    policy: FailurePolicy,
) -> ConversionReport
where
    I: IntoIterator<Item = &'a SchoolRecord>,
{
    let mut report = ConversionReport::default();
    for record in records {
        report.processed += 1;
        match build_school_node(record, document, policy) {
            Ok(id) => {
                report.written += 1;
                if RuleContext::new(record).needs_geocoding() {
                    report.geocode_needed += 1;
                }
                debug!("record {} -> node {id}", record.org_num);
            }
            Err(rejected) => {
                warn!("{rejected}");
                report.rejected.push(rejected);
            }
        }
    }
    info!(
        "converted {} of {} records ({} need geocoding, {} rejected)",
        report.written,
        report.processed,
        report.geocode_needed,
        report.rejected.len()
    );
    report
}

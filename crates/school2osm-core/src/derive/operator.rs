use crate::error::Result;
use crate::models::SchoolRecord;
use crate::normalize::normalize_operator;
use crate::osm::TagMap;

use super::RuleContext;

/// Public takes precedence when a unit is flagged both public and private.
pub(super) fn operator_type(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let record = ctx.record;
    if record.is_public_school {
        tags.insert("operator:type", "public");
        tags.insert("fee", "no");
    } else if record.is_private_school {
        tags.insert("operator:type", "private");
        tags.insert("fee", "yes");
    }
    Ok(())
}

pub(super) fn operator_name(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    if let Some(operator) = owner_operator(ctx.record) {
        tags.insert("operator", operator);
    }
    Ok(())
}

/// Normalized name of the owning unit. With several owner relations the last
/// one wins.
#[must_use]
pub fn owner_operator(record: &SchoolRecord) -> Option<String> {
    record
        .parent_relations
        .iter()
        .filter(|relation| relation.is_owner())
        .filter_map(|relation| relation.unit.name.as_deref())
        .last()
        .and_then(normalize_operator)
}

use crate::error::Result;
use crate::models::Address;
use crate::osm::TagMap;

use super::RuleContext;

const HOME_COUNTRY: &str = "Norge";
const MISSING_STREET: &str = "-";

pub(super) fn address(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    if let Some(line) = ctx.record.location_address.as_ref().and_then(address_line) {
        tags.insert("ADDRESS", line);
    }
    Ok(())
}

/// One-line postal address: `street, postcode city[, country]`.
#[must_use]
pub fn address_line(address: &Address) -> Option<String> {
    let mut line = String::new();
    if let Some(street) = address.address.as_deref().filter(|street| *street != MISSING_STREET) {
        line.push_str(street);
        line.push_str(", ");
    }
    if let Some(post_code) = &address.post_code {
        line.push_str(post_code);
        line.push(' ');
    }
    if let Some(city) = &address.city {
        line.push_str(city);
    }
    if let Some(country) = address.country.as_deref().filter(|country| *country != HOME_COUNTRY) {
        line.push_str(", ");
        line.push_str(country);
    }
    (!line.is_empty()).then_some(line)
}

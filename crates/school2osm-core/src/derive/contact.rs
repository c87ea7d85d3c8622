use crate::error::Result;
use crate::osm::TagMap;

use super::RuleContext;

const DEFAULT_COUNTRY_PREFIX: &str = "+47 ";

pub(super) fn contact(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let record = ctx.record;
    if let Some(email) = &record.email {
        tags.insert("email", email.to_lowercase());
    }
    if let Some(website) = record.url.as_deref().and_then(website_from_url) {
        tags.insert("website", website);
    }
    Ok(())
}

pub(super) fn phone(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    if let Some(phone) = ctx.record.telephone.as_deref().and_then(normalize_phone) {
        tags.insert("phone", phone);
    }
    Ok(())
}

/// `https://` address for a registry URL field. Values that look like an
/// e-mail address yield `None`.
#[must_use]
pub fn website_from_url(url: &str) -> Option<String> {
    if url.contains('@') {
        return None;
    }
    let host_and_path = url
        .trim_start_matches('/')
        .replace("www2.", "")
        .replace("www.", "")
        .replace(' ', "");
    Some(format!("https://{host_and_path}"))
}

/// International form of a telephone number; numbers without a country code
/// are Norwegian.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let phone = raw.replace("  ", " ");
    if phone.is_empty() {
        return None;
    }
    if phone.starts_with('+') {
        return Some(phone);
    }
    if let Some(rest) = phone.strip_prefix("00") {
        return Some(format!("+{}", rest.trim_start()));
    }
    Some(format!("{DEFAULT_COUNTRY_PREFIX}{phone}"))
}

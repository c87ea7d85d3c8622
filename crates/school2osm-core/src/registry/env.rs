use std::str::FromStr;

/// Reads `name` from the process environment, trimmed; blank counts as unset.
#[must_use]
pub fn read_non_empty_env(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn parse_number<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|raw| raw.trim().parse::<T>().ok())
}

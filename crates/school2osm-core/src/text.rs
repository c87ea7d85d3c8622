/// True when upper-casing `text` would not change it. Text without any cased
/// character counts as upper-case.
#[must_use]
pub fn is_upper_case(text: &str) -> bool {
    text.to_uppercase() == text
}

/// Word-wise title case: a cased letter becomes upper-case when it follows a
/// non-cased character and lower-case otherwise (`"10-ÅRIGE"` -> `"10-Årige"`).
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for ch in text.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !previous_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }
    out
}

#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[must_use]
pub fn collapse_double_spaces(text: &str) -> String {
    text.replace("  ", " ")
}

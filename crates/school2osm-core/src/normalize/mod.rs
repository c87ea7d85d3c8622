//! Table-driven cleanup of school and operator names.

mod tables;

use log::warn;
use serde::Serialize;

use crate::text::{capitalize_first, collapse_double_spaces, is_upper_case, title_case};

use self::tables::{
    FILLER_QUALIFIERS, OPERATOR_SUBSTITUTIONS, PHRASE_SUBSTITUTIONS, WORD_SUBSTITUTIONS, lookup,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedName {
    /// Display name after cleanup.
    pub name: String,
    /// Registry name with the qualifier appended as `", <qualifier>"`.
    pub original: String,
}

impl NormalizedName {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.name != self.original
    }
}

/// Rewrites a registry name into its display form.
///
/// `qualifier` is the unit's characteristic (department) text. It is always
/// part of `original`, and part of `name` unless it only says "school".
/// A name that normalizes to nothing falls back to `original`.
#[must_use]
pub fn normalize_name(raw: &str, qualifier: Option<&str>) -> NormalizedName {
    let mut original = raw.to_string();
    let mut working = raw.replace('/', " / ");

    if let Some(qualifier) = qualifier {
        original.push_str(", ");
        original.push_str(qualifier);
        if !is_filler_qualifier(qualifier) {
            working.push_str(", ");
            working.push_str(qualifier);
        }
    }

    if is_upper_case(&working) {
        working = title_case(&working);
    }

    let mut rewritten = rewrite_words(&working);
    for (from, to) in PHRASE_SUBSTITUTIONS {
        rewritten = rewritten.replace(from, to);
    }

    let name = finish(&rewritten);
    if name.is_empty() {
        warn!("name {raw:?} is empty after normalization, keeping original");
        return NormalizedName {
            name: original.clone(),
            original,
        };
    }
    NormalizedName { name, original }
}

/// Rewrites an owner name for the `operator` tag. Returns `None` when nothing
/// is left.
#[must_use]
pub fn normalize_operator(raw: &str) -> Option<String> {
    let mut joined = String::new();
    for word in raw.split_whitespace() {
        match lookup(OPERATOR_SUBSTITUTIONS, word) {
            Some("") => {}
            Some(replacement) => {
                joined.push_str(replacement);
                joined.push(' ');
            }
            None => {
                joined.push_str(word);
                joined.push(' ');
            }
        }
    }
    let operator = capitalize_first(collapse_double_spaces(&joined).trim());
    (!operator.is_empty()).then_some(operator)
}

fn is_filler_qualifier(qualifier: &str) -> bool {
    let lowered = qualifier.to_lowercase();
    FILLER_QUALIFIERS.contains(&lowered.as_str())
}

fn rewrite_words(working: &str) -> String {
    let mut out = String::with_capacity(working.len() + 16);
    for token in working.split_whitespace() {
        let bare = token.strip_suffix(',');
        match lookup(WORD_SUBSTITUTIONS, bare.unwrap_or(token)) {
            Some(replacement) => out.push_str(replacement),
            None => out.push_str(token),
        }
        out.push_str(if bare.is_some() { ", " } else { " " });
    }
    out
}

fn finish(rewritten: &str) -> String {
    let collapsed = rewritten
        .replace(" ,", ",")
        .replace(",,", ",")
        .replace("  ", " ");
    capitalize_first(collapsed.trim_matches(|ch| ch == '-' || ch == ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str, qualifier: Option<&str>) -> String {
        normalize_name(raw, qualifier).name
    }

    #[test]
    fn all_caps_name_is_title_cased_before_word_table() {
        let result = normalize_name("OSLO SKOLE", None);
        assert_eq!(result.name, "Oslo skole");
        assert_eq!(result.original, "OSLO SKOLE");
        assert!(result.is_changed());
    }

    #[test]
    fn abbreviations_expand() {
        assert_eq!(name("Bergen Vgs", None), "Bergen videregående skole");
        assert_eq!(name("Kvs Lyngdal", None), "Kristen videregående skole Lyngdal");
        assert_eq!(name("Hamar Katedralskole V.g.s.", None), "Hamar Katedralskole videregående skole");
    }

    #[test]
    fn legal_form_words_are_dropped() {
        assert_eq!(name("Steinerskolen i Bergen AS", None), "Steinerskolen i Bergen");
        assert_eq!(name("Stiftelsen Kristne Friskolen SA", None), "Kristne Friskolen");
    }

    #[test]
    fn slash_gets_spaces() {
        assert_eq!(name("Hov/Lia Skole", None), "Hov / Lia skole");
    }

    #[test]
    fn filler_qualifier_stays_out_of_name_but_not_original() {
        let result = normalize_name("Sand Skole", Some("Avd Skole"));
        assert_eq!(result.name, "Sand skole");
        assert_eq!(result.original, "Sand Skole, Avd Skole");
    }

    #[test]
    fn meaningful_qualifier_is_appended() {
        let result = normalize_name("Hop Oppvekstsenter", Some("Hop Skole"));
        assert_eq!(result.name, "Hop oppvekstsenter, Hop skole");
        assert_eq!(result.original, "Hop Oppvekstsenter, Hop Skole");
    }

    #[test]
    fn trailing_comma_word_is_still_looked_up() {
        assert_eq!(name("Molde Vgs, Avd Nord", None), "Molde videregående skole, Nord");
    }

    #[test]
    fn phrase_table_removes_kindergarten_suffix() {
        assert_eq!(name("Ås Skole og Barnehage", None), "Ås skole");
        assert_eq!(name("Trondheim Montessori Skole", None), "Trondheim Montessoriskole");
    }

    #[test]
    fn leading_dropped_word_leaves_no_space_or_dash() {
        assert_eq!(name("Stiftelsen - Rudolf Steinerskolen", None), "Rudolf Steinerskolen");
    }

    #[test]
    fn name_exposed_by_dropped_word_starts_capitalized() {
        // Capitalization runs after the dropped word is trimmed away.
        assert_eq!(name("Stiftelsen kristne skole", None), "Kristne skole");
    }

    #[test]
    fn single_letter_name_is_safe() {
        assert_eq!(name("x", None), "X");
    }

    #[test]
    fn unchanged_name_reports_no_change() {
        let result = normalize_name("Galtvort skole", None);
        assert_eq!(result.name, "Galtvort skole");
        assert!(!result.is_changed());
    }

    #[test]
    fn empty_result_falls_back_to_original() {
        let result = normalize_name("Stiftelsen AS", None);
        assert_eq!(result.name, "Stiftelsen AS");
        assert!(!result.is_changed());

        let qualified = normalize_name("Stiftelsen AS", Some("skole"));
        assert_eq!(qualified.name, "Stiftelsen AS, skole");
        assert_eq!(qualified.original, "Stiftelsen AS, skole");
    }

    #[test]
    fn operator_words_are_rewritten_and_capitalized() {
        assert_eq!(
            normalize_operator("kautokeino Suohkan").as_deref(),
            Some("Kautokeino suohkan")
        );
        assert_eq!(
            normalize_operator("Oslo  Kristne Skolelag Sa").as_deref(),
            Some("Oslo Kristne Skolelag SA")
        );
        assert_eq!(normalize_operator("   "), None);
    }
}

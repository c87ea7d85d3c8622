use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, null_as_false, string_or_number, trimmed};

/// Short register entry as returned by the `/enheter` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitSummary {
    #[serde(rename = "Orgnr", deserialize_with = "string_or_number")]
    pub org_num: String,
    #[serde(rename = "Navn", default)]
    pub name: String,
    #[serde(rename = "Epost", default, deserialize_with = "trimmed")]
    pub email: Option<String>,
    #[serde(rename = "ErSkole", default, deserialize_with = "null_as_false")]
    pub is_school: bool,
    #[serde(rename = "ErAktiv", default, deserialize_with = "null_as_false")]
    pub is_active: bool,
}

impl UnitSummary {
    /// Active schools are converted; everything else in the register is not.
    #[must_use]
    pub const fn is_relevant(&self) -> bool {
        self.is_school && self.is_active
    }
}

/// One page of the `/enheter` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitPage {
    #[serde(rename = "Sidenummer", default)]
    pub page: u32,
    #[serde(rename = "AntallSider", default)]
    pub num_pages: u32,
    #[serde(
        rename = "EnhetListe",
        alias = "Enheter",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub units: Vec<UnitSummary>,
}

impl UnitPage {
    pub fn relevant_units(&self) -> impl Iterator<Item = &UnitSummary> {
        self.units.iter().filter(|unit| unit.is_relevant())
    }

    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.num_pages > 1
    }
}

use serde::{Deserialize, Serialize};

use super::wire::{
    null_as_empty, null_as_false, optional_string_or_number, string_or_number, trimmed,
};

/// Detailed register entry for one school unit (`/enhet/{orgnr}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SchoolRecord {
    #[serde(rename = "Orgnr", deserialize_with = "string_or_number")]
    pub org_num: String,
    #[serde(rename = "Navn")]
    pub name: String,
    #[serde(rename = "Karakteristikk", default, deserialize_with = "trimmed")]
    pub characteristic: Option<String>,

    #[serde(rename = "Epost", default, deserialize_with = "trimmed")]
    pub email: Option<String>,
    #[serde(rename = "Url", default, deserialize_with = "trimmed")]
    pub url: Option<String>,
    #[serde(rename = "Telefon", default, deserialize_with = "trimmed")]
    pub telephone: Option<String>,

    #[serde(rename = "Koordinat", default)]
    pub coordinate: Option<Coordinate>,
    #[serde(rename = "Elevtall", default)]
    pub num_pupils: Option<u32>,

    #[serde(rename = "SkoletrinnGSFra", default)]
    pub grade_gs_from: Option<u32>,
    #[serde(rename = "SkoletrinnGSTil", default)]
    pub grade_gs_to: Option<u32>,
    #[serde(rename = "SkoletrinnVGSFra", default)]
    pub grade_vgs_from: Option<u32>,
    #[serde(rename = "SkoletrinnVGSTil", default)]
    pub grade_vgs_to: Option<u32>,

    #[serde(rename = "ErOffentligSkole", default, deserialize_with = "null_as_false")]
    pub is_public_school: bool,
    #[serde(rename = "ErPrivatskole", default, deserialize_with = "null_as_false")]
    pub is_private_school: bool,
    #[serde(rename = "ErSpesialskole", default, deserialize_with = "null_as_false")]
    pub is_special_school: bool,
    #[serde(rename = "ErGrunnskole", default, deserialize_with = "null_as_false")]
    pub is_primary_education: bool,
    #[serde(rename = "ErVideregaaendeSkole", default, deserialize_with = "null_as_false")]
    pub is_secondary_education: bool,

    #[serde(rename = "Naeringskoder", default, deserialize_with = "null_as_empty")]
    pub business_codes: Vec<BusinessCode>,
    #[serde(rename = "Skolekategorier", default, deserialize_with = "null_as_empty")]
    pub school_categories: Vec<SchoolCategory>,

    #[serde(rename = "Kommune", default)]
    pub municipality: Option<NamedUnit>,
    #[serde(rename = "Fylke", default)]
    pub county: Option<NamedUnit>,
    #[serde(rename = "Maalform", default)]
    pub written_language: Option<NamedUnit>,

    /// Raw registry timestamp; parsed when the metadata tags are derived.
    #[serde(rename = "DatoOpprettet", default, deserialize_with = "trimmed")]
    pub date_created: Option<String>,
    #[serde(rename = "DatoEndret", default, deserialize_with = "trimmed")]
    pub date_changed: Option<String>,

    #[serde(rename = "ForeldreRelasjoner", default, deserialize_with = "null_as_empty")]
    pub parent_relations: Vec<ParentRelation>,

    #[serde(rename = "Beliggenhetsadresse", default)]
    pub location_address: Option<Address>,
}

impl SchoolRecord {
    #[must_use]
    pub fn new(org_num: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            org_num: org_num.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Latitude and longitude used for the node; `(0, 0)` when unknown.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        self.coordinate
            .as_ref()
            .map_or((0.0, 0.0), |coordinate| {
                (coordinate.latitude, coordinate.longitude)
            })
    }
}

/// Geographic position of a unit. A half-filled coordinate reads as `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawCoordinate")]
pub struct Coordinate {
    #[serde(rename = "Breddegrad")]
    pub latitude: f64,
    #[serde(rename = "Lengdegrad")]
    pub longitude: f64,
    #[serde(rename = "GeoKilde")]
    pub geo_source: Option<String>,
}

#[derive(Deserialize)]
struct RawCoordinate {
    #[serde(rename = "Breddegrad", default)]
    latitude: Option<f64>,
    #[serde(rename = "Lengdegrad", default)]
    longitude: Option<f64>,
    #[serde(rename = "GeoKilde", default, deserialize_with = "trimmed")]
    geo_source: Option<String>,
}

impl From<RawCoordinate> for Coordinate {
    fn from(raw: RawCoordinate) -> Self {
        let (latitude, longitude) = match (raw.latitude, raw.longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => (0.0, 0.0),
        };
        Self {
            latitude,
            longitude,
            geo_source: raw.geo_source,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BusinessCode {
    #[serde(rename = "Kode", deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(rename = "Prioritet", default)]
    pub priority: i64,
    #[serde(rename = "Navn", default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchoolCategory {
    #[serde(rename = "Kode", default, deserialize_with = "optional_string_or_number")]
    pub code: Option<String>,
    #[serde(rename = "Navn", default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedUnit {
    #[serde(rename = "Navn", default, deserialize_with = "trimmed")]
    pub name: Option<String>,
}

impl NamedUnit {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParentRelation {
    #[serde(rename = "Relasjonstype")]
    pub relation_type: RelationType,
    #[serde(rename = "Enhet", default)]
    pub unit: NamedUnit,
}

impl ParentRelation {
    pub const OWNER: &'static str = "1";

    #[must_use]
    pub fn new(relation_type_id: impl Into<String>, unit_name: impl Into<String>) -> Self {
        Self {
            relation_type: RelationType {
                id: relation_type_id.into(),
            },
            unit: NamedUnit::named(unit_name),
        }
    }

    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.relation_type.id == Self::OWNER
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelationType {
    #[serde(rename = "Id", deserialize_with = "string_or_number")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    #[serde(rename = "Adresse", default, deserialize_with = "trimmed")]
    pub address: Option<String>,
    #[serde(rename = "Postnr", default, deserialize_with = "trimmed")]
    pub post_code: Option<String>,
    #[serde(rename = "Poststed", default, deserialize_with = "trimmed")]
    pub city: Option<String>,
    #[serde(rename = "Land", default, deserialize_with = "trimmed")]
    pub country: Option<String>,
}

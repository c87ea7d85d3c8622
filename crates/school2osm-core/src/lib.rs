// Public fallible APIs in this crate share one concrete error contract (`CoreError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod builder;
pub mod derive;
pub mod error;
pub mod models;
pub mod normalize;
pub mod osm;
#[cfg(feature = "registry")]
pub mod registry;
pub(crate) mod text;

pub use builder::{
    ConversionReport, FailurePolicy, PARSE_RULE, RejectedRecord, build_school_node,
    convert_records, decode_record,
};
pub use error::{CoreError, Result};
pub use models::{SchoolRecord, UnitPage, UnitSummary};
pub use normalize::{NormalizedName, normalize_name, normalize_operator};
pub use osm::{Document, TagMap};
#[cfg(feature = "registry")]
pub use registry::{RegistryClient, RegistryConfig, ResponseCache};

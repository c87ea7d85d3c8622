//! Register entries as delivered by the NSR v3 API.

mod listing;
mod record;
mod wire;

pub use listing::{UnitPage, UnitSummary};
pub use record::{
    Address, BusinessCode, Coordinate, NamedUnit, ParentRelation, RelationType, SchoolCategory,
    SchoolRecord,
};

//! OSM document model and XML serialization.

mod document;
mod entity;
mod tags;
mod xml;

pub use document::{API_VERSION, Document, FIRST_PLACEHOLDER_ID, IdSequence, default_generator};
pub use entity::{Entity, EntityId, EntityKind, Node, Relation, RelationMember, Way};
pub use tags::TagMap;
pub use xml::escape;

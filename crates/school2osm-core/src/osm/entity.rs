use serde::Serialize;

use super::tags::TagMap;

pub type EntityId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Node,
    Way,
    Relation,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: EntityId,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub tags: TagMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Way {
    pub id: EntityId,
    pub node_refs: Vec<EntityId>,
    pub tags: TagMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationMember {
    pub kind: EntityKind,
    pub reference: EntityId,
    pub role: String,
}

impl RelationMember {
    #[must_use]
    pub fn new(kind: EntityKind, reference: EntityId, role: impl Into<String>) -> Self {
        Self {
            kind,
            reference,
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    pub id: EntityId,
    pub members: Vec<RelationMember>,
    pub tags: TagMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

impl Entity {
    #[must_use]
    pub const fn id(&self) -> EntityId {
        match self {
            Self::Node(node) => node.id,
            Self::Way(way) => way.id,
            Self::Relation(relation) => relation.id,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Node(_) => EntityKind::Node,
            Self::Way(_) => EntityKind::Way,
            Self::Relation(_) => EntityKind::Relation,
        }
    }

    #[must_use]
    pub const fn tags(&self) -> &TagMap {
        match self {
            Self::Node(node) => &node.tags,
            Self::Way(way) => &way.tags,
            Self::Relation(relation) => &relation.tags,
        }
    }

    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }
}

use std::io::Write;

use crate::error::{CoreError, Result};

use super::entity::{Entity, EntityId, EntityKind, Node, Relation, RelationMember, Way};
use super::tags::TagMap;
use super::xml;

pub const API_VERSION: &str = "0.6";
pub const FIRST_PLACEHOLDER_ID: EntityId = -1001;

#[must_use]
pub fn default_generator() -> String {
    format!("school2osm v{}", env!("CARGO_PKG_VERSION"))
}

/// Placeholder identifiers for entities not yet known to the map database.
///
/// Starts at -1001 and counts down by one for every entity of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: EntityId,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self {
            next: FIRST_PLACEHOLDER_ID,
        }
    }
}

impl IdSequence {
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next -= 1;
        id
    }

    #[must_use]
    pub const fn peek(&self) -> EntityId {
        self.next
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub api_version: String,
    pub generator: String,
    pub upload: bool,
    ids: IdSequence,
    entities: Vec<Entity>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(default_generator())
    }
}

impl Document {
    #[must_use]
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            generator: generator.into(),
            upload: false,
            ids: IdSequence::default(),
            entities: Vec::new(),
        }
    }

    pub fn add_node(&mut self, lat: Option<f64>, lon: Option<f64>, tags: TagMap) -> EntityId {
        let id = self.ids.next_id();
        self.entities.push(Entity::Node(Node { id, lat, lon, tags }));
        id
    }

    pub fn add_way(&mut self, node_refs: Vec<EntityId>, tags: TagMap) -> Result<EntityId> {
        for node_ref in &node_refs {
            self.ensure_member(EntityKind::Node, *node_ref)?;
        }
        let id = self.ids.next_id();
        self.entities.push(Entity::Way(Way {
            id,
            node_refs,
            tags,
        }));
        Ok(id)
    }

    pub fn add_relation(&mut self, members: Vec<RelationMember>, tags: TagMap) -> Result<EntityId> {
        for member in &members {
            self.ensure_member(member.kind, member.reference)?;
        }
        let id = self.ids.next_id();
        self.entities.push(Entity::Relation(Relation { id, members, tags }));
        Ok(id)
    }

    fn ensure_member(&self, kind: EntityKind, id: EntityId) -> Result<()> {
        let known = self
            .entities
            .iter()
            .any(|entity| entity.id() == id && entity.kind() == kind);
        if known {
            Ok(())
        } else {
            Err(CoreError::UnknownReference(id))
        }
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.entities.iter().filter_map(Entity::as_node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Writes the document as OSM XML: nodes first, then ways, then relations.
    ///
    /// Fails on the first node that lacks a coordinate; output written before
    /// the failure is left in `out`.
    pub fn write_xml<W: Write>(&self, out: &mut W) -> Result<()> {
        xml::write_header(out, &self.api_version, &self.generator, self.upload)?;
        for kind in [EntityKind::Node, EntityKind::Way, EntityKind::Relation] {
            for entity in self.entities.iter().filter(|entity| entity.kind() == kind) {
                xml::write_entity(out, entity)?;
            }
        }
        xml::write_footer(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn to_xml_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        String::from_utf8(buf).map_err(|err| CoreError::Internal(err.to_string()))
    }
}

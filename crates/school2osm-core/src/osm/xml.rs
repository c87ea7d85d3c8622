use std::io::Write;

use crate::error::{CoreError, Result};

use super::entity::{Entity, Node, Relation, Way};
use super::tags::TagMap;

const INDENT: &str = "  ";

/// Escapes markup-significant characters the same way for keys, values and
/// attribute text: `& < > " '`.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(super) fn write_header<W: Write>(
    out: &mut W,
    version: &str,
    generator: &str,
    upload: bool,
) -> Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<osm version="{}" generator="{}" upload="{upload}">"#,
        escape(version),
        escape(generator),
    )?;
    Ok(())
}

pub(super) fn write_footer<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "</osm>")?;
    Ok(())
}

pub(super) fn write_entity<W: Write>(out: &mut W, entity: &Entity) -> Result<()> {
    match entity {
        Entity::Node(node) => write_node(out, node),
        Entity::Way(way) => write_way(out, way),
        Entity::Relation(relation) => write_relation(out, relation),
    }
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> Result<()> {
    let (Some(lat), Some(lon)) = (node.lat, node.lon) else {
        return Err(CoreError::MissingCoordinates {
            id: node.id,
            lat: node.lat,
            lon: node.lon,
        });
    };
    writeln!(
        out,
        r#"{INDENT}<node id="{}" lat="{lat}" lon="{lon}">"#,
        node.id
    )?;
    write_tags(out, &node.tags)?;
    writeln!(out, "{INDENT}</node>")?;
    Ok(())
}

fn write_way<W: Write>(out: &mut W, way: &Way) -> Result<()> {
    writeln!(out, r#"{INDENT}<way id="{}">"#, way.id)?;
    for node_ref in &way.node_refs {
        writeln!(out, r#"{INDENT}{INDENT}<nd ref="{node_ref}" />"#)?;
    }
    write_tags(out, &way.tags)?;
    writeln!(out, "{INDENT}</way>")?;
    Ok(())
}

fn write_relation<W: Write>(out: &mut W, relation: &Relation) -> Result<()> {
    writeln!(out, r#"{INDENT}<relation id="{}">"#, relation.id)?;
    for member in &relation.members {
        writeln!(
            out,
            r#"{INDENT}{INDENT}<member type="{}" ref="{}" role="{}" />"#,
            member.kind.as_str(),
            member.reference,
            escape(&member.role),
        )?;
    }
    write_tags(out, &relation.tags)?;
    writeln!(out, "{INDENT}</relation>")?;
    Ok(())
}

fn write_tags<W: Write>(out: &mut W, tags: &TagMap) -> Result<()> {
    for (key, value) in tags.iter() {
        writeln!(
            out,
            r#"{INDENT}{INDENT}<tag k="{}" v="{}" />"#,
            escape(key),
            escape(value).trim(),
        )?;
    }
    Ok(())
}

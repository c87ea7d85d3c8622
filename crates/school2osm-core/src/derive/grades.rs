use crate::error::Result;
use crate::models::SchoolRecord;
use crate::osm::TagMap;

use super::RuleContext;

pub(super) fn grades(ctx: &RuleContext<'_>, tags: &mut TagMap) -> Result<()> {
    let record = ctx.record;
    let span = grade_span(record);
    if let Some((from, to)) = span {
        tags.insert("grades", grades_value(from, to));
    }
    tags.insert(
        "isced:level",
        isced_level(
            span,
            record.is_primary_education,
            record.is_secondary_education,
        ),
    );
    Ok(())
}

/// Lowest and highest grade taught. Upper secondary grades extend the span
/// and decide its upper bound; zero means unset.
#[must_use]
pub fn grade_span(record: &SchoolRecord) -> Option<(u32, u32)> {
    let primary = pair(record.grade_gs_from, record.grade_gs_to);
    let secondary = pair(record.grade_vgs_from, record.grade_vgs_to);

    let mut lowest = primary.map(|(from, _)| from);
    let mut highest = primary.map(|(_, to)| to);
    if let Some((from, to)) = secondary {
        lowest = lowest.or(Some(from));
        highest = Some(to);
    }
    lowest.zip(highest)
}

fn pair(from: Option<u32>, to: Option<u32>) -> Option<(u32, u32)> {
    from.filter(|grade| *grade > 0)
        .zip(to.filter(|grade| *grade > 0))
}

#[must_use]
pub fn grades_value(from: u32, to: u32) -> String {
    if from == to {
        from.to_string()
    } else {
        format!("{from}-{to}")
    }
}

/// ISCED levels as a `;`-separated list. Without a usable grade span the
/// education flags decide; the result may be empty.
#[must_use]
pub fn isced_level(span: Option<(u32, u32)>, primary: bool, secondary: bool) -> String {
    let mut levels = Vec::new();
    if let Some((from, to)) = span {
        if from <= 7 {
            levels.push("1");
        }
        if from <= 10 && to >= 8 {
            levels.push("2");
        }
        if from >= 11 || to >= 11 {
            levels.push("3");
        }
    }
    if levels.is_empty() {
        if primary {
            levels.extend(["1", "2"]);
        }
        if secondary {
            levels.push("3");
        }
    }
    levels.join(";")
}

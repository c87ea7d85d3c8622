use std::{fs, path::PathBuf};

use school2osm_core::builder::{FailurePolicy, convert_records};
use school2osm_core::models::SchoolRecord;
use school2osm_core::osm::{Document, Node, TagMap};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("school_records.json")
}

fn load_records() -> Vec<SchoolRecord> {
    let raw = fs::read_to_string(fixture_path()).expect("read school records fixture");
    serde_json::from_str(&raw).expect("parse school records fixture")
}

fn node_by_ref<'a>(document: &'a Document, org_num: &str) -> &'a Node {
    document
        .nodes()
        .find(|node| node.tags.get("ref:udir_nsr") == Some(org_num))
        .unwrap_or_else(|| panic!("missing node for {org_num}"))
}

fn pairs(tags: &TagMap) -> Vec<(String, String)> {
    tags.iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[test]
fn reject_policy_converts_fixture_and_reports_bad_record() {
    let records = load_records();
    let mut document = Document::default();
    let report = convert_records(&records, &mut document, FailurePolicy::Reject);

    assert_eq!(report.processed, 4);
    assert_eq!(report.written, 3);
    assert_eq!(report.geocode_needed, 1);
    assert_eq!(report.rejected.len(), 1);
    let rejected = &report.rejected[0];
    assert_eq!(rejected.org_num, "998877665");
    assert_eq!(rejected.name, "Nordlys Friskole");
    assert_eq!(rejected.rule, "dates");
}

#[test]
fn upper_secondary_school_gets_full_tag_set_in_rule_order() {
    let records = load_records();
    let mut document = Document::default();
    convert_records(&records, &mut document, FailurePolicy::Reject);

    let node = node_by_ref(&document, "974600951");
    assert_eq!(node.id, -1001);
    assert_eq!((node.lat, node.lon), (Some(60.3941), Some(5.3266)));
    assert_eq!(
        pairs(&node.tags),
        owned(&[
            ("amenity", "school"),
            ("ref:udir_nsr", "974600951"),
            ("name", "Bergen Katedralskole videregående skole"),
            ("ORIGINAL_NAME", "Bergen Katedralskole Vgs"),
            ("email", "post@bergenkat.no"),
            ("website", "https://bergenkat.no"),
            ("phone", "+47 55 33 64 00"),
            ("capacity", "812"),
            ("grades", "11-13"),
            ("isced:level", "3"),
            ("operator:type", "public"),
            ("fee", "no"),
            ("operator", "Vestland Fylkeskommune"),
            ("DATE_CREATED", "1995-02-20"),
            ("DATE_UPDATED", "2024-01-15"),
            ("MUNICIPALITY", "Bergen"),
            ("COUNTY", "Vestland"),
            ("LANGUAGE", "Bokmål"),
            (
                "ENTITY_CODES",
                "1.Videregående opplæring i allmennfaglige studieretninger"
            ),
            ("SCHOOL_CODES", "Videregående skole"),
            ("LOCATION_SOURCE", "Kartverket"),
            ("ADDRESS", "Kong Oscars gate 36, 5017 BERGEN"),
        ])
    );
}

#[test]
fn private_primary_school_without_position_needs_geocoding() {
    let records = load_records();
    let mut document = Document::default();
    convert_records(&records, &mut document, FailurePolicy::Reject);

    let node = node_by_ref(&document, "971234567");
    let tags = &node.tags;
    assert_eq!((node.lat, node.lon), (Some(0.0), Some(0.0)));
    assert_eq!(tags.get("name"), Some("Kvaløy skole"));
    assert_eq!(tags.get("ORIGINAL_NAME"), Some("KVALØY SKOLE, AVD SKOLE"));
    assert_eq!(tags.get("website"), Some("https://kvaloy.no/skole"));
    assert_eq!(tags.get("phone"), Some("+47 77 60 00 00"));
    assert_eq!(tags.get("grades"), Some("1-7"));
    assert_eq!(tags.get("isced:level"), Some("1"));
    assert_eq!(tags.get("operator:type"), Some("private"));
    assert_eq!(tags.get("fee"), Some("yes"));
    assert_eq!(tags.get("ADDRESS"), Some("9100 Kvaløysletta"));
    assert_eq!(tags.get("GEOCODE"), Some("yes"));
    assert!(!tags.contains_key("email"));
    assert!(!tags.contains_key("operator"));
    assert!(!tags.contains_key("LOCATION_SOURCE"));
}

#[test]
fn special_school_tags_and_owner_resolution() {
    let records = load_records();
    let mut document = Document::default();
    convert_records(&records, &mut document, FailurePolicy::Reject);

    let tags = &node_by_ref(&document, "912345678").tags;
    assert_eq!(tags.get("name"), Some("Syn & Hørsel skole, \"Nord\""));
    assert_eq!(tags.get("DEPARTMENT"), Some("Avd \"Nord\""));
    assert_eq!(tags.get("operator"), Some("Statped OKS"));
    assert_eq!(tags.get("OTHER_SERVICES"), Some("yes"));
    assert_eq!(tags.get("SPECIAL_NEEDS"), Some("Spesialskole"));
    assert_eq!(tags.get("isced:level"), Some("1;2"));
    assert_eq!(tags.get("SCHOOL_CODES"), Some("Barneskole; Ungdomsskole"));
    assert_eq!(tags.get("DATE_CREATED"), Some("2010-06-01"));
    assert!(!tags.contains_key("capacity"));
    assert!(!tags.contains_key("grades"));
}

#[test]
fn best_effort_policy_keeps_every_record() {
    let records = load_records();
    let mut document = Document::default();
    let report = convert_records(&records, &mut document, FailurePolicy::BestEffort);

    assert_eq!(report.written, 4);
    assert!(report.rejected.is_empty());
    let tags = &node_by_ref(&document, "998877665").tags;
    assert_eq!(tags.get("name"), Some("Nordlys friskole"));
    assert!(!tags.contains_key("DATE_UPDATED"));
}

#[test]
fn serialized_document_escapes_every_tag_once() {
    let records = load_records();
    let mut document = Document::default();
    convert_records(&records, &mut document, FailurePolicy::Reject);
    let xml = document.to_xml_string().expect("serialize document");

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<osm version=\"0.6\""));
    assert!(xml.ends_with("</osm>\n"));
    assert!(xml.contains(r#"  <node id="-1001" lat="60.3941" lon="5.3266">"#));
    assert!(xml.contains(r#"  <node id="-1002" lat="0" lon="0">"#));
    assert!(xml.contains(r#"    <tag k="name" v="Syn &amp; Hørsel skole, &quot;Nord&quot;" />"#));
    assert!(!xml.contains("998877665"));

    for node in document.nodes() {
        for (key, value) in node.tags.iter() {
            let line = format!(
                r#"<tag k="{}" v="{}" />"#,
                school2osm_core::osm::escape(key),
                school2osm_core::osm::escape(value).trim()
            );
            if key == "amenity" || key == "isced:level" || key == "fee" || key == "operator:type" {
                continue;
            }
            assert_eq!(xml.matches(&line).count(), 1, "tag line {line}");
        }
    }
}

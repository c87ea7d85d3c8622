use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use school2osm_core::models::SchoolRecord;
use school2osm_core::osm::Document;
use school2osm_core::registry::RegistryClient;
use school2osm_core::{
    ConversionReport, CoreError, RejectedRecord, convert_records, decode_record, normalize_name,
};
use serde::Serialize;

use crate::cli::{Cli, Commands, ConvertArgs, NameArgs};
use crate::config::AppConfig;

mod support;


use self::support::{print_json, progress_bar};

/// Records that deserialized, plus the ones that did not.
#[derive(Debug, Default)]
pub(crate) struct LoadedRecords {
    pub(crate) records: Vec<SchoolRecord>,
    pub(crate) unparsed: Vec<RejectedRecord>,
}

impl LoadedRecords {
    fn reject(&mut self, rejected: RejectedRecord) {
        warn!("{rejected}");
        self.unparsed.push(rejected);
    }
}

#[derive(Debug, Serialize)]
struct ConvertSummary {
    output: PathBuf,
    processed: usize,
    written: usize,
    geocode_needed: usize,
    rejected: Vec<RejectedRecord>,
}

impl ConvertSummary {
    fn new(output: &Path, report: ConversionReport) -> Self {
        Self {
            output: output.to_path_buf(),
            processed: report.processed,
            written: report.written,
            geocode_needed: report.geocode_needed,
            rejected: report.rejected,
        }
    }
}

pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => {
            let config = AppConfig::load(&cli.global)?;
            run_convert(&config, &args)
        }
        Commands::Name(args) => run_name(&args),
    }
}

fn run_convert(config: &AppConfig, args: &ConvertArgs) -> Result<()> {
    let loaded = match &args.input {
        Some(path) => read_records(path)?,
        None => fetch_records(config)?,
    };

    let mut document = Document::default();
    let mut report = convert_records(&loaded.records, &mut document, config.policy);
    report.add_rejected(loaded.unparsed);
    write_document(&document, &args.output)?;
    info!("wrote {} nodes to {}", document.len(), args.output.display());

    print_json(&ConvertSummary::new(&args.output, report))
}

fn run_name(args: &NameArgs) -> Result<()> {
    let normalized = normalize_name(&args.name, args.characteristic.as_deref());
    print_json(&normalized)
}

/// Reads a JSON array of records. A file that is not an array fails the run;
/// an entry that does not deserialize is rejected on its own.
pub(crate) fn read_records(path: &Path) -> Result<LoadedRecords> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse records from {}", path.display()))?;

    let mut loaded = LoadedRecords::default();
    for entry in entries {
        match decode_record(entry) {
            Ok(record) => loaded.records.push(record),
            Err(rejected) => loaded.reject(rejected),
        }
    }
    Ok(loaded)
}

fn fetch_records(config: &AppConfig) -> Result<LoadedRecords> {
    let client = RegistryClient::new(config.registry_config())
        .context("failed to create registry client")?;
    let units = client
        .relevant_units()
        .context("failed to load school listing")?;
    info!("{} active schools in listing", units.len());

    let progress = progress_bar(units.len() as u64, "fetching school details")?;
    let mut loaded = LoadedRecords::default();
    for unit in &units {
        progress.set_message(unit.name.clone());
        match client.unit_details(&unit.org_num) {
            Ok(record) => loaded.records.push(record),
            Err(err @ CoreError::Json(_)) => {
                loaded.reject(RejectedRecord::unparsed(&unit.org_num, &unit.name, &err));
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to fetch details for {}", unit.org_num));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(loaded)
}

pub(crate) fn write_document(document: &Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    document
        .write_xml(&mut out)
        .with_context(|| format!("failed to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

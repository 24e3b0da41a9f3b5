//! Batch intake - feed items to a ledger from CSV or JSON

use crate::ledger::Ledger;
use anyhow::Context;
use booker_derive::CsvSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Column description generated by `#[derive(CsvSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// JSON input root
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ItemsInput {
    pub items: Vec<ItemRecord>,
}

/// One item as it appears in an input file, before validation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, CsvSchema)]
pub struct ItemRecord {
    /// Item name, must not be blank
    pub name: String,
    /// Base price in GBP excluding VAT, as text (e.g. "1.00")
    pub price: String,
    /// Whether 20% VAT applies (defaults to true)
    #[serde(default)]
    pub has_vat: Option<bool>,
}

/// Read items from a file (or stdin with "-") into a fresh ledger
pub fn read_items(path: &Path) -> anyhow::Result<Ledger> {
    let records = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        read_from_file(path).with_context(|| format!("reading {}", path.display()))?
    };
    let ledger = to_ledger(records)?;
    log::info!("Loaded {} items", ledger.len());
    Ok(ledger)
}

/// Validate records in order; the first invalid record aborts the load
pub fn to_ledger(records: Vec<ItemRecord>) -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::new();
    for (i, record) in records.iter().enumerate() {
        ledger
            .add_item(&record.name, &record.price, record.has_vat.unwrap_or(true))
            .with_context(|| format!("record {}", i + 1))?;
    }
    Ok(ledger)
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<ItemRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => read_json(reader),
        // Default to CSV for .csv files and any other extension
        _ => read_csv(reader),
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<ItemRecord>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    if looks_like_json(&buffer) {
        read_json(buffer.as_slice())
    } else {
        read_csv(buffer.as_slice())
    }
}

fn looks_like_json(buffer: &[u8]) -> bool {
    buffer
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{')
}

/// Read item records from CSV
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<ItemRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records: Result<Vec<ItemRecord>, _> = rdr.deserialize::<ItemRecord>().collect();
    Ok(records?)
}

/// Read item records from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<ItemRecord>> {
    let input: ItemsInput = serde_json::from_reader(reader)?;
    Ok(input.items)
}

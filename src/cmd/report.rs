//! Report command - load a batch of items and show the priced list and total

use crate::input::read_items;
use crate::ledger::{format_gbp, format_total, round_money, Item, Ledger};
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// CSV or JSON file containing items ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output as JSON instead of a formatted table
    #[arg(long, conflicts_with_all = ["csv", "export"])]
    json: bool,

    /// Output as CSV instead of a formatted table
    #[arg(long, conflicts_with = "export")]
    csv: bool,

    /// Print only the share/export text
    #[arg(long)]
    export: bool,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let ledger = read_items(&self.input)?;
        let rows = build_rows(&ledger);

        if self.json {
            self.print_json(&ledger, rows)
        } else if self.csv {
            self.write_csv(&rows)
        } else if self.export {
            println!("{}", ledger.export_summary());
            Ok(())
        } else {
            self.print_table(&ledger, &rows);
            Ok(())
        }
    }

    fn print_table(&self, ledger: &Ledger, rows: &[ItemRow]) {
        if rows.is_empty() {
            println!("No items");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
        println!("{}", format_total(ledger.total_price()));
    }

    fn write_csv(&self, rows: &[ItemRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn print_json(&self, ledger: &Ledger, rows: Vec<ItemRow>) -> anyhow::Result<()> {
        let output = ReportOutput {
            item_count: rows.len(),
            items: rows,
            total_gbp: format!("{:.2}", round_money(ledger.total_price())),
            export: ledger.export_summary(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

/// Row for the items table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ItemRow {
    #[tabled(rename = "#")]
    pub position: usize,

    #[tabled(rename = "Item")]
    pub name: String,

    #[tabled(rename = "Price")]
    pub price: String,

    #[tabled(rename = "VAT")]
    pub vat: String,

    #[tabled(rename = "Effective")]
    pub effective: String,
}

impl ItemRow {
    fn new(index: usize, item: &Item) -> Self {
        ItemRow {
            position: index + 1,
            name: item.name().to_string(),
            price: format_gbp(item.price()),
            vat: if item.has_vat() { "incl." } else { "excl." }.to_string(),
            effective: format_gbp(item.effective_price()),
        }
    }
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ReportOutput {
    item_count: usize,
    items: Vec<ItemRow>,
    total_gbp: String,
    export: String,
}

fn build_rows(ledger: &Ledger) -> Vec<ItemRow> {
    ledger
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow::new(index, item))
        .collect()
}

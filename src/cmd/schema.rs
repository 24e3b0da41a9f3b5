//! Schema command - print expected input formats

use crate::input::{ItemRecord, ItemsInput};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => {
                println!("{}", ItemRecord::csv_header());
                Ok(())
            }
            SchemaFormat::CsvFields => {
                self.print_csv_fields();
                Ok(())
            }
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ItemsInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_fields(&self) {
        println!("CSV Input Format");
        println!("================");
        println!();
        for field in ItemRecord::csv_schema() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:10} ({:8})  {}", field.name, req, field.description);
        }
        println!();
        println!("Prices are GBP; VAT is a flat 20% on items with has_vat = true");
    }
}

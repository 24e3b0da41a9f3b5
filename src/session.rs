//! Session controller - owns the ledger and answers the presentation layer

use crate::ledger::{Item, Ledger, LedgerError};
use rust_decimal::Decimal;

/// A rendered list row: 1-based position and its display line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub position: usize,
    pub line: String,
}

/// State for one interactive session. Dropped (not saved) when the session ends.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Data-entry intake for the add form
    pub fn submit(&mut self, name: &str, price: &str, has_vat: bool) -> Result<Item, LedgerError> {
        self.ledger.add_item(name, price, has_vat)
    }

    /// Delete the row at 1-based `position`
    pub fn remove(&mut self, position: usize) -> Result<Item, LedgerError> {
        let index = position
            .checked_sub(1)
            .ok_or(LedgerError::IndexOutOfRange {
                index: 0,
                len: self.ledger.len(),
            })?;
        self.ledger.remove_item(index)
    }

    pub fn rows(&self) -> Vec<Row> {
        self.ledger
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| Row {
                position: index + 1,
                line: item.format_line(index),
            })
            .collect()
    }

    /// Running total, hidden while the ledger is empty
    pub fn total(&self) -> Option<Decimal> {
        (!self.ledger.is_empty()).then(|| self.ledger.total_price())
    }

    /// Share payload, unavailable while the ledger is empty
    pub fn export(&self) -> Option<String> {
        (!self.ledger.is_empty()).then(|| self.ledger.export_summary())
    }
}

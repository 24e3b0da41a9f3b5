pub mod item;
pub mod money;

use rust_decimal::Decimal;

// Flat public surface for domain types and functions.
pub use item::Item;
pub use money::{format_gbp, round_money};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no item at index {index} (ledger has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, in-memory list of the items entered in one session.
///
/// Insertion order is display order; positions shift down after a removal.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    items: Vec<Item>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the input and append a new item. The ledger is untouched on error.
    pub fn add_item(
        &mut self,
        name: &str,
        price: &str,
        has_vat: bool,
    ) -> Result<Item, LedgerError> {
        let item = Item::from_input(name, price, has_vat)?;
        if self.total_price().checked_add(item.effective_price()).is_none() {
            return Err(LedgerError::InvalidInput(format!(
                "price '{}' would overflow the total",
                item.price()
            )));
        }
        log::debug!(
            "Ledger ADD #{}: {} price={} vat={}",
            self.items.len() + 1,
            item.name(),
            item.price(),
            item.has_vat()
        );
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove and return the item at 0-based `index`
    pub fn remove_item(&mut self, index: usize) -> Result<Item, LedgerError> {
        if index >= self.items.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        log::debug!(
            "Ledger REMOVE #{}: {}. Remaining: {}",
            index + 1,
            item.name(),
            self.items.len()
        );
        Ok(item)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of effective prices; zero when empty
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(Item::effective_price).sum()
    }

    /// One `name - £price` line per item, VAT-inclusive where the item carries VAT
    pub fn export_summary(&self) -> String {
        self.items
            .iter()
            .map(Item::export_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Display the running total, e.g. `Total Price: £2.20`
pub fn format_total(total: Decimal) -> String {
    format!("Total Price: {}", format_gbp(total))
}

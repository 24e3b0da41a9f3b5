use super::money::format_gbp;
use super::LedgerError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Flat VAT rate applied to items flagged as VAT-able (20%).
pub const VAT_RATE: Decimal = dec!(0.20);

/// One priced entry in the ledger.
///
/// Name, price and VAT flag are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    /// Base price in GBP as entered, excluding VAT
    price: Decimal,
    has_vat: bool,
}

impl Item {
    /// Validate raw form input and build an item.
    ///
    /// The name must contain something other than whitespace and is stored trimmed.
    /// The price must parse as a non-negative decimal.
    pub fn from_input(name: &str, price: &str, has_vat: bool) -> Result<Item, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput("item name is empty".to_string()));
        }
        let price = parse_price(price)?;
        if has_vat && price.checked_mul(Decimal::ONE + VAT_RATE).is_none() {
            return Err(LedgerError::InvalidInput(format!(
                "price '{price}' is too large to add VAT"
            )));
        }
        Ok(Item {
            name: name.to_string(),
            price,
            has_vat,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn has_vat(&self) -> bool {
        self.has_vat
    }

    /// Price with VAT added when the item carries VAT, otherwise the base price
    pub fn price_with_vat(&self) -> Decimal {
        if self.has_vat {
            self.price * (Decimal::ONE + VAT_RATE)
        } else {
            self.price
        }
    }

    /// The amount this item contributes to the ledger total
    pub fn effective_price(&self) -> Decimal {
        if self.has_vat {
            self.price_with_vat()
        } else {
            self.price
        }
    }

    /// Display line for the item at 0-based `index`, e.g. `2. Milk - £1.20 (incl. VAT)`
    pub fn format_line(&self, index: usize) -> String {
        let price = if self.has_vat {
            format!("{} (incl. VAT)", format_gbp(self.price_with_vat()))
        } else {
            format!("{} (excl. VAT)", format_gbp(self.price))
        };
        format!("{}. {} - {}", index + 1, self.name, price)
    }

    /// Export line, e.g. `Milk - £1.20`
    pub fn export_line(&self) -> String {
        format!("{} - {}", self.name, format_gbp(self.price_with_vat()))
    }
}

fn parse_price(input: &str) -> Result<Decimal, LedgerError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LedgerError::InvalidInput("item price is empty".to_string()));
    }
    // Plain decimal notation only: no exponents or digit separators
    let digits = input.strip_prefix(['-', '+']).unwrap_or(input);
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(LedgerError::InvalidInput(format!(
            "price '{input}' is not a number"
        )));
    }
    let price = Decimal::from_str(input)
        .map_err(|_| LedgerError::InvalidInput(format!("price '{input}' is not a number")))?;
    if price < Decimal::ZERO {
        return Err(LedgerError::InvalidInput(format!(
            "price '{input}' is negative"
        )));
    }
    // "-0" parses as negative zero
    Ok(price.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: Decimal, has_vat: bool) -> Item {
        Item {
            name: "Milk".to_string(),
            price,
            has_vat,
        }
    }

    #[test]
    fn vat_added_only_when_flagged() {
        assert_eq!(item(dec!(1.00), true).price_with_vat(), dec!(1.20));
        assert_eq!(item(dec!(1.00), false).price_with_vat(), dec!(1.00));
        assert_eq!(item(dec!(12.50), true).price_with_vat(), dec!(15.00));
    }

    #[test]
    fn effective_price_follows_flag() {
        assert_eq!(item(dec!(2.50), true).effective_price(), dec!(3.00));
        assert_eq!(item(dec!(2.50), false).effective_price(), dec!(2.50));
    }

    #[test]
    fn price_is_kept_as_entered() {
        let item = Item::from_input("Tea", "3.333", true).unwrap();
        assert_eq!(item.price(), dec!(3.333));
        assert_eq!(item.price_with_vat(), dec!(3.9996));
    }

    #[test]
    fn name_is_trimmed() {
        let item = Item::from_input("  Bread \n", " 1.00 ", false).unwrap();
        assert_eq!(item.name(), "Bread");
        assert_eq!(item.price(), dec!(1.00));
        assert!(!item.has_vat());
    }

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            Item::from_input("", "1.00", true),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(matches!(
            Item::from_input("   ", "1.00", true),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_bad_prices() {
        for price in ["", "  ", "abc", "1.2.3", "-0.01", "£1", "1e3", "1_000", "+-1"] {
            assert!(
                matches!(
                    Item::from_input("Eggs", price, true),
                    Err(LedgerError::InvalidInput(_))
                ),
                "accepted {price:?}"
            );
        }
    }

    #[test]
    fn rejects_price_that_overflows_with_vat() {
        assert!(matches!(
            Item::from_input("Yacht", "79228162514264337593543950335", true),
            Err(LedgerError::InvalidInput(_))
        ));
        let item = Item::from_input("Yacht", "79228162514264337593543950335", false).unwrap();
        assert_eq!(item.effective_price(), Decimal::MAX);
    }

    #[test]
    fn zero_price_is_allowed() {
        let item = Item::from_input("Freebie", "0", true).unwrap();
        assert_eq!(item.effective_price(), Decimal::ZERO);
    }

    #[test]
    fn display_lines() {
        assert_eq!(
            item(dec!(1), true).format_line(1),
            "2. Milk - £1.20 (incl. VAT)"
        );
        assert_eq!(
            item(dec!(1), false).format_line(0),
            "1. Milk - £1.00 (excl. VAT)"
        );
        assert_eq!(item(dec!(1), true).export_line(), "Milk - £1.20");
        assert_eq!(item(dec!(1), false).export_line(), "Milk - £1.00");
    }
}

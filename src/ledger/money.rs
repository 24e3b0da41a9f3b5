use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol for every displayed amount. Prices are always GBP.
pub const GBP_SYMBOL: &str = "\u{00A3}";

/// Round an amount for display: 2 decimal places, half-up.
///
/// Calculations stay unrounded; only the display paths call this.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Display an amount as `£1.20`
pub fn format_gbp(amount: Decimal) -> String {
    format!("{}{:.2}", GBP_SYMBOL, round_money(amount))
}

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places the gateway expects in `total` and line item prices
pub const FORM_AMOUNT_SCALE: u32 = 2;

/// Formats a decimal amount the way the checkout form expects it
///
/// Always two fractional digits, no currency symbol: `5` -> `"5.00"`.
/// Midpoints round away from zero.
pub fn format_form_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(FORM_AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.width$}", rounded, width = FORM_AMOUNT_SCALE as usize)
}

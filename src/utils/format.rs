//! Formatting helpers for dates, amounts, and tenant messages

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;

/// Format a date the way the dashboard shows it, e.g. "02 Mar 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format an optional date, rendering "N/A" for absent ones
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format_date(date),
        None => "N/A".to_string(),
    }
}

/// Format an amount with the currency symbol and two decimal places
pub fn format_amount(amount: &BigDecimal, symbol: &str) -> String {
    format!("{}{}", symbol, amount.with_scale_round(2, RoundingMode::HalfUp))
}

/// Compose the rent reminder message for a tenant
pub fn reminder_message(
    name: &str,
    rent_amount: &BigDecimal,
    due_date: NaiveDate,
    symbol: &str,
) -> String {
    format!(
        "Dear {},\n\nThis is a friendly reminder that your rent payment of {} is due on {}.\n\nPlease make your payment at your earliest convenience.\n\nThank you,\nLandlord",
        name,
        format_amount(rent_amount, symbol),
        format_date(due_date)
    )
}

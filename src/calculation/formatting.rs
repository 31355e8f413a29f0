//! Number and date formatting for printed reports.

use chrono::{Datelike, NaiveDate};
use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

fn to_centavos(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a money amount with thousands separators and two decimals.
///
/// Uses the en locale (`1,234.50`) regardless of the host locale.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(123450, 2)), "1,234.50");
/// assert_eq!(format_money(Decimal::new(-5, 1)), "-0.50");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = to_centavos(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let magnitude = rounded.abs();

    let whole = magnitude.trunc().to_u128().unwrap_or_default();
    let centavos = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();

    format!(
        "{}{}.{:02}",
        sign,
        whole.to_formatted_string(&Locale::en),
        centavos
    )
}

/// Formats an amount with two decimals and no separators.
///
/// Rounds the same way as [`format_money`], so a plain cell and a printed
/// amount never disagree on the last centavo.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::format_plain;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_plain(Decimal::new(100125, 3)), "100.13");
/// assert_eq!(format_plain(Decimal::new(123450, 2)), "1234.50");
/// ```
pub fn format_plain(amount: Decimal) -> String {
    format!("{:.2}", to_centavos(amount))
}

/// Formats days or hours with two decimals and no separators.
pub fn format_hours(value: Decimal) -> String {
    format_plain(value)
}

/// Formats a date as `January 5, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a coverage range as compactly as the two dates allow.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::format_coverage;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(format_coverage(from, to), "January 1 - 15, 2024");
/// ```
pub fn format_coverage(from: NaiveDate, to: NaiveDate) -> String {
    if from.year() != to.year() {
        return format!("{} - {}", format_long_date(from), format_long_date(to));
    }
    if from.month() == to.month() {
        format!(
            "{} {} - {}, {}",
            from.format("%B"),
            from.day(),
            to.day(),
            to.year()
        )
    } else {
        format!(
            "{} {} - {} {}, {}",
            from.format("%B"),
            from.day(),
            to.format("%B"),
            to.day(),
            to.year()
        )
    }
}

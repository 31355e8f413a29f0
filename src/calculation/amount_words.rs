//! Amount-in-words conversion for payslip acknowledgements.
//!
//! Produces the check-style wording printed under the net pay, e.g.
//! `ONE THOUSAND FIVE HUNDRED AND 05/100`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

const UNITS: [&str; 20] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ELEVEN",
    "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN", "SEVENTEEN", "EIGHTEEN", "NINETEEN",
];

const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Scale words for each three-digit group, least significant first.
const SCALES: [&str; 3] = ["", "THOUSAND", "MILLION"];

/// Largest whole amount the scale table can spell out, exclusive.
pub const WORDS_LIMIT: u64 = 1_000_000_000;

/// Converts an amount into uppercase English words.
///
/// The amount is rounded half away from zero to centavos. The whole part is
/// spelled out and the centavos follow as `AND <ff>/100`. A whole part of zero
/// yields `ZERO` with no centavo suffix, so `0.50` also reads `ZERO`.
///
/// # Errors
///
/// Returns [`EngineError::AmountOutOfRange`] for negative amounts and for
/// amounts of one billion or more.
///
/// # Examples
///
/// ```
/// use payroll_reports::calculation::amount_to_words;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let words = amount_to_words(Decimal::from_str("1500.05").unwrap()).unwrap();
/// assert_eq!(words, "ONE THOUSAND FIVE HUNDRED AND 05/100");
///
/// assert_eq!(amount_to_words(Decimal::ZERO).unwrap(), "ZERO");
/// ```
pub fn amount_to_words(amount: Decimal) -> EngineResult<String> {
    if amount < Decimal::ZERO {
        return Err(EngineError::AmountOutOfRange { amount });
    }

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc();
    let out_of_range = || EngineError::AmountOutOfRange { amount };

    let whole = whole.to_u64().ok_or_else(out_of_range)?;
    if whole >= WORDS_LIMIT {
        return Err(out_of_range());
    }
    let centavos = ((rounded.fract()) * Decimal::ONE_HUNDRED)
        .to_u32()
        .ok_or_else(out_of_range)?;

    if whole == 0 {
        return Ok("ZERO".to_string());
    }

    let mut groups: Vec<String> = Vec::new();
    let mut remaining = whole;
    for scale in SCALES {
        let group = (remaining % 1000) as usize;
        if group > 0 {
            let words = group_to_words(group);
            if scale.is_empty() {
                groups.push(words);
            } else {
                groups.push(format!("{} {}", words, scale));
            }
        }
        remaining /= 1000;
    }
    groups.reverse();

    Ok(format!("{} AND {:02}/100", groups.join(" ").trim(), centavos))
}

/// Spells out 1..=999.
fn group_to_words(group: usize) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4);

    let hundreds = group / 100;
    let rest = group % 100;

    if hundreds > 0 {
        parts.push(UNITS[hundreds]);
        parts.push("HUNDRED");
    }
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(UNITS[rest % 10]);
        }
    } else if rest > 0 {
        parts.push(UNITS[rest]);
    }

    parts.join(" ")
}

//! Amounts as they appear in data files.
//!
//! Older files hold whatever a default-formatted double printed: six
//! significant digits, sometimes in exponent form (`1.5e+06`, `0.333333`).
//! Those are rounded half away from zero to whole cents. Interactive input
//! keeps the strict `MoneyCents` parser.

use std::str::FromStr;

use engine::{EngineError, MoneyCents, ResultEngine};
use rust_decimal::{Decimal, RoundingStrategy};

pub fn parse_file_amount(text: &str) -> ResultEngine<MoneyCents> {
    let text = text.trim();
    let invalid = || EngineError::InvalidAmount(format!("\"{text}\" is not a number"));

    let value = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    }
    .map_err(|_| invalid())?;

    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let cents = i64::try_from(rounded.mantissa())
        .map_err(|_| EngineError::InvalidAmount("amount too large".to_string()))?;

    Ok(MoneyCents::new(cents))
}

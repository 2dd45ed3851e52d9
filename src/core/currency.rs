//! Canadian dollar rounding, formatting and parsing.
//!
//! Every monetary value in the tax service is a `Decimal` at cent scale.
//! `round_cents` is the one rounding rule used across the crate (half away
//! from zero), so a tax component, an echoed subtotal and a formatted
//! amount never disagree by a cent.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Number of fractional digits for CAD amounts
pub const CENT_SCALE: u32 = 2;

/// Rounds to cents, half away from zero, and pads to exactly two decimals
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CENT_SCALE);
    rounded
}

/// Formats an amount the way the en-CA locale displays CAD.
///
/// `1234.5` becomes `"$1,234.50"`, `-42` becomes `"-$42.00"`.
pub fn format_cad(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        cents
    )
}

/// Parses the output of [`format_cad`] (or a plain decimal) back to an amount.
///
/// Accepts an optional leading `-`, an optional `$`, comma grouping in
/// threes and at most two fractional digits.
pub fn parse_cad(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);

    let (whole, fraction) = match rest.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rest, None),
    };

    if !is_valid_whole(whole) {
        return Err(AppError::validation(format!(
            "Invalid CAD amount: {:?}",
            input
        )));
    }

    if let Some(fraction) = fraction {
        let digits_ok = fraction.chars().all(|c| c.is_ascii_digit());
        if fraction.is_empty() || fraction.len() > CENT_SCALE as usize || !digits_ok {
            return Err(AppError::validation(format!(
                "CAD amounts must have one or two fractional digits, got {:?}",
                input
            )));
        }
    }

    let plain = format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        whole.replace(',', ""),
        fraction.map(|f| format!(".{}", f)).unwrap_or_default()
    );

    Decimal::from_str(&plain)
        .map(round_cents)
        .map_err(|e| AppError::validation(format!("Invalid CAD amount {:?}: {}", input, e)))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn is_valid_whole(whole: &str) -> bool {
    if whole.is_empty() {
        return false;
    }

    let mut groups = whole.split(',');
    let first = groups.next().unwrap_or_default();
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    if !whole.contains(',') {
        return all_digits(first);
    }

    first.len() <= 3 && all_digits(first) && groups.all(|g| g.len() == 3 && all_digits(g))
}

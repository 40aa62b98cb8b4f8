//! KES money formatting and parsing.

use crate::error::{Result, ServiceError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// The marketplace bills in a single currency.
pub const CURRENCY_CODE: &str = "KES";

/// A monetary value in [`CURRENCY_CODE`].
pub type Money = Decimal;

/// Display options for [`CurrencyFormatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Printed before the number, separated by a space.
    pub label: String,
    /// Number of digits after the decimal point (always printed, zero padded).
    pub fraction_digits: u32,
    /// Insert `,` every three integer digits.
    pub use_grouping: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            label: CURRENCY_CODE.to_string(),
            fraction_digits: 2,
            use_grouping: true,
        }
    }
}

/// Formats amounts as `KES 1,234.56` and reads them back.
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    options: FormatOptions,
}

impl CurrencyFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Renders `amount` with the configured label, grouping and precision.
    ///
    /// Midpoints round away from zero. Negative amounts carry a leading `-`
    /// before the label (`-KES 10.00`); an amount that rounds to zero is
    /// always printed unsigned.
    pub fn format(&self, amount: Money) -> String {
        let digits = self.options.fraction_digits;
        let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let mut magnitude = rounded.abs();
        magnitude.rescale(digits);
        let plain = magnitude.to_string();
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut out = String::with_capacity(plain.len() + self.options.label.len() + 8);
        if negative {
            out.push('-');
        }
        if !self.options.label.is_empty() {
            out.push_str(&self.options.label);
            out.push(' ');
        }
        if self.options.use_grouping {
            out.push_str(&group_thousands(int_part));
        } else {
            out.push_str(int_part);
        }
        if digits > 0 {
            // `rescale` keeps a smaller scale when the integer part leaves no room.
            let frac = frac_part.unwrap_or("");
            out.push('.');
            out.push_str(frac);
            for _ in frac.len()..digits as usize {
                out.push('0');
            }
        }
        out
    }

    /// Permissive parse: anything that does not yield a number becomes zero.
    pub fn parse(&self, text: &str) -> Money {
        self.try_parse(text).unwrap_or(Decimal::ZERO)
    }

    /// Strict parse.
    ///
    /// Keeps only digits, `.` and `-`, then reads the longest leading number
    /// from what is left (`"1.2.3"` reads as `1.2`, `"12-3"` as `12`).
    ///
    /// A number whose magnitude exceeds [`Decimal::MAX`] (about 7.9e28) fails
    /// with [`ServiceError::AmountOutOfRange`]. Excess fractional digits are
    /// rounded away rather than rejected.
    pub fn try_parse(&self, text: &str) -> Result<Money> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        let unparsable = || ServiceError::UnparsableAmount {
            input: text.to_string(),
        };

        let numeric = leading_number(&cleaned).ok_or_else(unparsable)?;
        Decimal::from_str(&numeric).map_err(|_| ServiceError::AmountOutOfRange {
            input: text.to_string(),
        })
    }
}

/// Formats with the default KES formatter.
pub fn format_currency(amount: Money) -> String {
    CurrencyFormatter::new().format(amount)
}

/// Parses with the default KES formatter, returning zero on failure.
pub fn parse_currency(text: &str) -> Money {
    CurrencyFormatter::new().parse(text)
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Extracts `-?digits(.digits)?` from the start of `s`, requiring at least one digit.
fn leading_number(s: &str) -> Option<String> {
    let mut chars = s.chars().peekable();

    let negative = chars.peek() == Some(&'-');
    if negative {
        chars.next();
    }

    let mut int_digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        int_digits.push(c);
        chars.next();
    }

    let mut frac_digits = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
            frac_digits.push(c);
            chars.next();
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        out.push('-');
    }
    if int_digits.is_empty() {
        out.push('0');
    } else {
        out.push_str(&int_digits);
    }
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(&frac_digits);
    }
    Some(out)
}

//! Free-text quantity normalization.
//!
//! Quantities are typed by people: `"12 un"`, `"3,5 kg"`, `"1.234,56"`,
//! `"1,234.56"`, plain numbers, or nothing at all. [`normalize`] turns any of
//! them into a finite `f64`, degrading to `0.0` when the value cannot be read.
//!
//! Text pipeline:
//! 1. trim; empty -> 0
//! 2. drop unit text (ASCII / Latin-1 letters, `/`, whitespace)
//! 3. resolve `,` / `.` ambiguity (see [`resolve_separators`])
//! 4. drop anything that is not a digit, `-` or `.`
//! 5. `""`, `"."`, `"-"`, `"-."` -> 0
//! 6. read the leading decimal literal; failure -> 0
//!
//! It does **not**:
//! - convert units (`"3 kg"` and `"3 un"` both read as `3.0`)
//! - apply locale rules beyond the "later separator is the decimal" heuristic

use std::fmt;

use crate::QuantityInput;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Why a quantity degraded to zero.
///
/// Never surfaced to end users; [`normalize`] maps every variant to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// No value at all (null / missing field).
    Absent,
    /// A numeric value that is NaN or infinite, or text that overflowed.
    NonFinite,
    /// Text that was empty after trimming.
    Empty,
    /// Nothing but unit text / separators / signs remained after cleaning.
    NoDigits,
    /// Digits remained but no leading decimal literal could be read.
    Unparseable,
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::Absent => write!(f, "quantity is absent"),
            QuantityError::NonFinite => write!(f, "quantity is not a finite number"),
            QuantityError::Empty => write!(f, "quantity text is empty"),
            QuantityError::NoDigits => write!(f, "quantity text has no digits"),
            QuantityError::Unparseable => {
                write!(f, "quantity text has no leading decimal literal")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Normalize any quantity input into a finite number. Total: never panics,
/// never returns NaN or infinity.
pub fn normalize(value: &QuantityInput) -> f64 {
    try_normalize(value).unwrap_or(0.0)
}

/// Normalize a quantity string. Same rules as [`normalize`] on `Text`.
pub fn normalize_str(s: &str) -> f64 {
    parse_quantity_text(s).unwrap_or(0.0)
}

/// Like [`normalize`], but reports why a value degraded.
///
/// `normalize(x) == try_normalize(x).unwrap_or(0.0)` for every `x`.
pub fn try_normalize(value: &QuantityInput) -> Result<f64, QuantityError> {
    match value {
        QuantityInput::Absent => Err(QuantityError::Absent),
        QuantityInput::Number(n) if n.is_finite() => Ok(*n),
        QuantityInput::Number(_) => Err(QuantityError::NonFinite),
        QuantityInput::Text(s) => parse_quantity_text(s),
    }
}

/// Parse a human-entered quantity string.
pub fn parse_quantity_text(raw: &str) -> Result<f64, QuantityError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(QuantityError::Empty);
    }

    let s = strip_unit_text(s);
    let s = resolve_separators(s);
    let s: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    if matches!(s.as_str(), "" | "." | "-" | "-.") {
        return Err(QuantityError::NoDigits);
    }

    let literal = leading_decimal(&s).ok_or(QuantityError::Unparseable)?;
    let n: f64 = literal.parse().map_err(|_| QuantityError::Unparseable)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(QuantityError::NonFinite)
    }
}

// ---------------------------------------------------------------------------
// Pipeline steps
// ---------------------------------------------------------------------------

/// Letters (ASCII and the Latin-1 block `À`..=`ÿ`), `/`, and whitespace.
fn is_unit_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c) || c == '/' || c.is_whitespace()
}

fn strip_unit_text(s: &str) -> String {
    s.chars().filter(|c| !is_unit_char(*c)).collect()
}

/// Decide which of `,` / `.` is the decimal separator.
///
/// - both present: the one appearing last is the decimal separator.
///   Comma last: drop every dot, then the first comma becomes `.`.
///   Dot last: drop every comma.
/// - only dots, more than one: all are thousands separators.
/// - only commas, more than one: all but the last are thousands separators.
/// - otherwise a lone comma becomes `.`.
///
/// `"1.234,567"` reads as `1234.567`: the rule is positional only.
pub fn resolve_separators(s: String) -> String {
    let commas = s.matches(',').count();
    let dots = s.matches('.').count();

    if commas > 0 && dots > 0 {
        if s.rfind(',') > s.rfind('.') {
            s.replace('.', "").replacen(',', ".", 1)
        } else {
            s.replace(',', "")
        }
    } else if dots > 1 {
        s.replace('.', "")
    } else if commas > 1 {
        match s.rsplit_once(',') {
            Some((head, tail)) => format!("{}.{}", head.replace(',', ""), tail),
            None => s,
        }
    } else {
        s.replacen(',', ".", 1)
    }
}

/// Longest leading `-?digits[.digits]` literal with at least one digit,
/// rewritten into a form `f64::from_str` accepts (`"-.5"` -> `"-0.5"`).
fn leading_decimal(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = bytes.first() == Some(&b'-');
    if negative {
        pos = 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_part = &s[frac_start..frac_end];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        out.push('-');
    }
    out.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    Some(out)
}

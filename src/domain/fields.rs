//! Field validators
//!
//! Pure functions turning the raw text of one field into a typed value or
//! `None`, plus [`FieldReader`], which walks the positional fields of a line
//! and remembers which of them were rejected.
//!
//! Two integer rules can fail hard instead of yielding `None`:
//!
//! - [`strict_int`] rejects anything that is not an integer.
//! - [`gated_int`] first compares the raw text with the range bounds as
//!   strings. Text outside that lexicographic window is simply absent, text
//!   inside it must parse as an integer. `"19x"` sits between `"1950"` and
//!   `"2030"`, so it is an error, while `"abc"` sorts after `"2030"` and is
//!   just absent.

use super::errors::RecordError;
use super::record::RecordKind;
use regex::Regex;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Parses an integer, tolerating surrounding whitespace
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parses the literal boolean tokens `True` and `False`
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}

/// Accepts any text as is
pub fn passthrough(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

/// Keeps the value only if the whole of it matches `pattern`
///
/// Patterns are expected to be anchored with `^...$`.
pub fn matching(raw: &str, pattern: &Regex) -> Option<String> {
    pattern.is_match(raw).then(|| raw.to_string())
}

/// Keeps the value only if it is one of the tokens `E` accepts
pub fn one_of<E: FromStr>(raw: &str) -> Option<E> {
    raw.parse().ok()
}

/// Keeps `value` only if it lies within `range`
pub fn in_range(value: i64, range: &RangeInclusive<i64>) -> Option<i64> {
    range.contains(&value).then_some(value)
}

/// Parses an integer, failing on anything non-numeric
pub fn strict_int(field: &'static str, raw: &str) -> Result<i64, RecordError> {
    parse_int(raw).ok_or_else(|| RecordError::InvalidInteger {
        field,
        value: raw.to_string(),
    })
}

/// Range-checked integer behind a lexicographic gate
pub fn gated_int(
    field: &'static str,
    raw: &str,
    range: &RangeInclusive<i64>,
) -> Result<Option<i64>, RecordError> {
    let low = range.start().to_string();
    let high = range.end().to_string();
    if raw < low.as_str() || raw > high.as_str() {
        return Ok(None);
    }
    let value = strict_int(field, raw)?;
    Ok(in_range(value, range))
}

/// A field whose raw value failed validation and was stored as absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedField {
    /// Field name
    pub field: &'static str,
    /// Raw text as read from the input
    pub raw: String,
}

/// Cursor over the positional fields of one input line
///
/// Each accessor consumes the next field. Rejected values are logged at
/// debug level and collected for [`FieldReader::finish`].
#[derive(Debug)]
pub struct FieldReader<'a> {
    kind: RecordKind,
    values: &'a [&'a str],
    position: usize,
    rejected: Vec<RejectedField>,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader, checking the line carries exactly the fields `kind` needs
    pub fn new(kind: RecordKind, values: &'a [&'a str]) -> Result<Self, RecordError> {
        let expected = kind.field_count();
        if values.len() != expected {
            return Err(RecordError::FieldCount {
                kind,
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            kind,
            values,
            position: 0,
            rejected: Vec::new(),
        })
    }

    fn next_raw(&mut self) -> &'a str {
        // arity was checked in new(); callers read at most field_count() values
        let raw = self.values.get(self.position).copied().unwrap_or_default();
        self.position += 1;
        raw
    }

    fn keep<T>(&mut self, field: &'static str, raw: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            tracing::debug!(
                kind = %self.kind,
                field,
                raw,
                "Field failed validation, stored as absent"
            );
            self.rejected.push(RejectedField {
                field,
                raw: raw.to_string(),
            });
        }
        value
    }

    /// Free text, never rejected
    pub fn text(&mut self) -> String {
        self.next_raw().to_string()
    }

    /// Free text truncated to at most `max_chars` characters
    pub fn truncated_text(&mut self, max_chars: usize) -> String {
        self.next_raw().chars().take(max_chars).collect()
    }

    /// `True` / `False` token
    pub fn flag(&mut self, field: &'static str) -> Option<bool> {
        let raw = self.next_raw();
        let value = parse_bool(raw);
        self.keep(field, raw, value)
    }

    /// Text that must fully match `pattern`
    pub fn pattern(&mut self, field: &'static str, pattern: &Regex) -> Option<String> {
        let raw = self.next_raw();
        let value = matching(raw, pattern);
        self.keep(field, raw, value)
    }

    /// One token out of an enumerated set
    pub fn choice<E: FromStr>(&mut self, field: &'static str) -> Option<E> {
        let raw = self.next_raw();
        let value = one_of(raw);
        self.keep(field, raw, value)
    }

    /// Lenient integer, optionally range-checked; never fails hard
    pub fn int(&mut self, field: &'static str, range: Option<RangeInclusive<i64>>) -> Option<i64> {
        let raw = self.next_raw();
        let value = match range {
            Some(range) => parse_int(raw).and_then(|v| in_range(v, &range)),
            None => parse_int(raw),
        };
        self.keep(field, raw, value)
    }

    /// Integer that must parse; out-of-range values are absent
    pub fn strict_int(
        &mut self,
        field: &'static str,
        range: RangeInclusive<i64>,
    ) -> Result<Option<i64>, RecordError> {
        let raw = self.next_raw();
        let value = in_range(strict_int(field, raw)?, &range);
        Ok(self.keep(field, raw, value))
    }

    /// Integer behind a lexicographic gate, see [`gated_int`]
    pub fn gated_int(
        &mut self,
        field: &'static str,
        range: RangeInclusive<i64>,
    ) -> Result<Option<i64>, RecordError> {
        let raw = self.next_raw();
        let value = gated_int(field, raw, &range)?;
        Ok(self.keep(field, raw, value))
    }

    /// Returns the fields rejected so far
    pub fn finish(self) -> Vec<RejectedField> {
        self.rejected
    }
}

//! Report rendering
//!
//! Records render themselves as labelled lines, one `"\n<label>: <value>"`
//! per field. A field without a value produces no line at all, so a
//! rendered report never shows an absent value.
//!
//! ```
//! use medroster::report::Report;
//!
//! let mut report = Report::new();
//! report.line("Палата", Some(12)).line("Отделение", None::<&str>);
//! assert_eq!(report.finish(), "\nПалата: 12");
//! ```

pub mod export;

use std::fmt::{self, Display, Write};

pub use export::to_json;

/// Free-text marker meaning "nothing found"; such values are not reported
pub const NOT_DETECTED: &str = "Не выявлено";

/// Accumulates report lines
#[derive(Debug, Default, Clone)]
pub struct Report {
    out: String,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for `value`, or nothing if it is absent
    pub fn line<V: Display>(&mut self, label: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            // writing into a String cannot fail
            let _ = write!(self.out, "\n{label}: {value}");
        }
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

/// `да` / `нет` for a known flag, absent otherwise
pub fn yes_no(flag: Option<bool>) -> Option<&'static str> {
    flag.map(|value| if value { "да" } else { "нет" })
}

/// The text, unless it is the [`NOT_DETECTED`] marker
pub fn detected(text: &str) -> Option<&str> {
    (text != NOT_DETECTED).then_some(text)
}

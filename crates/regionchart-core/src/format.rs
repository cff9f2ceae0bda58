// File: crates/regionchart-core/src/format.rs
// Summary: Category label formatting; host date patterns translated to chrono.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::axis::format_plain;
use crate::series::CategoryValue;
use crate::types::DEFAULT_DATE_FORMAT;

/// A host date pattern (`MM/DD/YYYY`, `dd.MM.yyyy HH:mm`, ...) and its
/// chrono equivalent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateFormat {
    pub pattern: String,
    #[serde(skip)]
    strftime: String,
}

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let strftime = translate(&pattern);
        Self { pattern, strftime }
    }

    /// Category column format, or the default pattern when it has none.
    pub fn or_default(pattern: Option<&str>) -> Self {
        match pattern {
            Some(p) if !p.trim().is_empty() => Self::new(p),
            _ => Self::new(DEFAULT_DATE_FORMAT),
        }
    }

    pub fn strftime(&self) -> &str { &self.strftime }

    pub fn format(&self, t: &DateTime<Utc>) -> String {
        t.format(&self.strftime).to_string()
    }

    /// Label of a category key: dates through the pattern, numbers and text
    /// as they are.
    pub fn format_category(&self, value: &CategoryValue) -> String {
        match value {
            CategoryValue::Text(s) => match value.as_datetime() {
                Some(t) => self.format(&t),
                None => s.clone(),
            },
            CategoryValue::Number(n) if !self.is_date_pattern() => format_plain(*n),
            other => match other.as_datetime() {
                Some(t) => self.format(&t),
                None => String::new(),
            },
        }
    }

    /// Whether the pattern contains any date/time field.
    pub fn is_date_pattern(&self) -> bool {
        self.strftime.replace("%%", "").contains('%')
    }
}

impl Default for DateFormat {
    fn default() -> Self { Self::new(DEFAULT_DATE_FORMAT) }
}

fn field(letter: char, run: usize) -> Option<&'static str> {
    let f = match (letter, run) {
        ('y' | 'Y', 1..=2) => "%y",
        ('y' | 'Y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d' | 'D', 1) => "%-d",
        ('d' | 'D', 2) => "%d",
        ('d' | 'D', 3) => "%a",
        ('d' | 'D', _) => "%A",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('t', _) => "%p",
        ('f' | 'F', _) => "%3f",
        _ => return None,
    };
    Some(f)
}

/// Translate a host pattern into a chrono format string. Quoted text and
/// backslash-escaped characters pass through literally.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                let end = chars[i + 1..].iter().position(|&q| q == c).map(|p| i + 1 + p).unwrap_or(chars.len());
                for &lit in &chars[i + 1..end] { push_literal(&mut out, lit); }
                i = end + 1;
            }
            '\\' => {
                if let Some(&lit) = chars.get(i + 1) { push_literal(&mut out, lit); }
                i += 2;
            }
            _ => {
                let run = chars[i..].iter().take_while(|&&x| x == c).count();
                match field(c, run) {
                    Some(f) => out.push_str(f),
                    None => (0..run).for_each(|_| push_literal(&mut out, c)),
                }
                i += run;
            }
        }
    }
    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' { out.push_str("%%"); } else { out.push(c); }
}

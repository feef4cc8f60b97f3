//! Display formatting
//!
//! Numbers are grouped either in thousands (`2,850,000`) or in the Indian
//! lakh style (`28,50,000`). Dates use chrono strftime patterns that are
//! checked once, when the format is built.

use crate::error::DisplayError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Default currency prefix
pub const DEFAULT_CURRENCY: &str = "₹";

/// Default calendar-date pattern (`1/15/2024`)
pub const DEFAULT_DATE_PATTERN: &str = "%-m/%-d/%Y";

/// Default timestamp pattern (`1/16/2024, 10:30:00 AM`)
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Digit grouping style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Groups of three
    #[default]
    Thousands,
    /// Last three digits, then groups of two
    Lakh,
}

impl Grouping {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thousands => "thousands",
            Self::Lakh => "lakh",
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grouping {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "thousands" => Ok(Self::Thousands),
            "lakh" => Ok(Self::Lakh),
            _ => Err(DisplayError::UnknownGrouping(s.to_string())),
        }
    }
}

/// Number, currency and percentage rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    grouping: Grouping,
    currency_symbol: String,
}

impl NumberFormat {
    /// Thousands grouping with the default currency symbol
    #[must_use]
    pub fn new() -> Self {
        Self {
            grouping: Grouping::default(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Set grouping style
    #[inline]
    #[must_use]
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set currency prefix
    #[inline]
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Grouping style in use
    #[inline]
    #[must_use]
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Group the digits of `value`
    #[must_use]
    pub fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let len = digits.len();
        if len <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(len - 3);
        let head_group = match self.grouping {
            Grouping::Thousands => 3,
            Grouping::Lakh => 2,
        };

        let mut out = String::with_capacity(len + len / 2);
        let lead = head.len() % head_group;
        for (i, ch) in head.chars().enumerate() {
            if i != 0 && (i + head_group - lead) % head_group == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out.push(',');
        out.push_str(tail);
        out
    }

    /// Grouped value with the currency prefix
    #[must_use]
    pub fn currency(&self, value: u64) -> String {
        format!("{}{}", self.currency_symbol, self.group(value))
    }

    /// Percentage
    #[must_use]
    pub fn percent(&self, value: u8) -> String {
        format!("{value}%")
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar-date and timestamp rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    date_pattern: String,
    timestamp_pattern: String,
}

impl DateFormat {
    /// Build from two strftime patterns
    ///
    /// # Errors
    /// Returns [`DisplayError::InvalidPattern`] if either pattern contains an
    /// unknown specifier or a field its value type does not carry (a time
    /// field in the date pattern)
    pub fn new(
        date_pattern: impl Into<String>,
        timestamp_pattern: impl Into<String>,
    ) -> Result<Self, DisplayError> {
        let date_pattern = date_pattern.into();
        let timestamp_pattern = timestamp_pattern.into();
        let sample_at = DateTime::<Utc>::UNIX_EPOCH;
        check_pattern(
            "date",
            &date_pattern,
            sample_at.date_naive().format(&date_pattern),
        )?;
        check_pattern(
            "timestamp",
            &timestamp_pattern,
            sample_at.format(&timestamp_pattern),
        )?;
        Ok(Self {
            date_pattern,
            timestamp_pattern,
        })
    }

    /// Render a calendar date
    #[must_use]
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_pattern).to_string()
    }

    /// Render a UTC timestamp
    #[must_use]
    pub fn timestamp(&self, at: DateTime<Utc>) -> String {
        at.format(&self.timestamp_pattern).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
    }
}

/// Render `sample` once so patterns that cannot format fail here, not at display time
fn check_pattern(
    kind: &'static str,
    pattern: &str,
    sample: impl fmt::Display,
) -> Result<(), DisplayError> {
    let mut out = String::new();
    write!(out, "{sample}").map_err(|_| DisplayError::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
    })
}

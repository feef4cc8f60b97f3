//! Categorical constraint with an "any" sentinel

use std::fmt;
use std::str::FromStr;

/// A required value for one categorical field, or no requirement at all
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Constraint<T> {
    /// Every value is admitted
    #[default]
    Any,
    /// Only this exact value is admitted
    Exactly(T),
}

impl<T> Constraint<T> {
    /// Spellings accepted for [`Constraint::Any`], compared case-insensitively
    ///
    /// Applies to typed values only. Free-form facets use the exact
    /// [`crate::record::TEXT_ANY`] sentinel.
    pub const ANY_SPELLINGS: [&'static str; 2] = ["any", "all"];

    /// Check whether `raw` spells the "any" sentinel
    #[inline]
    #[must_use]
    pub fn is_any_spelling(raw: &str) -> bool {
        Self::ANY_SPELLINGS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(raw.trim()))
    }

    /// Whether this constraint admits everything
    #[inline]
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Required value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Any => None,
            Self::Exactly(value) => Some(value),
        }
    }

    /// Convert into an optional required value
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Any => None,
            Self::Exactly(value) => Some(value),
        }
    }

    /// Map the required value
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Constraint<U> {
        match self {
            Self::Any => Constraint::Any,
            Self::Exactly(value) => Constraint::Exactly(f(value)),
        }
    }
}

impl<T: PartialEq> Constraint<T> {
    /// Check a field value against the constraint
    #[inline]
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(required) => required == value,
        }
    }
}

impl<T> From<Option<T>> for Constraint<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Self::Exactly)
    }
}

impl<T: FromStr> FromStr for Constraint<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_any_spelling(s) {
            Ok(Self::Any)
        } else {
            s.parse().map(Self::Exactly)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Exactly(value) => value.fmt(f),
        }
    }
}

//! Conjunctive filter criteria
//!
//! A [`Criteria`] value holds zero or more lowercase search terms and zero or
//! more facets. A record matches when every term occurs in at least one of
//! its search fields and every facet admits it. Absent terms and facets
//! admit everything, so the default value matches every record.

use crate::constraint::Constraint;
use crate::error::CriteriaError;
use crate::record::{Facet, ProductFacet, Record, TransactionFacet};
use agri_model::{Product, ProductId, ProductStatus, QualityGrade, Transaction, TransactionKind, Verification};
use std::fmt;

/// Criteria over products
pub type ProductCriteria = Criteria<Product>;

/// Criteria over ledger entries
pub type TransactionCriteria = Criteria<Transaction>;

/// Free-text terms and facets, all of which must hold
pub struct Criteria<R: Record> {
    /// Lowercased substrings; each must occur in some search field
    terms: Vec<String>,
    /// Exact-match constraints
    facets: Vec<R::Facet>,
}

impl<R: Record> Criteria<R> {
    /// Criteria matching every record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            facets: Vec::new(),
        }
    }

    /// Add a free-text term
    ///
    /// Matching is case-insensitive. An empty string is a vacuous match and
    /// is not stored.
    #[must_use]
    pub fn search(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if !text.is_empty() {
            self.terms.push(text.to_lowercase());
        }
        self
    }

    /// Add a typed facet
    #[must_use]
    pub fn facet(mut self, facet: R::Facet) -> Self {
        self.facets.push(facet);
        self
    }

    /// Add a facet from untyped field/value input
    ///
    /// `value` may be the "any" sentinel, which adds nothing. Typed fields
    /// accept `any` or `all` in any case; free-form fields (category,
    /// product id) accept exactly `all`.
    ///
    /// # Errors
    /// Returns [`CriteriaError`] if the field is unknown for this record kind
    /// or the value does not parse for it
    pub fn constraint(self, field: &str, value: &str) -> Result<Self, CriteriaError> {
        Ok(match R::Facet::parse(field, value)? {
            Some(facet) => self.facet(facet),
            None => self,
        })
    }

    /// Conjunction of two criteria
    ///
    /// Filtering by the result equals filtering by `self` then by `other`.
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.terms.extend(other.terms);
        self.facets.extend(other.facets);
        self
    }

    /// Whether these criteria admit every record
    #[inline]
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.terms.is_empty() && self.facets.is_empty()
    }

    /// Stored search terms (lowercase)
    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Stored facets
    #[inline]
    #[must_use]
    pub fn facets(&self) -> &[R::Facet] {
        &self.facets
    }

    /// Evaluate the criteria against one record
    #[must_use]
    pub fn matches(&self, record: &R) -> bool {
        self.terms.iter().all(|term| {
            record
                .search_fields()
                .any(|field| field.to_lowercase().contains(term.as_str()))
        }) && self.facets.iter().all(|facet| facet.admits(record))
    }
}

impl Criteria<Product> {
    /// Constrain the produce category
    #[must_use]
    pub fn category(self, category: Constraint<String>) -> Self {
        self.with_constraint(category.map(ProductFacet::Category))
    }

    /// Constrain the lifecycle status
    #[must_use]
    pub fn status(self, status: Constraint<ProductStatus>) -> Self {
        self.with_constraint(status.map(ProductFacet::Status))
    }

    /// Constrain the quality grade
    #[must_use]
    pub fn quality(self, quality: Constraint<QualityGrade>) -> Self {
        self.with_constraint(quality.map(ProductFacet::Quality))
    }
}

impl Criteria<Transaction> {
    /// Constrain the entry kind
    #[must_use]
    pub fn kind(self, kind: Constraint<TransactionKind>) -> Self {
        self.with_constraint(kind.map(TransactionFacet::Kind))
    }

    /// Constrain the verification state
    #[must_use]
    pub fn verification(self, state: Constraint<Verification>) -> Self {
        self.with_constraint(state.map(TransactionFacet::Verification))
    }

    /// Restrict to entries for one product
    #[must_use]
    pub fn product(self, id: &ProductId) -> Self {
        self.facet(TransactionFacet::Product(id.clone()))
    }
}

impl<R: Record> Criteria<R> {
    fn with_constraint(self, constraint: Constraint<R::Facet>) -> Self {
        match constraint {
            Constraint::Any => self,
            Constraint::Exactly(facet) => self.facet(facet),
        }
    }
}

impl<R: Record> Default for Criteria<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for Criteria<R> {
    fn clone(&self) -> Self {
        Self {
            terms: self.terms.clone(),
            facets: self.facets.clone(),
        }
    }
}

impl<R: Record> PartialEq for Criteria<R> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms && self.facets == other.facets
    }
}

impl<R: Record> fmt::Debug for Criteria<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criteria")
            .field("record", &R::KIND)
            .field("terms", &self.terms)
            .field("facets", &self.facets)
            .finish()
    }
}

//! Filterable record kinds
//!
//! A [`Record`] names the text fields free-text search looks at and the
//! [`Facet`] type describing its categorical fields. Adding a record kind is
//! one `Record` impl plus one facet enum.

use crate::constraint::Constraint;
use crate::error::CriteriaError;
use agri_model::{
    Product, ProductId, ProductStatus, QualityGrade, Transaction, TransactionKind, Verification,
};
use std::fmt::Debug;
use std::str::FromStr;

/// An entity the query engine can filter
pub trait Record: Sized {
    /// Exact-match constraints available for this record kind
    type Facet: Facet<Self>;

    /// Record kind name used in diagnostics
    const KIND: &'static str;

    /// Fields searched by free text
    fn search_fields(&self) -> impl Iterator<Item = &str>;
}

/// One exact-match constraint on a record field
pub trait Facet<R>: Clone + Debug + PartialEq {
    /// Field names accepted by [`Facet::parse`], canonical spelling first
    const FIELDS: &'static [&'static str];

    /// Check the record's field against the required value
    fn admits(&self, record: &R) -> bool;

    /// Build a facet from untyped input
    ///
    /// Returns `Ok(None)` when `value` is the "any" sentinel: any spelling in
    /// [`Constraint::ANY_SPELLINGS`] for typed fields, exactly [`TEXT_ANY`]
    /// for free-form ones.
    ///
    /// # Errors
    /// - `CriteriaError::UnknownField` if `field` is not one of [`Facet::FIELDS`]
    /// - `CriteriaError::InvalidValue` if `value` does not parse for the field
    fn parse(field: &str, value: &str) -> Result<Option<Self>, CriteriaError>;
}

/// Parse a typed constraint value, attributing failures to `field`
fn parse_typed<T>(field: &str, value: &str) -> Result<Constraint<T>, CriteriaError>
where
    T: FromStr<Err = agri_model::ModelError>,
{
    value
        .parse::<Constraint<T>>()
        .map_err(|source| CriteriaError::invalid_value(field, source))
}

/// "Any" sentinel for free-form fields, matched exactly
pub const TEXT_ANY: &str = "all";

/// Parse a free-form string constraint
fn parse_text(value: &str) -> Constraint<String> {
    if value == TEXT_ANY {
        Constraint::Any
    } else {
        Constraint::Exactly(value.to_string())
    }
}

impl Record for Product {
    type Facet = ProductFacet;

    const KIND: &'static str = "product";

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.farmer_name.as_str()].into_iter()
    }
}

/// Categorical product fields
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductFacet {
    /// Produce category, compared exactly (case-sensitive)
    Category(String),
    /// Lifecycle status
    Status(ProductStatus),
    /// Quality grade
    Quality(QualityGrade),
}

impl Facet<Product> for ProductFacet {
    const FIELDS: &'static [&'static str] = &["type", "category", "status", "quality"];

    fn admits(&self, record: &Product) -> bool {
        match self {
            Self::Category(category) => record.category == *category,
            Self::Status(status) => record.status == *status,
            Self::Quality(grade) => record.quality == *grade,
        }
    }

    fn parse(field: &str, value: &str) -> Result<Option<Self>, CriteriaError> {
        let facet = match field {
            "type" | "category" => parse_text(value).map(Self::Category),
            "status" => parse_typed::<ProductStatus>(field, value)?.map(Self::Status),
            "quality" => parse_typed::<QualityGrade>(field, value)?.map(Self::Quality),
            other => {
                return Err(CriteriaError::unknown_field(
                    Product::KIND,
                    other,
                    Self::FIELDS,
                ))
            }
        };
        Ok(facet.into_value())
    }
}

impl Record for Transaction {
    type Facet = TransactionFacet;

    const KIND: &'static str = "transaction";

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.from.as_str(), self.to.as_str(), self.product_id.as_str()].into_iter()
    }
}

/// Categorical ledger fields
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionFacet {
    /// Entry kind
    Kind(TransactionKind),
    /// Verified or pending
    Verification(Verification),
    /// Entries for one product
    Product(ProductId),
}

impl Facet<Transaction> for TransactionFacet {
    const FIELDS: &'static [&'static str] = &[
        "type",
        "kind",
        "status",
        "verification",
        "product",
        "productId",
    ];

    fn admits(&self, record: &Transaction) -> bool {
        match self {
            Self::Kind(kind) => record.kind == *kind,
            Self::Verification(state) => record.verification() == *state,
            Self::Product(id) => record.product_id == *id,
        }
    }

    fn parse(field: &str, value: &str) -> Result<Option<Self>, CriteriaError> {
        let facet = match field {
            "type" | "kind" => parse_typed::<TransactionKind>(field, value)?.map(Self::Kind),
            "status" | "verification" => {
                parse_typed::<Verification>(field, value)?.map(Self::Verification)
            }
            "product" | "productId" => parse_text(value).map(|id| Self::Product(ProductId::new(id))),
            other => {
                return Err(CriteriaError::unknown_field(
                    Transaction::KIND,
                    other,
                    Self::FIELDS,
                ))
            }
        };
        Ok(facet.into_value())
    }
}

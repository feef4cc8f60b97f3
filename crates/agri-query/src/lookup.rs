//! Exact product lookup
//!
//! A lookup that finds nothing is an expected outcome, so it is reported as
//! [`Lookup::NotFound`] rather than as an error or an empty list.

use agri_model::Product;

/// Outcome of an exact lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The matching product
    Found(&'a Product),
    /// No product carries the requested key
    NotFound {
        /// Key that was looked up
        key: &'a str,
    },
}

impl<'a> Lookup<'a> {
    /// Whether a product was found
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Found product, if any
    #[inline]
    #[must_use]
    pub const fn product(&self) -> Option<&'a Product> {
        match self {
            Self::Found(product) => Some(product),
            Self::NotFound { .. } => None,
        }
    }
}

/// Find the product whose traceability code equals `code` exactly
#[must_use]
pub fn find_by_code<'a>(products: &'a [Product], code: &'a str) -> Lookup<'a> {
    products
        .iter()
        .find(|p| p.qr_code.as_str() == code)
        .map_or(Lookup::NotFound { key: code }, Lookup::Found)
}

/// Find the product whose identifier equals `id` exactly
#[must_use]
pub fn find_by_id<'a>(products: &'a [Product], id: &'a str) -> Lookup<'a> {
    products
        .iter()
        .find(|p| p.id.as_str() == id)
        .map_or(Lookup::NotFound { key: id }, Lookup::Found)
}

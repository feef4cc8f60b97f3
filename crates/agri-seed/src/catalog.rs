//! Validated catalog

use crate::data::SeedData;
use crate::error::SeedError;
use crate::parser::SeedParsers;
use crate::validate::validate;
use agri_model::{AnalyticsSnapshot, Notification, Product, Transaction, User, UserId};
use std::path::Path;

const DEMO_FIXTURE: &str = include_str!("../fixtures/demo.json");

/// Seed data that passed boundary validation
///
/// Only constructible through validation, so every transaction references a
/// catalog product and every notification a known user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    seed: SeedData,
}

impl Catalog {
    /// Validate `seed` and wrap it
    ///
    /// # Errors
    /// Returns the first validation failure
    pub fn new(seed: SeedData) -> Result<Self, SeedError> {
        validate(&seed)?;
        Ok(Self { seed })
    }

    /// The built-in demonstration dataset
    ///
    /// # Errors
    /// Only fails if the bundled fixture is broken
    pub fn demo() -> Result<Self, SeedError> {
        Self::new(serde_json::from_str(DEMO_FIXTURE)?)
    }

    /// Read, parse and validate a seed file
    ///
    /// The format is chosen from the file extension.
    ///
    /// # Errors
    /// Returns [`SeedError`] on I/O, parse or validation failure
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        Self::load_with(&SeedParsers::default(), path)
    }

    /// Like [`Catalog::load`], with a custom parser registry
    ///
    /// # Errors
    /// Returns [`SeedError`] on I/O, parse or validation failure
    pub fn load_with(parsers: &SeedParsers, path: &Path) -> Result<Self, SeedError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SeedError::io_error(path, e))?;
        let seed = parsers.parse(path, &content)?;
        let catalog = Self::new(seed)?;

        tracing::info!(
            path = %path.display(),
            products = catalog.products().len(),
            transactions = catalog.transactions().len(),
            "Seed catalog loaded"
        );
        Ok(catalog)
    }

    /// Products, in display order
    #[inline]
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.seed.products
    }

    /// Ledger entries, in ledger order
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.seed.transactions
    }

    /// Account holders
    #[inline]
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.seed.users
    }

    /// All notifications
    #[inline]
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.seed.notifications
    }

    /// Dashboard figures
    #[inline]
    #[must_use]
    pub fn analytics(&self) -> &AnalyticsSnapshot {
        &self.seed.analytics
    }

    /// User with id `id`
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.seed.users.iter().find(|u| &u.id == id)
    }

    /// Unwrap into the raw collections
    #[must_use]
    pub fn into_inner(self) -> SeedData {
        self.seed
    }
}

impl TryFrom<SeedData> for Catalog {
    type Error = SeedError;

    fn try_from(seed: SeedData) -> Result<Self, Self::Error> {
        Self::new(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fixture_is_valid() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.products().len(), 3);
        assert_eq!(catalog.transactions().len(), 3);
        assert_eq!(catalog.users().len(), 3);
        assert_eq!(catalog.notifications().len(), 3);
        assert_eq!(catalog.analytics().monthly_revenue, 2_850_000);
    }

    #[test]
    fn user_lookup() {
        let catalog = Catalog::demo().unwrap();
        let user = catalog.user(&UserId::new("3")).unwrap();
        assert_eq!(user.name, "Priya Sharma");
        assert!(catalog.user(&UserId::new("9")).is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}

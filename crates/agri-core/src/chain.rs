//! AgriChain facade
//!
//! Owns a validated [`Catalog`] plus the formatters chosen by configuration,
//! and exposes every read operation the presentation layer needs.

use crate::config::AgriConfig;
use crate::error::Result;
use agri_dashboard::{
    navigation, product_journey, profile, stats_for_role, unread_count, DateFormat, LedgerSummary,
    NavItem, NumberFormat, RoleProfile, StatPanel,
};
use agri_model::{Product, Role, Transaction, User, UserId};
use agri_query::{filter, find_by_code, find_by_id, Lookup, ProductCriteria, TransactionCriteria};
use agri_scan::ScanSession;
use agri_seed::Catalog;
use std::sync::Arc;
use std::time::Duration;

/// A product together with its ledger history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail<'a> {
    /// The product
    pub product: &'a Product,
    /// Ledger entries for it, in ledger order
    pub journey: Vec<&'a Transaction>,
}

/// Read-only entry point over one catalog
#[derive(Debug, Clone)]
pub struct AgriChain {
    catalog: Catalog,
    scan_candidates: Arc<[Product]>,
    numbers: NumberFormat,
    dates: DateFormat,
    scan_delay: Duration,
}

impl AgriChain {
    /// Facade over `catalog` with the display and scan settings of `config`
    ///
    /// # Errors
    /// Returns [`crate::AgriError::Config`] if a date pattern is invalid
    pub fn new(catalog: Catalog, config: &AgriConfig) -> Result<Self> {
        Ok(Self {
            scan_candidates: catalog.products().into(),
            numbers: config.display.number_format(),
            dates: config.display.date_format()?,
            scan_delay: config.scan_delay(),
            catalog,
        })
    }

    /// Load the configured seed (or the built-in demo) and build the facade
    ///
    /// # Errors
    /// Returns [`crate::AgriError`] if the seed cannot be loaded or the
    /// configuration is invalid
    pub fn from_config(config: &AgriConfig) -> Result<Self> {
        let catalog = match &config.seed_path {
            Some(path) => agri_seed::load_from_path(path)?,
            None => {
                tracing::info!("No seed path configured, using built-in demo catalog");
                Catalog::demo()?
            }
        };
        Self::new(catalog, config)
    }

    /// Built-in demo catalog with default settings
    ///
    /// # Errors
    /// Only fails if the bundled fixture is broken
    pub fn demo() -> Result<Self> {
        Self::new(Catalog::demo()?, &AgriConfig::default())
    }

    /// Underlying catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number formatter in use
    #[inline]
    #[must_use]
    pub fn numbers(&self) -> &NumberFormat {
        &self.numbers
    }

    /// Date formatter in use
    #[inline]
    #[must_use]
    pub fn dates(&self) -> &DateFormat {
        &self.dates
    }

    /// Products matching `criteria`, in catalog order
    #[must_use]
    pub fn products(&self, criteria: &ProductCriteria) -> Vec<&Product> {
        let hits = filter(self.catalog.products(), criteria);
        tracing::debug!(matched = hits.len(), total = self.catalog.products().len(), "Products filtered");
        hits
    }

    /// Ledger entries matching `criteria`, in ledger order
    #[must_use]
    pub fn transactions(&self, criteria: &TransactionCriteria) -> Vec<&Transaction> {
        let hits = filter(self.catalog.transactions(), criteria);
        tracing::debug!(
            matched = hits.len(),
            total = self.catalog.transactions().len(),
            "Transactions filtered"
        );
        hits
    }

    /// Exact lookup by traceability code
    #[must_use]
    pub fn lookup<'a>(&'a self, code: &'a str) -> Lookup<'a> {
        let outcome = find_by_code(self.catalog.products(), code);
        tracing::debug!(code, found = outcome.is_found(), "Code lookup");
        outcome
    }

    /// Product with id `id` and its ledger history
    #[must_use]
    pub fn product_detail<'a>(&'a self, id: &'a str) -> Option<ProductDetail<'a>> {
        let product = find_by_id(self.catalog.products(), id).product()?;
        Some(ProductDetail {
            product,
            journey: product_journey(self.catalog.transactions(), product),
        })
    }

    /// Summary cards over the whole ledger
    ///
    /// Search and filters narrow the listed entries, never these totals.
    #[must_use]
    pub fn ledger_summary(&self) -> LedgerSummary {
        LedgerSummary::from_transactions(self.catalog.transactions())
    }

    /// Stat panels for `role`
    #[must_use]
    pub fn dashboard(&self, role: Role) -> Vec<StatPanel> {
        stats_for_role(role, self.catalog.analytics())
    }

    /// Navigation entries for `role`
    #[must_use]
    pub fn navigation(&self, role: Role) -> &'static [NavItem] {
        navigation(role)
    }

    /// Presentation settings for `role`
    #[must_use]
    pub fn profile(&self, role: Role) -> &'static RoleProfile {
        profile(role)
    }

    /// First account holding `role`
    #[must_use]
    pub fn user_for_role(&self, role: Role) -> Option<&User> {
        self.catalog.users().iter().find(|u| u.role == role)
    }

    /// Unread notifications for `user`
    #[must_use]
    pub fn unread_count(&self, user: &UserId) -> usize {
        unread_count(self.catalog.notifications(), user)
    }

    /// Scan session using the configured delay
    #[must_use]
    pub fn scan_session(&self) -> ScanSession {
        ScanSession::new().with_delay(self.scan_delay)
    }

    /// Products a scan can resolve to
    #[must_use]
    pub fn scan_candidates(&self) -> Arc<[Product]> {
        Arc::clone(&self.scan_candidates)
    }
}

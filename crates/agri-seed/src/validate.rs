//! Boundary validation
//!
//! Uniqueness and referential rules are checked once, when seed data enters
//! the system. Code downstream of [`crate::Catalog`] relies on them.

use crate::data::SeedData;
use crate::error::SeedError;
use std::collections::HashSet;

/// Check identifiers and references in `seed`
///
/// Rules, in the order they are checked:
/// - user ids are unique
/// - product ids and QR codes are unique
/// - transaction ids are unique and every transaction names a known product
/// - every notification is addressed to a known user
///
/// # Errors
/// Returns the first violation found
pub fn validate(seed: &SeedData) -> Result<(), SeedError> {
    let mut users = HashSet::with_capacity(seed.users.len());
    for user in &seed.users {
        if !users.insert(&user.id) {
            return Err(SeedError::DuplicateUser(user.id.clone()));
        }
    }

    let mut products = HashSet::with_capacity(seed.products.len());
    let mut codes = HashSet::with_capacity(seed.products.len());
    for product in &seed.products {
        if !products.insert(&product.id) {
            return Err(SeedError::DuplicateProduct(product.id.clone()));
        }
        if !codes.insert(&product.qr_code) {
            return Err(SeedError::DuplicateQrCode(product.qr_code.clone()));
        }
    }

    let mut transactions = HashSet::with_capacity(seed.transactions.len());
    for tx in &seed.transactions {
        if !transactions.insert(&tx.id) {
            return Err(SeedError::DuplicateTransaction(tx.id.clone()));
        }
        if !products.contains(&tx.product_id) {
            return Err(SeedError::DanglingProduct {
                transaction: tx.id.clone(),
                product: tx.product_id.clone(),
            });
        }
    }

    for note in &seed.notifications {
        if !users.contains(&note.user_id) {
            return Err(SeedError::DanglingOwner {
                notification: note.id.clone(),
                user: note.user_id.clone(),
            });
        }
    }

    tracing::debug!(
        users = users.len(),
        products = products.len(),
        transactions = transactions.len(),
        notifications = seed.notifications.len(),
        "Seed data validated"
    );
    Ok(())
}

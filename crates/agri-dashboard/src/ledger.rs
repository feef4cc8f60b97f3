//! Ledger views

use agri_model::{Notification, Product, Transaction, UserId};
use agri_query::{filter, TransactionCriteria};

/// Summary cards over a set of ledger entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Entries counted
    pub total: usize,
    /// Confirmed entries
    pub verified: usize,
    /// Unconfirmed entries
    pub pending: usize,
    /// Sum of the amounts that are present
    pub total_value: u64,
}

impl LedgerSummary {
    /// Summarise `transactions`
    #[must_use]
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions.into_iter().fold(Self::default(), |mut acc, tx| {
            acc.total += 1;
            if tx.verified {
                acc.verified += 1;
            } else {
                acc.pending += 1;
            }
            acc.total_value = acc.total_value.saturating_add(tx.amount.unwrap_or(0));
            acc
        })
    }
}

/// Ledger entries for `product`, in ledger order
#[must_use]
pub fn product_journey<'a>(transactions: &'a [Transaction], product: &Product) -> Vec<&'a Transaction> {
    filter(transactions, &TransactionCriteria::new().product(&product.id))
}

/// Notifications addressed to `user`, in seed order
pub fn notifications_for<'a>(
    notifications: &'a [Notification],
    user: &'a UserId,
) -> impl Iterator<Item = &'a Notification> + 'a {
    notifications.iter().filter(move |n| &n.user_id == user)
}

/// Unread notifications addressed to `user`
#[must_use]
pub fn unread_count(notifications: &[Notification], user: &UserId) -> usize {
    notifications_for(notifications, user)
        .filter(|n| !n.read)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_test_utils::{sample_notifications, sample_products, sample_transactions, TransactionBuilder};

    #[test]
    fn demo_summary() {
        let summary = LedgerSummary::from_transactions(&sample_transactions());
        assert_eq!(
            summary,
            LedgerSummary {
                total: 3,
                verified: 3,
                pending: 0,
                total_value: 47_500,
            }
        );
    }

    #[test]
    fn pending_entries_counted() {
        let txs = vec![
            TransactionBuilder::new("T1", "P001").verified(false).amount(10).build(),
            TransactionBuilder::new("T2", "P001").build(),
        ];
        let summary = LedgerSummary::from_transactions(&txs);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.verified, 1);
        assert_eq!(summary.total_value, 10);
    }

    #[test]
    fn empty_summary() {
        assert_eq!(LedgerSummary::from_transactions(&Vec::<Transaction>::new()), LedgerSummary::default());
    }

    #[test]
    fn journey_of_rice() {
        let products = sample_products();
        let transactions = sample_transactions();
        let journey = product_journey(&transactions, &products[0]);
        let ids: Vec<_> = journey.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T001"]);
    }

    #[test]
    fn unread_per_user() {
        let notes = sample_notifications();
        assert_eq!(unread_count(&notes, &UserId::new("1")), 2);
        assert_eq!(unread_count(&notes, &UserId::new("2")), 0);
        assert_eq!(unread_count(&notes, &UserId::new("3")), 0);
    }
}

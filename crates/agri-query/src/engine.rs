//! Filter engine
//!
//! Pure functions of `(records, criteria)`. The output is always the
//! subsequence of the input admitted by the criteria, in input order. No
//! call keeps state between invocations.

use crate::criteria::Criteria;
use crate::record::Record;

/// Records matching `criteria`, in input order
#[must_use]
pub fn filter<'a, R: Record>(records: &'a [R], criteria: &Criteria<R>) -> Vec<&'a R> {
    filter_iter(records, criteria).collect()
}

/// Lazy form of [`filter`]
pub fn filter_iter<'a, 'c, R: Record>(
    records: &'a [R],
    criteria: &'c Criteria<R>,
) -> impl Iterator<Item = &'a R> + 'c
where
    'a: 'c,
{
    records.iter().filter(move |record| criteria.matches(record))
}

/// Number of records matching `criteria`
#[must_use]
pub fn count<R: Record>(records: &[R], criteria: &Criteria<R>) -> usize {
    filter_iter(records, criteria).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use crate::criteria::{ProductCriteria, TransactionCriteria};
    use agri_model::{Product, TransactionKind};
    use agri_test_utils::{sample_products, sample_transactions};

    #[test]
    fn empty_input_yields_empty_output() {
        let products: Vec<Product> = Vec::new();
        let criteria = ProductCriteria::new().search("").status(Constraint::Any);
        assert!(filter(&products, &criteria).is_empty());
    }

    #[test]
    fn no_match_yields_empty_output() {
        let products = sample_products();
        let criteria = ProductCriteria::new().search("mango");
        assert!(filter(&products, &criteria).is_empty());
        assert_eq!(count(&products, &criteria), 0);
    }

    #[test]
    fn output_keeps_input_order() {
        let products = sample_products();
        let criteria = ProductCriteria::new().search("organic");
        let names: Vec<&str> = filter(&products, &criteria)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Organic Basmati Rice", "Organic Milk"]);
    }

    #[test]
    fn kind_filter_over_ledger() {
        let transactions = sample_transactions();
        let criteria = TransactionCriteria::new().kind(Constraint::Exactly(TransactionKind::Harvest));
        let hits = filter(&transactions, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "T003");
    }
}

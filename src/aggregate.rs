// 📊 Aggregator - Sums and grouped sums over ledgers
//
// Periodic amounts (income, expenses) pass through the normalizer before
// summing; point-in-time amounts (asset values, debt balances) sum as-is.
// Empty input is always a zero sum or empty grouping, never an error.

use serde::Serialize;

use crate::model::Frequency;
use crate::normalize::monthly_equivalent;

/// Sum point-in-time amounts as-is.
pub fn sum<T>(records: &[T], amount_of: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(amount_of).sum()
}

/// Sum point-in-time amounts over records passing the filter.
pub fn sum_filtered<T>(
    records: &[T],
    filter: impl Fn(&T) -> bool,
    amount_of: impl Fn(&T) -> f64,
) -> f64 {
    records.iter().filter(|r| filter(r)).map(amount_of).sum()
}

/// Sum periodic amounts, normalizing each to its monthly equivalent first.
pub fn monthly_sum<T>(
    records: &[T],
    amount_of: impl Fn(&T) -> f64,
    frequency_of: impl Fn(&T) -> Frequency,
) -> f64 {
    records
        .iter()
        .map(|r| monthly_equivalent(amount_of(r), frequency_of(r)))
        .sum()
}

/// Normalized sum over records passing the filter.
pub fn monthly_sum_filtered<T>(
    records: &[T],
    filter: impl Fn(&T) -> bool,
    amount_of: impl Fn(&T) -> f64,
    frequency_of: impl Fn(&T) -> Frequency,
) -> f64 {
    records
        .iter()
        .filter(|r| filter(r))
        .map(|r| monthly_equivalent(amount_of(r), frequency_of(r)))
        .sum()
}

// ============================================================================
// GROUPED TOTALS
// ============================================================================

/// Per-key totals, ordered by first occurrence of each key.
///
/// Backed by a Vec rather than a hash map so display order is stable for
/// the caller. Linear key lookup is fine at ledger scale (tens of records).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedTotals<K> {
    entries: Vec<(K, f64)>,
}

impl<K: PartialEq> GroupedTotals<K> {
    pub fn new() -> Self {
        GroupedTotals {
            entries: Vec::new(),
        }
    }

    /// Add an amount to a key's running total, creating the key at the
    /// end of the ordering on first occurrence.
    pub fn add(&mut self, key: K, amount: f64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((key, amount)),
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, total)| *total)
    }

    /// Total for a key, zero when the key never occurred.
    pub fn get_or_zero(&self, key: &K) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    pub fn into_vec(self) -> Vec<(K, f64)> {
        self.entries
    }
}

impl<K: PartialEq> Default for GroupedTotals<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Group point-in-time amounts by key.
pub fn group_sum<T, K: PartialEq>(
    records: &[T],
    key_of: impl Fn(&T) -> K,
    amount_of: impl Fn(&T) -> f64,
) -> GroupedTotals<K> {
    let mut totals = GroupedTotals::new();
    for record in records {
        totals.add(key_of(record), amount_of(record));
    }
    totals
}

/// Group periodic amounts by key, normalizing each to monthly first.
pub fn monthly_group_sum<T, K: PartialEq>(
    records: &[T],
    key_of: impl Fn(&T) -> K,
    amount_of: impl Fn(&T) -> f64,
    frequency_of: impl Fn(&T) -> Frequency,
) -> GroupedTotals<K> {
    let mut totals = GroupedTotals::new();
    for record in records {
        totals.add(
            key_of(record),
            monthly_equivalent(amount_of(record), frequency_of(record)),
        );
    }
    totals
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Expense, Frequency};

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new("Housing", "Rent", 1500.0, Frequency::Monthly, true),
            Expense::new("Food", "Groceries", 150.0, Frequency::Weekly, true),
            Expense::new("Housing", "Insurance", 1200.0, Frequency::Annually, true),
            Expense::new("Food", "Dining Out", 400.0, Frequency::Monthly, false),
        ]
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let empty: Vec<Expense> = Vec::new();
        assert_eq!(sum(&empty, |e| e.amount), 0.0);
    }

    #[test]
    fn test_monthly_sum_normalizes() {
        let expenses = sample_expenses();
        let total = monthly_sum(&expenses, |e| e.amount, |e| e.frequency);

        let expected = 1500.0 + 150.0 * 52.0 / 12.0 + 100.0 + 400.0;
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sum_filtered() {
        let expenses = sample_expenses();
        let essential = monthly_sum_filtered(
            &expenses,
            |e| e.essential,
            |e| e.amount,
            |e| e.frequency,
        );
        let expected = 1500.0 + 150.0 * 52.0 / 12.0 + 100.0;
        assert!((essential - expected).abs() < 1e-9);
    }

    #[test]
    fn test_group_sum_empty_is_empty_mapping() {
        let empty: Vec<Expense> = Vec::new();
        let totals = group_sum(&empty, |e| e.category.clone(), |e| e.amount);
        assert!(totals.is_empty());
        assert_eq!(totals.get_or_zero(&"Housing".to_string()), 0.0);
    }

    #[test]
    fn test_group_sum_preserves_first_occurrence_order() {
        let expenses = sample_expenses();
        let totals = monthly_group_sum(
            &expenses,
            |e| e.category.clone(),
            |e| e.amount,
            |e| e.frequency,
        );

        let keys: Vec<&str> = totals.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Housing", "Food"]);
    }

    #[test]
    fn test_group_sum_accumulates_per_key() {
        let expenses = sample_expenses();
        let totals = monthly_group_sum(
            &expenses,
            |e| e.category.clone(),
            |e| e.amount,
            |e| e.frequency,
        );

        // Rent (monthly) + insurance ($1200/yr = $100/mo)
        assert!((totals.get_or_zero(&"Housing".to_string()) - 1600.0).abs() < 1e-9);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_grand_total_matches_flat_sum() {
        let expenses = sample_expenses();
        let totals = monthly_group_sum(
            &expenses,
            |e| e.category.clone(),
            |e| e.amount,
            |e| e.frequency,
        );
        let flat = monthly_sum(&expenses, |e| e.amount, |e| e.frequency);
        assert!((totals.grand_total() - flat).abs() < 1e-9);
    }
}

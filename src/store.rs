// 🗄️ Ledger Store - Single owner of the four ledgers
//
// One explicit state object mutated only through add/update/remove
// commands; no shared globals, no setters handed around. The engine never
// reads the store directly — callers take a `snapshot()` and compute over
// that, so there is no read/write ordering to think about.
//
// Command-side validation rejects structurally bad records (negative
// amounts, zero-year terms) so everything downstream can assume valid
// inputs.

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::model::{Asset, AssetCategory, Debt, DebtKind, Expense, Frequency, IncomeSource, Snapshot};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    income: Vec<IncomeSource>,
    assets: Vec<Asset>,
    debts: Vec<Debt>,
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Demo data set: a plausible household with three income streams,
    /// six assets, four debts, and ten expenses.
    pub fn sample() -> Self {
        let mut ledger = Ledger::new();

        for source in [
            IncomeSource::new("Salary", 5000.0, Frequency::Monthly),
            IncomeSource::new("Side Gig", 1000.0, Frequency::Monthly),
            IncomeSource::new("Dividends", 500.0, Frequency::Quarterly),
        ] {
            ledger.income.push(source);
        }

        for asset in [
            Asset::with_growth("Checking Account", 10_000.0, AssetCategory::Liquid, 0.01),
            Asset::with_growth("Savings Account", 25_000.0, AssetCategory::Liquid, 0.03),
            Asset::with_growth("401(k)", 120_000.0, AssetCategory::Retirement, 0.07),
            Asset::with_growth("Roth IRA", 45_000.0, AssetCategory::Retirement, 0.07),
            Asset::with_growth("Brokerage Account", 30_000.0, AssetCategory::Investment, 0.08),
            Asset::with_growth("Home", 350_000.0, AssetCategory::Property, 0.03),
        ] {
            ledger.assets.push(asset);
        }

        for debt in [
            Debt::term("Mortgage", 280_000.0, 0.0375, 1500.0, 30),
            Debt::term("Car Loan", 15_000.0, 0.045, 350.0, 5),
            Debt::term("Student Loan", 25_000.0, 0.05, 300.0, 10),
            Debt::revolving("Credit Card", 2000.0, 0.185, 100.0),
        ] {
            ledger.debts.push(debt);
        }

        for expense in [
            Expense::new("Housing", "Mortgage", 1500.0, Frequency::Monthly, true),
            Expense::new("Housing", "Utilities", 300.0, Frequency::Monthly, true),
            Expense::new("Transportation", "Car Payment", 350.0, Frequency::Monthly, true),
            Expense::new("Transportation", "Gas", 200.0, Frequency::Monthly, true),
            Expense::new("Food", "Groceries", 600.0, Frequency::Monthly, true),
            Expense::new("Food", "Dining Out", 400.0, Frequency::Monthly, false),
            Expense::new("Entertainment", "Streaming Services", 50.0, Frequency::Monthly, false),
            Expense::new("Shopping", "Clothing", 200.0, Frequency::Monthly, false),
            Expense::new("Healthcare", "Insurance", 300.0, Frequency::Monthly, true),
            Expense::new("Personal", "Gym", 50.0, Frequency::Monthly, false),
        ] {
            ledger.expenses.push(expense);
        }

        ledger
    }

    // ========================================================================
    // SNAPSHOT
    // ========================================================================

    /// Immutable copy of all four ledgers for the engine to compute over.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            income: self.income.clone(),
            assets: self.assets.clone(),
            debts: self.debts.clone(),
            expenses: self.expenses.clone(),
            taken_at: Utc::now(),
        }
    }

    // Read-only views (insertion order, stable for display).

    pub fn income(&self) -> &[IncomeSource] {
        &self.income
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
            && self.assets.is_empty()
            && self.debts.is_empty()
            && self.expenses.is_empty()
    }

    // ========================================================================
    // INCOME COMMANDS
    // ========================================================================

    pub fn add_income(&mut self, source: IncomeSource) -> EngineResult<()> {
        validate_non_negative("income amount", source.amount)?;
        self.income.push(source);
        Ok(())
    }

    /// Replace the record matching the id, wholesale.
    pub fn update_income(&mut self, source: IncomeSource) -> EngineResult<()> {
        validate_non_negative("income amount", source.amount)?;
        replace_by_id(&mut self.income, source, "income", |s| &s.id)
    }

    pub fn remove_income(&mut self, id: &str) -> EngineResult<()> {
        remove_by_id(&mut self.income, id, "income", |s| &s.id)
    }

    // ========================================================================
    // ASSET COMMANDS
    // ========================================================================

    pub fn add_asset(&mut self, asset: Asset) -> EngineResult<()> {
        validate_non_negative("asset value", asset.value)?;
        self.assets.push(asset);
        Ok(())
    }

    pub fn update_asset(&mut self, asset: Asset) -> EngineResult<()> {
        validate_non_negative("asset value", asset.value)?;
        replace_by_id(&mut self.assets, asset, "asset", |a| &a.id)
    }

    pub fn remove_asset(&mut self, id: &str) -> EngineResult<()> {
        remove_by_id(&mut self.assets, id, "asset", |a| &a.id)
    }

    // ========================================================================
    // DEBT COMMANDS
    // ========================================================================

    pub fn add_debt(&mut self, debt: Debt) -> EngineResult<()> {
        validate_debt(&debt)?;
        self.debts.push(debt);
        Ok(())
    }

    pub fn update_debt(&mut self, debt: Debt) -> EngineResult<()> {
        validate_debt(&debt)?;
        replace_by_id(&mut self.debts, debt, "debt", |d| &d.id)
    }

    pub fn remove_debt(&mut self, id: &str) -> EngineResult<()> {
        remove_by_id(&mut self.debts, id, "debt", |d| &d.id)
    }

    // ========================================================================
    // EXPENSE COMMANDS
    // ========================================================================

    pub fn add_expense(&mut self, expense: Expense) -> EngineResult<()> {
        validate_non_negative("expense amount", expense.amount)?;
        self.expenses.push(expense);
        Ok(())
    }

    pub fn update_expense(&mut self, expense: Expense) -> EngineResult<()> {
        validate_non_negative("expense amount", expense.amount)?;
        replace_by_id(&mut self.expenses, expense, "expense", |e| &e.id)
    }

    pub fn remove_expense(&mut self, id: &str) -> EngineResult<()> {
        remove_by_id(&mut self.expenses, id, "expense", |e| &e.id)
    }
}

// ============================================================================
// VALIDATION & ID HELPERS
// ============================================================================

fn validate_non_negative(field: &'static str, value: f64) -> EngineResult<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(EngineError::InputValidation {
            field,
            message: format!("must be a non-negative number, got {}", value),
        });
    }
    Ok(())
}

fn validate_debt(debt: &Debt) -> EngineResult<()> {
    validate_non_negative("debt balance", debt.balance)?;
    validate_non_negative("debt minimum payment", debt.minimum_payment)?;

    if let DebtKind::Term { years: 0 } = debt.kind {
        return Err(EngineError::InputValidation {
            field: "debt term",
            message: "term must be at least 1 year".to_string(),
        });
    }
    Ok(())
}

fn replace_by_id<T>(
    records: &mut [T],
    replacement: T,
    ledger: &'static str,
    id_of: impl Fn(&T) -> &str,
) -> EngineResult<()> {
    let id = id_of(&replacement).to_string();
    match records.iter_mut().find(|r| id_of(r) == id) {
        Some(slot) => {
            *slot = replacement;
            Ok(())
        }
        None => Err(EngineError::UnknownId { ledger, id }),
    }
}

fn remove_by_id<T>(
    records: &mut Vec<T>,
    id: &str,
    ledger: &'static str,
    id_of: impl Fn(&T) -> &str,
) -> EngineResult<()> {
    match records.iter().position(|r| id_of(r) == id) {
        Some(index) => {
            records.remove(index);
            Ok(())
        }
        None => Err(EngineError::UnknownId {
            ledger,
            id: id.to_string(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics;

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.snapshot().income.len(), 0);
    }

    #[test]
    fn test_sample_ledger_matches_demo_figures() {
        let ledger = Ledger::sample();
        let snapshot = ledger.snapshot();

        // 5000 + 1000 + 500/quarter ≈ 6166.67/mo
        let income = metrics::monthly_income(&snapshot.income);
        assert!((income - (6000.0 + 500.0 * 4.0 / 12.0)).abs() < 1e-9);

        // All sample expenses are monthly: $3,950/mo.
        assert!((metrics::monthly_burn_rate(&snapshot.expenses) - 3950.0).abs() < 1e-9);

        // 580,000 assets − 322,000 debts.
        assert!((metrics::net_worth(&snapshot.assets, &snapshot.debts) - 258_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_and_remove_round_trip() {
        let mut ledger = Ledger::new();
        let expense = Expense::new("Food", "Coffee", 5.0, Frequency::Weekly, false);
        let id = expense.id.clone();

        ledger.add_expense(expense).unwrap();
        assert_eq!(ledger.expenses().len(), 1);

        ledger.remove_expense(&id).unwrap();
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut ledger = Ledger::new();
        let mut asset = Asset::new("Checking", 1000.0, AssetCategory::Liquid);
        let id = asset.id.clone();
        ledger.add_asset(asset.clone()).unwrap();

        asset.value = 2500.0;
        asset.name = "Checking (renamed)".to_string();
        ledger.update_asset(asset).unwrap();

        assert_eq!(ledger.assets().len(), 1);
        assert_eq!(ledger.assets()[0].id, id);
        assert_eq!(ledger.assets()[0].value, 2500.0);
        assert_eq!(ledger.assets()[0].name, "Checking (renamed)");
    }

    #[test]
    fn test_update_unknown_id_is_an_error() {
        let mut ledger = Ledger::new();
        let result = ledger.update_asset(Asset::new("Ghost", 1.0, AssetCategory::Other));
        assert!(matches!(result, Err(EngineError::UnknownId { ledger: "asset", .. })));
    }

    #[test]
    fn test_remove_unknown_id_is_an_error() {
        let mut ledger = Ledger::new();
        let result = ledger.remove_debt("no-such-id");
        assert!(matches!(result, Err(EngineError::UnknownId { ledger: "debt", .. })));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut ledger = Ledger::new();

        let result = ledger.add_income(IncomeSource::new("Bad", -100.0, Frequency::Monthly));
        assert!(matches!(result, Err(EngineError::InputValidation { .. })));

        let result = ledger.add_asset(Asset::new("Bad", f64::NAN, AssetCategory::Other));
        assert!(matches!(result, Err(EngineError::InputValidation { .. })));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_zero_year_term_rejected() {
        let mut ledger = Ledger::new();
        let result = ledger.add_debt(Debt::term("Bad Loan", 1000.0, 0.05, 50.0, 0));
        assert!(matches!(result, Err(EngineError::InputValidation { .. })));
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut ledger = Ledger::new();
        ledger
            .add_income(IncomeSource::new("Salary", 5000.0, Frequency::Monthly))
            .unwrap();
        let snapshot = ledger.snapshot();

        ledger
            .add_income(IncomeSource::new("Bonus", 1000.0, Frequency::Annually))
            .unwrap();

        assert_eq!(snapshot.income.len(), 1);
        assert_eq!(ledger.income().len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = Ledger::new();
        for name in ["First", "Second", "Third"] {
            ledger
                .add_expense(Expense::new("Misc", name, 10.0, Frequency::Monthly, false))
                .unwrap();
        }

        let names: Vec<&str> = ledger.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}

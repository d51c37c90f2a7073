// 💰 Metrics Engine - Composite financial indicators
//
// Every operation is a pure function over ledger slices (or a full
// snapshot). Ratios with a potentially-zero denominator define their
// result explicitly — a brand-new user with empty ledgers sees 0, never
// NaN/Infinity and never an error.

use serde::Serialize;

use crate::aggregate::{group_sum, monthly_group_sum, monthly_sum, sum, sum_filtered, GroupedTotals};
use crate::model::{Asset, AssetCategory, Debt, Expense, IncomeSource, Snapshot};

/// Default emergency-fund multiple: three years of expenses ("3X account").
pub const DEFAULT_EMERGENCY_MULTIPLIER: f64 = 3.0;

/// 50/30/20 guideline percentages. A static policy constant, not derived
/// from the ledgers.
pub const NEEDS_PCT: f64 = 50.0;
pub const WANTS_PCT: f64 = 30.0;
pub const SAVINGS_PCT: f64 = 20.0;

/// Zero-denominator policy: ratios over zero income (or any zero base)
/// are defined as 0 rather than NaN/Infinity. Zero income is an expected
/// state for a new user, not an error.
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

// ============================================================================
// INCOME & EXPENSES
// ============================================================================

/// Total monthly income across all sources, normalized.
pub fn monthly_income(income: &[IncomeSource]) -> f64 {
    monthly_sum(income, |s| s.amount, |s| s.frequency)
}

/// Total monthly spending (burn rate), normalized across frequencies.
pub fn monthly_burn_rate(expenses: &[Expense]) -> f64 {
    monthly_sum(expenses, |e| e.amount, |e| e.frequency)
}

/// Monthly income minus monthly burn. Negative when spending outruns income.
pub fn monthly_savings(income: &[IncomeSource], expenses: &[Expense]) -> f64 {
    monthly_income(income) - monthly_burn_rate(expenses)
}

/// Percent of monthly income not consumed by expenses. Zero income → 0.
pub fn savings_rate(income: &[IncomeSource], expenses: &[Expense]) -> f64 {
    let income_total = monthly_income(income);
    ratio_or_zero(income_total - monthly_burn_rate(expenses), income_total) * 100.0
}

/// Monthly burn grouped by expense category, first-occurrence order.
pub fn expenses_by_category(expenses: &[Expense]) -> GroupedTotals<String> {
    monthly_group_sum(
        expenses,
        |e| e.category.clone(),
        |e| e.amount,
        |e| e.frequency,
    )
}

/// Monthly essential vs discretionary spending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EssentialSplit {
    pub essential: f64,
    pub discretionary: f64,
}

pub fn essential_vs_discretionary(expenses: &[Expense]) -> EssentialSplit {
    let totals = monthly_group_sum(expenses, |e| e.essential, |e| e.amount, |e| e.frequency);
    EssentialSplit {
        essential: totals.get_or_zero(&true),
        discretionary: totals.get_or_zero(&false),
    }
}

// ============================================================================
// NET WORTH
// ============================================================================

pub fn total_assets(assets: &[Asset]) -> f64 {
    sum(assets, |a| a.value)
}

pub fn total_debts(debts: &[Debt]) -> f64 {
    sum(debts, |d| d.balance)
}

/// Total asset value minus total debt balance. Negative net worth is a
/// valid result, not an error.
pub fn net_worth(assets: &[Asset], debts: &[Debt]) -> f64 {
    total_assets(assets) - total_debts(debts)
}

/// Asset value totals grouped by category, first-occurrence order.
pub fn assets_by_category(assets: &[Asset]) -> GroupedTotals<AssetCategory> {
    group_sum(assets, |a| a.category, |a| a.value)
}

/// Immediately spendable or near-cash assets (liquid + investment).
pub fn liquid_assets(assets: &[Asset]) -> f64 {
    sum_filtered(assets, |a| a.category.is_liquid(), |a| a.value)
}

// ============================================================================
// DEBT
// ============================================================================

pub fn total_minimum_payments(debts: &[Debt]) -> f64 {
    sum(debts, |d| d.minimum_payment)
}

/// Total minimum monthly debt payments over monthly income. Zero income → 0.
pub fn debt_to_income_ratio(debts: &[Debt], income: &[IncomeSource]) -> f64 {
    ratio_or_zero(total_minimum_payments(debts), monthly_income(income))
}

/// Debts sorted by interest rate, highest first (avalanche payoff order).
/// Stable: equal rates keep insertion order.
pub fn debts_by_interest_rate(debts: &[Debt]) -> Vec<&Debt> {
    let mut sorted: Vec<&Debt> = debts.iter().collect();
    sorted.sort_by(|a, b| {
        b.interest_rate
            .partial_cmp(&a.interest_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

// ============================================================================
// EMERGENCY FUND ("3X ACCOUNT")
// ============================================================================

/// Liquidity target: `multiplier` years of expenses.
pub fn emergency_fund_target(expenses: &[Expense], multiplier: f64) -> f64 {
    monthly_burn_rate(expenses) * 12.0 * multiplier
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmergencyFundProgress {
    /// Liquid assets counted toward the fund.
    pub current: f64,
    /// Target balance (multiplier × annual expenses).
    pub target: f64,
    /// current/target as a percentage; may exceed 100 when overfunded.
    pub percent_complete: f64,
    /// How far short of target, never negative.
    pub shortfall: f64,
}

/// Progress toward the emergency-fund target. A zero target (no expenses
/// recorded yet) counts as fully funded: 100%, no shortfall.
pub fn emergency_fund_progress(
    assets: &[Asset],
    expenses: &[Expense],
    multiplier: f64,
) -> EmergencyFundProgress {
    let current = liquid_assets(assets);
    let target = emergency_fund_target(expenses, multiplier);

    let percent_complete = if target == 0.0 {
        100.0
    } else {
        current / target * 100.0
    };

    EmergencyFundProgress {
        current,
        target,
        percent_complete,
        shortfall: (target - current).max(0.0),
    }
}

// ============================================================================
// ALLOCATION (50/30/20)
// ============================================================================

/// The 50/30/20 guideline applied to monthly income, alongside the
/// user's actual savings rate for comparison. The percentages are a
/// fixed guideline; only `actual_savings_rate` is derived from the ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationGuideline {
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub savings_pct: f64,
    pub needs_amount: f64,
    pub wants_amount: f64,
    pub savings_amount: f64,
    pub actual_savings_rate: f64,
}

pub fn recommended_allocation(
    income: &[IncomeSource],
    expenses: &[Expense],
) -> AllocationGuideline {
    let income_total = monthly_income(income);

    AllocationGuideline {
        needs_pct: NEEDS_PCT,
        wants_pct: WANTS_PCT,
        savings_pct: SAVINGS_PCT,
        needs_amount: income_total * NEEDS_PCT / 100.0,
        wants_amount: income_total * WANTS_PCT / 100.0,
        savings_amount: income_total * SAVINGS_PCT / 100.0,
        actual_savings_rate: savings_rate(income, expenses),
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

/// The headline figures, computed from one snapshot in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dashboard {
    pub monthly_income: f64,
    pub monthly_burn_rate: f64,
    pub monthly_savings: f64,
    pub savings_rate: f64,
    pub total_assets: f64,
    pub total_debts: f64,
    pub net_worth: f64,
    pub debt_to_income_ratio: f64,
    pub emergency_fund: EmergencyFundProgress,
}

pub fn dashboard(snapshot: &Snapshot) -> Dashboard {
    Dashboard {
        monthly_income: monthly_income(&snapshot.income),
        monthly_burn_rate: monthly_burn_rate(&snapshot.expenses),
        monthly_savings: monthly_savings(&snapshot.income, &snapshot.expenses),
        savings_rate: savings_rate(&snapshot.income, &snapshot.expenses),
        total_assets: total_assets(&snapshot.assets),
        total_debts: total_debts(&snapshot.debts),
        net_worth: net_worth(&snapshot.assets, &snapshot.debts),
        debt_to_income_ratio: debt_to_income_ratio(&snapshot.debts, &snapshot.income),
        emergency_fund: emergency_fund_progress(
            &snapshot.assets,
            &snapshot.expenses,
            DEFAULT_EMERGENCY_MULTIPLIER,
        ),
    }
}

// ============================================================================
// TESTS
// ============================================================================

// 🖨️ Report - Plain-text dashboard rendering
//
// Currency helpers match the original dashboard's display rules: whole
// dollars with thousands separators, and a compact $K/$M form for chart
// axes and large balances.

use crate::metrics::{self, Dashboard};
use crate::model::Snapshot;
use crate::project;

/// Format as whole dollars with thousands separators: `$1,234`, `-$5,678`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;

    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Compact form for large balances: `$1.25M`, `$45K`, else plain currency.
pub fn format_compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{}${:.2}M", sign_prefix(value), magnitude / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        format!("{}${:.0}K", sign_prefix(value), magnitude / 1000.0)
    } else {
        format_currency(value)
    }
}

fn sign_prefix(value: f64) -> &'static str {
    if value < 0.0 {
        "-"
    } else {
        ""
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

// ============================================================================
// DASHBOARD REPORT
// ============================================================================

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Render the full dashboard report for a snapshot.
pub fn render_dashboard(snapshot: &Snapshot) -> String {
    let dash = metrics::dashboard(snapshot);
    let mut out = String::new();

    out.push_str(&format!("💰 Personal Finance Dashboard\n{}\n\n", DIVIDER));

    render_cash_flow(&mut out, &dash);
    render_net_worth(&mut out, snapshot, &dash);
    render_emergency_fund(&mut out, &dash);
    render_allocation(&mut out, snapshot);
    render_debts(&mut out, snapshot, &dash);

    out
}

fn render_cash_flow(out: &mut String, dash: &Dashboard) {
    out.push_str("📅 Monthly Cash Flow\n");
    out.push_str(&format!(
        "   Income:       {}\n",
        format_currency(dash.monthly_income)
    ));
    out.push_str(&format!(
        "   Burn rate:    {}\n",
        format_currency(dash.monthly_burn_rate)
    ));
    out.push_str(&format!(
        "   Savings:      {} ({} of income)\n\n",
        format_currency(dash.monthly_savings),
        format_percent(dash.savings_rate)
    ));
}

fn render_net_worth(out: &mut String, snapshot: &Snapshot, dash: &Dashboard) {
    out.push_str("🏦 Net Worth\n");
    out.push_str(&format!(
        "   Assets:       {}\n",
        format_currency(dash.total_assets)
    ));
    out.push_str(&format!(
        "   Debts:        {}\n",
        format_currency(dash.total_debts)
    ));
    out.push_str(&format!(
        "   Net worth:    {}\n",
        format_currency(dash.net_worth)
    ));

    let by_category = metrics::assets_by_category(&snapshot.assets);
    for (category, total) in by_category.iter() {
        out.push_str(&format!(
            "     {:<12} {}\n",
            format!("{}:", category),
            format_compact(*total)
        ));
    }
    out.push('\n');
}

fn render_emergency_fund(out: &mut String, dash: &Dashboard) {
    let fund = &dash.emergency_fund;
    out.push_str("🛟 3X Emergency Fund\n");
    out.push_str(&format!(
        "   Progress:     {} / {} ({})\n",
        format_currency(fund.current),
        format_currency(fund.target),
        format_percent(fund.percent_complete)
    ));

    if fund.shortfall > 0.0 {
        out.push_str(&format!(
            "   Shortfall:    {}\n\n",
            format_currency(fund.shortfall)
        ));
    } else {
        out.push_str("   Fully funded ✓\n\n");
    }
}

fn render_allocation(out: &mut String, snapshot: &Snapshot) {
    let allocation = metrics::recommended_allocation(&snapshot.income, &snapshot.expenses);
    out.push_str("🧮 50/30/20 Allocation\n");
    out.push_str(&format!(
        "   Needs (50%):  {}\n",
        format_currency(allocation.needs_amount)
    ));
    out.push_str(&format!(
        "   Wants (30%):  {}\n",
        format_currency(allocation.wants_amount)
    ));
    out.push_str(&format!(
        "   Save (20%):   {}\n",
        format_currency(allocation.savings_amount)
    ));
    out.push_str(&format!(
        "   Actual savings rate: {}\n\n",
        format_percent(allocation.actual_savings_rate)
    ));
}

fn render_debts(out: &mut String, snapshot: &Snapshot, dash: &Dashboard) {
    if snapshot.debts.is_empty() {
        return;
    }

    out.push_str("💳 Debts (highest rate first)\n");
    for debt in metrics::debts_by_interest_rate(&snapshot.debts) {
        out.push_str(&format!(
            "   {:<16} {:>10}  {:.2}% APR, min {}\n",
            debt.name,
            format_currency(debt.balance),
            debt.interest_rate * 100.0,
            format_currency(debt.minimum_payment)
        ));
    }
    out.push_str(&format!(
        "   Debt-to-income ratio: {}\n\n",
        format_percent(dash.debt_to_income_ratio * 100.0)
    ));
}

/// Render a month-by-month projection table.
pub fn render_projection(
    starting_value: f64,
    monthly_contribution: f64,
    annual_growth_pct: f64,
    horizon_months: u32,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "📈 Projection: start {}, {} /mo, {}%/yr growth\n{}\n",
        format_currency(starting_value),
        format_currency(monthly_contribution),
        annual_growth_pct,
        DIVIDER
    ));

    for point in project::project_net_worth(
        starting_value,
        monthly_contribution,
        annual_growth_pct,
        horizon_months,
    ) {
        out.push_str(&format!(
            "   Month {:>3}: {}\n",
            point.month,
            format_currency(point.value)
        ));
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Ledger;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1234.0), "$1,234");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(1234.56), "$1,235");
        assert_eq!(format_currency(1234.4), "$1,234");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5678.0), "-$5,678");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_250_000.0), "$1.25M");
        assert_eq!(format_compact(45_000.0), "$45K");
        assert_eq!(format_compact(500.0), "$500");
        assert_eq!(format_compact(-45_000.0), "-$45K");
    }

    #[test]
    fn test_render_dashboard_sample_figures() {
        let report = render_dashboard(&Ledger::sample().snapshot());

        assert!(report.contains("Net worth:    $258,000"));
        assert!(report.contains("Burn rate:    $3,950"));
        assert!(report.contains("3X Emergency Fund"));
    }

    #[test]
    fn test_render_dashboard_empty_ledgers_shows_zeros_not_errors() {
        let report = render_dashboard(&Ledger::new().snapshot());

        assert!(report.contains("Income:       $0"));
        assert!(report.contains("Net worth:    $0"));
        assert!(!report.contains("NaN"));
        assert!(!report.contains("inf"));
    }

    #[test]
    fn test_render_projection_has_horizon_plus_one_rows() {
        let table = render_projection(1000.0, 100.0, 7.0, 12);
        assert_eq!(table.matches("Month").count(), 13);
        assert!(table.contains("Month   0: $1,000"));
    }
}

// 📈 Projector - Forward-looking compound-growth simulations
//
// Same recurrence everywhere: value' = value × (1 + monthly_rate) +
// monthly_contribution, with the annual rate converted to an effective
// monthly compounding rate. Projections are lazy iterators; goal seeking
// runs the recurrence under a hard month cap so it always terminates.

use serde::Serialize;

/// Hard cap for goal seeking: 600 months (50 years). Guarantees
/// termination even when contribution and growth can never reach target.
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Effective monthly compounding rate for an annual growth percentage.
/// `(1 + annual/100)^(1/12) − 1`, so twelve months compound to the
/// stated annual rate exactly.
pub fn monthly_rate(annual_growth_pct: f64) -> f64 {
    (1.0 + annual_growth_pct / 100.0).powf(1.0 / 12.0) - 1.0
}

// ============================================================================
// NET WORTH PROJECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub value: f64,
}

/// Lazy monthly projection of `horizon_months + 1` points (month 0 is the
/// starting value). Clone to restart from month 0.
#[derive(Debug, Clone)]
pub struct NetWorthProjection {
    month: u32,
    horizon_months: u32,
    value: f64,
    monthly_rate: f64,
    monthly_contribution: f64,
}

impl Iterator for NetWorthProjection {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<ProjectionPoint> {
        if self.month > self.horizon_months {
            return None;
        }

        let point = ProjectionPoint {
            month: self.month,
            value: self.value,
        };

        self.month += 1;
        self.value = self.value * (1.0 + self.monthly_rate) + self.monthly_contribution;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.horizon_months + 1 - self.month) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NetWorthProjection {}

/// Project a balance forward under monthly compounding plus a fixed
/// monthly contribution.
pub fn project_net_worth(
    starting_value: f64,
    monthly_contribution: f64,
    annual_growth_pct: f64,
    horizon_months: u32,
) -> NetWorthProjection {
    NetWorthProjection {
        month: 0,
        horizon_months,
        value: starting_value,
        monthly_rate: monthly_rate(annual_growth_pct),
        monthly_contribution,
    }
}

// ============================================================================
// MONTHS TO TARGET
// ============================================================================

/// Goal-seek result. `Unreachable` means the month cap was hit first and
/// must be read as "effectively never", not as a precise month count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthsToTarget {
    Reached(u32),
    Unreachable,
}

impl MonthsToTarget {
    pub fn months(&self) -> Option<u32> {
        match self {
            MonthsToTarget::Reached(months) => Some(*months),
            MonthsToTarget::Unreachable => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, MonthsToTarget::Reached(_))
    }
}

/// Months until a compounding balance with fixed monthly contributions
/// first reaches `target_value`. Returns `Reached(0)` when the goal is
/// already met.
pub fn months_to_target(
    starting_value: f64,
    target_value: f64,
    monthly_contribution: f64,
    annual_growth_pct: f64,
    max_months: u32,
) -> MonthsToTarget {
    if starting_value >= target_value {
        return MonthsToTarget::Reached(0);
    }

    let rate = monthly_rate(annual_growth_pct);
    let mut value = starting_value;
    let mut months = 0;

    while value < target_value && months < max_months {
        value = value * (1.0 + rate) + monthly_contribution;
        months += 1;
    }

    if value >= target_value {
        MonthsToTarget::Reached(months)
    } else {
        MonthsToTarget::Unreachable
    }
}

// ============================================================================
// ANNUAL PROJECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualProjectionPoint {
    pub year: u32,
    pub value: f64,
}

/// Year-granularity projection: grow the whole balance annually, then add
/// a year of savings. Coarser than the monthly recurrence; used for
/// long-horizon net-worth charts.
pub fn project_annual(
    starting_value: f64,
    annual_savings: f64,
    annual_growth_pct: f64,
    horizon_years: u32,
) -> Vec<AnnualProjectionPoint> {
    let mut points = Vec::with_capacity(horizon_years as usize + 1);
    let mut value = starting_value;

    for year in 0..=horizon_years {
        points.push(AnnualProjectionPoint { year, value });
        value = value * (1.0 + annual_growth_pct / 100.0) + annual_savings;
    }

    points
}

// ============================================================================
// TESTS
// ============================================================================

// 📅 Normalizer - Periodic amounts → monthly equivalents
//
// One canonical factor per frequency, applied everywhere. Weekly uses the
// exact 52/12 (not the 4.33 approximation) so that a year of monthly
// equivalents reproduces the annual total exactly.

use crate::model::Frequency;

/// Exact weeks per month: 52 weeks / 12 months.
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Bi-weekly pay periods per month: 26 / 12.
pub const BIWEEKLY_PER_MONTH: f64 = 26.0 / 12.0;

/// Convert an amount in the given frequency's unit to its monthly
/// equivalent. Pure, O(1).
pub fn monthly_equivalent(amount: f64, frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Monthly => amount,
        Frequency::Weekly => amount * WEEKS_PER_MONTH,
        Frequency::BiWeekly => amount * BIWEEKLY_PER_MONTH,
        Frequency::Quarterly => amount * 4.0 / 12.0,
        Frequency::Annually => amount / 12.0,
    }
}

/// Annual equivalent of a periodic amount. Convenience for targets that
/// are stated per year (emergency fund, annual expense totals).
pub fn annual_equivalent(amount: f64, frequency: Frequency) -> f64 {
    monthly_equivalent(amount, frequency) * 12.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_monthly_is_identity() {
        assert_eq!(monthly_equivalent(1500.0, Frequency::Monthly), 1500.0);
    }

    #[test]
    fn test_weekly_uses_exact_factor() {
        let monthly = monthly_equivalent(100.0, Frequency::Weekly);
        assert!((monthly - 100.0 * 52.0 / 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_annual_total_identity_for_every_frequency() {
        // Twelve monthly equivalents must equal the original annual total.
        let periods_per_year = [
            (Frequency::Monthly, 12.0),
            (Frequency::Weekly, 52.0),
            (Frequency::BiWeekly, 26.0),
            (Frequency::Quarterly, 4.0),
            (Frequency::Annually, 1.0),
        ];

        for (frequency, periods) in periods_per_year {
            let annual = monthly_equivalent(100.0, frequency) * 12.0;
            assert!(
                (annual - 100.0 * periods).abs() < EPSILON,
                "{} annual total drifted: {}",
                frequency,
                annual
            );
        }
    }

    #[test]
    fn test_annually_divides_by_twelve() {
        assert!((monthly_equivalent(1200.0, Frequency::Annually) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_quarterly() {
        // $600/quarter = $200/month
        assert!((monthly_equivalent(600.0, Frequency::Quarterly) - 200.0).abs() < EPSILON);
    }

    #[test]
    fn test_annual_equivalent() {
        assert!((annual_equivalent(100.0, Frequency::Weekly) - 5200.0).abs() < EPSILON);
        assert!((annual_equivalent(3000.0, Frequency::Monthly) - 36_000.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_amount_stays_zero() {
        for freq in Frequency::all() {
            assert_eq!(monthly_equivalent(0.0, *freq), 0.0);
        }
    }
}

// 📒 Ledger Records - The four financial ledgers
//
// Identity vs value, following the same discipline as the rest of the
// system: the UUID id is IDENTITY (never changes), everything else is a
// VALUE that updates replace wholesale. Records are immutable once inside
// a snapshot; the engine only ever reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

// ============================================================================
// FREQUENCY
// ============================================================================

/// How often a periodic amount recurs.
///
/// This is a closed enum on purpose: an unrecognized period label is a
/// caller/schema bug, caught at parse time (`FromStr` / serde) rather than
/// silently passed through as if it were monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Monthly,
    Weekly,
    BiWeekly,
    Quarterly,
    Annually,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annually => "annually",
        }
    }

    /// All known frequencies, in display order.
    pub fn all() -> &'static [Frequency] {
        &[
            Frequency::Monthly,
            Frequency::Weekly,
            Frequency::BiWeekly,
            Frequency::Quarterly,
            Frequency::Annually,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            "bi-weekly" => Ok(Frequency::BiWeekly),
            "quarterly" => Ok(Frequency::Quarterly),
            "annually" => Ok(Frequency::Annually),
            other => Err(EngineError::InvalidFrequency(other.to_string())),
        }
    }
}

// ============================================================================
// ASSET CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    /// Cash or near-cash (checking, savings)
    Liquid,
    /// Brokerage and other non-retirement investments
    Investment,
    /// 401(k), IRA and similar tax-advantaged accounts
    Retirement,
    Property,
    Vehicle,
    Other,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Liquid => "liquid",
            AssetCategory::Investment => "investment",
            AssetCategory::Retirement => "retirement",
            AssetCategory::Property => "property",
            AssetCategory::Vehicle => "vehicle",
            AssetCategory::Other => "other",
        }
    }

    /// Liquid for emergency-fund purposes: immediately spendable or
    /// sellable without touching retirement/property/vehicle.
    pub fn is_liquid(&self) -> bool {
        matches!(self, AssetCategory::Liquid | AssetCategory::Investment)
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liquid" => Ok(AssetCategory::Liquid),
            "investment" => Ok(AssetCategory::Investment),
            "retirement" => Ok(AssetCategory::Retirement),
            "property" => Ok(AssetCategory::Property),
            "vehicle" => Ok(AssetCategory::Vehicle),
            "other" => Ok(AssetCategory::Other),
            other => Err(EngineError::InvalidAssetCategory(other.to_string())),
        }
    }
}

// ============================================================================
// INCOME SOURCE
// ============================================================================

/// A recurring income source. `amount` is in the stated frequency's unit,
/// NOT pre-normalized — normalization happens in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    #[serde(default = "new_id")]
    pub id: String,

    pub name: String,

    pub amount: f64,

    pub frequency: Frequency,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl IncomeSource {
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        IncomeSource {
            id: new_id(),
            name: name.into(),
            amount,
            frequency,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// ASSET
// ============================================================================

/// A point-in-time asset balance. `value` is the current balance, not a
/// periodic amount, so it never goes through the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default = "new_id")]
    pub id: String,

    pub name: String,

    pub value: f64,

    pub category: AssetCategory,

    /// Expected annual growth as a fraction (0.07 = 7%/yr).
    /// Interest rate for cash, expected return for investments,
    /// appreciation for property.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(name: impl Into<String>, value: f64, category: AssetCategory) -> Self {
        Asset {
            id: new_id(),
            name: name.into(),
            value,
            category,
            growth_rate: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_growth(
        name: impl Into<String>,
        value: f64,
        category: AssetCategory,
        growth_rate: f64,
    ) -> Self {
        let mut asset = Self::new(name, value, category);
        asset.growth_rate = Some(growth_rate);
        asset
    }
}

// ============================================================================
// DEBT
// ============================================================================

/// Term-based vs revolving is a tagged variant, not two optional fields:
/// a debt is one or the other by construction, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DebtKind {
    /// Installment debt with a fixed payoff term.
    Term { years: u32 },
    /// Open-ended revolving credit (credit cards, lines of credit).
    Revolving,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    #[serde(default = "new_id")]
    pub id: String,

    pub name: String,

    /// Current outstanding balance.
    pub balance: f64,

    /// Annual interest rate as a fraction (0.0375 = 3.75% APR).
    pub interest_rate: f64,

    /// Minimum monthly payment.
    pub minimum_payment: f64,

    #[serde(flatten)]
    pub kind: DebtKind,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Debt {
    pub fn term(
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
        years: u32,
    ) -> Self {
        Debt {
            id: new_id(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
            kind: DebtKind::Term { years },
            created_at: Utc::now(),
        }
    }

    pub fn revolving(
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Debt {
            id: new_id(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
            kind: DebtKind::Revolving,
            created_at: Utc::now(),
        }
    }

    pub fn is_revolving(&self) -> bool {
        self.kind == DebtKind::Revolving
    }
}

// ============================================================================
// EXPENSE
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default = "new_id")]
    pub id: String,

    /// Open-ended category label ("Housing", "Food", ...).
    pub category: String,

    pub name: String,

    pub amount: f64,

    pub frequency: Frequency,

    /// Needs vs wants: true for expenses that cannot be cut.
    pub essential: bool,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        frequency: Frequency,
        essential: bool,
    ) -> Self {
        Expense {
            id: new_id(),
            category: category.into(),
            name: name.into(),
            amount,
            frequency,
            essential,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Immutable copy of all four ledgers at a point in time.
///
/// The engine only ever computes over a snapshot, never over the live
/// store, so there is no read/write ordering to reason about. Cloning
/// tens of records per computation is intentional and cheap at this scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub income: Vec<IncomeSource>,
    pub assets: Vec<Asset>,
    pub debts: Vec<Debt>,
    pub expenses: Vec<Expense>,

    #[serde(default = "Utc::now")]
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Snapshot {
            income: Vec::new(),
            assets: Vec::new(),
            debts: Vec::new(),
            expenses: Vec::new(),
            taken_at: Utc::now(),
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_round_trips_through_labels() {
        for freq in Frequency::all() {
            let parsed: Frequency = freq.as_str().parse().unwrap();
            assert_eq!(parsed, *freq);
        }
    }

    #[test]
    fn test_unknown_frequency_fails_fast() {
        let result = "fortnightly".parse::<Frequency>();
        assert_eq!(
            result,
            Err(EngineError::InvalidFrequency("fortnightly".to_string()))
        );
    }

    #[test]
    fn test_unknown_asset_category_fails_fast() {
        let result = "crypto".parse::<AssetCategory>();
        assert!(matches!(result, Err(EngineError::InvalidAssetCategory(_))));
    }

    #[test]
    fn test_liquid_categories() {
        assert!(AssetCategory::Liquid.is_liquid());
        assert!(AssetCategory::Investment.is_liquid());
        assert!(!AssetCategory::Retirement.is_liquid());
        assert!(!AssetCategory::Property.is_liquid());
        assert!(!AssetCategory::Vehicle.is_liquid());
        assert!(!AssetCategory::Other.is_liquid());
    }

    #[test]
    fn test_records_get_fresh_unique_ids() {
        let a = IncomeSource::new("Salary", 5000.0, Frequency::Monthly);
        let b = IncomeSource::new("Salary", 5000.0, Frequency::Monthly);
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_debt_kind_is_exclusive() {
        let mortgage = Debt::term("Mortgage", 280_000.0, 0.0375, 1500.0, 30);
        let card = Debt::revolving("Credit Card", 2000.0, 0.185, 100.0);

        assert_eq!(mortgage.kind, DebtKind::Term { years: 30 });
        assert!(!mortgage.is_revolving());
        assert!(card.is_revolving());
    }

    #[test]
    fn test_debt_kind_json_shape() {
        let card = Debt::revolving("Credit Card", 2000.0, 0.185, 100.0);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["kind"], "revolving");

        let mortgage = Debt::term("Mortgage", 280_000.0, 0.0375, 1500.0, 30);
        let json = serde_json::to_value(&mortgage).unwrap();
        assert_eq!(json["kind"], "term");
        assert_eq!(json["years"], 30);
    }

    #[test]
    fn test_frequency_json_uses_kebab_case() {
        let income = IncomeSource::new("Paycheck", 1200.0, Frequency::BiWeekly);
        let json = serde_json::to_value(&income).unwrap();
        assert_eq!(json["frequency"], "bi-weekly");
    }

    #[test]
    fn test_unknown_frequency_rejected_on_deserialize() {
        let raw = r#"{"name":"Paycheck","amount":100.0,"frequency":"daily"}"#;
        let result: Result<IncomeSource, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }
}

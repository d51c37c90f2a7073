// Fintrack - Personal Finance Derived-Metrics Engine
// Exposes all modules for use in the CLI and tests

pub mod aggregate;
pub mod error;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod project;
pub mod report;
pub mod snapshot_io;
pub mod store;

// Re-export commonly used types
pub use aggregate::{group_sum, monthly_group_sum, monthly_sum, sum, sum_filtered, GroupedTotals};
pub use error::{EngineError, EngineResult};
pub use metrics::{
    dashboard, debt_to_income_ratio, emergency_fund_progress, emergency_fund_target,
    essential_vs_discretionary, liquid_assets, monthly_burn_rate, monthly_income,
    monthly_savings, net_worth, recommended_allocation, savings_rate, AllocationGuideline,
    Dashboard, EmergencyFundProgress, EssentialSplit, DEFAULT_EMERGENCY_MULTIPLIER,
};
pub use model::{
    Asset, AssetCategory, Debt, DebtKind, Expense, Frequency, IncomeSource, Snapshot,
};
pub use normalize::{annual_equivalent, monthly_equivalent};
pub use project::{
    months_to_target, project_annual, project_net_worth, AnnualProjectionPoint, MonthsToTarget,
    NetWorthProjection, ProjectionPoint, DEFAULT_MAX_MONTHS,
};
pub use snapshot_io::{export_json, load_snapshot, parse_snapshot, save_snapshot};
pub use store::Ledger;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

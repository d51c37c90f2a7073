// 💾 Snapshot interchange - Manual JSON export/import
//
// One JSON object with top-level keys `income`, `assets`, `debts`,
// `expenses`. No durability guarantees beyond an ordinary file write.
// Imports re-run command validation, and unknown frequency or category
// labels fail the load rather than being coerced.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::model::{Asset, Debt, Expense, IncomeSource};
use crate::store::Ledger;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    income: Vec<IncomeSource>,
    #[serde(default)]
    assets: Vec<Asset>,
    #[serde(default)]
    debts: Vec<Debt>,
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Write the four ledgers to a pretty-printed JSON file.
pub fn save_snapshot<P: AsRef<Path>>(ledger: &Ledger, path: P) -> Result<()> {
    let file = SnapshotFile {
        income: ledger.income().to_vec(),
        assets: ledger.assets().to_vec(),
        debts: ledger.debts().to_vec(),
        expenses: ledger.expenses().to_vec(),
    };

    let json = serde_json::to_string_pretty(&file).context("Failed to serialize snapshot")?;

    fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write snapshot file: {:?}", path.as_ref()))?;

    Ok(())
}

/// Load a ledger from a JSON snapshot file. Every record goes back
/// through the store commands, so a file with negative amounts or a
/// zero-year term is rejected the same way live input would be.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Ledger> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read snapshot file: {:?}", path.as_ref()))?;

    parse_snapshot(&content)
}

/// Parse a snapshot from a JSON string.
pub fn parse_snapshot(json: &str) -> Result<Ledger> {
    let file: SnapshotFile =
        serde_json::from_str(json).context("Failed to parse snapshot JSON")?;

    let mut ledger = Ledger::new();

    for source in file.income {
        ledger.add_income(source)?;
    }
    for asset in file.assets {
        ledger.add_asset(asset)?;
    }
    for debt in file.debts {
        ledger.add_debt(debt)?;
    }
    for expense in file.expenses {
        ledger.add_expense(expense)?;
    }

    Ok(ledger)
}

/// Serialize the four ledgers to a JSON string (for clipboard-style export).
pub fn export_json(ledger: &Ledger) -> Result<String> {
    let file = SnapshotFile {
        income: ledger.income().to_vec(),
        assets: ledger.assets().to_vec(),
        debts: ledger.debts().to_vec(),
        expenses: ledger.expenses().to_vec(),
    };
    serde_json::to_string_pretty(&file).context("Failed to serialize snapshot")
}

// ============================================================================
// TESTS
// ============================================================================

use anyhow::{bail, Result};
use std::env;
use std::path::Path;

// Use library instead of local modules
use fintrack::{
    load_snapshot, months_to_target, report, save_snapshot, Ledger, MonthsToTarget,
    DEFAULT_MAX_MONTHS,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("dashboard") => run_dashboard(args.get(2).map(String::as_str)),
        Some("export") => run_export(args.get(2).map(String::as_str)),
        Some("project") => run_project(&args[2..]),
        Some("goal") => run_goal(&args[2..]),
        Some(other) => {
            print_usage();
            bail!("Unknown command: {}", other);
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  fintrack [dashboard] [snapshot.json]   Print the dashboard (sample data if no file)");
    eprintln!("  fintrack export <snapshot.json>        Write the sample ledger as a snapshot file");
    eprintln!("  fintrack project <start> <monthly> <rate%> <months>");
    eprintln!("  fintrack goal <start> <target> <monthly> <rate%>");
}

/// Load the ledger from a snapshot file, or fall back to the sample data.
fn load_ledger(path: Option<&str>) -> Result<Ledger> {
    match path {
        Some(path) => {
            if !Path::new(path).exists() {
                bail!("Snapshot file not found: {}", path);
            }
            load_snapshot(path)
        }
        None => Ok(Ledger::sample()),
    }
}

fn run_dashboard(path: Option<&str>) -> Result<()> {
    let ledger = load_ledger(path)?;
    let snapshot = ledger.snapshot();

    print!("{}", report::render_dashboard(&snapshot));
    Ok(())
}

fn run_export(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        print_usage();
        bail!("export needs a target path");
    };

    let ledger = Ledger::sample();
    save_snapshot(&ledger, path)?;
    println!("✓ Wrote sample snapshot to {}", path);
    Ok(())
}

fn parse_number(args: &[String], index: usize, name: &str) -> Result<f64> {
    let Some(raw) = args.get(index) else {
        print_usage();
        bail!("Missing argument: {}", name);
    };
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{} must be a number, got '{}'", name, raw))
}

fn run_project(args: &[String]) -> Result<()> {
    let starting = parse_number(args, 0, "start")?;
    let monthly = parse_number(args, 1, "monthly contribution")?;
    let rate = parse_number(args, 2, "annual growth rate")?;
    let months = parse_number(args, 3, "horizon months")? as u32;

    print!("{}", report::render_projection(starting, monthly, rate, months));
    Ok(())
}

fn run_goal(args: &[String]) -> Result<()> {
    let starting = parse_number(args, 0, "start")?;
    let target = parse_number(args, 1, "target")?;
    let monthly = parse_number(args, 2, "monthly contribution")?;
    let rate = parse_number(args, 3, "annual growth rate")?;

    println!(
        "🎯 Goal: {} → {}, {} /mo at {}%/yr",
        report::format_currency(starting),
        report::format_currency(target),
        report::format_currency(monthly),
        rate
    );

    match months_to_target(starting, target, monthly, rate, DEFAULT_MAX_MONTHS) {
        MonthsToTarget::Reached(0) => println!("✓ Already there."),
        MonthsToTarget::Reached(months) => {
            println!(
                "✓ Reached in {} months ({} years, {} months)",
                months,
                months / 12,
                months % 12
            );
        }
        MonthsToTarget::Unreachable => {
            println!(
                "✗ Not reachable within {} months — increase savings or growth.",
                DEFAULT_MAX_MONTHS
            );
        }
    }

    Ok(())
}

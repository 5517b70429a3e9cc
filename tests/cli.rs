use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::path::Path;
use tempfile::TempDir;

fn networth(dir: &Path) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("networth")?;
    cmd.env("NETWORTH_CLI_DATA_DIR", dir).env_remove("RUST_LOG");
    Ok(cmd)
}

fn initialized() -> Result<TempDir, Box<dyn Error>> {
    let dir = TempDir::new()?;
    networth(dir.path())?.arg("init").assert().success();
    Ok(dir)
}

fn with_paycheck(dir: &Path) -> Result<(), Box<dyn Error>> {
    networth(dir)?
        .args(["income", "add", "Salary", "2000", "-f", "monthly"])
        .assert()
        .success();
    networth(dir)?
        .args(["allocation", "add", "Salary", "401k", "10"])
        .assert()
        .success();
    networth(dir)?
        .args(["allocation", "add", "Salary", "Brokerage", "20%"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn init_creates_data_directory() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    networth(dir.path())?
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").is_dir());
    Ok(())
}

#[test]
fn accounts_sum_to_net_worth() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["account", "add", "Checking", "-b", "1500"])
        .assert()
        .success();
    networth(dir.path())?
        .args(["account", "add", "Visa", "-t", "credit", "-b", "250"])
        .assert()
        .success();

    networth(dir.path())?
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NET WORTH")
                .and(predicate::str::contains("-$250.00"))
                .and(predicate::str::contains("$1250.00")),
        );
    Ok(())
}

#[test]
fn duplicate_account_name_fails() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["account", "add", "Savings", "-t", "savings"])
        .assert()
        .success();
    networth(dir.path())?
        .args(["account", "add", "savings"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn rate_uses_primary_paycheck_allocations() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    with_paycheck(dir.path())?;

    networth(dir.path())?
        .args(["project", "rate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly net worth increase: $600.00"));
    Ok(())
}

#[test]
fn rate_without_paycheck_is_zero() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["project", "rate"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("No paycheck income source")
                .and(predicate::str::contains("$0.00")),
        );
    Ok(())
}

#[test]
fn year_projection_exports_csv() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    with_paycheck(dir.path())?;
    networth(dir.path())?
        .args(["snapshot", "record", "10000", "-d", "2024-01-01"])
        .assert()
        .success();

    let table = dir.path().join("projection.csv");
    let chart = dir.path().join("chart.csv");
    networth(dir.path())?
        .args(["project", "year", "2024", "-o"])
        .arg(&table)
        .arg("--chart")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Worth Projection 2024"));

    let table = std::fs::read_to_string(&table)?;
    assert!(table.starts_with("Month,Date,Start,Change,Windfalls,End"));
    assert_eq!(table.lines().count(), 13);

    let chart = std::fs::read_to_string(&chart)?;
    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines[0], "date,net_worth");
    assert_eq!(lines.len(), 14);
    assert!(lines[1].starts_with("2024-01-01,10000"));
    Ok(())
}

#[test]
fn year_outside_calendar_range_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["project", "year", "200000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("200000000"));
    Ok(())
}

#[test]
fn rolling_without_history_is_projected() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["account", "add", "Checking", "-b", "1000"])
        .assert()
        .success();

    let output = networth(dir.path())?
        .args(["project", "rolling", "-d", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    assert!(output.contains("Net Worth, last 5 days"));
    assert!(output.contains("Projected"));
    assert_eq!(output.matches("$1000.00").count(), 5);
    Ok(())
}

#[test]
fn rolling_with_recent_snapshots_is_recorded() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    let today = chrono::Local::now().date_naive();
    for offset in 0..4 {
        let date = today - chrono::Duration::days(offset);
        networth(dir.path())?
            .args(["snapshot", "record", "2500", "-d"])
            .arg(date.format("%Y-%m-%d").to_string())
            .assert()
            .success();
    }

    networth(dir.path())?
        .args(["project", "rolling", "--days", "6"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Recorded history (4 snapshots)")
                .and(predicate::str::contains("$2500.00")),
        );
    Ok(())
}

#[test]
fn rolling_window_bounds_are_enforced() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    for days in ["0", "200000000"] {
        networth(dir.path())?
            .args(["project", "rolling", "--days", days])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--days"));
    }
    Ok(())
}

#[test]
fn snapshots_are_listed_by_date() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["snapshot", "record", "900", "-d", "2024-03-02"])
        .assert()
        .success();
    networth(dir.path())?
        .args(["snapshot", "record", "800", "-d", "2024-03-01"])
        .assert()
        .success();
    // Same day again replaces the earlier value
    networth(dir.path())?
        .args(["snapshot", "record", "950", "-d", "2024-03-02"])
        .assert()
        .success();

    let output = networth(dir.path())?
        .args(["snapshot", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let first = output.find("2024-03-01").ok_or("missing first snapshot")?;
    let second = output.find("2024-03-02").ok_or("missing second snapshot")?;
    assert!(first < second);
    assert!(output.contains("$950.00"));
    assert!(!output.contains("$900.00"));
    Ok(())
}

#[test]
fn goal_already_met() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["account", "add", "Brokerage", "-t", "investment", "-b", "5000"])
        .assert()
        .success();

    networth(dir.path())?
        .args(["goal", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already met"));
    Ok(())
}

#[test]
fn goal_out_of_reach() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["goal", "1000000", "-y", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not reached"));
    Ok(())
}

#[test]
fn audit_log_records_changes() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["account", "add", "Checking"])
        .assert()
        .success();
    networth(dir.path())?
        .args(["account", "set-balance", "Checking", "42"])
        .assert()
        .success();

    networth(dir.path())?
        .args(["audit"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CREATE")
                .and(predicate::str::contains("UPDATE"))
                .and(predicate::str::contains("Checking")),
        );
    Ok(())
}

#[test]
fn invalid_date_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = initialized()?;
    networth(dir.path())?
        .args(["windfall", "add", "Bonus", "500", "2024-13-40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
    Ok(())
}

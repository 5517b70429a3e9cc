//! Projection service
//!
//! The boundary between persisted data and the pure projection engine. Loads
//! entities from storage, converts `Money` and `NaiveDate` values into the
//! plain `f64` and ISO-string rows the engine expects, and runs it.
//!
//! Loading never fails from the caller's point of view: a repository error
//! is logged with `tracing::warn!` and replaced by zero or an empty list, so
//! a damaged file degrades the projection instead of aborting it.

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::error::NetWorthResult;
use crate::models::{BudgetAllocation, IncomeSource, NetWorthSnapshot, Transaction, Windfall};
use crate::projection::{
    build_year_projection, compute_monthly_accrual_rate, estimate_goal,
    reconcile_rolling_history, AllocationRow, GoalEstimate, IncomeRow, ProjectionInput,
    RollingHistory, SnapshotRow, TransactionRow, WindfallRow, YearProjection, MAX_GOAL_YEARS,
    MAX_ROLLING_DAYS,
};
use crate::storage::Storage;

use super::account::AccountService;
use super::income::IncomeService;
use super::snapshot::SnapshotService;

const ISO_DATE: &str = "%Y-%m-%d";

pub struct ProjectionService<'a> {
    storage: &'a Storage,
    clock: &'a dyn Clock,
}

impl<'a> ProjectionService<'a> {
    pub fn new(storage: &'a Storage, clock: &'a dyn Clock) -> Self {
        Self { storage, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Expected monthly increase in net worth from the primary paycheck
    pub fn monthly_increase(&self) -> f64 {
        or_default(self.load_rate_inputs(), "paycheck and allocations")
            .map(|(income, allocations)| compute_monthly_accrual_rate(Some(&income), &allocations))
            .unwrap_or(0.0)
    }

    /// Live sum of account balances
    pub fn current_net_worth(&self) -> f64 {
        or_default(
            AccountService::new(self.storage)
                .current_net_worth()
                .map(|m| m.to_f64()),
            "account balances",
        )
    }

    /// Gather everything a year projection needs from storage
    pub fn projection_input(&self, year: i32) -> ProjectionInput {
        self.input_with_rate(year, self.monthly_increase(), self.current_net_worth())
    }

    /// Twelve-month projection for `year`
    pub fn year_projection(&self, year: i32) -> YearProjection {
        build_year_projection(&self.projection_input(year))
    }

    /// Recorded or synthetic series for the trailing `days` days, with
    /// `days` capped at `MAX_ROLLING_DAYS`
    pub fn rolling_history(&self, days: u32) -> RollingHistory {
        let days = days.min(MAX_ROLLING_DAYS);
        let today = self.today();
        let recent = or_default(
            SnapshotService::new(self.storage).list_recent(days, today),
            "recent net worth history",
        );
        let rows: Vec<SnapshotRow> = recent.iter().map(snapshot_row).collect();

        reconcile_rolling_history(
            self.current_net_worth(),
            self.monthly_increase(),
            &rows,
            days as usize,
            today,
        )
    }

    /// When projected net worth first reaches `target`, looking `years`
    /// calendar years ahead starting with the current one
    pub fn goal(&self, target: f64, years: u32) -> GoalEstimate {
        let rate = self.monthly_increase();
        let current = self.current_net_worth();
        let first_year = self.today().year();

        let projections: Vec<YearProjection> = (0..years.clamp(1, MAX_GOAL_YEARS) as i32)
            .map(|offset| {
                build_year_projection(&self.input_with_rate(first_year + offset, rate, current))
            })
            .collect();

        estimate_goal(current, &projections, target, self.today())
    }

    fn input_with_rate(&self, year: i32, rate: f64, current: f64) -> ProjectionInput {
        let history = or_default(self.storage.history.get_all(), "net worth history");
        let windfalls = or_default(self.storage.windfalls.get_all(), "windfalls");
        let transactions = or_default(self.storage.transactions.get_by_year(year), "transactions");

        ProjectionInput::new(year, rate, current, self.today())
            .with_history(history.iter().map(snapshot_row).collect())
            .with_windfalls(windfalls.iter().map(windfall_row).collect())
            .with_transactions(transactions.iter().map(transaction_row).collect())
    }

    fn load_rate_inputs(&self) -> NetWorthResult<Option<(IncomeRow, Vec<AllocationRow>)>> {
        let income = IncomeService::new(self.storage);
        let Some(paycheck) = income.primary_paycheck()? else {
            return Ok(None);
        };

        let allocations = income
            .list_allocations(Some(paycheck.id))?
            .iter()
            .map(allocation_row)
            .collect();

        Ok(Some((income_row(&paycheck), allocations)))
    }
}

fn or_default<T: Default>(result: NetWorthResult<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load {}; using empty default", what);
            T::default()
        }
    }
}

fn income_row(source: &IncomeSource) -> IncomeRow {
    IncomeRow {
        amount: source.amount.to_f64(),
        frequency: source.frequency,
    }
}

fn allocation_row(allocation: &BudgetAllocation) -> AllocationRow {
    AllocationRow {
        unit: allocation.unit,
        value: allocation.value.to_f64(),
        increases_net_worth: allocation.increases_net_worth,
    }
}

fn windfall_row(windfall: &Windfall) -> WindfallRow {
    WindfallRow {
        name: windfall.name.clone(),
        amount: windfall.amount.to_f64(),
        date: windfall.date.format(ISO_DATE).to_string(),
    }
}

fn transaction_row(txn: &Transaction) -> TransactionRow {
    TransactionRow {
        amount: txn.amount.to_f64(),
        date: txn.date.format(ISO_DATE).to_string(),
        kind: txn.kind,
    }
}

fn snapshot_row(snapshot: &NetWorthSnapshot) -> SnapshotRow {
    SnapshotRow::new(
        snapshot.date.format(ISO_DATE).to_string(),
        snapshot.net_worth.to_f64(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::paths::NetWorthPaths;
    use crate::models::{
        AccountType, AllocationUnit, IncomeType, Money, PayFrequency, TransactionKind,
        WindfallType,
    };
    use crate::projection::{SeriesSource, StartAnchor};
    use crate::services::{TransactionService, WindfallService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NetWorthPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed_paycheck(storage: &Storage) {
        let income = IncomeService::new(storage);
        let source = income
            .add_source(
                "Payroll",
                Money::from_dollars(2000),
                PayFrequency::Monthly,
                IncomeType::Paycheck,
            )
            .unwrap();
        income
            .add_allocation(
                source.id,
                "401k",
                AllocationUnit::Percentage,
                Money::from_dollars(10),
                true,
            )
            .unwrap();
        income
            .add_allocation(
                source.id,
                "Brokerage",
                AllocationUnit::Percentage,
                Money::from_dollars(20),
                true,
            )
            .unwrap();
        income
            .add_allocation(
                source.id,
                "Rent",
                AllocationUnit::Fixed,
                Money::from_dollars(900),
                false,
            )
            .unwrap();
    }

    #[test]
    fn test_monthly_increase_without_paycheck_is_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 1, 10));
        let service = ProjectionService::new(&storage, &clock);

        assert_eq!(service.monthly_increase(), 0.0);
    }

    #[test]
    fn test_monthly_increase_from_stored_allocations() {
        let (_temp_dir, storage) = create_test_storage();
        seed_paycheck(&storage);
        let clock = FixedClock(date(2024, 1, 10));
        let service = ProjectionService::new(&storage, &clock);

        assert_eq!(service.monthly_increase(), 600.0);
    }

    #[test]
    fn test_year_projection_folds_stored_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let clock = FixedClock(date(2024, 1, 10));

        WindfallService::new(&storage)
            .add("Bonus", Money::from_dollars(5000), date(2024, 3, 10), WindfallType::Bonus)
            .unwrap();
        let txns = TransactionService::new(&storage);
        txns.add("Side gig", Money::from_dollars(1000), date(2024, 3, 5), TransactionKind::Income, &[])
            .unwrap();
        txns.add("Repairs", Money::from_dollars(300), date(2024, 3, 20), TransactionKind::Expense, &[])
            .unwrap();

        let projection = ProjectionService::new(&storage, &clock).year_projection(2024);
        assert_eq!(projection.monthly_data[2].change, 5700.0);
        assert_eq!(projection.monthly_data[2].windfalls, 5000.0);
    }

    #[test]
    fn test_january_snapshot_anchors_year() {
        let (_temp_dir, storage) = create_test_storage();
        seed_paycheck(&storage);
        AccountService::new(&storage)
            .create("Checking", AccountType::Checking, Money::from_dollars(12000))
            .unwrap();
        SnapshotService::new(&storage)
            .record(date(2024, 1, 15), Money::from_dollars(50000))
            .unwrap();

        let clock = FixedClock(date(2024, 6, 1));
        let projection = ProjectionService::new(&storage, &clock).year_projection(2024);

        assert_eq!(projection.monthly_data[0].start_total, 50000.0);
        assert_eq!(
            projection.anchor,
            StartAnchor::Snapshot {
                date: "2024-01-15".into()
            }
        );
    }

    #[test]
    fn test_rolling_history_falls_back_to_projection() {
        let (_temp_dir, storage) = create_test_storage();
        seed_paycheck(&storage);
        AccountService::new(&storage)
            .create("Checking", AccountType::Checking, Money::from_dollars(10000))
            .unwrap();

        let clock = FixedClock(date(2024, 2, 20));
        let rolling = ProjectionService::new(&storage, &clock).rolling_history(30);

        assert_eq!(rolling.source, SeriesSource::Projected);
        assert_eq!(rolling.points.len(), 30);
        assert_eq!(rolling.points[0].net_worth, 10000.0);
        assert_eq!(rolling.points[1].net_worth, 10020.0);
    }

    #[test]
    fn test_rolling_history_uses_recorded_snapshots() {
        let (_temp_dir, storage) = create_test_storage();
        let snapshots = SnapshotService::new(&storage);
        for day in 1..=16 {
            snapshots
                .record(date(2024, 2, day), Money::from_dollars(100))
                .unwrap();
        }

        let clock = FixedClock(date(2024, 2, 20));
        let rolling = ProjectionService::new(&storage, &clock).rolling_history(30);

        assert_eq!(rolling.source, SeriesSource::Recorded);
        assert_eq!(rolling.points.len(), 16);
        assert_eq!(rolling.points[0].date, "2024-02-01");
    }

    #[test]
    fn test_rolling_history_caps_window() {
        let (_temp_dir, storage) = create_test_storage();

        let clock = FixedClock(date(2024, 2, 20));
        let rolling = ProjectionService::new(&storage, &clock).rolling_history(200_000_000);

        assert_eq!(rolling.source, SeriesSource::Projected);
        assert_eq!(rolling.points.len(), MAX_ROLLING_DAYS as usize);
    }

    #[test]
    fn test_rolling_history_near_last_date() {
        let (_temp_dir, storage) = create_test_storage();

        let clock = FixedClock(NaiveDate::MAX);
        let rolling = ProjectionService::new(&storage, &clock).rolling_history(30);

        assert_eq!(rolling.points.len(), 1);
    }

    #[test]
    fn test_goal_spans_years() {
        let (_temp_dir, storage) = create_test_storage();
        seed_paycheck(&storage);
        AccountService::new(&storage)
            .create("Checking", AccountType::Checking, Money::from_dollars(10000))
            .unwrap();

        let clock = FixedClock(date(2024, 12, 5));
        let service = ProjectionService::new(&storage, &clock);

        // December 2024 starts at 10000 and ends at 10600
        match service.goal(11000.0, 2) {
            GoalEstimate::Reached { month, .. } => assert_eq!(month, "2025-01-01"),
            other => panic!("expected goal to be reached, got {:?}", other),
        }
        assert!(matches!(
            service.goal(1_000_000.0, 1),
            GoalEstimate::NotReached { .. }
        ));
    }
}

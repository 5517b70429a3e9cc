//! Net worth snapshot service
//!
//! Records the user's net worth for a calendar day. Recording twice for the
//! same day replaces the earlier value and is audited as an update.

use chrono::{Duration, NaiveDate};

use crate::audit::EntityType;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{Money, NetWorthSnapshot};
use crate::storage::Storage;

use super::account::AccountService;

pub struct SnapshotService<'a> {
    storage: &'a Storage,
}

impl<'a> SnapshotService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record `net_worth` for `date`, replacing any existing snapshot for that day
    pub fn record(&self, date: NaiveDate, net_worth: Money) -> NetWorthResult<NetWorthSnapshot> {
        let mut snapshot = NetWorthSnapshot::new(date, net_worth);

        let previous = self.storage.history.get(date)?;
        if let Some(existing) = &previous {
            snapshot.id = existing.id;
        }

        self.storage.history.upsert(snapshot.clone())?;
        self.storage.history.save()?;

        let label = Some(date.format("%Y-%m-%d").to_string());
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::NetWorthSnapshot,
                snapshot.id.to_string(),
                label,
                &before,
                &snapshot,
                Some(format!(
                    "net_worth: {} -> {}",
                    before.net_worth, snapshot.net_worth
                )),
            )?,
            None => self.storage.log_create(
                EntityType::NetWorthSnapshot,
                snapshot.id.to_string(),
                label,
                &snapshot,
            )?,
        }

        Ok(snapshot)
    }

    /// Record the live sum of account balances as the snapshot for `today`
    pub fn capture(&self, today: NaiveDate) -> NetWorthResult<NetWorthSnapshot> {
        let net_worth = AccountService::new(self.storage).current_net_worth()?;
        self.record(today, net_worth)
    }

    /// Every snapshot, oldest first
    pub fn list(&self) -> NetWorthResult<Vec<NetWorthSnapshot>> {
        self.storage.history.get_all()
    }

    /// Snapshots from the trailing `days` days ending at `today`, inclusive
    pub fn list_recent(&self, days: u32, today: NaiveDate) -> NetWorthResult<Vec<NetWorthSnapshot>> {
        if days == 0 {
            return Ok(Vec::new());
        }

        let start = today
            .checked_sub_signed(Duration::days(i64::from(days) - 1))
            .ok_or_else(|| {
                NetWorthError::Validation(format!("Window of {} days is out of range", days))
            })?;

        self.storage.history.get_range(start, today)
    }
}

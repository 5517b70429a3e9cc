//! Net worth snapshot model
//!
//! A snapshot records the user's net worth on one calendar day. There is at
//! most one snapshot per date; recording again for the same date replaces it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::SnapshotId;
use super::money::Money;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthSnapshot {
    pub id: SnapshotId,
    pub date: NaiveDate,
    pub net_worth: Money,
    pub recorded_at: DateTime<Utc>,
}

impl NetWorthSnapshot {
    pub fn new(date: NaiveDate, net_worth: Money) -> Self {
        Self {
            id: SnapshotId::new(),
            date,
            net_worth,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let snapshot = NetWorthSnapshot::new(date, Money::from_dollars(50000));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"date\":\"2024-01-15\""));
        assert!(json.contains("\"net_worth\":5000000"));
    }
}

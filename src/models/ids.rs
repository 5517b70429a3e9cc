//! Typed UUID identifiers
//!
//! Each entity family gets its own newtype. IDs display in a short prefixed
//! form (`acc-1a2b3c4d`) that users can type back on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.trim();
                Uuid::parse_str(s.strip_prefix($prefix).unwrap_or(s)).map(Self)
            }

            /// Whether a user-typed identifier refers to this ID.
            ///
            /// Accepts the short display form, a bare UUID prefix of at
            /// least 4 hex digits, or the full UUID, case-insensitively.
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim().to_lowercase();
                let s = s.strip_prefix($prefix).unwrap_or(&s);
                s.len() >= 4 && self.0.to_string().starts_with(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let full = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &full[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(IncomeSourceId, "inc-");
define_id!(AllocationId, "alc-");
define_id!(WindfallId, "wnd-");
define_id!(TransactionId, "txn-");
define_id!(SnapshotId, "snp-");

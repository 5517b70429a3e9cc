//! Audit trail for data changes
//!
//! Every create, update and delete made through the service layer is
//! appended to `audit.log` as one JSON object per line (JSONL), with the
//! entity's state before and after the change.
//!
//! ```rust,ignore
//! use networth::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Windfall,
//!     windfall.id.to_string(),
//!     Some(windfall.name.clone()),
//!     &windfall,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

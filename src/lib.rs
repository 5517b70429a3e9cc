//! networth - terminal net-worth tracker with year-by-year projections
//!
//! Users record accounts, income sources with budget allocations, one-off
//! windfalls, ledger transactions and dated net-worth snapshots. From those
//! the crate projects net worth month by month for any calendar year, picks
//! between recorded and synthetic history for a short rolling chart, and
//! estimates when a target net worth will be reached.
//!
//! # Architecture
//!
//! - `projection`: the pure projection engine (no I/O, no errors)
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: persisted entities and the `Money` fixed-point type
//! - `storage`: JSON file repositories with atomic writes
//! - `audit`: JSONL audit trail of every change
//! - `services`: business logic, and the boundary into the engine
//! - `reports` / `display`: terminal and CSV output
//! - `cli`: clap subcommands and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use networth::clock::SystemClock;
//! use networth::config::paths::NetWorthPaths;
//! use networth::services::ProjectionService;
//! use networth::storage::Storage;
//!
//! let mut storage = Storage::new(NetWorthPaths::new()?)?;
//! storage.load_all()?;
//! let projection = ProjectionService::new(&storage, &SystemClock).year_projection(2025);
//! println!("{}", projection.final_total);
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod projection;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{NetWorthError, NetWorthResult};

//! Daily Time Record reconciliation engine.
//!
//! This crate turns raw time-clock punches, an employee's shift schedule and
//! independently approved exception records (locators, leave, travel orders,
//! compensatory days off, punch corrections and holidays) into one computed
//! attendance row per calendar day, plus range totals.
//!
//! The core in [`calculation`] is a pure function of its input. Data stores
//! sit behind [`source::AttendanceSource`], and [`ingest`] turns their raw,
//! inconsistently-named rows into the canonical [`models`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod source;
pub mod telemetry;

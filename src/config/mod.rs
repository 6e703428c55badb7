//! Configuration loading and management for the reconciliation engine.
//!
//! This module loads the engine configuration from YAML files: the date
//! range cap, the lateness and remark switches, the working-day length used
//! for totals, and the fallback punch windows.
//!
//! # Example
//!
//! ```no_run
//! use dtr_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Minutes per day: {}", loader.config().totals.minutes_per_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineFile, LatenessConfig, RangeConfig, RemarksConfig, TotalsConfig,
    WindowsFile, default_fallback_windows,
};

//! Configuration types for the reconciliation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section has a
//! default matching the files shipped in `config/default/`.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, Slot, SlotValues, TimeWindow};

/// Limits on the requested date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeConfig {
    /// Maximum number of dates a single run may cover.
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

fn default_max_days() -> u32 {
    366
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

/// Lateness switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LatenessConfig {
    /// When true, slots filled from an out-of-office record or fix log never
    /// count as late.
    #[serde(default)]
    pub exempt_backfilled: bool,
}

/// Remark switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RemarksConfig {
    /// When true, an approved out-of-office record, compensatory day off or
    /// fix log also suppresses the `Absent` remark.
    #[serde(default)]
    pub absent_suppressed_by_any_exception: bool,
    /// Whether to add the `File a locator` hint on partially punched days.
    /// Off unless asked for.
    #[serde(default)]
    pub suggest_locator: bool,
}

/// Settings for the range totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TotalsConfig {
    /// Minutes in one working day, used to express lateness in days.
    #[serde(default = "default_minutes_per_day")]
    pub minutes_per_day: u32,
}

fn default_minutes_per_day() -> u32 {
    480
}

impl Default for TotalsConfig {
    fn default() -> Self {
        Self {
            minutes_per_day: default_minutes_per_day(),
        }
    }
}

/// The `engine.yaml` file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineFile {
    /// Range limits.
    #[serde(default)]
    pub range: RangeConfig,
    /// Lateness switches.
    #[serde(default)]
    pub lateness: LatenessConfig,
    /// Remark switches.
    #[serde(default)]
    pub remarks: RemarksConfig,
    /// Totals settings.
    #[serde(default)]
    pub totals: TotalsConfig,
}

/// The `windows.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowsFile {
    /// Punch windows for active slots without an explicit window.
    pub fallback_windows: SlotValues<TimeWindow>,
}

/// The punch windows used when a shift leaves a slot's window unset.
pub fn default_fallback_windows() -> SlotValues<TimeWindow> {
    let window = |start: (u32, u32), end: (u32, u32)| {
        TimeWindow::new(
            ClockTime::from_hm(start.0, start.1).unwrap_or(ClockTime::MIDNIGHT),
            ClockTime::from_hm(end.0, end.1).unwrap_or(ClockTime::MIDNIGHT),
        )
    };
    SlotValues {
        am_in: window((4, 0), (11, 59)),
        am_out: window((11, 0), (12, 30)),
        pm_in: window((12, 31), (14, 0)),
        pm_out: window((14, 1), (23, 59)),
    }
}

/// Complete engine configuration.
///
/// # Example
///
/// ```
/// use dtr_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.range.max_days, 366);
/// assert_eq!(config.totals.minutes_per_day, 480);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Range limits.
    pub range: RangeConfig,
    /// Lateness switches.
    pub lateness: LatenessConfig,
    /// Remark switches.
    pub remarks: RemarksConfig,
    /// Totals settings.
    pub totals: TotalsConfig,
    /// Fallback punch windows per slot.
    pub fallback_windows: SlotValues<TimeWindow>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            range: RangeConfig::default(),
            lateness: LatenessConfig::default(),
            remarks: RemarksConfig::default(),
            totals: TotalsConfig::default(),
            fallback_windows: default_fallback_windows(),
        }
    }
}

impl EngineConfig {
    /// Combines the two configuration files.
    pub fn from_files(engine: EngineFile, windows: WindowsFile) -> Self {
        Self {
            range: engine.range,
            lateness: engine.lateness,
            remarks: engine.remarks,
            totals: engine.totals,
            fallback_windows: windows.fallback_windows,
        }
    }

    /// Checks values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for a zero range cap, a zero
    /// working-day length, or a fallback window whose start is after its end.
    pub fn validate(&self) -> EngineResult<()> {
        if self.range.max_days == 0 {
            return Err(EngineError::InvalidConfig {
                field: "range.max_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.totals.minutes_per_day == 0 {
            return Err(EngineError::InvalidConfig {
                field: "totals.minutes_per_day".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        for slot in Slot::ALL {
            let window = self.fallback_windows.get(slot);
            if !window.is_ordered() {
                return Err(EngineError::InvalidConfig {
                    field: format!("fallback_windows.{}", slot_key(slot)),
                    message: format!("window {} starts after it ends", window),
                });
            }
        }
        Ok(())
    }
}

fn slot_key(slot: Slot) -> &'static str {
    match slot {
        Slot::AmIn => "am_in",
        Slot::AmOut => "am_out",
        Slot::PmIn => "pm_in",
        Slot::PmOut => "pm_out",
    }
}

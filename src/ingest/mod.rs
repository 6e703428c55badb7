//! Ingestion of raw upstream rows into the engine's canonical records.
//!
//! The stores behind the engine disagree on field names and formats. All of
//! that tolerance lives here: each adapter reads the names a store is known
//! to use, keeps what parses and drops (with a `debug` event) what does not.
//! Nothing past this module looks at raw field names.
//!
//! # Example
//!
//! ```
//! use dtr_engine::ingest::RawBundle;
//!
//! let bundle = RawBundle::from_json(r#"{
//!     "employee": { "user_id": "42" },
//!     "punches": [ { "USERID": "42", "CHECKTIME": "2025-01-15 08:01:00" } ],
//!     "shifts": [ { "shiftname": "Regular", "shifttimemode": "AMPM",
//!                   "shift_checkin": "08:00", "shift_checkout": "17:00" } ]
//! }"#).unwrap();
//! assert_eq!(bundle.punches.len(), 1);
//! ```

mod exceptions;
mod fields;
mod punch;
mod shift;

pub use exceptions::{record_from_value, records_from_values};
pub use fields::{clock, date, dates, decimal, field, flag, lookup, owner, scalar_text, text};
pub use punch::{punch_from_value, punches_from_values};
pub use shift::{assignment_from_value, shift_from_values};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeKeys, ExceptionKind, ExceptionRecord};
use crate::source::InMemorySource;

/// Raw rows for one employee, as exported from the upstream stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBundle {
    /// The employee the rows were exported for.
    #[serde(default)]
    pub employee: EmployeeKeys,
    /// Time-clock rows.
    #[serde(default)]
    pub punches: Vec<Value>,
    /// Shift assignment rows, most recent first.
    #[serde(default)]
    pub shifts: Vec<Value>,
    /// Out-of-office authorization rows.
    #[serde(default)]
    pub locators: Vec<Value>,
    /// Leave application rows.
    #[serde(default)]
    pub leaves: Vec<Value>,
    /// Travel order rows.
    #[serde(default)]
    pub travels: Vec<Value>,
    /// Compensatory day-off rows.
    #[serde(default)]
    pub cdos: Vec<Value>,
    /// Punch correction rows.
    #[serde(default)]
    pub fix_logs: Vec<Value>,
    /// Holiday rows.
    #[serde(default)]
    pub holidays: Vec<Value>,
}

impl RawBundle {
    /// Parses a bundle from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ingest`] when the text is not a JSON object of
    /// the expected shape.
    pub fn from_json(text: &str) -> EngineResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            warn!(error = %e, "rejecting attendance bundle");
            EngineError::Ingest {
                kind: "bundle".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// The raw rows of one exception kind.
    pub fn rows(&self, kind: ExceptionKind) -> &[Value] {
        match kind {
            ExceptionKind::OutOfOffice => &self.locators,
            ExceptionKind::Leave => &self.leaves,
            ExceptionKind::Travel => &self.travels,
            ExceptionKind::CompDayOff => &self.cdos,
            ExceptionKind::FixLog => &self.fix_logs,
            ExceptionKind::Holiday => &self.holidays,
        }
    }

    /// Every readable exception record in the bundle.
    pub fn exception_records(&self) -> Vec<ExceptionRecord> {
        ExceptionKind::ALL
            .into_iter()
            .flat_map(|kind| records_from_values(kind, self.rows(kind)))
            .collect()
    }

    /// Ingests every row into an [`InMemorySource`].
    pub fn to_source(&self) -> InMemorySource {
        let punches = punches_from_values(&self.punches);
        let shift = shift_from_values(&self.shifts);
        let records = self.exception_records();

        info!(
            employee = self.employee.display_key(),
            punches = punches.len(),
            scheduled = shift.is_some(),
            records = records.len(),
            "ingested attendance bundle"
        );

        InMemorySource::new()
            .with_punches(punches)
            .with_shift(shift)
            .with_records(records)
    }
}

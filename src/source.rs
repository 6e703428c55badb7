//! The seam between the engine and the stores that hold attendance data.
//!
//! Punch logs, schedules and the approval stores live behind
//! [`AttendanceSource`]. [`Reconciler`] pulls everything one run needs from a
//! source and hands it to the pure [`reconcile`] pipeline.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calculation::{ReconcileInput, reconcile};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{
    EmployeeKeys, ExceptionKind, ExceptionRecord, PunchEvent, ReconcileOutcome, ShiftWindow,
};

/// A provider of the data one reconciliation run reads.
///
/// Implementations may over-deliver: the engine filters punches and records
/// by employee and date itself.
pub trait AttendanceSource {
    /// Punches recorded for the employee between `from` and `to`.
    fn punch_events(
        &self,
        keys: &EmployeeKeys,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<PunchEvent>>;

    /// The employee's schedule; `Ok(None)` means the employee is unscheduled.
    fn shift_window(&self, keys: &EmployeeKeys) -> EngineResult<Option<ShiftWindow>>;

    /// Records of one kind that may touch the employee between `from` and `to`.
    fn exception_records(
        &self,
        kind: ExceptionKind,
        keys: &EmployeeKeys,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<ExceptionRecord>>;
}

/// An [`AttendanceSource`] over records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    punches: Vec<PunchEvent>,
    shift: Option<ShiftWindow>,
    records: Vec<ExceptionRecord>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds punch events.
    pub fn with_punches(mut self, punches: impl IntoIterator<Item = PunchEvent>) -> Self {
        self.punches.extend(punches);
        self
    }

    /// Sets the schedule returned for every employee.
    pub fn with_shift(mut self, shift: Option<ShiftWindow>) -> Self {
        self.shift = shift;
        self
    }

    /// Adds exception records of any kind.
    pub fn with_records(mut self, records: impl IntoIterator<Item = ExceptionRecord>) -> Self {
        self.records.extend(records);
        self
    }
}

impl AttendanceSource for InMemorySource {
    fn punch_events(
        &self,
        keys: &EmployeeKeys,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> EngineResult<Vec<PunchEvent>> {
        Ok(self
            .punches
            .iter()
            .filter(|punch| keys.is_key(&punch.employee_key))
            .cloned()
            .collect())
    }

    fn shift_window(&self, _keys: &EmployeeKeys) -> EngineResult<Option<ShiftWindow>> {
        Ok(self.shift.clone())
    }

    fn exception_records(
        &self,
        kind: ExceptionKind,
        keys: &EmployeeKeys,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<ExceptionRecord>> {
        // Recurring holidays carry a date from their first year.
        let in_range = |record: &ExceptionRecord| {
            kind == ExceptionKind::Holiday
                || record.dates.iter().any(|date| (from..=to).contains(date))
        };
        Ok(self
            .records
            .iter()
            .filter(|record| record.kind() == kind && record.belongs_to(keys) && in_range(record))
            .cloned()
            .collect())
    }
}

/// Runs reconciliations against a source with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Reconciler {
    config: EngineConfig,
}

impl Reconciler {
    /// Creates a reconciler.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fetches the employee's punches, schedule and records of every kind,
    /// then reconciles the range.
    ///
    /// # Errors
    ///
    /// Propagates the first error the source returns, and
    /// [`crate::error::EngineError::InvalidDateRange`] for a bad range.
    pub fn run<S: AttendanceSource + ?Sized>(
        &self,
        source: &S,
        keys: &EmployeeKeys,
        from: NaiveDate,
        to: NaiveDate,
        today: NaiveDate,
    ) -> EngineResult<ReconcileOutcome> {
        let punches = source.punch_events(keys, from, to)?;
        let shift = source.shift_window(keys)?;

        let mut exceptions = Vec::new();
        for kind in ExceptionKind::ALL {
            let records = source.exception_records(kind, keys, from, to)?;
            debug!(%kind, count = records.len(), "fetched exception records");
            exceptions.extend(records);
        }

        info!(
            employee = keys.display_key(),
            %from,
            %to,
            punches = punches.len(),
            exceptions = exceptions.len(),
            "inputs fetched"
        );

        let input = ReconcileInput {
            employee: keys.clone(),
            date_from: from,
            date_to: to,
            today,
            shift,
            punches,
            exceptions,
        };
        reconcile(&input, &self.config)
    }
}

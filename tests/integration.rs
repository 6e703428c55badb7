//! Integration tests for the DTR reconciliation engine.
//!
//! This suite drives the public API end to end:
//! - Loading the shipped configuration from disk
//! - Ingesting raw upstream rows into a source
//! - A full week of mixed attendance through the reconciler
//! - Exception precedence and backfill provenance
//! - Holidays, recurring holidays and work suspensions
//! - Property tests over random punch sets

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use dtr_engine::calculation::{ReconcileInput, WORK_SUSPENSION_LABEL, reconcile};
use dtr_engine::config::{ConfigLoader, EngineConfig};
use dtr_engine::error::EngineError;
use dtr_engine::ingest::RawBundle;
use dtr_engine::models::{
    ClockTime, CreditRule, EmployeeKeys, ExceptionKind, Provenance, PunchEvent,
    ReconcileOutcome, ShiftAssignment, ShiftMode, ShiftWindow, Slot,
};
use dtr_engine::source::Reconciler;

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> EngineConfig {
    ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .into_config()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

fn employee() -> EmployeeKeys {
    EmployeeKeys::new(Some("emp-9".to_string()), Some("42".to_string()))
}

fn punch_rows(stamps: &[&str]) -> Vec<Value> {
    stamps
        .iter()
        .map(|stamp| json!({ "USERID": "42", "CHECKTIME": stamp }))
        .collect()
}

fn four_slot_rows() -> Vec<Value> {
    vec![
        json!({ "shiftname": "Regular", "shifttimemode": "AM",
                "shift_checkin": "08:00:00", "shift_checkout": "12:00:00" }),
        json!({ "shiftname": "Regular", "shifttimemode": "PM",
                "shift_checkin": "13:00:00", "shift_checkout": "17:00:00" }),
    ]
}

fn whole_day_shift() -> ShiftWindow {
    ShiftWindow::from_assignments(&[ShiftAssignment {
        name: "Flexi".to_string(),
        mode: ShiftMode::Ampm,
        check_in: Some(t("08:00")),
        check_in_window: None,
        check_out: Some(t("17:00")),
        check_out_window: None,
        credit: None,
    }])
    .unwrap()
}

fn run_bundle(
    bundle: &RawBundle,
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
) -> ReconcileOutcome {
    run_bundle_with(load_config(), bundle, from, to, today)
}

fn run_bundle_with(
    config: EngineConfig,
    bundle: &RawBundle,
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
) -> ReconcileOutcome {
    Reconciler::new(config)
        .run(&bundle.to_source(), &bundle.employee, from, to, today)
        .expect("reconciliation failed")
}

// 2025-01-13 is a Monday.
fn week_bundle() -> RawBundle {
    RawBundle {
        employee: employee(),
        punches: punch_rows(&[
            // Monday: all four slots, ten minutes late in the morning.
            "2025-01-13 08:10:00",
            "2025-01-13 12:05:00",
            "2025-01-13 12:50:00",
            "2025-01-13 17:00:00",
            // Tuesday: arrival and departure only.
            "2025-01-14 08:00:00",
            "2025-01-14 17:00:00",
            // Thursday: morning only, afternoon on locator.
            "2025-01-16 08:00:00",
            "2025-01-16 12:00:00",
        ]),
        shifts: four_slot_rows(),
        locators: vec![json!({
            "LOCNO": "L-1", "LOCUSERID": "42", "LOCDATE": "2025-01-16",
            "LOCSTATUS": "Approved",
            "loctimedeparture": "13:00:00", "loctimearrival": "17:30:00",
        })],
        leaves: vec![json!({
            "leaveno": "LV-1", "emp_objid": "emp-9", "LEAVEDATE": "2025-01-15",
            "leavestatus": "Approved", "leave_type_name": "Vacation Leave",
        })],
        ..RawBundle::default()
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_defaults() {
    assert_eq!(load_config(), EngineConfig::default());
}

#[test]
fn test_missing_config_directory() {
    let result = ConfigLoader::load("./config/does-not-exist");
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}

// =============================================================================
// A Full Week
// =============================================================================

#[test]
fn test_week_rows_and_remarks() {
    let outcome = run_bundle(
        &week_bundle(),
        make_date(2025, 1, 13),
        make_date(2025, 1, 19),
        make_date(2025, 1, 31),
    );
    let report = outcome.report().expect("employee should be scheduled");
    assert_eq!(report.shift_name, "Regular");
    assert_eq!(report.rows.len(), 7);

    let monday = &report.rows[0];
    assert_eq!(monday.late_minutes, 10);
    assert_eq!(monday.day_credit, decimal("1.00"));
    assert_eq!(monday.credit_rule, CreditRule::CompleteHalves);
    assert!(monday.remarks.is_empty());

    let tuesday = &report.rows[1];
    assert_eq!(tuesday.day_credit, decimal("1.00"));
    assert_eq!(tuesday.credit_rule, CreditRule::SpanningInOut);
    assert!(tuesday.remarks.is_empty());

    let wednesday = &report.rows[2];
    assert_eq!(wednesday.day_credit, Decimal::ZERO);
    assert_eq!(wednesday.remarks, vec!["Leave (LV-1)"]);

    let thursday = &report.rows[3];
    assert_eq!(*thursday.slots.get(Slot::PmIn), Some(t("13:00")));
    assert_eq!(*thursday.slots.get(Slot::PmOut), Some(t("17:00")));
    assert_eq!(*thursday.provenance.get(Slot::PmOut), Provenance::OutOfOffice);
    assert_eq!(*thursday.provenance.get(Slot::AmIn), Provenance::None);
    assert_eq!(thursday.day_credit, decimal("1.00"));
    assert_eq!(
        thursday.credit_rule,
        CreditRule::Override(ExceptionKind::OutOfOffice)
    );
    assert_eq!(thursday.remarks, vec!["Locator (L-1)"]);

    let friday = &report.rows[4];
    assert_eq!(friday.remarks, vec!["Absent"]);
    assert_eq!(friday.day_credit, Decimal::ZERO);

    for weekend in &report.rows[5..] {
        assert!(weekend.is_weekend);
        assert_eq!(weekend.remarks, vec!["Weekend"]);
        assert_eq!(weekend.credit_rule, CreditRule::NonWorkingDay);
    }
}

#[test]
fn test_default_remarks_use_the_core_vocabulary() {
    let outcome = run_bundle(
        &week_bundle(),
        make_date(2025, 1, 13),
        make_date(2025, 1, 19),
        make_date(2025, 1, 31),
    );
    let remarks: Vec<_> = outcome
        .report()
        .unwrap()
        .rows
        .iter()
        .map(|row| row.remarks.clone())
        .collect();
    assert_eq!(
        remarks,
        vec![
            vec![],
            vec![],
            vec!["Leave (LV-1)".to_string()],
            vec!["Locator (L-1)".to_string()],
            vec!["Absent".to_string()],
            vec!["Weekend".to_string()],
            vec!["Weekend".to_string()],
        ]
    );
}

#[test]
fn test_locator_hint_when_enabled() {
    let mut config = load_config();
    config.remarks.suggest_locator = true;
    let outcome = run_bundle_with(
        config,
        &week_bundle(),
        make_date(2025, 1, 13),
        make_date(2025, 1, 19),
        make_date(2025, 1, 31),
    );
    let rows = &outcome.report().unwrap().rows;
    assert_eq!(rows[1].remarks, vec!["File a locator"]);
    // Thursday's gap is covered by the locator.
    assert_eq!(rows[3].remarks, vec!["Locator (L-1)"]);
    assert!(rows[0].remarks.is_empty());
}

#[test]
fn test_week_totals() {
    let outcome = run_bundle(
        &week_bundle(),
        make_date(2025, 1, 13),
        make_date(2025, 1, 19),
        make_date(2025, 1, 31),
    );
    let totals = &outcome.report().unwrap().totals;
    assert_eq!(totals.late_minutes, 10);
    assert_eq!(totals.day_credit, decimal("3.00"));
    assert_eq!(totals.late_equivalent_days, decimal("0.02"));
    assert_eq!(totals.net_days, decimal("2.9792"));
    assert_eq!(totals.records.leave, 1);
    assert_eq!(totals.records.out_of_office, 1);
    assert_eq!(totals.records.travel, 0);
}

#[test]
fn test_today_and_future_dates_are_not_absent() {
    let outcome = run_bundle(
        &week_bundle(),
        make_date(2025, 1, 17),
        make_date(2025, 1, 17),
        make_date(2025, 1, 17),
    );
    assert!(outcome.report().unwrap().rows[0].remarks.is_empty());
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let outcome = run_bundle(
        &week_bundle(),
        make_date(2025, 1, 13),
        make_date(2025, 1, 13),
        make_date(2025, 1, 31),
    );
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "scheduled");
    assert_eq!(value["rows"][0]["slots"]["am_in"], "08:10");
    assert_eq!(value["rows"][0]["date"], "2025-01-13");
}

// =============================================================================
// Exceptions and Backfill
// =============================================================================

#[test]
fn test_travel_outranks_locator_and_fix_log() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        locators: vec![json!({
            "LOCNO": "L-2", "LOCUSERID": "42", "LOCDATE": "2025-01-15",
            "LOCSTATUS": "Approved",
            "loctimedeparture": "07:00", "loctimearrival": "18:00",
        })],
        travels: vec![json!({
            "travel_no": "TO-1", "status": "Approved",
            "travel_dates": "2025-01-15,2025-01-16",
            "employees": [{ "USERID": "42" }, { "USERID": "77" }],
        })],
        fix_logs: vec![json!({
            "fixid": "FX-1", "USERID": "42", "checktimedate": "2025-01-15",
            "fixstatus": "Approved", "am_checkin": "08:00",
        })],
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 15),
        make_date(2025, 1, 16),
        make_date(2025, 1, 31),
    );
    let rows = &outcome.report().unwrap().rows;

    let wednesday = &rows[0];
    assert_eq!(wednesday.credit_rule, CreditRule::Override(ExceptionKind::Travel));
    assert_eq!(wednesday.remarks, vec!["Locator (L-2)", "Travel (TO-1)"]);
    // The locator spans every nominal time, so it wins over the fix log.
    for slot in Slot::ALL {
        assert_eq!(*wednesday.provenance.get(slot), Provenance::OutOfOffice);
    }

    let thursday = &rows[1];
    assert_eq!(thursday.day_credit, decimal("1.00"));
    assert_eq!(thursday.remarks, vec!["Travel (TO-1)"]);
    assert!(thursday.slots.is_empty());
}

#[test]
fn test_pending_fix_log_changes_nothing_but_remarks() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        fix_logs: vec![json!({
            "fixid": "FX-2", "USERID": "42", "checktimedate": "2025-01-15",
            "fixstatus": "For Approval",
            "am_checkin": "08:00", "am_checkout": "12:00",
            "pm_checkin": "13:00", "pm_checkout": "17:00",
        })],
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 15),
        make_date(2025, 1, 15),
        make_date(2025, 1, 31),
    );
    let row = &outcome.report().unwrap().rows[0];
    assert!(row.slots.is_empty());
    assert_eq!(row.day_credit, Decimal::ZERO);
    assert_eq!(row.remarks, vec!["Absent", "FixOnProcess"]);
    assert_eq!(outcome.report().unwrap().totals.records.fix_log, 0);
}

#[test]
fn test_approved_fix_log_fills_missing_slots() {
    let bundle = RawBundle {
        employee: employee(),
        punches: punch_rows(&["2025-01-15 08:00:00", "2025-01-15 12:01:00"]),
        shifts: four_slot_rows(),
        fix_logs: vec![json!({
            "fixid": "FX-3", "USERID": "42", "checktimedate": "2025-01-15",
            "fixstatus": "Approved",
            "am_checkin": "07:00", "pm_checkin": "13:05", "pm_checkout": "16:50",
        })],
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 15),
        make_date(2025, 1, 15),
        make_date(2025, 1, 31),
    );
    let row = &outcome.report().unwrap().rows[0];
    // The raw punch is kept over the correction.
    assert_eq!(*row.slots.get(Slot::AmIn), Some(t("08:00")));
    assert_eq!(*row.slots.get(Slot::PmIn), Some(t("13:05")));
    assert_eq!(*row.provenance.get(Slot::PmOut), Provenance::FixLog);
    // Backfilled values still count toward lateness: 5 late + 10 early.
    assert_eq!(row.late_minutes, 15);
    assert_eq!(row.credit_rule, CreditRule::Override(ExceptionKind::FixLog));
    assert_eq!(row.remarks, vec!["LogsFixed"]);
}

#[test]
fn test_backfilled_slots_exempt_when_configured() {
    let mut config = load_config();
    config.lateness.exempt_backfilled = true;

    let bundle = RawBundle {
        employee: employee(),
        punches: punch_rows(&["2025-01-15 08:00:00", "2025-01-15 12:01:00"]),
        shifts: four_slot_rows(),
        fix_logs: vec![json!({
            "fixid": "FX-4", "USERID": "42", "checktimedate": "2025-01-15",
            "fixstatus": "Approved", "pm_checkin": "13:05", "pm_checkout": "16:50",
        })],
        ..RawBundle::default()
    };
    let outcome = Reconciler::new(config)
        .run(
            &bundle.to_source(),
            &bundle.employee,
            make_date(2025, 1, 15),
            make_date(2025, 1, 15),
            make_date(2025, 1, 31),
        )
        .unwrap();
    assert_eq!(outcome.report().unwrap().rows[0].late_minutes, 0);
}

#[test]
fn test_other_employees_records_are_ignored() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        punches: vec![json!({ "USERID": "77", "CHECKTIME": "2025-01-15 08:00:00" })],
        leaves: vec![json!({
            "leaveno": "LV-9", "USERID": "77", "LEAVEDATE": "2025-01-15",
            "leavestatus": "Approved",
        })],
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 15),
        make_date(2025, 1, 15),
        make_date(2025, 1, 31),
    );
    let row = &outcome.report().unwrap().rows[0];
    assert_eq!(row.remarks, vec!["Absent"]);
    assert!(row.matched_records.is_empty());
}

// =============================================================================
// Holidays
// =============================================================================

#[test]
fn test_recurring_holiday_matches_in_later_years() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        holidays: vec![
            json!({ "HOLIDAYDATE": "2019-12-25T00:00:00.000Z",
                    "HOLIDAYNAME": "Christmas Day", "ISRECURRING": 1 }),
            json!({ "HOLIDAYDATE": "2019-12-26", "HOLIDAYNAME": "Special Day" }),
        ],
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 12, 25),
        make_date(2025, 12, 26),
        make_date(2026, 1, 31),
    );
    let rows = &outcome.report().unwrap().rows;
    assert_eq!(rows[0].holiday_names, vec!["Christmas Day"]);
    assert_eq!(rows[0].holiday_label.as_deref(), Some("Christmas Day"));
    assert_eq!(rows[0].credit_rule, CreditRule::NonWorkingDay);
    assert!(rows[0].remarks.is_empty());
    assert!(rows[1].holiday_names.is_empty());
    assert_eq!(rows[1].remarks, vec!["Absent"]);
}

#[test]
fn test_backend_holiday_rows_with_lowercase_columns() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        punches: punch_rows(&[
            "2025-01-01 08:00:00",
            "2025-01-01 12:00:00",
            "2025-01-01 13:00:00",
            "2025-01-01 17:00:00",
        ]),
        holidays: vec![
            json!({ "holidayid": 3, "holidayname": "Christmas Day",
                    "holidaydate": "2019-12-25", "isrecurring": 1, "status": 1 }),
            json!({ "holidayid": 4, "holidayname": "New Year (withdrawn)",
                    "holidaydate": "2025-01-01", "isrecurring": 0, "status": 0 }),
        ],
        ..RawBundle::default()
    };

    let outcome = run_bundle(
        &bundle,
        make_date(2024, 12, 25),
        make_date(2024, 12, 25),
        make_date(2025, 1, 31),
    );
    let christmas = &outcome.report().unwrap().rows[0];
    assert_eq!(christmas.holiday_names, vec!["Christmas Day"]);
    assert_eq!(christmas.credit_rule, CreditRule::NonWorkingDay);

    // The deactivated holiday is ignored: the day is worked and credited.
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 1),
        make_date(2025, 1, 1),
        make_date(2025, 1, 31),
    );
    let new_year = &outcome.report().unwrap().rows[0];
    assert!(new_year.holiday_names.is_empty());
    assert_eq!(new_year.day_credit, decimal("1.00"));
    assert_eq!(new_year.credit_rule, CreditRule::CompleteHalves);
}

#[test]
fn test_work_suspension_label() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        holidays: vec![
            json!({ "holiday_date": "2025-07-24", "holiday_name": "Typhoon" }),
            json!({ "holiday_date": "2025-07-24", "holiday_name": "Work Suspension (PM)" }),
        ],
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 7, 24),
        make_date(2025, 7, 24),
        make_date(2025, 8, 1),
    );
    let row = &outcome.report().unwrap().rows[0];
    assert_eq!(row.holiday_label.as_deref(), Some(WORK_SUSPENSION_LABEL));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_unscheduled_employee() {
    let bundle = RawBundle {
        employee: employee(),
        punches: punch_rows(&["2025-01-15 08:00:00"]),
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 13),
        make_date(2025, 1, 19),
        make_date(2025, 1, 31),
    );
    assert_eq!(
        outcome,
        ReconcileOutcome::Unscheduled {
            employee: employee()
        }
    );
}

#[test]
fn test_range_over_cap_is_rejected() {
    let result = Reconciler::new(load_config()).run(
        &week_bundle().to_source(),
        &employee(),
        make_date(2024, 1, 1),
        make_date(2025, 6, 30),
        make_date(2025, 7, 1),
    );
    assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
}

#[test]
fn test_inverted_range_is_rejected() {
    let result = Reconciler::new(load_config()).run(
        &week_bundle().to_source(),
        &employee(),
        make_date(2025, 2, 1),
        make_date(2025, 1, 1),
        make_date(2025, 7, 1),
    );
    assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
}

#[test]
fn test_malformed_bundle() {
    let result = RawBundle::from_json(r#"{ "punches": "not a list" }"#);
    assert!(matches!(result, Err(EngineError::Ingest { .. })));
}

#[test]
fn test_malformed_punches_are_skipped() {
    let bundle = RawBundle {
        employee: employee(),
        shifts: four_slot_rows(),
        punches: punch_rows(&["garbage", "2025-01-15 25:99:00", "2025-01-15 08:00:00"]),
        ..RawBundle::default()
    };
    let outcome = run_bundle(
        &bundle,
        make_date(2025, 1, 15),
        make_date(2025, 1, 15),
        make_date(2025, 1, 31),
    );
    let row = &outcome.report().unwrap().rows[0];
    assert_eq!(row.slots.count_present(), 1);
}

// =============================================================================
// Properties
// =============================================================================

// A Monday.
fn base_date() -> NaiveDate {
    make_date(2025, 3, 3)
}

fn punch_strategy() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((0i64..21, 0u32..1440), 0..60)
}

fn input_for(shift: ShiftWindow, punches: &[(i64, u32)], days: i64) -> ReconcileInput {
    let from = base_date();
    ReconcileInput {
        employee: employee(),
        date_from: from,
        date_to: from + Duration::days(days - 1),
        today: from + Duration::days(10),
        shift: Some(shift),
        punches: punches
            .iter()
            .map(|(offset, minute)| {
                let date = from + Duration::days(*offset);
                PunchEvent::new(
                    "42",
                    format!("{} {:02}:{:02}:00", date, minute / 60, minute % 60),
                )
            })
            .collect(),
        exceptions: vec![],
    }
}

fn four_slot_shift() -> ShiftWindow {
    let rows = four_slot_rows();
    dtr_engine::ingest::shift_from_values(&rows).unwrap()
}

proptest! {
    #[test]
    fn prop_one_ascending_row_per_date(punches in punch_strategy(), days in 1i64..21) {
        let input = input_for(four_slot_shift(), &punches, days);
        let outcome = reconcile(&input, &EngineConfig::default()).unwrap();
        let rows = &outcome.report().unwrap().rows;
        prop_assert_eq!(rows.len() as i64, days);
        prop_assert_eq!(rows[0].date, input.date_from);
        for pair in rows.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test]
    fn prop_credit_is_bounded(punches in punch_strategy()) {
        let input = input_for(four_slot_shift(), &punches, 21);
        let outcome = reconcile(&input, &EngineConfig::default()).unwrap();
        let report = outcome.report().unwrap();
        for row in &report.rows {
            prop_assert!(row.day_credit >= Decimal::ZERO);
            prop_assert!(row.day_credit <= Decimal::ONE);
            if row.is_weekend {
                prop_assert_eq!(row.remarks.first().map(String::as_str), Some("Weekend"));
            }
        }
        prop_assert!(report.totals.net_days >= Decimal::ZERO);
    }

    #[test]
    fn prop_inactive_slots_stay_empty(punches in punch_strategy()) {
        let input = input_for(whole_day_shift(), &punches, 21);
        let outcome = reconcile(&input, &EngineConfig::default()).unwrap();
        for row in &outcome.report().unwrap().rows {
            prop_assert_eq!(*row.slots.get(Slot::AmOut), None);
            prop_assert_eq!(*row.slots.get(Slot::PmIn), None);
            prop_assert!(matches!(
                row.credit_rule,
                CreditRule::CombinedMode | CreditRule::NonWorkingDay
            ));
        }
    }

    #[test]
    fn prop_reconcile_is_idempotent(punches in punch_strategy()) {
        let input = input_for(four_slot_shift(), &punches, 14);
        let config = EngineConfig::default();
        let first = reconcile(&input, &config).unwrap();
        let second = reconcile(&input, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_punch_order_does_not_matter(punches in punch_strategy()) {
        let mut reversed = punches.clone();
        reversed.reverse();
        let config = EngineConfig::default();
        let a = reconcile(&input_for(four_slot_shift(), &punches, 14), &config).unwrap();
        let b = reconcile(&input_for(four_slot_shift(), &reversed, 14), &config).unwrap();
        prop_assert_eq!(a, b);
    }
}

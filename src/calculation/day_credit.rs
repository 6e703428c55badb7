//! Day-credit calculation.
//!
//! Converts a day's final slot values into a fraction of a day. The formula
//! is evaluated in a fixed order and the first matching branch wins:
//!
//! 1. Combined-mode shifts earn half the AMPM weight per present endpoint.
//! 2. Five special cases reward one complete half plus a dangling punch on
//!    the other half.
//! 3. Otherwise each complete half earns its own weight.
//!
//! An approved travel, compensatory day off, fix log or out-of-office record
//! then forces exactly one day. A weekend or holiday that earned nothing from
//! the formula stays at zero.

use rust_decimal::Decimal;

use crate::models::{ClockTime, CreditRule, ExceptionKind, ShiftWindow, Slot, SlotValues};

/// A day credit and the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditOutcome {
    /// Credit rounded to two decimal places.
    pub credit: Decimal,
    /// Which branch applied.
    pub rule: CreditRule,
}

impl CreditOutcome {
    fn new(credit: Decimal, rule: CreditRule) -> Self {
        Self {
            credit: credit.round_dp(2),
            rule,
        }
    }
}

/// The day-level facts that can override the slot formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayContext {
    /// Highest-precedence approved record kind granting a full day, if any.
    pub override_kind: Option<ExceptionKind>,
    /// Saturday, Sunday or a holiday.
    pub non_working_day: bool,
}

/// Applies the slot formula (steps 1 to 3) without any override.
///
/// # Arguments
///
/// * `slots` - Final (post-backfill) slot values
/// * `shift` - The employee's schedule
///
/// # Returns
///
/// The credit, rounded to two decimals, and the branch that produced it.
pub fn compute_base_credit(
    slots: &SlotValues<Option<ClockTime>>,
    shift: &ShiftWindow,
) -> CreditOutcome {
    let present = |slot: Slot| shift.is_active(slot) && slots.get(slot).is_some();
    let weights = shift.credits;

    if shift.combined_mode() {
        let half = weights.ampm / Decimal::TWO;
        let mut credit = Decimal::ZERO;
        if present(Slot::AmIn) {
            credit += half;
        }
        if present(Slot::PmOut) {
            credit += half;
        }
        return CreditOutcome::new(credit, CreditRule::CombinedMode);
    }

    let am_in = present(Slot::AmIn);
    let am_out = present(Slot::AmOut);
    let pm_in = present(Slot::PmIn);
    let pm_out = present(Slot::PmOut);
    let am_complete = am_in && am_out;
    let pm_complete = pm_in && pm_out;
    let both = weights.am + weights.pm;

    if am_in && !am_out && pm_complete {
        return CreditOutcome::new(both, CreditRule::AmInWithPmPair);
    }
    if am_complete && !pm_in && pm_out {
        return CreditOutcome::new(both, CreditRule::AmPairWithPmOut);
    }
    if !am_in && am_out && pm_complete {
        return CreditOutcome::new(both / Decimal::TWO, CreditRule::AmOutWithPmPair);
    }
    if am_complete && pm_in && !pm_out {
        return CreditOutcome::new(both / Decimal::TWO, CreditRule::AmPairWithPmIn);
    }
    if am_in && !am_out && !pm_in && pm_out {
        return CreditOutcome::new(both, CreditRule::SpanningInOut);
    }

    let mut credit = Decimal::ZERO;
    if am_complete {
        credit += weights.am;
    }
    if pm_complete {
        credit += weights.pm;
    }
    CreditOutcome::new(credit, CreditRule::CompleteHalves)
}

/// Computes the final day credit.
///
/// An override always yields exactly `1.00`. Without one, a non-working day
/// whose formula credit is zero records [`CreditRule::NonWorkingDay`].
///
/// # Example
///
/// ```
/// use dtr_engine::calculation::{DayContext, compute_day_credit};
/// use dtr_engine::models::{
///     CreditRule, ExceptionKind, ShiftAssignment, ShiftMode, ShiftWindow, SlotValues,
/// };
/// use rust_decimal::Decimal;
///
/// let shift = ShiftWindow::from_assignments(&[ShiftAssignment {
///     name: "Regular".to_string(),
///     mode: ShiftMode::Ampm,
///     check_in: "08:00".parse().ok(),
///     check_in_window: None,
///     check_out: "17:00".parse().ok(),
///     check_out_window: None,
///     credit: None,
/// }])
/// .unwrap();
///
/// let slots = SlotValues { am_in: "08:00".parse().ok(), ..SlotValues::default() };
/// let plain = compute_day_credit(&slots, &shift, &DayContext::default());
/// assert_eq!(plain.credit, Decimal::new(50, 2));
///
/// let travel = DayContext { override_kind: Some(ExceptionKind::Travel), non_working_day: false };
/// let outcome = compute_day_credit(&slots, &shift, &travel);
/// assert_eq!(outcome.credit, Decimal::ONE);
/// assert_eq!(outcome.rule, CreditRule::Override(ExceptionKind::Travel));
/// ```
pub fn compute_day_credit(
    slots: &SlotValues<Option<ClockTime>>,
    shift: &ShiftWindow,
    day: &DayContext,
) -> CreditOutcome {
    if let Some(kind) = day.override_kind {
        return CreditOutcome::new(Decimal::ONE, CreditRule::Override(kind));
    }
    let base = compute_base_credit(slots, shift);
    if day.non_working_day && base.credit.is_zero() {
        return CreditOutcome::new(Decimal::ZERO, CreditRule::NonWorkingDay);
    }
    base
}

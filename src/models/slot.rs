//! The four daily time slots and a per-slot value container.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four time slots of a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Morning arrival.
    AmIn,
    /// Morning departure (lunch out).
    AmOut,
    /// Afternoon arrival (lunch in).
    PmIn,
    /// Afternoon departure.
    PmOut,
}

impl Slot {
    /// All slots in chronological order.
    pub const ALL: [Slot; 4] = [Slot::AmIn, Slot::AmOut, Slot::PmIn, Slot::PmOut];

    /// True for the arrival slots, where a later punch means lateness.
    pub fn is_check_in(self) -> bool {
        matches!(self, Slot::AmIn | Slot::PmIn)
    }

    /// True for the two morning slots.
    pub fn is_am(self) -> bool {
        matches!(self, Slot::AmIn | Slot::AmOut)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Slot::AmIn => "AM in",
            Slot::AmOut => "AM out",
            Slot::PmIn => "PM in",
            Slot::PmOut => "PM out",
        };
        f.write_str(label)
    }
}

/// One value per [`Slot`].
///
/// Used for schedules, captured times, provenance flags and fix-log
/// corrections alike.
///
/// # Example
///
/// ```
/// use dtr_engine::models::{Slot, SlotValues};
///
/// let mut captured: SlotValues<Option<u32>> = SlotValues::default();
/// *captured.get_mut(Slot::PmOut) = Some(1020);
/// assert_eq!(captured.iter().filter(|(_, v)| v.is_some()).count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotValues<T> {
    /// Morning arrival value.
    pub am_in: T,
    /// Morning departure value.
    pub am_out: T,
    /// Afternoon arrival value.
    pub pm_in: T,
    /// Afternoon departure value.
    pub pm_out: T,
}

impl<T> SlotValues<T> {
    /// Builds the container by evaluating `f` for every slot.
    pub fn from_fn(mut f: impl FnMut(Slot) -> T) -> Self {
        Self {
            am_in: f(Slot::AmIn),
            am_out: f(Slot::AmOut),
            pm_in: f(Slot::PmIn),
            pm_out: f(Slot::PmOut),
        }
    }

    /// Borrows the value for `slot`.
    pub fn get(&self, slot: Slot) -> &T {
        match slot {
            Slot::AmIn => &self.am_in,
            Slot::AmOut => &self.am_out,
            Slot::PmIn => &self.pm_in,
            Slot::PmOut => &self.pm_out,
        }
    }

    /// Mutably borrows the value for `slot`.
    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        match slot {
            Slot::AmIn => &mut self.am_in,
            Slot::AmOut => &mut self.am_out,
            Slot::PmIn => &mut self.pm_in,
            Slot::PmOut => &mut self.pm_out,
        }
    }

    /// Transforms every value, keeping the slot association.
    pub fn map<U>(&self, mut f: impl FnMut(Slot, &T) -> U) -> SlotValues<U> {
        SlotValues::from_fn(|slot| f(slot, self.get(slot)))
    }

    /// Iterates `(slot, value)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

impl<T> SlotValues<Option<T>> {
    /// Number of slots holding a value.
    pub fn count_present(&self) -> usize {
        self.iter().filter(|(_, value)| value.is_some()).count()
    }

    /// True when no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.count_present() == 0
    }
}

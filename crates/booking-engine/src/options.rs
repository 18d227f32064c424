//! Selector options derived from the full, unfiltered roster.
//!
//! These are computed once when the roster loads and are independent of the
//! current [`FilterSelection`](crate::selection::FilterSelection).

use chrono::NaiveDate;
use serde::Serialize;

use crate::roster::{Roster, TherapistId, TimeSlot};
use crate::selection::{HOUR_BLOCKS, SLOT_LENGTHS};

/// A labelled choice for a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> SelectOption<T> {
    fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One option per therapist, in roster order.
pub fn therapist_options(roster: &Roster) -> Vec<SelectOption<TherapistId>> {
    roster
        .therapists()
        .iter()
        .map(|t| SelectOption::new(t.name.clone(), t.id))
        .collect()
}

/// The distinct calendar dates across all slots, earliest first.
pub fn date_options(roster: &Roster) -> Vec<SelectOption<NaiveDate>> {
    let mut slots: Vec<&TimeSlot> = roster.all_slots().collect();
    slots.sort_by(|a, b| a.date_and_time.cmp(&b.date_and_time));

    let mut dates: Vec<NaiveDate> = slots.iter().map(|s| s.date()).collect();
    // Sorted, so duplicates are adjacent.
    dates.dedup();

    dates
        .into_iter()
        .map(|d| SelectOption::new(format_date_label(d), d))
        .collect()
}

/// The hour-of-day filter chips, e.g. `"9-10am"`, `"12-13pm"`.
pub fn hour_block_options() -> Vec<SelectOption<u32>> {
    HOUR_BLOCKS
        .iter()
        .map(|&h| SelectOption::new(format_hour_block_label(h), h))
        .collect()
}

/// The appointment-length toggles.
pub fn duration_options() -> Vec<SelectOption<u32>> {
    SLOT_LENGTHS
        .iter()
        .map(|&m| SelectOption::new(m.to_string(), m))
        .collect()
}

/// Display label for a date option, e.g. `"January 10 2024"`.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%B %d %Y").to_string()
}

/// Display label for an hour block; blocks that end before noon are `am`.
pub fn format_hour_block_label(hour: u32) -> String {
    let end = hour + 1;
    let suffix = if end < 12 { "am" } else { "pm" };
    format!("{hour}-{end}{suffix}")
}

/// Every option set a selector screen needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorOptions {
    pub therapists: Vec<SelectOption<TherapistId>>,
    pub dates: Vec<SelectOption<NaiveDate>>,
    pub hour_blocks: Vec<SelectOption<u32>>,
    pub durations: Vec<SelectOption<u32>>,
}

impl SelectorOptions {
    pub fn derive(roster: &Roster) -> Self {
        Self {
            therapists: therapist_options(roster),
            dates: date_options(roster),
            hour_blocks: hour_block_options(),
            durations: duration_options(),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

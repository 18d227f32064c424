//! The user's current filter choices and the transitions that change them.
//!
//! A [`FilterSelection`] is a plain value: the presentation layer owns it,
//! mutates it in response to user actions, and hands it to
//! [`resolve`](crate::resolve::resolve) whenever the user asks for results.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{BookingError, Result};
use crate::roster::TherapistId;

/// Hour-of-day blocks offered as a time-of-day filter.
pub const HOUR_BLOCKS: [u32; 8] = [9, 10, 11, 12, 13, 14, 15, 16];

/// Appointment lengths in minutes, smallest first.
pub const SLOT_LENGTHS: [u32; 2] = [30, 60];

/// Upper bound on how many therapists may be selected at once.
pub const MAX_THERAPISTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    therapist_ids: BTreeSet<TherapistId>,
    date: Option<NaiveDate>,
    hour_blocks: Vec<u32>,
    duration_minutes: u32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            therapist_ids: BTreeSet::new(),
            date: None,
            hour_blocks: Vec::new(),
            duration_minutes: SLOT_LENGTHS[0],
        }
    }
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn therapist_ids(&self) -> &BTreeSet<TherapistId> {
        &self.therapist_ids
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Selected hour blocks in the order they were toggled on.
    pub fn hour_blocks(&self) -> &[u32] {
        &self.hour_blocks
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn has_therapists(&self) -> bool {
        !self.therapist_ids.is_empty()
    }

    /// Replace the therapist selection.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::TooManyTherapists`] if more than
    /// [`MAX_THERAPISTS`] distinct ids are given; the selection is unchanged.
    pub fn set_therapists<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = TherapistId>,
    {
        let ids: BTreeSet<TherapistId> = ids.into_iter().collect();
        if ids.len() > MAX_THERAPISTS {
            return Err(BookingError::TooManyTherapists(ids.len()));
        }
        self.therapist_ids = ids;
        Ok(())
    }

    /// Add the therapist if absent, remove it if present.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::TooManyTherapists`] when adding would exceed
    /// [`MAX_THERAPISTS`].
    pub fn toggle_therapist(&mut self, id: TherapistId) -> Result<()> {
        if self.therapist_ids.remove(&id) {
            return Ok(());
        }
        if self.therapist_ids.len() >= MAX_THERAPISTS {
            return Err(BookingError::TooManyTherapists(self.therapist_ids.len() + 1));
        }
        self.therapist_ids.insert(id);
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    /// Remove the hour if selected, append it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidHourBlock`] if `hour` is not one of
    /// [`HOUR_BLOCKS`].
    pub fn toggle_hour_block(&mut self, hour: u32) -> Result<()> {
        if !HOUR_BLOCKS.contains(&hour) {
            return Err(BookingError::InvalidHourBlock(hour));
        }
        match self.hour_blocks.iter().position(|&h| h == hour) {
            Some(idx) => {
                self.hour_blocks.remove(idx);
            }
            None => self.hour_blocks.push(hour),
        }
        Ok(())
    }

    /// Replace the selected duration. There is always exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidDuration`] if `minutes` is not one of
    /// [`SLOT_LENGTHS`].
    pub fn select_duration(&mut self, minutes: u32) -> Result<()> {
        if !SLOT_LENGTHS.contains(&minutes) {
            return Err(BookingError::InvalidDuration(minutes));
        }
        self.duration_minutes = minutes;
        Ok(())
    }

    /// The exact instants a slot must start at to pass the hour filter.
    ///
    /// Empty when no hour block is selected. Also empty when hour blocks are
    /// selected but no date is, since there is no day to anchor them to; in
    /// that case [`FilterSelection::hour_filter_active`] is still true and no
    /// slot passes.
    pub fn target_timestamps(&self) -> BTreeSet<NaiveDateTime> {
        let Some(date) = self.date else {
            return BTreeSet::new();
        };
        self.hour_blocks
            .iter()
            .filter_map(|&h| NaiveTime::from_hms_opt(h, 0, 0))
            .map(|time| date.and_time(time))
            .collect()
    }

    pub fn hour_filter_active(&self) -> bool {
        !self.hour_blocks.is_empty()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

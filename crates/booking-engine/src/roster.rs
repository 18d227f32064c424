//! Therapists and their published time slots.
//!
//! The roster arrives as a JSON array from the data source:
//!
//! ```json
//! [{ "id": 1, "therapistName": "Ann", "timeSlots": [
//!     { "id": 1, "slotLength": 30, "dateAndTime": "2024-01-10T09:00:00" }
//! ]}]
//! ```
//!
//! Timestamps are kept as timezone-naive wall-clock values. A timestamp that
//! carries an offset keeps the wall-clock it was written with; the offset is
//! discarded, so the calendar date of a slot is always the date printed in
//! the payload.
//!
//! Decoding is lenient per entry: a therapist or slot that cannot be decoded
//! is logged and skipped, and the rest of the roster is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

pub type TherapistId = u32;
pub type SlotId = u32;

/// Wall-clock format used when timestamps are written back out. Fractional
/// seconds are only printed when present.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One bookable slot published by a therapist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Unique within the owning therapist.
    pub id: SlotId,
    /// Appointment length in minutes.
    pub slot_length: u32,
    #[serde(with = "naive_timestamp")]
    pub date_and_time: NaiveDateTime,
}

impl TimeSlot {
    pub fn date(&self) -> NaiveDate {
        self.date_and_time.date()
    }
}

/// A therapist and the slots they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: TherapistId,
    #[serde(rename = "therapistName")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub time_slots: Vec<TimeSlot>,
}

impl Therapist {
    /// First letter of each word in the name, e.g. `"Ann Lee"` → `"AL"`.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn lenient_slots<'de, D>(deserializer: D) -> std::result::Result<Vec<TimeSlot>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(decode_entries(raw, "time slot"))
}

/// Decode each entry on its own, dropping the ones that fail.
fn decode_entries<T>(raw: Vec<serde_json::Value>, what: &str) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
{
    raw.into_iter()
        .filter_map(|value| match T::deserialize(&value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, entry = %value, "skipping malformed {}", what);
                None
            }
        })
        .collect()
}

/// The full, unfiltered collection of therapists in payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    therapists: Vec<Therapist>,
}

impl Roster {
    pub fn new(therapists: Vec<Therapist>) -> Self {
        Self { therapists }
    }

    /// Decode a roster payload.
    ///
    /// Therapists missing `id` or `therapistName`, and slots missing a field
    /// or carrying an unparseable `dateAndTime`, are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidRoster`] if the payload is not a JSON
    /// array.
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(payload)
            .map_err(|e| BookingError::InvalidRoster(e.to_string()))?;
        Ok(Self::new(decode_entries(raw, "therapist")))
    }

    pub fn therapists(&self) -> &[Therapist] {
        &self.therapists
    }

    pub fn get(&self, id: TherapistId) -> Option<&Therapist> {
        self.therapists.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.therapists.is_empty()
    }

    pub fn len(&self) -> usize {
        self.therapists.len()
    }

    /// Every slot of every therapist, in roster then payload order.
    pub fn all_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.therapists.iter().flat_map(|t| t.time_slots.iter())
    }
}

impl From<Vec<Therapist>> for Roster {
    fn from(therapists: Vec<Therapist>) -> Self {
        Self::new(therapists)
    }
}

/// Parse a slot timestamp into its wall-clock value.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` (optionally with fractional seconds),
/// `YYYY-MM-DDTHH:MM`, the same with a space instead of `T`, and RFC 3339
/// strings with `Z` or a numeric offset.
///
/// # Errors
///
/// Returns [`BookingError::InvalidDatetime`] if none of the forms match.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    .ok_or_else(|| BookingError::InvalidDatetime(format!("'{}'", s)))
}

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`BookingError::InvalidDatetime`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| BookingError::InvalidDatetime(format!("'{}': {}", s.trim(), e)))
}

mod naive_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&dt.format(super::TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

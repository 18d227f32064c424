//! # booking-engine
//!
//! Deterministic availability resolution for booking a therapy appointment.
//!
//! Given a roster of therapists with their published time slots and a set
//! of user-chosen filters (therapists, date, hour blocks, duration), the
//! engine produces the bookable slots grouped per therapist in
//! chronological order. Every function here is pure apart from logging;
//! fetching the roster and rendering the output belong to the caller.
//!
//! ## Modules
//!
//! - [`roster`] — Therapists, time slots, and the JSON roster payload
//! - [`options`] — Therapist/date/hour/duration selector options derived from a roster
//! - [`selection`] — The user's filter selection and its transitions
//! - [`resolve`] — Filter, sort, and group slots for a selection
//! - [`session`] — Roster + selection + last result for one booking session
//! - [`error`] — Error types

pub mod error;
pub mod options;
pub mod resolve;
pub mod roster;
pub mod selection;
pub mod session;

pub use error::BookingError;
pub use options::{
    date_options, duration_options, format_date_label, format_hour_block_label,
    hour_block_options, therapist_options, SelectOption, SelectorOptions,
};
pub use resolve::{resolve, ResolvedResult, ResultGroup};
pub use roster::{parse_date, parse_timestamp, Roster, SlotId, Therapist, TherapistId, TimeSlot};
pub use selection::{FilterSelection, HOUR_BLOCKS, MAX_THERAPISTS, SLOT_LENGTHS};
pub use session::BookingSession;

//! Error types for booking-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid hour block: {0}")]
    InvalidHourBlock(u32),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(u32),

    #[error("Too many therapists selected: {0} (at most 5)")]
    TooManyTherapists(usize),
}

pub type Result<T> = std::result::Result<T, BookingError>;

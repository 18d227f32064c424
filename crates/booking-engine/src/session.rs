//! A single booking session: the loaded roster, the options derived from it,
//! the user's selection, and the most recent result.
//!
//! The session is owned by one thread and driven by discrete user actions.
//! Nothing is recomputed in the background: options are derived once when
//! the roster is installed, and results only change on [`BookingSession::resolve`].

use std::fmt::Display;

use crate::options::SelectorOptions;
use crate::resolve::{resolve, ResolvedResult};
use crate::roster::Roster;
use crate::selection::FilterSelection;

#[derive(Debug, Clone)]
pub struct BookingSession {
    roster: Roster,
    options: SelectorOptions,
    selection: FilterSelection,
    result: Option<ResolvedResult>,
}

impl BookingSession {
    pub fn new(roster: Roster) -> Self {
        let options = SelectorOptions::derive(&roster);
        tracing::debug!(
            therapists = options.therapists.len(),
            dates = options.dates.len(),
            "roster loaded"
        );
        Self {
            roster,
            options,
            selection: FilterSelection::new(),
            result: None,
        }
    }

    /// Start a session from the outcome of a roster fetch.
    ///
    /// A failed fetch is logged and the session continues with an empty
    /// roster for its whole lifetime.
    pub fn from_load<E: Display>(loaded: Result<Roster, E>) -> Self {
        match loaded {
            Ok(roster) => Self::new(roster),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load therapist roster; continuing with none");
                Self::new(Roster::default())
            }
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut FilterSelection {
        &mut self.selection
    }

    /// The result of the last resolution that ran, if any.
    pub fn result(&self) -> Option<&ResolvedResult> {
        self.result.as_ref()
    }

    /// Recompute the result from the current selection.
    ///
    /// Returns `false` and leaves the previous result in place when no
    /// therapist is selected.
    pub fn resolve(&mut self) -> bool {
        match resolve(&self.roster, &self.selection) {
            Some(result) => {
                tracing::debug!(
                    groups = result.groups().len(),
                    slots = result.slot_count(),
                    "resolved availability"
                );
                self.result = Some(result);
                true
            }
            None => {
                tracing::debug!("no therapist selected; keeping previous result");
                false
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Filter resolution: roster + selection → slots grouped by therapist.
//!
//! # Algorithm
//!
//! 1. Keep the therapists whose id is selected, in roster order.
//! 2. Combine the selected date with each selected hour block into exact
//!    target instants (see [`FilterSelection::target_timestamps`]).
//! 3. Keep a therapist's slot when its length equals the selected duration
//!    and, if any hour block is selected, it starts at one of the targets.
//! 4. Sort each therapist's kept slots by start time.
//! 5. Emit one group per selected therapist, including those left with no
//!    slots. Hiding empty groups is a display decision, see
//!    [`ResolvedResult::visible_groups`].
//!
//! Resolution is pure: identical inputs always produce identical output.

use serde::Serialize;

use crate::roster::{initials, Roster, Therapist, TherapistId, TimeSlot};
use crate::selection::FilterSelection;

/// The matching slots of one selected therapist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultGroup {
    pub therapist_id: TherapistId,
    pub therapist_name: String,
    /// Ascending by `date_and_time`.
    pub slots: Vec<TimeSlot>,
}

impl ResultGroup {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn initials(&self) -> String {
        initials(&self.therapist_name)
    }
}

/// Groups in roster order, one per selected therapist present in the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedResult {
    groups: Vec<ResultGroup>,
}

impl ResolvedResult {
    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    /// Groups with at least one slot.
    pub fn visible_groups(&self) -> impl Iterator<Item = &ResultGroup> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn group(&self, id: TherapistId) -> Option<&ResultGroup> {
        self.groups.iter().find(|g| g.therapist_id == id)
    }

    pub fn slot_count(&self) -> usize {
        self.groups.iter().map(|g| g.slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Resolve the selection against the roster.
///
/// Returns `None` when no therapist is selected; callers keep whatever
/// result they already had. Selected ids missing from the roster are
/// ignored.
///
/// # Examples
///
/// ```
/// use booking_engine::{resolve, FilterSelection, Roster};
///
/// let roster = Roster::from_json(r#"[{ "id": 1, "therapistName": "Ann", "timeSlots": [
///     { "id": 1, "slotLength": 30, "dateAndTime": "2024-01-10T09:00:00" },
///     { "id": 2, "slotLength": 60, "dateAndTime": "2024-01-10T10:00:00" }
/// ]}]"#).unwrap();
///
/// let mut selection = FilterSelection::new();
/// assert!(resolve(&roster, &selection).is_none());
///
/// selection.set_therapists([1]).unwrap();
/// let result = resolve(&roster, &selection).unwrap();
/// assert_eq!(result.groups()[0].slots.len(), 1);
/// assert_eq!(result.groups()[0].slots[0].id, 1);
/// ```
pub fn resolve(roster: &Roster, selection: &FilterSelection) -> Option<ResolvedResult> {
    if !selection.has_therapists() {
        return None;
    }

    let targets = selection.target_timestamps();
    let hour_filter = selection.hour_filter_active();
    let duration = selection.duration_minutes();

    let passes = |slot: &TimeSlot| {
        slot.slot_length == duration && (!hour_filter || targets.contains(&slot.date_and_time))
    };

    let groups = roster
        .therapists()
        .iter()
        .filter(|t| selection.therapist_ids().contains(&t.id))
        .map(|t| group_for(t, &passes))
        .collect();

    Some(ResolvedResult { groups })
}

fn group_for(therapist: &Therapist, passes: impl Fn(&TimeSlot) -> bool) -> ResultGroup {
    let mut slots: Vec<TimeSlot> = therapist
        .time_slots
        .iter()
        .filter(|s| passes(s))
        .cloned()
        .collect();
    // Stable, so slots sharing an instant keep payload order.
    slots.sort_by(|a, b| a.date_and_time.cmp(&b.date_and_time));

    ResultGroup {
        therapist_id: therapist.id,
        therapist_name: therapist.name.clone(),
        slots,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

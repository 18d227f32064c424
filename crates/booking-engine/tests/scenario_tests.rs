//! End-to-end scenarios over small rosters: decode, derive options, select,
//! resolve.

use booking_engine::{
    date_options, resolve, BookingSession, FilterSelection, Roster, TimeSlot,
};
use chrono::NaiveDate;

const ANN: &str = r#"[
    { "id": 1, "therapistName": "Ann", "timeSlots": [
        { "id": 1, "slotLength": 30, "dateAndTime": "2024-01-10T09:00:00" },
        { "id": 2, "slotLength": 60, "dateAndTime": "2024-01-10T10:00:00" }
    ]}
]"#;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn only_slot(slots: &[TimeSlot]) -> &TimeSlot {
    assert_eq!(slots.len(), 1, "expected exactly one slot, got {:?}", slots);
    &slots[0]
}

#[test]
fn thirty_minute_slots_without_time_filter() {
    let roster = Roster::from_json(ANN).unwrap();
    let mut selection = FilterSelection::new();
    selection.set_therapists([1]).unwrap();
    selection.select_duration(30).unwrap();

    let result = resolve(&roster, &selection).unwrap();

    assert_eq!(result.groups().len(), 1);
    let group = &result.groups()[0];
    assert_eq!(group.therapist_name, "Ann");
    let slot = only_slot(&group.slots);
    assert_eq!(slot.id, 1);
    assert_eq!(slot.date_and_time.format("%H:%M").to_string(), "09:00");
}

#[test]
fn date_and_hour_filter_hits_exact_slot() {
    let roster = Roster::from_json(ANN).unwrap();
    let mut selection = FilterSelection::new();
    selection.set_therapists([1]).unwrap();
    selection.select_date(jan(10));
    selection.toggle_hour_block(9).unwrap();

    let result = resolve(&roster, &selection).unwrap();
    assert_eq!(only_slot(&result.groups()[0].slots).id, 1);
}

#[test]
fn date_and_hour_filter_miss_keeps_empty_group() {
    let roster = Roster::from_json(ANN).unwrap();
    let mut selection = FilterSelection::new();
    selection.set_therapists([1]).unwrap();
    selection.select_date(jan(10));
    selection.toggle_hour_block(10).unwrap();

    let result = resolve(&roster, &selection).unwrap();
    assert_eq!(result.groups().len(), 1);
    assert_eq!(result.groups()[0].therapist_name, "Ann");
    assert!(result.groups()[0].slots.is_empty());
    assert_eq!(result.visible_groups().count(), 0);
}

#[test]
fn resolving_with_no_therapist_leaves_previous_result() {
    let mut session = BookingSession::new(Roster::from_json(ANN).unwrap());
    session.selection_mut().set_therapists([1]).unwrap();
    assert!(session.resolve());
    let snapshot = session.result().cloned();

    session.selection_mut().set_therapists(Vec::new()).unwrap();
    assert!(!session.resolve());
    assert_eq!(session.result().cloned(), snapshot);
}

#[test]
fn shared_date_listed_once() {
    let roster = Roster::from_json(
        r#"[
        { "id": 1, "therapistName": "Ann", "timeSlots": [
            { "id": 1, "slotLength": 30, "dateAndTime": "2024-01-10T09:00:00" }
        ]},
        { "id": 2, "therapistName": "Bob", "timeSlots": [
            { "id": 1, "slotLength": 30, "dateAndTime": "2024-01-10T15:00:00" }
        ]}
    ]"#,
    )
    .unwrap();

    let dates = date_options(&roster);
    assert_eq!(dates.len(), 1);
    assert_eq!(dates[0].value, jan(10));
    assert_eq!(dates[0].label, "January 10 2024");
}

#[test]
fn resolving_twice_is_identical() {
    let roster = Roster::from_json(ANN).unwrap();
    let mut selection = FilterSelection::new();
    selection.set_therapists([1]).unwrap();
    assert_eq!(resolve(&roster, &selection), resolve(&roster, &selection));
}

#[test]
fn bad_slot_does_not_blank_the_roster() {
    let roster = Roster::from_json(
        r#"[
        { "id": 1, "therapistName": "Ann", "timeSlots": [
            { "id": 1, "slotLength": 30, "dateAndTime": "2024-01-10T09:00:00" }
        ]},
        { "id": 2, "therapistName": "Bob", "timeSlots": [
            { "id": 1, "slotLength": 30, "dateAndTime": "not a time" },
            { "id": 2, "slotLength": 30, "dateAndTime": "2024-01-10 10:00:00" }
        ]}
    ]"#,
    )
    .unwrap();
    let mut session = BookingSession::new(roster);
    session.selection_mut().set_therapists([1, 2]).unwrap();
    assert!(session.resolve());

    let result = session.result().unwrap();
    assert_eq!(result.groups().len(), 2);
    assert_eq!(only_slot(&result.groups()[0].slots).id, 1);
    let bob = only_slot(&result.groups()[1].slots);
    assert_eq!(bob.id, 2);
    assert_eq!(bob.date_and_time, jan(10).and_hms_opt(10, 0, 0).unwrap());
}

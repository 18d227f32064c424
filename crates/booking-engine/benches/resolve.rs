use booking_engine::{date_options, resolve, FilterSelection, Roster, Therapist, TimeSlot};
use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// 50 therapists, each publishing every half hour 09:00–17:00 for 30 days.
fn large_roster() -> Roster {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let therapists = (1..=50)
        .map(|id| {
            let mut time_slots: Vec<TimeSlot> = (0..30)
                .flat_map(|day| (0..16).map(move |half_hour| (day, half_hour)))
                .enumerate()
                .map(|(i, (day, half_hour))| TimeSlot {
                    id: i as u32,
                    slot_length: if half_hour % 2 == 0 { 30 } else { 60 },
                    date_and_time: start
                        + Duration::days(day)
                        + Duration::minutes(30 * half_hour),
                })
                .collect();
            // Published newest first so resolution has sorting to do.
            time_slots.reverse();
            Therapist {
                id,
                name: format!("Therapist {id}"),
                time_slots,
            }
        })
        .collect();
    Roster::new(therapists)
}

fn bench_resolve(c: &mut Criterion) {
    let roster = large_roster();

    let mut all_hours = FilterSelection::new();
    all_hours.set_therapists([1, 10, 20, 30, 40]).unwrap();
    c.bench_function("resolve_five_therapists_no_hour_filter", |b| {
        b.iter(|| resolve(black_box(&roster), black_box(&all_hours)))
    });

    let mut filtered = all_hours.clone();
    filtered.select_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    for h in [9, 11, 14] {
        filtered.toggle_hour_block(h).unwrap();
    }
    c.bench_function("resolve_five_therapists_three_hours", |b| {
        b.iter(|| resolve(black_box(&roster), black_box(&filtered)))
    });

    c.bench_function("date_options_full_roster", |b| {
        b.iter(|| date_options(black_box(&roster)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);

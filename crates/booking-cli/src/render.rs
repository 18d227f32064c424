//! Text and JSON rendering of engine output.

use std::fmt::Write as _;

use booking_engine::{ResolvedResult, SelectorOptions};
use chrono::NaiveDateTime;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn options(opts: &SelectorOptions, format: Format) -> anyhow::Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(opts)?);
    }

    let mut out = String::new();
    writeln!(out, "Therapists:")?;
    if opts.therapists.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for t in &opts.therapists {
        writeln!(out, "  {:>4}  {}", t.value, t.label)?;
    }
    writeln!(out, "Dates:")?;
    if opts.dates.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for d in &opts.dates {
        writeln!(out, "  {}  {}", d.value, d.label)?;
    }
    let hours: Vec<&str> = opts.hour_blocks.iter().map(|h| h.label.as_str()).collect();
    writeln!(out, "Hours: {}", hours.join(", "))?;
    let durations: Vec<&str> = opts.durations.iter().map(|d| d.label.as_str()).collect();
    writeln!(out, "Durations (minutes): {}", durations.join(", "))?;
    Ok(out)
}

/// Render a resolved result. In text mode groups without slots are skipped
/// unless `show_empty` is set.
pub fn result(result: &ResolvedResult, format: Format, show_empty: bool) -> anyhow::Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let mut out = String::new();
    let mut shown = 0;
    for group in result.groups() {
        if group.is_empty() && !show_empty {
            continue;
        }
        shown += 1;
        writeln!(out, "{} ({})", group.therapist_name, group.initials())?;
        if group.is_empty() {
            writeln!(out, "  no matching slots")?;
        }
        for slot in &group.slots {
            writeln!(
                out,
                "  #{:<4} {}  {} min",
                slot.id,
                slot_label(slot.date_and_time),
                slot.slot_length
            )?;
        }
    }
    if shown == 0 {
        writeln!(out, "No available slots match the selected filters.")?;
    }
    Ok(out)
}

fn slot_label(dt: NaiveDateTime) -> String {
    dt.format("%a %B %d %Y %H:%M").to_string()
}

use chrono::{DateTime, Duration, Utc};

pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

const LABEL_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySelectorLayout {
    pub label: String,
    pub prev_hint: &'static str,
    pub next_hint: &'static str,
}

pub fn calculate_layout(date: DateTime<Utc>) -> DaySelectorLayout {
    DaySelectorLayout {
        label: day_label(date),
        prev_hint: "◀ h",
        next_hint: "l ▶",
    }
}

pub fn utc_string(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn day_label(date: DateTime<Utc>) -> String {
    utc_string(date).chars().take(LABEL_WIDTH).collect()
}

/// Moves by exactly one day worth of milliseconds. `None` only when the
/// result falls outside the representable range.
pub fn step_day(date: DateTime<Utc>, direction: StepDirection) -> Option<DateTime<Utc>> {
    let offset = match direction {
        StepDirection::Previous => -DAY_MILLIS,
        StepDirection::Next => DAY_MILLIS,
    };
    date.checked_add_signed(Duration::milliseconds(offset))
}

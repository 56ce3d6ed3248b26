use prayer_core::PrayerTimeRecord;
use serde::Deserialize;
use serde_json::Value;

/// Maps one upstream payload into the canonical record.
pub type Normalizer = fn(&Value) -> Result<PrayerTimeRecord, ValidationError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` collection is empty")]
    EmptyCollection { field: &'static str },
    #[error("unexpected payload shape: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Malformed(err.to_string())
    }
}

// Primary: `{ data: [ { timings: { Fajr, Dhuhr, Asr, Maghrib, Isha, .. } }, .. ] }`.
#[derive(Deserialize)]
struct CalendarPayload {
    data: Vec<Value>,
}

#[derive(Deserialize)]
struct CalendarDay {
    timings: CalendarTimings,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CalendarTimings {
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

// Secondary: `{ items: [ { fajr, dhuhr, asr, maghrib, isha, .. }, .. ] }`.
#[derive(Deserialize)]
struct DailyPayload {
    items: Vec<Value>,
}

#[derive(Deserialize)]
struct DailyItem {
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

/// Normalize a calendar-by-city payload. Only the first day is read.
pub fn normalize_primary(payload: &Value) -> Result<PrayerTimeRecord, ValidationError> {
    let first = first_element(CalendarPayload::deserialize(payload)?.data, "data")?;
    let t = CalendarDay::deserialize(first)?.timings;
    Ok(PrayerTimeRecord::new(t.fajr, t.dhuhr, t.asr, t.maghrib, t.isha))
}

/// Normalize a city-keyed daily payload. Only the first item is read.
pub fn normalize_secondary(payload: &Value) -> Result<PrayerTimeRecord, ValidationError> {
    let first = first_element(DailyPayload::deserialize(payload)?.items, "items")?;
    let t = DailyItem::deserialize(first)?;
    Ok(PrayerTimeRecord::new(t.fajr, t.dhuhr, t.asr, t.maghrib, t.isha))
}

fn first_element(values: Vec<Value>, field: &'static str) -> Result<Value, ValidationError> {
    values
        .into_iter()
        .next()
        .ok_or(ValidationError::EmptyCollection { field })
}

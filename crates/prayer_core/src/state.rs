use std::fmt;

use crate::view_model::{AppViewModel, PrayerRowView};
use crate::PrayerTimeRecord;

/// Terminal message when the last source could not be reached at all.
pub const BOTH_UNREACHABLE_MESSAGE: &str = "Both APIs failed to respond.";
/// Terminal message when the last source answered but its data was unusable.
pub const NO_USABLE_DATA_MESSAGE: &str = "Could not retrieve prayer times from both APIs.";

/// Upstream providers, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Primary,
    Secondary,
}

impl Source {
    /// Source to try next when this one fails, if any.
    pub fn fallback(self) -> Option<Source> {
        match self {
            Source::Primary => Some(Source::Secondary),
            Source::Secondary => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Primary => write!(f, "primary"),
            Source::Secondary => write!(f, "secondary"),
        }
    }
}

/// Why a single source attempt produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    /// Timeout, transport error, non-success status or unreadable body.
    Fetch(String),
    /// The payload arrived but lacked the expected shape.
    Validation(String),
}

impl AttemptFailure {
    pub(crate) fn terminal_message(&self) -> &'static str {
        match self {
            AttemptFailure::Fetch(_) => BOTH_UNREACHABLE_MESSAGE,
            AttemptFailure::Validation(_) => NO_USABLE_DATA_MESSAGE,
        }
    }
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Fetch(message) => write!(f, "fetch failed: {message}"),
            AttemptFailure::Validation(message) => write!(f, "invalid payload: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrchestratorState {
    #[default]
    Loading,
    Resolved(PrayerTimeRecord),
    Failed(String),
}

impl OrchestratorState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrchestratorState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    orchestration: OrchestratorState,
    in_flight: Option<Source>,
    resolved_by: Option<Source>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orchestration(&self) -> &OrchestratorState {
        &self.orchestration
    }

    /// Source whose attempt is currently outstanding.
    pub fn in_flight(&self) -> Option<Source> {
        self.in_flight
    }

    /// Source that produced the resolved record, once resolved.
    pub fn resolved_by(&self) -> Option<Source> {
        self.resolved_by
    }

    pub fn view(&self) -> AppViewModel {
        match &self.orchestration {
            OrchestratorState::Loading => AppViewModel::Loading,
            OrchestratorState::Failed(message) => AppViewModel::Error(message.clone()),
            OrchestratorState::Resolved(record) => AppViewModel::Times(
                record
                    .entries()
                    .map(|(prayer, time)| PrayerRowView {
                        prayer,
                        time: time.to_string(),
                    })
                    .collect(),
            ),
        }
    }

    pub(crate) fn has_started(&self) -> bool {
        self.in_flight.is_some() || self.orchestration.is_terminal()
    }

    pub(crate) fn begin_attempt(&mut self, source: Source) {
        self.in_flight = Some(source);
    }

    pub(crate) fn resolve(&mut self, source: Source, record: PrayerTimeRecord) {
        self.in_flight = None;
        self.resolved_by = Some(source);
        self.orchestration = OrchestratorState::Resolved(record);
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = None;
        self.orchestration = OrchestratorState::Failed(message.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Orchestration run requested. Only the first one has any effect.
    Started,
    /// An attempt against one source has fully settled (success, failure or timeout).
    AttemptSettled {
        source: crate::Source,
        result: Result<crate::PrayerTimeRecord, crate::AttemptFailure>,
    },
}

use crate::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch, validate and normalize one upstream source, then report back
    /// with `Msg::AttemptSettled`.
    FetchSource { source: Source },
}

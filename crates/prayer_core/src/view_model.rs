use crate::Prayer;

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppViewModel {
    #[default]
    Loading,
    Error(String),
    /// Five rows in canonical order.
    Times(Vec<PrayerRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerRowView {
    pub prayer: Prayer,
    pub time: String,
}

//! Prayer times core: pure orchestration state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use record::{Prayer, PrayerTimeRecord};
pub use state::{
    AppState, AttemptFailure, OrchestratorState, Source, BOTH_UNREACHABLE_MESSAGE,
    NO_USABLE_DATA_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, PrayerRowView};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Sources are attempted strictly one at a time, in priority order. Once the
/// orchestration is resolved or failed every further message is ignored.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.orchestration().is_terminal() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Started => {
            if state.has_started() {
                return (state, Vec::new());
            }
            let source = crate::Source::Primary;
            state.begin_attempt(source);
            vec![Effect::FetchSource { source }]
        }
        Msg::AttemptSettled { source, result } => {
            // Stale or unexpected completions never move the state.
            if state.in_flight() != Some(source) {
                return (state, Vec::new());
            }
            match result {
                Ok(record) => {
                    state.resolve(source, record);
                    Vec::new()
                }
                Err(failure) => match source.fallback() {
                    Some(next) => {
                        state.begin_attempt(next);
                        vec![Effect::FetchSource { source: next }]
                    }
                    None => {
                        state.fail(failure.terminal_message());
                        Vec::new()
                    }
                },
            }
        }
    };

    (state, effects)
}

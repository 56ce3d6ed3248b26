use std::collections::VecDeque;
use std::sync::Arc;

use engine_logging::{engine_error, engine_info};
use prayer_core::{update, AppState, Effect, Msg, OrchestratorState};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::FetchError;
use crate::source::{attempt_source, SourceSettings};

/// Runs the primary-then-secondary fallback against real (or injected) fetchers.
pub struct Orchestrator {
    fetcher: Arc<dyn Fetcher>,
    settings: SourceSettings,
}

impl Orchestrator {
    pub fn new(
        settings: SourceSettings,
        fetch_settings: FetchSettings,
    ) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(fetch_settings)?;
        Ok(Self::with_fetcher(Arc::new(fetcher), settings))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, settings: SourceSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Run one orchestration to a terminal state.
    ///
    /// Effects are executed one after another, so at most one request is
    /// outstanding and a fallback only starts after the previous attempt settled.
    pub async fn run(&self) -> AppState {
        let (mut state, effects) = update(AppState::new(), Msg::Started);
        let mut pending: VecDeque<Effect> = effects.into();

        while let Some(effect) = pending.pop_front() {
            let msg = self.execute(effect).await;
            let (next, effects) = update(state, msg);
            state = next;
            pending.extend(effects);
        }

        match state.orchestration() {
            OrchestratorState::Resolved(_) => {
                if let Some(source) = state.resolved_by() {
                    engine_info!("Prayer times resolved from {} source", source);
                }
            }
            OrchestratorState::Failed(message) => engine_error!("{}", message),
            OrchestratorState::Loading => {
                engine_error!("Orchestration stopped without a terminal state")
            }
        }
        state
    }

    async fn execute(&self, effect: Effect) -> Msg {
        match effect {
            Effect::FetchSource { source } => {
                let spec = self.settings.spec(source);
                let result =
                    attempt_source(self.fetcher.as_ref(), &spec, self.settings.request_timeout())
                        .await;
                if result.is_err() {
                    if let Some(next) = source.fallback() {
                        engine_info!("{} source unusable, trying {} source", source, next);
                    }
                }
                Msg::AttemptSettled { source, result }
            }
        }
    }
}

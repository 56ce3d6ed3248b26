use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use prayer_core::{AttemptFailure, PrayerTimeRecord, Source};
use serde::{Deserialize, Serialize};

use crate::fetch::DEFAULT_REQUEST_TIMEOUT;
use crate::normalize::{normalize_primary, normalize_secondary, Normalizer};
use crate::Fetcher;

/// Calendar-by-city endpoint for Casablanca, Morocco, August 2024.
pub const PRIMARY_URL: &str =
    "https://api.aladhan.com/v1/calendarByCity/2024/8?city=casablanca&country=morocco";
/// City-keyed daily endpoint for Casablanca.
pub const SECONDARY_URL: &str =
    "https://muslimsalat.com/Casablanca.json?key=969848a2da5ee97c6964283ef1ad36d0";

/// Where each source lives and how long one attempt may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub primary_url: String,
    pub secondary_url: String,
    pub request_timeout_ms: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            primary_url: PRIMARY_URL.to_string(),
            secondary_url: SECONDARY_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
        }
    }
}

impl SourceSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn spec(&self, source: Source) -> SourceSpec {
        match source {
            Source::Primary => SourceSpec {
                source,
                url: self.primary_url.clone(),
                normalizer: normalize_primary,
            },
            Source::Secondary => SourceSpec {
                source,
                url: self.secondary_url.clone(),
                normalizer: normalize_secondary,
            },
        }
    }
}

/// One upstream: its endpoint and the normalizer for its schema.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub source: Source,
    pub url: String,
    pub normalizer: Normalizer,
}

/// Fetch one source, then validate and normalize its payload.
pub async fn attempt_source(
    fetcher: &dyn Fetcher,
    spec: &SourceSpec,
    timeout: Duration,
) -> Result<PrayerTimeRecord, AttemptFailure> {
    engine_info!("Fetching prayer times from {} source: {}", spec.source, spec.url);

    let payload = fetcher.fetch(&spec.url, timeout).await.map_err(|err| {
        engine_warn!("{} source failed to respond: {}", spec.source, err);
        AttemptFailure::Fetch(err.to_string())
    })?;
    engine_debug!("{} source response: {}", spec.source, payload);

    (spec.normalizer)(&payload).map_err(|err| {
        engine_warn!("{} source returned invalid data: {}", spec.source, err);
        AttemptFailure::Validation(err.to_string())
    })
}

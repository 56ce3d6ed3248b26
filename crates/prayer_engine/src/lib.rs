//! Prayer times engine: timed fetching, payload normalization and source fallback.
mod fetch;
mod normalize;
mod orchestrator;
mod source;
mod types;

pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_REQUEST_TIMEOUT};
pub use normalize::{normalize_primary, normalize_secondary, Normalizer, ValidationError};
pub use orchestrator::Orchestrator;
pub use source::{attempt_source, SourceSettings, SourceSpec, PRIMARY_URL, SECONDARY_URL};
pub use types::{FailureKind, FetchError};

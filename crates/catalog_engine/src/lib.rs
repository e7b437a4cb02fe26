//! Catalog engine: remote species source, pacing and effect execution.
mod engine;
mod pacing;
mod source;
mod types;

pub use engine::EngineHandle;
pub use pacing::{with_minimum_duration, DEFAULT_MIN_LOADING};
pub use source::{RemoteSource, ReqwestSource, DEFAULT_BASE_URL};
pub use types::{
    EngineError, EngineEvent, EngineSettings, FetchError, RequestToken, DETAIL_FAILURE_MESSAGE,
    LIST_FAILURE_MESSAGE,
};

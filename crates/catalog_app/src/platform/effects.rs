use catalog_core::{Effect, Msg};
use catalog_engine::{EngineError, EngineEvent, EngineHandle, EngineSettings};
use catalog_logging::{catalog_info, catalog_warn};

/// Executes core effects on the engine and turns engine events back into
/// core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    token,
                    filter,
                    page,
                } => {
                    catalog_info!("FetchPage token={} filter={:?} page={}", token, filter.as_str(), page);
                    self.engine.fetch_page(token, filter.as_str(), page);
                }
                Effect::FetchDetail { token, id } => {
                    catalog_info!("FetchDetail token={} id={}", token, id);
                    self.engine.fetch_detail(token, id);
                }
            }
        }
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { token, result } => Msg::PageLoaded {
            token,
            result: result.map_err(|err| {
                catalog_warn!("Page fetch token={} failed: {}", token, err);
                err.message
            }),
        },
        EngineEvent::DetailFetched { token, result } => Msg::DetailLoaded {
            token,
            result: result.map_err(|err| {
                catalog_warn!("Detail fetch token={} failed: {}", token, err);
                err.message
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_engine::{FetchError, LIST_FAILURE_MESSAGE};
    use serde_json::json;

    #[test]
    fn failures_carry_the_message_verbatim() {
        let msg = map_event(EngineEvent::PageFetched {
            token: 4,
            result: Err(FetchError {
                message: LIST_FAILURE_MESSAGE.to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::PageLoaded {
                token: 4,
                result: Err(LIST_FAILURE_MESSAGE.to_string()),
            }
        );
    }

    #[test]
    fn detail_payload_passes_through() {
        let msg = map_event(EngineEvent::DetailFetched {
            token: 9,
            result: Ok(json!({ "id": 1 })),
        });
        assert_eq!(
            msg,
            Msg::DetailLoaded {
                token: 9,
                result: Ok(json!({ "id": 1 })),
            }
        );
    }

    #[test]
    fn core_and_engine_agree_on_failure_messages() {
        assert_eq!(
            catalog_core::LIST_FAILURE_MESSAGE,
            catalog_engine::LIST_FAILURE_MESSAGE
        );
        assert_eq!(
            catalog_core::DETAIL_FAILURE_MESSAGE,
            catalog_engine::DETAIL_FAILURE_MESSAGE
        );
    }
}

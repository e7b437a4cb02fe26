use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use catalog_engine::{EngineEvent, EngineHandle, FetchError, RemoteSource, DETAIL_FAILURE_MESSAGE};
use serde_json::{json, Value};

#[derive(Default)]
struct FakeSource {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl RemoteSource for FakeSource {
    async fn fetch_page(&self, filter: &str, page: u32) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "filter": filter, "page": page }))
    }

    async fn fetch_detail(&self, id: u64) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if id == 404 {
            return Err(FetchError {
                message: DETAIL_FAILURE_MESSAGE.to_string(),
            });
        }
        Ok(json!({ "id": id }))
    }
}

const MIN_LOADING: Duration = Duration::from_millis(150);
const WAIT: Duration = Duration::from_secs(5);

#[test]
fn page_fetch_is_paced_and_tagged() {
    let source = Arc::new(FakeSource::default());
    let engine = EngineHandle::with_source(source.clone(), MIN_LOADING).expect("engine");

    let started = Instant::now();
    engine.fetch_page(11, "indoor=1", 2);
    let event = engine.recv_timeout(WAIT).expect("event");

    assert!(started.elapsed() >= MIN_LOADING);
    assert_eq!(
        event,
        EngineEvent::PageFetched {
            token: 11,
            result: Ok(json!({ "filter": "indoor=1", "page": 2 })),
        }
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn detail_failure_is_reported_with_its_token() {
    let engine =
        EngineHandle::with_source(Arc::new(FakeSource::default()), MIN_LOADING).expect("engine");

    engine.fetch_detail(3, 404);
    let event = engine.recv_timeout(WAIT).expect("event");

    assert_eq!(
        event,
        EngineEvent::DetailFetched {
            token: 3,
            result: Err(FetchError {
                message: DETAIL_FAILURE_MESSAGE.to_string(),
            }),
        }
    );
}

#[test]
fn superseded_fetches_still_resolve() {
    let source = Arc::new(FakeSource::default());
    let engine = EngineHandle::with_source(source.clone(), MIN_LOADING).expect("engine");

    engine.fetch_detail(1, 10);
    engine.fetch_detail(2, 20);

    let mut tokens = vec![
        token_of(engine.recv_timeout(WAIT).expect("first")),
        token_of(engine.recv_timeout(WAIT).expect("second")),
    ];
    tokens.sort_unstable();
    assert_eq!(tokens, vec![1, 2]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert!(engine.try_recv().is_none());
}

fn token_of(event: EngineEvent) -> u64 {
    match event {
        EngineEvent::PageFetched { token, .. } | EngineEvent::DetailFetched { token, .. } => token,
    }
}

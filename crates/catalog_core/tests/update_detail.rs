use std::sync::Once;

use catalog_core::{
    update, Advisory, AppState, Effect, FetchOutcome, Field, Msg, ScreenView,
    DETAIL_FAILURE_MESSAGE, UNKNOWN_SCIENTIFIC_NAME,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn open(state: AppState, id: u64) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::LoadDetail { id });
    match effects.as_slice() {
        [Effect::FetchDetail { token, id: fetched }] => {
            assert_eq!(*fetched, id);
            (state, *token)
        }
        other => panic!("expected one detail fetch, got {other:?}"),
    }
}

fn resolve(state: AppState, token: u64, result: Result<Value, String>) -> AppState {
    update(state, Msg::DetailLoaded { token, result }).0
}

fn outcome(state: &AppState) -> FetchOutcome<Option<catalog_core::PlantView>> {
    match state.view().screen {
        ScreenView::Detail(detail) => detail.outcome,
        other => panic!("expected detail screen, got {other:?}"),
    }
}

#[test]
fn detail_starts_loading() {
    init_logging();
    let (state, _token) = open(AppState::new(), 42);
    assert_eq!(outcome(&state), FetchOutcome::Loading);
}

#[test]
fn human_toxicity_only_flags_humans() {
    init_logging();
    let (state, token) = open(AppState::new(), 42);
    let state = resolve(
        state,
        token,
        Ok(json!({
            "id": 42,
            "common_name": "Oleander",
            "scientific_name": ["Nerium oleander"],
            "poisonous_to_humans": 1
        })),
    );

    let FetchOutcome::Ready(Some(plant)) = outcome(&state) else {
        panic!("expected a plant");
    };
    assert_eq!(plant.title(), "Oleander");
    assert_eq!(plant.scientific_name, "Nerium oleander");
    assert_eq!(plant.advisories, vec![Advisory::PoisonousToHumans]);
    assert_eq!(plant.warnings().collect::<Vec<_>>(), vec![Advisory::PoisonousToHumans]);
}

#[test]
fn null_payload_is_not_found() {
    init_logging();
    let (state, token) = open(AppState::new(), 7);
    let state = resolve(state, token, Ok(Value::Null));
    assert_eq!(outcome(&state), FetchOutcome::Ready(None));
}

#[test]
fn empty_object_is_not_found() {
    init_logging();
    let (state, token) = open(AppState::new(), 7);
    let state = resolve(state, token, Ok(json!({})));
    assert_eq!(outcome(&state), FetchOutcome::Ready(None));
}

#[test]
fn failure_keeps_message_verbatim() {
    init_logging();
    let (state, token) = open(AppState::new(), 7);
    let state = resolve(state, token, Err("Failed to load plant details".to_string()));
    assert_eq!(
        outcome(&state),
        FetchOutcome::Failed("Failed to load plant details".to_string())
    );
}

#[test]
fn non_object_payload_fails_with_generic_message() {
    init_logging();
    let (state, token) = open(AppState::new(), 7);
    let state = resolve(state, token, Ok(json!("oops")));
    assert_eq!(
        outcome(&state),
        FetchOutcome::Failed(DETAIL_FAILURE_MESSAGE.to_string())
    );
    assert_eq!(DETAIL_FAILURE_MESSAGE, "Failed to load plant details");
}

#[test]
fn sparse_record_normalizes_without_gaps() {
    init_logging();
    let (state, token) = open(AppState::new(), 9);
    let state = resolve(
        state,
        token,
        Ok(json!({ "scientific_name": null, "watering": "", "sunlight": [] })),
    );

    let FetchOutcome::Ready(Some(plant)) = outcome(&state) else {
        panic!("expected a plant");
    };
    assert_eq!(plant.id, 9);
    assert_eq!(plant.scientific_name, UNKNOWN_SCIENTIFIC_NAME);
    assert_eq!(plant.watering, Field::Absent);
    assert_eq!(plant.sunlight, Field::Absent);
}

#[test]
fn back_from_detail_returns_to_list_without_refetch() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::OpenCategory {
            slug: "indoor".to_string(),
        },
    );
    let (state, _token) = open(state, 3);

    let (state, effects) = update(state, Msg::Back);
    assert!(effects.is_empty());
    assert!(matches!(state.view().screen, ScreenView::List(_)));

    let (state, effects) = update(state, Msg::Back);
    assert!(effects.is_empty());
    assert!(matches!(state.view().screen, ScreenView::Categories(_)));
}

#[test]
fn back_from_detail_without_list_goes_to_categories() {
    init_logging();
    let (state, _token) = open(AppState::new(), 3);
    let (state, _) = update(state, Msg::Back);
    let ScreenView::Categories(cards) = state.view().screen else {
        panic!("expected categories");
    };
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].slug, "indoor");
}

#[test]
fn back_on_categories_leaves_state_untouched() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Back);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

//! Catalog core: pure state machine, wire records and view-model helpers.
mod category;
mod effect;
mod msg;
mod normalize;
mod record;
mod state;
mod update;
mod view_model;

pub use category::{category_by_filter, category_by_slug, Category, CategoryFilter, CATEGORIES};
pub use effect::Effect;
pub use msg::Msg;
pub use normalize::{
    display_list, display_scalar, first_display, is_flag_set, normalize_detail,
    normalize_summary, present, Advisory, Field, HardinessRange, PlantView, PruningCount,
    PruningSchedule, UNKNOWN_SCIENTIFIC_NAME, UNNAMED_PLANT,
};
pub use record::{
    count, decode_detail, decode_list, RawListResponse, RawPlantDetail, RawPlantSummary,
};
pub use state::{
    ActiveScreen, AppState, FetchOutcome, ListPage, PageState, PlantId, PlantSummary,
    RequestToken, DETAIL_FAILURE_MESSAGE, LIST_FAILURE_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, CategoryCard, DetailView, ListView, ScreenView};

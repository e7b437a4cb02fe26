use crate::{CategoryFilter, PlantId, RequestToken};

/// Work the update function asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        token: RequestToken,
        filter: CategoryFilter,
        page: u32,
    },
    FetchDetail {
        token: RequestToken,
        id: PlantId,
    },
}

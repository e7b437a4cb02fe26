use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User returned to the category listing.
    ShowCategories,
    /// User picked a category by slug.
    OpenCategory { slug: String },
    /// Load one page of the list for a filter.
    LoadPage {
        filter: crate::CategoryFilter,
        page: u32,
    },
    /// User asked for the following page.
    NextPage,
    /// User asked for the preceding page.
    PrevPage,
    /// User opened a plant.
    LoadDetail { id: crate::PlantId },
    /// User navigated one screen back.
    Back,
    /// Remote source resolved a list request.
    PageLoaded {
        token: crate::RequestToken,
        result: Result<Value, String>,
    },
    /// Remote source resolved a detail request.
    DetailLoaded {
        token: crate::RequestToken,
        result: Result<Value, String>,
    },
}

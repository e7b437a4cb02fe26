use crate::{Category, CategoryFilter, FetchOutcome, ListPage, PlantId, PlantView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: ScreenView,
    pub dirty: bool,
}

/// What the presentation layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Categories(Vec<CategoryCard>),
    List(ListView),
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub slug: String,
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryCard {
    fn from(category: &Category) -> Self {
        Self {
            slug: category.slug.to_string(),
            name: category.name.to_string(),
            description: category.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: String,
    pub filter: CategoryFilter,
    pub current_page: u32,
    pub outcome: FetchOutcome<ListPage>,
}

impl ListView {
    pub fn can_go_next(&self) -> bool {
        self.outcome
            .ready()
            .is_some_and(|page| page.page_state.can_go_next())
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// `Ready(None)` is the "not found" case, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: PlantId,
    pub outcome: FetchOutcome<Option<PlantView>>,
}

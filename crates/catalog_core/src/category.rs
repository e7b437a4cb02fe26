use std::fmt;

/// Opaque query-string fragment selecting a subset of the remote catalog.
///
/// The empty filter selects every plant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CategoryFilter(String);

impl CategoryFilter {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A browsable entry of the category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub filter: &'static str,
}

impl Category {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::new(self.filter)
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        slug: "indoor",
        name: "Indoor plants",
        description: "Plants suited to interiors",
        filter: "indoor=1",
    },
    Category {
        slug: "edible",
        name: "Edible plants",
        description: "Plants with edible parts",
        filter: "edible=1",
    },
    Category {
        slug: "poisonous",
        name: "Poisonous plants",
        description: "Plants poisonous to humans",
        filter: "poisonous_to_humans=1",
    },
    Category {
        slug: "all",
        name: "All plants",
        description: "The complete plant list",
        filter: "",
    },
];

pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

pub fn category_by_filter(filter: &CategoryFilter) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|category| category.filter == filter.as_str())
}

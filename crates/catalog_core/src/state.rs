use log::debug;
use serde_json::Value;

use crate::record::{decode_detail, decode_list, RawListResponse};
use crate::view_model::{AppViewModel, CategoryCard, DetailView, ListView, ScreenView};
use crate::{
    category_by_filter, normalize_detail, normalize_summary, CategoryFilter, PlantView, CATEGORIES,
};

pub type PlantId = u64;

/// Sequence number of a fetch. Only the latest token of a screen may update it.
pub type RequestToken = u64;

/// The list pipeline's only failure message, whatever went wrong.
pub const LIST_FAILURE_MESSAGE: &str = "Failed to load plants";
/// The detail pipeline's only failure message, whatever went wrong.
pub const DETAIL_FAILURE_MESSAGE: &str = "Failed to load plant details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchOutcome::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more: bool,
}

impl PageState {
    /// Derives pagination from a list response fetched for `current_page`.
    pub fn from_response(current_page: u32, raw: &RawListResponse) -> Self {
        let reported = raw
            .last_page()
            .and_then(|last| u32::try_from(last).ok())
            .filter(|last| *last >= 1)
            .unwrap_or(1);
        let has_more = matches!((raw.to(), raw.total()), (Some(to), Some(total)) if to < total);
        Self {
            current_page,
            total_pages: reported.max(current_page),
            has_more,
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.has_more && self.current_page < self.total_pages
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantSummary {
    pub id: PlantId,
    pub common_name: String,
    pub scientific_name: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<PlantSummary>,
    pub page_state: PageState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListScreen {
    title: String,
    filter: CategoryFilter,
    current_page: u32,
    token: RequestToken,
    outcome: FetchOutcome<ListPage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailScreen {
    id: PlantId,
    token: RequestToken,
    outcome: FetchOutcome<Option<PlantView>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    #[default]
    Categories,
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    active: ActiveScreen,
    list: Option<ListScreen>,
    detail: Option<DetailScreen>,
    last_token: RequestToken,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match self.active {
            ActiveScreen::Categories => category_cards(),
            ActiveScreen::List => match &self.list {
                Some(list) => ScreenView::List(ListView {
                    title: list.title.clone(),
                    filter: list.filter.clone(),
                    current_page: list.current_page,
                    outcome: list.outcome.clone(),
                }),
                None => category_cards(),
            },
            ActiveScreen::Detail => match &self.detail {
                Some(detail) => ScreenView::Detail(DetailView {
                    id: detail.id,
                    outcome: detail.outcome.clone(),
                }),
                None => category_cards(),
            },
        };
        AppViewModel {
            screen,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn show(&mut self, screen: ActiveScreen) {
        if self.active != screen {
            self.active = screen;
            self.mark_dirty();
        }
    }

    pub(crate) fn has_list(&self) -> bool {
        self.list.is_some()
    }

    fn issue_token(&mut self) -> RequestToken {
        self.last_token += 1;
        self.last_token
    }

    /// Replaces the list screen with a fresh `Loading` one and returns its token.
    pub(crate) fn begin_page(
        &mut self,
        title: Option<String>,
        filter: CategoryFilter,
        page: u32,
    ) -> RequestToken {
        let token = self.issue_token();
        let title = title.unwrap_or_else(|| {
            category_by_filter(&filter)
                .map(|category| category.name.to_string())
                .unwrap_or_else(|| "Plants".to_string())
        });
        self.list = Some(ListScreen {
            title,
            filter,
            current_page: page.max(1),
            token,
            outcome: FetchOutcome::Loading,
        });
        self.active = ActiveScreen::List;
        self.mark_dirty();
        token
    }

    /// Target of a page step, if the navigation contract allows one.
    pub(crate) fn step_target(&self, forward: bool) -> Option<(String, CategoryFilter, u32)> {
        let list = self.list.as_ref()?;
        let target = if forward {
            let page_state = list.outcome.ready()?.page_state;
            page_state
                .can_go_next()
                .then_some(list.current_page + 1)?
        } else {
            (list.current_page > 1).then(|| list.current_page - 1)?
        };
        Some((list.title.clone(), list.filter.clone(), target))
    }

    pub(crate) fn apply_page(&mut self, token: RequestToken, result: Result<Value, String>) {
        let Some(list) = self.list.as_mut() else {
            debug!("Discarding page response token={} with no list screen", token);
            return;
        };
        if list.token != token {
            debug!(
                "Discarding stale page response token={} latest={}",
                token, list.token
            );
            return;
        }
        if !list.outcome.is_loading() {
            return;
        }

        list.outcome = match result.and_then(|body| {
            decode_list(body).map_err(|err| {
                debug!("Undecodable page response: {}", err);
                LIST_FAILURE_MESSAGE.to_string()
            })
        }) {
            Ok(raw) => {
                let page_state = PageState::from_response(list.current_page, &raw);
                let summaries = raw.summaries();
                let items: Vec<PlantSummary> =
                    summaries.iter().filter_map(normalize_summary).collect();
                if items.len() < summaries.len() {
                    debug!(
                        "Skipped {} list entries without a usable id",
                        summaries.len() - items.len()
                    );
                }
                FetchOutcome::Ready(ListPage { items, page_state })
            }
            Err(message) => FetchOutcome::Failed(message),
        };
        self.mark_dirty();
    }

    pub(crate) fn begin_detail(&mut self, id: PlantId) -> RequestToken {
        let token = self.issue_token();
        self.detail = Some(DetailScreen {
            id,
            token,
            outcome: FetchOutcome::Loading,
        });
        self.active = ActiveScreen::Detail;
        self.mark_dirty();
        token
    }

    pub(crate) fn apply_detail(&mut self, token: RequestToken, result: Result<Value, String>) {
        let Some(detail) = self.detail.as_mut() else {
            debug!("Discarding detail response token={} with no detail screen", token);
            return;
        };
        if detail.token != token {
            debug!(
                "Discarding stale detail response token={} latest={}",
                token, detail.token
            );
            return;
        }
        if !detail.outcome.is_loading() {
            return;
        }

        let id = detail.id;
        detail.outcome = match result.and_then(|body| {
            decode_detail(body).map_err(|err| {
                debug!("Undecodable detail response for id={}: {}", id, err);
                DETAIL_FAILURE_MESSAGE.to_string()
            })
        }) {
            Ok(raw) => FetchOutcome::Ready(raw.map(|raw| normalize_detail(&raw, id))),
            Err(message) => FetchOutcome::Failed(message),
        };
        self.mark_dirty();
    }
}

fn category_cards() -> ScreenView {
    ScreenView::Categories(CATEGORIES.iter().map(CategoryCard::from).collect())
}

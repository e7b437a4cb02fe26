use crate::{category_by_slug, ActiveScreen, AppState, CategoryFilter, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ShowCategories => {
            state.show(ActiveScreen::Categories);
            Vec::new()
        }
        Msg::OpenCategory { slug } => {
            let (title, filter) = match category_by_slug(&slug) {
                Some(category) => (category.name.to_string(), category.filter()),
                None => (slug, CategoryFilter::default()),
            };
            let token = state.begin_page(Some(title), filter.clone(), 1);
            vec![Effect::FetchPage {
                token,
                filter,
                page: 1,
            }]
        }
        Msg::LoadPage { filter, page } => {
            let page = page.max(1);
            let token = state.begin_page(None, filter.clone(), page);
            vec![Effect::FetchPage {
                token,
                filter,
                page,
            }]
        }
        Msg::NextPage => step_page(&mut state, true),
        Msg::PrevPage => step_page(&mut state, false),
        Msg::LoadDetail { id } => {
            let token = state.begin_detail(id);
            vec![Effect::FetchDetail { token, id }]
        }
        Msg::Back => {
            match state.active() {
                ActiveScreen::Detail if state.has_list() => state.show(ActiveScreen::List),
                ActiveScreen::Detail | ActiveScreen::List => {
                    state.show(ActiveScreen::Categories)
                }
                ActiveScreen::Categories => {}
            }
            Vec::new()
        }
        Msg::PageLoaded { token, result } => {
            state.apply_page(token, result);
            Vec::new()
        }
        Msg::DetailLoaded { token, result } => {
            state.apply_detail(token, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn step_page(state: &mut AppState, forward: bool) -> Vec<Effect> {
    let Some((title, filter, page)) = state.step_target(forward) else {
        return Vec::new();
    };
    let token = state.begin_page(Some(title), filter.clone(), page);
    vec![Effect::FetchPage {
        token,
        filter,
        page,
    }]
}

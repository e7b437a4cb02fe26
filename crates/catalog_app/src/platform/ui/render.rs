use std::fmt::Write;

use catalog_core::{
    Advisory, AppViewModel, CategoryCard, DetailView, FetchOutcome, Field, ListView, PlantView,
    ScreenView,
};

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match &view.screen {
        ScreenView::Categories(cards) => render_categories(&mut out, cards),
        ScreenView::List(list) => render_list(&mut out, list),
        ScreenView::Detail(detail) => render_detail(&mut out, detail),
    }
    out
}

fn render_categories(out: &mut String, cards: &[CategoryCard]) {
    let _ = writeln!(out, "Plant Lexicon");
    let _ = writeln!(out, "Discover plants, from houseplants to edible species\n");
    for (index, card) in cards.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({}) - {}",
            index + 1,
            card.name,
            card.slug,
            card.description
        );
    }
}

fn render_list(out: &mut String, list: &ListView) {
    match &list.outcome {
        FetchOutcome::Loading => {
            let _ = writeln!(out, "Loading plants...");
        }
        FetchOutcome::Failed(message) => {
            let _ = writeln!(out, "Error: {message}");
            let _ = writeln!(out, "[b] back to categories");
        }
        FetchOutcome::Ready(page) => {
            let state = page.page_state;
            let _ = writeln!(out, "{}", list.title);
            let _ = writeln!(out, "Page {} of {}\n", state.current_page, state.total_pages);
            for plant in &page.items {
                let marker = if plant.thumbnail_url.is_some() { ' ' } else { '*' };
                let _ = writeln!(
                    out,
                    " {marker}[{}] {} - {}",
                    plant.id, plant.common_name, plant.scientific_name
                );
            }
            if page.items.is_empty() {
                let _ = writeln!(out, "  (no plants on this page)");
            }

            let mut hints = Vec::new();
            if list.can_go_prev() {
                hints.push("[p] previous");
            }
            if list.can_go_next() {
                hints.push("[n] next");
            }
            hints.push("[v <id>] details");
            hints.push("[b] back");
            let _ = writeln!(out, "\n{}", hints.join("  "));
        }
    }
}

fn render_detail(out: &mut String, detail: &DetailView) {
    match &detail.outcome {
        FetchOutcome::Loading => {
            let _ = writeln!(out, "Loading plant details...");
        }
        FetchOutcome::Failed(message) => {
            let _ = writeln!(out, "Error: {message}");
            let _ = writeln!(out, "[b] back");
        }
        FetchOutcome::Ready(None) => {
            let _ = writeln!(out, "Plant not found");
            let _ = writeln!(out, "[b] back");
        }
        FetchOutcome::Ready(Some(plant)) => {
            render_plant(out, plant);
            let _ = writeln!(out, "\n[b] back");
        }
    }
}

fn line(out: &mut String, label: &str, field: &Field<String>) {
    if let Field::Present(value) = field {
        let _ = writeln!(out, "  {label}: {value}");
    }
}

fn list_line(out: &mut String, label: &str, field: &Field<Vec<String>>) {
    if let Field::Present(values) = field {
        let _ = writeln!(out, "  {label}: {}", values.join(", "));
    }
}

fn render_plant(out: &mut String, plant: &PlantView) {
    let _ = writeln!(out, "{}", plant.title());
    let _ = writeln!(out, "Also known as · {}", plant.scientific_name);
    if let Field::Present(url) = &plant.image_url {
        let _ = writeln!(out, "Image: {url}");
    }
    if let Field::Present(description) = &plant.description {
        let _ = writeln!(out, "\n{description}");
    }

    let _ = writeln!(out);
    line(out, "Cycle", &plant.cycle);
    if let Field::Present(range) = &plant.hardiness {
        let _ = writeln!(out, "  Hardiness zone: {}-{}", range.min, range.max);
    }
    line(out, "Growth rate", &plant.growth_rate);
    line(out, "Watering", &plant.watering);
    if let Some(first) = plant.sunlight.value().and_then(|sun| sun.first()) {
        let _ = writeln!(out, "  Sun: {first}");
    }
    line(out, "Care level", &plant.care_level);

    if plant.plant_type.is_present()
        || plant.dimension.is_present()
        || plant.attracts.is_present()
        || plant.propagation.is_present()
    {
        let _ = writeln!(out, "\nBasic information");
        line(out, "Type", &plant.plant_type);
        line(out, "Dimensions", &plant.dimension);
        list_line(out, "Attracts", &plant.attracts);
        list_line(out, "Propagation", &plant.propagation);
    }

    let subject = plant.care_subject();
    if let Field::Present(watering) = &plant.watering {
        let _ = writeln!(
            out,
            "\nWatering\n  {subject} should be watered {}.",
            watering.to_lowercase()
        );
    }
    if let Field::Present(sunlight) = &plant.sunlight {
        let _ = writeln!(
            out,
            "\nSunlight\n  {subject} requires {} sunlight.",
            sunlight.join(", ").to_lowercase()
        );
    }
    if let Field::Present(pruning) = &plant.pruning {
        let _ = writeln!(
            out,
            "\nPruning\n  {subject} should be pruned {}, ideally in {}.",
            pruning.frequency(),
            pruning.months.join(", ")
        );
    }
    if let Field::Present(soil) = &plant.soil {
        let _ = writeln!(out, "\nSoil\n  Recommended soil types: {}", soil.join(", "));
    }
    if plant.pest_susceptibility.is_present() || plant.disease_susceptibility.is_present() {
        let _ = writeln!(out, "\nPests and diseases");
        list_line(out, "Pest susceptibility", &plant.pest_susceptibility);
        list_line(out, "Disease susceptibility", &plant.disease_susceptibility);
    }

    if !plant.advisories.is_empty() {
        let _ = writeln!(out, "\nImportant");
        for advisory in &plant.advisories {
            let _ = writeln!(out, "  {}", advisory_text(*advisory));
        }
    }
}

fn advisory_text(advisory: Advisory) -> &'static str {
    match advisory {
        Advisory::PoisonousToHumans => "Warning! This plant is poisonous to humans",
        Advisory::PoisonousToPets => "Warning! This plant is poisonous to pets",
        Advisory::EdibleLeaf => "Edible leaves",
        Advisory::EdibleFruit => "Edible fruit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{update, AppState, CategoryFilter, Msg};
    use serde_json::json;

    fn loaded_detail(body: serde_json::Value) -> String {
        let (state, _) = update(AppState::new(), Msg::LoadDetail { id: 5 });
        let (state, _) = update(
            state,
            Msg::DetailLoaded {
                token: 1,
                result: Ok(body),
            },
        );
        render(&state.view())
    }

    #[test]
    fn categories_are_numbered() {
        let text = render(&AppState::new().view());
        assert!(text.contains("1. Indoor plants (indoor)"));
        assert!(text.contains("4. All plants (all)"));
    }

    #[test]
    fn list_shows_page_position_and_available_moves() {
        let (state, _) = update(
            AppState::new(),
            Msg::LoadPage {
                filter: CategoryFilter::new("edible=1"),
                page: 1,
            },
        );
        assert!(render(&state.view()).contains("Loading plants..."));

        let (state, _) = update(
            state,
            Msg::PageLoaded {
                token: 1,
                result: Ok(json!({
                    "data": [{ "id": 7, "common_name": "Basil", "scientific_name": ["Ocimum basilicum"] }],
                    "last_page": 3, "to": 20, "total": 60
                })),
            },
        );
        let text = render(&state.view());
        assert!(text.contains("Page 1 of 3"));
        assert!(text.contains("[7] Basil - Ocimum basilicum"));
        assert!(text.contains("[n] next"));
        assert!(!text.contains("[p] previous"));
    }

    #[test]
    fn not_found_differs_from_error() {
        assert!(loaded_detail(serde_json::Value::Null).contains("Plant not found"));

        let (state, _) = update(AppState::new(), Msg::LoadDetail { id: 5 });
        let (state, _) = update(
            state,
            Msg::DetailLoaded {
                token: 1,
                result: Err("Failed to load plant details".into()),
            },
        );
        assert!(render(&state.view()).contains("Error: Failed to load plant details"));
    }

    #[test]
    fn care_sentences_fall_back_to_generic_subject() {
        let text = loaded_detail(json!({
            "id": 5,
            "watering": "Frequent",
            "sunlight": ["Full sun", "Part shade"],
            "pruning_month": ["March"],
            "poisonous_to_humans": 1
        }));
        assert!(text.starts_with("Unnamed\n"));
        assert!(text.contains("This plant should be watered frequent."));
        assert!(text.contains("This plant requires full sun, part shade sunlight."));
        assert!(text.contains("This plant should be pruned regularly, ideally in March."));
        assert!(text.contains("poisonous to humans"));
        assert!(!text.contains("poisonous to pets"));
        assert!(!text.contains("Basic information"));
    }
}

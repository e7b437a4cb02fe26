use catalog_core::{Msg, CATEGORIES};

pub const HELP: &str = "\
Commands:
  c | categories      show the category list
  o <slug|number>     open a category (e.g. `o edible` or `o 2`)
  n | next            next page
  p | prev            previous page
  v <id>              view plant details
  b | back            go back
  h | help            this help
  q | quit            exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    let arg = words.next();

    let command = match (verb, arg) {
        ("c" | "categories", None) => Command::Dispatch(Msg::ShowCategories),
        ("o" | "open", Some(target)) => Command::Dispatch(Msg::OpenCategory {
            slug: category_slug(target),
        }),
        ("n" | "next", None) => Command::Dispatch(Msg::NextPage),
        ("p" | "prev", None) => Command::Dispatch(Msg::PrevPage),
        ("v" | "view", Some(id)) => match id.parse() {
            Ok(id) => Command::Dispatch(Msg::LoadDetail { id }),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("b" | "back", None) => Command::Dispatch(Msg::Back),
        ("h" | "help", None) => Command::Help,
        ("q" | "quit", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(command)
}

/// Accepts a slug or the 1-based position shown in the category list.
fn category_slug(target: &str) -> String {
    target
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| CATEGORIES.get(index))
        .map(|category| category.slug.to_string())
        .unwrap_or_else(|| target.to_string())
}

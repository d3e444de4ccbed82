//! Line-oriented terminal front end.
//!
//! [`TerminalRenderer`] prints each frame as plain text and [`parse_command`]
//! turns a typed line into a [`UiAction`]. Shopping list items are addressed
//! by their position in the last rendered frame.

use std::fmt::Write as _;
use std::io::Write as _;
use std::sync::Arc;

use spin::Mutex;

use crate::app::{Props, RecipePanel, UiAction};
use crate::models::{ItemId, PageButton};
use crate::Renderer;

/// Item ids in the order they were last shown.
pub type ShoppingIndex = Arc<Mutex<Vec<ItemId>>>;

pub const HELP: &str = "\
commands:
  search <query>        search recipes
  page <n>              show result page n
  open <id> | #<id>     open a recipe
  inc | dec             change servings
  add                   add ingredients to the shopping list
  del <n>               delete shopping list item n
  count <n> <value>     set the count of shopping list item n
  like                  like or unlike the open recipe
  help                  show this help
  quit                  exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(UiAction),
    Help,
    Quit,
}

/// Error for a line that is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} (type `help` for commands)")]
pub struct CommandError(String);

/// Parse one input line against the items currently on screen.
///
/// # Errors
///
/// Returns an error describing why the line is not a command.
pub fn parse_command(line: &str, shopping: &[ItemId]) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(id) = line.strip_prefix('#') {
        return Ok(Some(Command::Action(UiAction::Navigate(id.to_string()))));
    }

    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let action = match name {
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "q" | "exit" => return Ok(Some(Command::Quit)),
        "search" | "s" => UiAction::SubmitSearch(rest.to_string()),
        "page" | "p" => UiAction::GoToPage(parse_number(rest, "page")?),
        "open" | "o" => UiAction::Navigate(rest.to_string()),
        "inc" | "+" => UiAction::IncreaseServings,
        "dec" | "-" => UiAction::DecreaseServings,
        "add" => UiAction::AddToList,
        "like" => UiAction::ToggleLike,
        "del" | "rm" => UiAction::DeleteListItem(item_at(shopping, parse_number(rest, "item")?)?),
        "count" => {
            let (position, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| CommandError("usage: count <n> <value>".to_string()))?;
            let id = item_at(shopping, parse_number(position, "item")?)?;
            UiAction::EditListCount(id, value.trim().to_string())
        }
        other => return Err(CommandError(format!("unknown command {other:?}"))),
    };

    Ok(Some(Command::Action(action)))
}

fn parse_number(raw: &str, what: &str) -> Result<usize, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError(format!("expected a {what} number, got {raw:?}")))
}

fn item_at(shopping: &[ItemId], position: usize) -> Result<ItemId, CommandError> {
    position
        .checked_sub(1)
        .and_then(|index| shopping.get(index))
        .cloned()
        .ok_or_else(|| CommandError(format!("no shopping list item {position}")))
}

/// Renders props as text on stdout.
pub struct TerminalRenderer {
    shopping: ShoppingIndex,
}

impl TerminalRenderer {
    pub fn new(shopping: ShoppingIndex) -> Self {
        Self { shopping }
    }
}

impl Renderer<Props> for TerminalRenderer {
    fn render(&mut self, props: Props) {
        *self.shopping.lock() = props.shopping.iter().map(|row| row.id.clone()).collect();

        let frame = render_frame(&props);
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(frame.as_bytes()).and_then(|()| stdout.flush()) {
            tracing::warn!(error = %e, "failed to write frame");
        }
    }
}

/// Text for one frame.
pub fn render_frame(props: &Props) -> String {
    let mut out = String::new();
    out.push_str("\n========================================\n");

    if let Some(notice) = &props.notice {
        let _ = writeln!(out, "!! {notice}");
    }

    if props.search.loading {
        out.push_str("[search] loading...\n");
    } else if !props.search.results.is_empty() {
        let _ = writeln!(out, "[search] page {}", props.search.page);
        for row in &props.search.results {
            let marker = if row.selected { '>' } else { ' ' };
            let _ = writeln!(out, " {marker} #{:<8} {} ({})", row.id, row.title, row.author);
        }
        let buttons: Vec<String> = props
            .search
            .buttons
            .iter()
            .map(|button| match button {
                PageButton::Prev(page) => format!("< page {page}"),
                PageButton::Next(page) => format!("page {page} >"),
            })
            .collect();
        if !buttons.is_empty() {
            let _ = writeln!(out, "   {}", buttons.join("   "));
        }
    }

    match &props.recipe {
        RecipePanel::Empty => {}
        RecipePanel::Loading => out.push_str("[recipe] loading...\n"),
        RecipePanel::Loaded(card) => {
            let heart = if card.liked { "liked" } else { "not liked" };
            let _ = writeln!(out, "[recipe] {} by {} ({heart})", card.title, card.author);
            let _ = writeln!(out, "  {} minutes, {} servings", card.time, card.servings);
            for row in &card.ingredients {
                let _ = writeln!(out, "  - {} {} {}", row.count, row.unit, row.ingredient);
            }
            let _ = writeln!(out, "  directions: {}", card.url);
        }
    }

    if !props.shopping.is_empty() {
        out.push_str("[shopping list]\n");
        for (position, row) in props.shopping.iter().enumerate() {
            let count = row.count.map_or_else(String::new, |c| c.to_string());
            let _ = writeln!(out, "  {}. {count} {} {}", position + 1, row.unit, row.ingredient);
        }
    }

    if props.likes.menu_visible {
        out.push_str("[likes]\n");
        for like in &props.likes.entries {
            let _ = writeln!(out, "  #{:<8} {} ({})", like.id, like.title, like.author);
        }
    }

    out
}

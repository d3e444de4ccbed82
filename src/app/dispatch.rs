//! Dispatch table from UI actions to controller events.
//!
//! Front ends only detect what the user did and report it as a [`UiAction`];
//! deciding what that means for the state is left to the controller.

use crate::models::{ItemId, ServingsChange};
use crate::Emitter;

use super::event::Event;

/// Something the user did in the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SubmitSearch(String),
    GoToPage(usize),
    /// Location hash changed, e.g. `#47746`.
    Navigate(String),
    DecreaseServings,
    IncreaseServings,
    AddToList,
    DeleteListItem(ItemId),
    /// Raw text typed into a list item's count field.
    EditListCount(ItemId, String),
    ToggleLike,
}

impl UiAction {
    /// The event an action maps to, `None` when it carries nothing to do.
    pub fn into_event(self) -> Option<Event> {
        match self {
            UiAction::SubmitSearch(text) => {
                let query = text.trim();
                (!query.is_empty()).then(|| Event::SearchSubmitted(query.to_string()))
            }
            UiAction::GoToPage(page) => Some(Event::PageRequested(page)),
            UiAction::Navigate(hash) => {
                let id = hash.trim().trim_start_matches('#');
                (!id.is_empty()).then(|| Event::LocationChanged(id.to_string()))
            }
            UiAction::DecreaseServings => Some(Event::ServingsChanged(ServingsChange::Decrease)),
            UiAction::IncreaseServings => Some(Event::ServingsChanged(ServingsChange::Increase)),
            UiAction::AddToList => Some(Event::AddIngredientsToList),
            UiAction::DeleteListItem(id) => Some(Event::ListItemDeleted(id)),
            UiAction::EditListCount(id, raw) => Some(Event::ListItemCountChanged {
                id,
                count: parse_float(&raw),
            }),
            UiAction::ToggleLike => Some(Event::LikeToggled),
        }
    }
}

/// Lenient number parsing: the longest numeric prefix wins, NaN otherwise.
///
/// ```rust
/// use forkify_core::app::parse_float;
///
/// assert_eq!(parse_float(" 2.5 cups"), 2.5);
/// assert_eq!(parse_float("1e3"), 1000.0);
/// assert!(parse_float("lots").is_nan());
/// ```
pub fn parse_float(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let candidate: &str = {
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
            .map_or(trimmed.len(), |(i, _)| i);
        &trimmed[..end]
    };

    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Props handle turning UI actions into queued events.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    emitter: Emitter<Event>,
}

impl Dispatcher {
    pub fn new(emitter: Emitter<Event>) -> Self {
        Self { emitter }
    }

    /// Queue the event for `action`. Returns whether anything was queued.
    pub fn dispatch(&self, action: UiAction) -> bool {
        tracing::trace!(?action, "ui action");
        match action.into_event() {
            Some(event) => {
                self.emitter.emit(event);
                true
            }
            None => false,
        }
    }
}

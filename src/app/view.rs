//! Props derived from [`AppState`] for the renderer.

use crate::models::search::limit_title;
use crate::models::{Ingredient, ItemId, Likes, PageButton, Recipe};

use super::dispatch::Dispatcher;
use super::state::{AppState, RecipeState, SearchState};

/// Largest denominator used when printing fractional counts.
const MAX_DENOMINATOR: u32 = 16;

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Props {
    pub search: SearchPanel,
    pub recipe: RecipePanel,
    pub shopping: Vec<ShoppingRow>,
    pub likes: LikesPanel,
    /// Alert to show for this frame only.
    pub notice: Option<String>,
    pub dispatch: Dispatcher,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPanel {
    pub loading: bool,
    pub page: usize,
    pub results: Vec<ResultRow>,
    pub buttons: Vec<PageButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    /// Row of the recipe currently on display.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecipePanel {
    Empty,
    Loading,
    Loaded(RecipeCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub servings: u32,
    pub time: u32,
    pub liked: bool,
    pub can_decrease: bool,
    pub ingredients: Vec<IngredientRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub count: String,
    pub unit: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingRow {
    pub id: ItemId,
    /// Raw value, shown in an editable field.
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LikesPanel {
    pub menu_visible: bool,
    pub entries: Vec<LikeRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Layout parameters for deriving props.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub results_per_page: usize,
    pub title_limit: usize,
}

pub fn derive_props(state: &AppState, options: ViewOptions, dispatch: Dispatcher) -> Props {
    Props {
        search: search_panel(state, options),
        recipe: recipe_panel(&state.recipe, &state.likes),
        shopping: state
            .list
            .iter()
            .flat_map(|list| list.items())
            .map(|item| ShoppingRow {
                id: item.id.clone(),
                count: item.count,
                unit: item.unit.clone(),
                ingredient: item.ingredient.clone(),
            })
            .collect(),
        likes: likes_panel(&state.likes, options.title_limit),
        notice: state.notice.as_ref().map(|e| e.user_message().to_string()),
        dispatch,
    }
}

fn search_panel(state: &AppState, options: ViewOptions) -> SearchPanel {
    match &state.search {
        SearchState::Searching { .. } => SearchPanel {
            loading: true,
            ..Default::default()
        },
        SearchState::Ready { session, page } => {
            let selected = state.location.as_deref();
            SearchPanel {
                loading: false,
                page: *page,
                results: session
                    .page(*page, options.results_per_page)
                    .iter()
                    .map(|summary| ResultRow {
                        id: summary.id.clone(),
                        title: limit_title(&summary.title, options.title_limit),
                        author: summary.author.clone(),
                        img: summary.img.clone(),
                        selected: selected == Some(summary.id.as_str()),
                    })
                    .collect(),
                buttons: session.page_buttons(*page, options.results_per_page),
            }
        }
        SearchState::Idle | SearchState::Failed { .. } => SearchPanel::default(),
    }
}

fn recipe_panel(recipe: &RecipeState, likes: &Likes) -> RecipePanel {
    match recipe {
        RecipeState::Unloaded | RecipeState::Failed { .. } => RecipePanel::Empty,
        RecipeState::Loading { .. } => RecipePanel::Loading,
        RecipeState::Loaded(recipe) => RecipePanel::Loaded(recipe_card(recipe, likes.is_liked(&recipe.id))),
    }
}

fn recipe_card(recipe: &Recipe, liked: bool) -> RecipeCard {
    RecipeCard {
        id: recipe.id.clone(),
        title: recipe.title.clone(),
        author: recipe.author.clone(),
        img: recipe.img.clone(),
        url: recipe.url.clone(),
        servings: recipe.servings,
        time: recipe.time,
        liked,
        can_decrease: recipe.can_decrease(),
        ingredients: recipe.ingredients.iter().map(ingredient_row).collect(),
    }
}

fn ingredient_row(ingredient: &Ingredient) -> IngredientRow {
    IngredientRow {
        count: format_count(ingredient.count),
        unit: ingredient.unit.clone(),
        ingredient: ingredient.ingredient.clone(),
    }
}

fn likes_panel(likes: &Likes, title_limit: usize) -> LikesPanel {
    LikesPanel {
        menu_visible: likes.total() > 0,
        entries: likes
            .iter()
            .map(|like| LikeRow {
                id: like.id.clone(),
                title: limit_title(&like.title, title_limit),
                author: like.author.clone(),
                img: like.img.clone(),
            })
            .collect(),
    }
}

/// Print a count as a whole number or mixed fraction.
///
/// Missing and non-finite counts print as `?`.
///
/// ```rust
/// use forkify_core::app::format_count;
///
/// assert_eq!(format_count(Some(2.5)), "2 1/2");
/// assert_eq!(format_count(Some(0.25)), "1/4");
/// assert_eq!(format_count(Some(250.0)), "250");
/// assert_eq!(format_count(None), "?");
/// ```
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count.filter(|c| c.is_finite()) else {
        return "?".to_string();
    };

    let sign = if count < 0.0 { "-" } else { "" };
    let value = count.abs();
    let mut whole = value.trunc();
    let (numerator, denominator) = closest_fraction(value - whole);

    if numerator == denominator {
        whole += 1.0;
    }
    if numerator == 0 || numerator == denominator {
        return format!("{sign}{whole}");
    }
    if whole == 0.0 {
        format!("{sign}{numerator}/{denominator}")
    } else {
        format!("{sign}{whole} {numerator}/{denominator}")
    }
}

/// Closest `n/d` to `fraction` (in `[0, 1)`) with the smallest such `d`.
fn closest_fraction(fraction: f64) -> (u32, u32) {
    let mut best = (0, 1);
    let mut best_error = fraction;

    for denominator in 1..=MAX_DENOMINATOR {
        let numerator = (fraction * f64::from(denominator)).round();
        let error = (fraction - numerator / f64::from(denominator)).abs();
        if error + 1e-12 < best_error {
            best = (numerator as u32, denominator);
            best_error = error;
        }
    }

    best
}

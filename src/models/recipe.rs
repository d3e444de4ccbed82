//! Recipe detail: ingredient parsing, cooking time and serving scaling.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Servings every recipe starts with.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Minutes of preparation per group of [`INGREDIENTS_PER_PERIOD`] ingredients.
const MINUTES_PER_PERIOD: u32 = 15;
const INGREDIENTS_PER_PERIOD: usize = 3;

const LONG_UNITS: [(&str, &str); 8] = [
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

const UNITS: [&str; 7] = ["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

static PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\([^)]*\) *").expect("valid parentheses pattern"));

/// Recipe fields as delivered by the recipe source, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub ingredients: Vec<String>,
}

/// One structured ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity, `None` when the line carried none that could be read.
    pub count: Option<f64>,
    /// Short unit name, empty when absent.
    pub unit: String,
    pub ingredient: String,
}

impl Ingredient {
    /// Parse a free-text ingredient line.
    ///
    /// ```rust
    /// use forkify_core::models::Ingredient;
    ///
    /// let parsed = Ingredient::parse("1 1/2 Cups (about 200g) flour");
    /// assert_eq!(parsed.count, Some(1.5));
    /// assert_eq!(parsed.unit, "cup");
    /// assert_eq!(parsed.ingredient, "flour");
    /// ```
    pub fn parse(line: &str) -> Self {
        let mut text = line.to_lowercase();
        for (long, short) in LONG_UNITS {
            text = text.replacen(long, short, 1);
        }
        let text = PARENTHESES.replace_all(&text, " ");
        let words: Vec<&str> = text.split_whitespace().collect();

        if let Some(unit_index) = words.iter().position(|w| UNITS.contains(w)) {
            let count = match &words[..unit_index] {
                [] => None,
                [single] => parse_sum(&single.replace('-', "+")),
                several => parse_sum(&several.join("+")),
            };
            return Self {
                count,
                unit: words[unit_index].to_string(),
                ingredient: words[unit_index + 1..].join(" "),
            };
        }

        if let Some(leading) = words.first().and_then(|w| leading_integer(w)) {
            return Self {
                count: Some(leading as f64),
                unit: String::new(),
                ingredient: words[1..].join(" "),
            };
        }

        Self {
            count: None,
            unit: String::new(),
            ingredient: words.join(" "),
        }
    }
}

/// Sum of `+`-separated terms, each a decimal or an `a/b` fraction.
fn parse_sum(expression: &str) -> Option<f64> {
    expression
        .split('+')
        .map(|term| {
            let term = term.trim();
            match term.split_once('/') {
                Some((num, den)) => {
                    let num: f64 = num.trim().parse().ok()?;
                    let den: f64 = den.trim().parse().ok()?;
                    (den != 0.0).then(|| num / den)
                }
                None => term.parse::<f64>().ok(),
            }
        })
        .sum::<Option<f64>>()
        .filter(|total| total.is_finite())
}

/// Leading decimal digits of `word`, when they form a non-zero integer.
fn leading_integer(word: &str) -> Option<u64> {
    let digits: String = word.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<u64>().ok().filter(|n| *n != 0)
}

/// Direction of a servings adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Increase,
    Decrease,
}

/// The currently viewed recipe.
///
/// Ingredient counts always derive from the counts parsed at
/// `base_servings`, so any sequence of servings changes that returns to a
/// previous value restores the exact previous counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub servings: u32,
    /// Estimated preparation time in minutes.
    pub time: u32,
    pub ingredients: Vec<Ingredient>,
    base_servings: u32,
    base_counts: Vec<Option<f64>>,
}

impl Recipe {
    /// Build a recipe from source data: parse ingredients, then compute time
    /// and servings.
    pub fn from_raw(raw: RawRecipe) -> Self {
        let ingredients: Vec<Ingredient> = raw.ingredients.iter().map(|l| Ingredient::parse(l)).collect();
        Self::with_ingredients(raw, ingredients, DEFAULT_SERVINGS)
    }

    /// Build a recipe from already structured ingredients measured for
    /// `servings` people.
    pub fn with_ingredients(raw: RawRecipe, ingredients: Vec<Ingredient>, servings: u32) -> Self {
        let servings = servings.max(1);
        let base_counts = ingredients.iter().map(|i| i.count).collect();
        let time = estimate_time(ingredients.len());

        Self {
            id: raw.id,
            title: raw.title,
            author: raw.author,
            img: raw.img,
            url: raw.url,
            servings,
            time,
            ingredients,
            base_servings: servings,
            base_counts,
        }
    }

    /// Whether a decrease would keep servings at one or more.
    pub fn can_decrease(&self) -> bool {
        self.servings > 1
    }

    /// Adjust servings by one and rescale every ingredient count.
    ///
    /// Returns `false` and leaves the recipe untouched when a decrease would
    /// drop below one serving.
    pub fn update_servings(&mut self, change: ServingsChange) -> bool {
        let servings = match change {
            ServingsChange::Increase => self.servings.saturating_add(1),
            ServingsChange::Decrease if self.can_decrease() => self.servings - 1,
            ServingsChange::Decrease => return false,
        };
        self.set_servings(servings);
        true
    }

    fn set_servings(&mut self, servings: u32) {
        let ratio = f64::from(servings) / f64::from(self.base_servings);
        for (ingredient, base) in self.ingredients.iter_mut().zip(&self.base_counts) {
            ingredient.count = base.map(|count| count * ratio);
        }
        self.servings = servings;
    }
}

fn estimate_time(ingredient_count: usize) -> u32 {
    let periods = ingredient_count.div_ceil(INGREDIENTS_PER_PERIOD);
    u32::try_from(periods).unwrap_or(u32::MAX / MINUTES_PER_PERIOD) * MINUTES_PER_PERIOD
}

//! Search session and result pagination.

use serde::{Deserialize, Serialize};

/// A recipe as listed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// One submitted query and the results it produced.
///
/// A new session replaces the previous one on every submission; no history
/// is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub query: String,
    pub result: Vec<RecipeSummary>,
}

/// Navigation control shown under a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Prev(usize),
    Next(usize),
}

impl PageButton {
    /// Page the button navigates to.
    pub fn target(self) -> usize {
        match self {
            PageButton::Prev(page) | PageButton::Next(page) => page,
        }
    }
}

impl SearchSession {
    pub fn new(query: impl Into<String>, result: Vec<RecipeSummary>) -> Self {
        Self {
            query: query.into(),
            result,
        }
    }

    /// Number of pages needed to show every result.
    pub fn page_count(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.result.len().div_ceil(per_page)
    }

    /// Whether `page` (1-based) exists for this result set.
    pub fn has_page(&self, page: usize, per_page: usize) -> bool {
        page >= 1 && page <= self.page_count(per_page)
    }

    /// Results on `page` (1-based). Out-of-range pages are empty.
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if !self.has_page(page, per_page) {
            return &[];
        }
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(self.result.len());
        &self.result[start..end]
    }

    /// Buttons shown under `page`.
    pub fn page_buttons(&self, page: usize, per_page: usize) -> Vec<PageButton> {
        let pages = self.page_count(per_page);
        if pages <= 1 || page == 0 || page > pages {
            return Vec::new();
        }

        if page == 1 {
            vec![PageButton::Next(2)]
        } else if page < pages {
            vec![PageButton::Prev(page - 1), PageButton::Next(page + 1)]
        } else {
            vec![PageButton::Prev(page - 1)]
        }
    }
}

/// Shorten a title to whole words fitting within `limit` characters.
///
/// Titles that already fit are returned unchanged; otherwise the kept words
/// are followed by `" ..."`. A first word longer than the limit leaves just
/// the ellipsis.
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in title.split(' ') {
        let word_len = word.chars().count();
        if length + word_len > limit {
            break;
        }
        length += word_len;
        kept.push(word);
    }

    format!("{} ...", kept.join(" "))
}

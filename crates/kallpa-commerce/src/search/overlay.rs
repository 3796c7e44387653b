//! Search overlay state: quick search over pages and products with
//! keyboard navigation.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A navigable page offered by the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub name: String,
    pub path: String,
    pub description: String,
}

impl PageLink {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: description.into(),
        }
    }

    /// The fixed set of marketing and catalog pages.
    pub fn defaults() -> Vec<PageLink> {
        vec![
            PageLink::new("Home", "/", "Main page"),
            PageLink::new("Products", "/products", "Product catalog"),
            PageLink::new("About", "/about", "Learn more about KALLPA"),
        ]
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// One overlay result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchHit {
    Page(PageLink),
    Product(Product),
}

impl SearchHit {
    /// Where selecting this hit navigates.
    pub fn path(&self) -> String {
        match self {
            SearchHit::Page(page) => page.path.clone(),
            SearchHit::Product(product) => format!("/products/{}", product.id),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SearchHit::Page(page) => &page.name,
            SearchHit::Product(product) => &product.name,
        }
    }
}

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// What the UI should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// Stay open; the cursor may have moved.
    Stay,
    /// Navigate to the path; the overlay has closed.
    Navigate(String),
    /// The overlay was dismissed.
    Dismissed,
}

/// State of the search overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOverlay {
    pages: Vec<PageLink>,
    is_open: bool,
    query: String,
    results: Vec<SearchHit>,
    selected: usize,
}

impl SearchOverlay {
    /// Overlay over the given pages, closed and empty.
    pub fn new(pages: Vec<PageLink>) -> Self {
        Self {
            pages,
            is_open: false,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close and forget the query, results and cursor.
    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.results.clear();
        self.selected = 0;
    }

    /// Replace the query and recompute results; the cursor returns to the top.
    ///
    /// Page hits come before product hits. A blank query has no results.
    pub fn set_query(&mut self, query: impl Into<String>, products: &[Product]) {
        self.query = query.into();
        self.selected = 0;
        self.results.clear();

        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return;
        }

        self.results.extend(
            self.pages
                .iter()
                .filter(|page| page.matches_text(&needle))
                .cloned()
                .map(SearchHit::Page),
        );
        self.results.extend(
            products
                .iter()
                .filter(|product| product.matches_text(&needle))
                .cloned()
                .map(SearchHit::Product),
        );
    }

    /// Handle a key press. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: OverlayKey) -> OverlayOutcome {
        if !self.is_open {
            return OverlayOutcome::Stay;
        }

        match key {
            OverlayKey::Escape => {
                self.close();
                OverlayOutcome::Dismissed
            }
            OverlayKey::Down => {
                let last = self.results.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                OverlayOutcome::Stay
            }
            OverlayKey::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayOutcome::Stay
            }
            OverlayKey::Enter => match self.selected_hit().map(SearchHit::path) {
                Some(path) => {
                    self.close();
                    OverlayOutcome::Navigate(path)
                }
                None => OverlayOutcome::Stay,
            },
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Cursor position, always within the result list when it is non-empty.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.results.get(self.selected)
    }

    /// True when a non-blank query matched nothing.
    pub fn has_no_results(&self) -> bool {
        !self.query.trim().is_empty() && self.results.is_empty()
    }
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self::new(PageLink::defaults())
    }
}

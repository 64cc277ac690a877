//! Autocomplete engine
//!
//! Derives a bounded suggestion list from the search box text and drives
//! keyboard highlight cycling over it.
//!
//! Two states:
//! - Idle: panel hidden, no highlight
//! - Open: panel visible, at least one suggestion, highlight in range
//!
//! Blur does not hide the panel immediately. It arms a short deadline so a
//! pointer click on a suggestion, which arrives after the blur, still
//! lands on a visible item. Callers feed time in through [`Autocomplete::poll`].

use std::time::{Duration, Instant};

use shared::models::Product;

/// Maximum number of suggestions shown
pub const MAX_SUGGESTIONS: usize = 6;

/// Delay between blur and the panel actually hiding
pub const BLUR_DISMISS_DELAY: Duration = Duration::from_millis(150);

/// Highlight movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// Keys the search box forwards to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

/// Result of a key press
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Not consumed; the caller keeps its default behavior
    Ignored,
    /// Consumed without a selection
    Handled,
    /// A suggestion was committed; the caller should navigate to it
    Selected(Product),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteState {
    Idle,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    query: String,
    suggestions: Vec<Product>,
    highlighted: Option<usize>,
    visible: bool,
    dismiss_at: Option<Instant>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute suggestions for new search box text
    ///
    /// Matching is a case-insensitive substring test on name or category
    /// over `collection`, kept in collection order.
    pub fn update_query(&mut self, query: &str, collection: &[Product]) {
        self.query = query.to_string();
        let needle = query.trim().to_lowercase();

        if needle.is_empty() {
            self.suggestions.clear();
            self.close();
            return;
        }

        self.suggestions = collection
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();

        if self.suggestions.is_empty() {
            self.close();
        } else {
            self.visible = true;
            self.highlighted = Some(0);
        }
    }

    /// Move the highlight with wrap-around and preview its name in the query
    pub fn advance_highlight(&mut self, direction: Direction) {
        let count = self.suggestions.len();
        if !self.visible || count == 0 {
            return;
        }
        let next = match (self.highlighted, direction) {
            (Some(i), Direction::Down) => (i + 1) % count,
            (Some(i), Direction::Up) => (i + count - 1) % count,
            (None, Direction::Down) => 0,
            (None, Direction::Up) => count - 1,
        };
        self.highlighted = Some(next);
        self.query = self.suggestions[next].name.clone();
    }

    /// Commit the highlighted suggestion, if any
    pub fn commit_highlighted(&mut self) -> Option<Product> {
        let index = self.highlighted.filter(|&i| i < self.suggestions.len())?;
        self.commit(index)
    }

    /// Pointer selection of suggestion `index`
    ///
    /// Still valid between a blur and its delayed dismissal.
    pub fn select(&mut self, index: usize) -> Option<Product> {
        if !self.visible || index >= self.suggestions.len() {
            return None;
        }
        self.commit(index)
    }

    /// Hide the panel, keeping the query text
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Search box lost focus: dismiss after [`BLUR_DISMISS_DELAY`]
    pub fn blur(&mut self, now: Instant) {
        if self.visible {
            self.dismiss_at = Some(now + BLUR_DISMISS_DELAY);
        }
    }

    /// Search box regained focus: cancel a pending blur dismissal
    pub fn focus(&mut self) {
        self.dismiss_at = None;
    }

    /// Apply a due blur dismissal; returns true when the panel was hidden
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.dismiss_at {
            Some(deadline) if now >= deadline => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.visible || self.suggestions.is_empty() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::ArrowDown => {
                self.advance_highlight(Direction::Down);
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                self.advance_highlight(Direction::Up);
                KeyOutcome::Handled
            }
            Key::Enter => match self.commit_highlighted() {
                Some(product) => KeyOutcome::Selected(product),
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                self.dismiss();
                KeyOutcome::Handled
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    // ========== Accessors ==========

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Overwrite the query text without recomputing suggestions
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn suggestions(&self) -> &[Product] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> AutocompleteState {
        if self.visible {
            AutocompleteState::Open
        } else {
            AutocompleteState::Idle
        }
    }

    fn commit(&mut self, index: usize) -> Option<Product> {
        let product = self.suggestions.get(index).cloned()?;
        tracing::debug!(id = product.id, "Suggestion committed");
        self.query = product.name.clone();
        self.suggestions.clear();
        self.close();
        Some(product)
    }

    fn close(&mut self) {
        self.visible = false;
        self.highlighted = None;
        self.dismiss_at = None;
    }
}

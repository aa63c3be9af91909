//! In-memory catalog view: the fetched collection plus the fetch lifecycle.
//!
//! Every sort/filter operation rewrites `items` from whatever is currently
//! held. Nothing keeps the pre-filter collection around; the only way back to
//! the full catalog is another fetch.

use shared::domain::Product;
use tracing::debug;

use crate::query::{compare_titles, contains_ignore_case, PriceRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Identifies one fetch invocation. Only the most recently issued token can
/// commit a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(u64);

impl FetchToken {
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogViewState {
    items: Vec<Product>,
    loading: bool,
    error: Option<String>,
    phase: FetchPhase,
    phase_before_fetch: FetchPhase,
    latest_request: u64,
}

impl CatalogViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest_request += 1;
        if self.phase != FetchPhase::Pending {
            self.phase_before_fetch = self.phase;
        }
        self.loading = true;
        self.error = None;
        self.phase = FetchPhase::Pending;
        FetchToken(self.latest_request)
    }

    fn is_current(&self, token: FetchToken) -> bool {
        token.0 == self.latest_request && self.phase == FetchPhase::Pending
    }

    /// Replaces `items` with a fetched collection. Returns `false` when the
    /// token was superseded by a later fetch, in which case nothing changes.
    pub fn fulfill(&mut self, token: FetchToken, items: Vec<Product>) -> bool {
        if !self.is_current(token) {
            debug!(
                request = token.0,
                latest = self.latest_request,
                "dropping superseded fetch result"
            );
            return false;
        }
        self.items = items;
        self.loading = false;
        self.phase = FetchPhase::Fulfilled;
        true
    }

    /// Records a fetch failure. `items` keeps whatever it held before.
    pub fn reject(&mut self, token: FetchToken, message: impl Into<String>) -> bool {
        if !self.is_current(token) {
            debug!(
                request = token.0,
                latest = self.latest_request,
                "dropping superseded fetch failure"
            );
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        self.phase = FetchPhase::Rejected;
        true
    }

    /// Gives up on a fetch whose result will never arrive, returning to the
    /// phase held before it started. `items` and `error` are untouched.
    pub fn abandon(&mut self, token: FetchToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.loading = false;
        self.phase = self.phase_before_fetch;
        true
    }

    pub fn sort_by_name(&mut self) {
        self.items.sort_by(|a, b| compare_titles(&a.title, &b.title));
    }

    /// Keeps only items priced inside `range`. Despite the name this narrows
    /// rather than reorders; survivors keep their relative order.
    pub fn sort_by_range_price(&mut self, range: PriceRange) -> usize {
        self.retain(|product| range.contains(product.price))
    }

    pub fn search_title(&mut self, query: &str) -> usize {
        self.retain(|product| contains_ignore_case(&product.title, query))
    }

    /// Substring match rather than equality, so `"clothing"` keeps both
    /// clothing categories.
    pub fn filter_by_category(&mut self, category: &str) -> usize {
        self.retain(|product| contains_ignore_case(&product.category, category))
    }

    fn retain(&mut self, keep: impl Fn(&Product) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|product| keep(product));
        let removed = before - self.items.len();
        debug!(removed, remaining = self.items.len(), "narrowed catalog view");
        removed
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;

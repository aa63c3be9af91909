use std::sync::Arc;

use shared::domain::Product;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

pub mod query;
pub mod state;
pub mod transport;

pub use query::{compare_titles, contains_ignore_case, PriceRange, PriceRangeError};
pub use state::{CatalogViewState, FetchPhase, FetchToken};
pub use transport::{CatalogSource, FetchError, HttpCatalogClient, DEFAULT_CATALOG_URL};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    FetchStarted { request: u64 },
    FetchFulfilled { request: u64, count: usize },
    FetchRejected { request: u64, error: String },
    FetchSuperseded { request: u64 },
    FetchAbandoned { request: u64 },
    ItemsChanged { count: usize },
}

/// Owns the catalog view state and the source it is fetched from.
///
/// Consumers hold a reference (usually an `Arc`) to one store; there is no
/// process-wide instance.
pub struct CatalogStore<S: CatalogSource> {
    source: S,
    state: Mutex<CatalogViewState>,
    events: broadcast::Sender<CatalogEvent>,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            source,
            state: Mutex::new(CatalogViewState::new()),
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> CatalogViewState {
        self.state.lock().await.clone()
    }

    pub async fn items(&self) -> Vec<Product> {
        self.state.lock().await.items().to_vec()
    }

    /// Fetches the whole catalog and commits the outcome. Failures are
    /// recorded in the state's `error`, never returned.
    ///
    /// Dropping the future before it resolves (a timeout, a losing
    /// `select!` branch) abandons the request and clears `loading`.
    pub async fn fetch(&self) {
        let token = self.begin_fetch().await;
        self.complete_fetch(token).await;
    }

    /// Enters the pending phase, then resolves the fetch in the background.
    pub async fn spawn_fetch(self: &Arc<Self>) -> JoinHandle<()>
    where
        S: 'static,
    {
        let token = self.begin_fetch().await;
        let store = Arc::clone(self);
        tokio::spawn(async move {
            store.complete_fetch(token).await;
        })
    }

    async fn begin_fetch(&self) -> FetchToken {
        let token = self.state.lock().await.begin_fetch();
        self.emit(CatalogEvent::FetchStarted {
            request: token.get(),
        });
        token
    }

    async fn complete_fetch(&self, token: FetchToken) {
        let request = token.get();
        let mut in_flight = InFlightFetch {
            store: self,
            token,
            armed: true,
        };
        let outcome = self.source.fetch_all().await;

        let mut state = self.state.lock().await;
        in_flight.armed = false;
        let event = match outcome {
            Ok(products) => {
                let count = products.len();
                if state.fulfill(token, products) {
                    info!(request, count, "catalog fetched");
                    CatalogEvent::FetchFulfilled { request, count }
                } else {
                    CatalogEvent::FetchSuperseded { request }
                }
            }
            Err(err) => {
                let error = err.payload().message();
                if state.reject(token, error.clone()) {
                    warn!(request, error = %err, "catalog fetch failed");
                    CatalogEvent::FetchRejected { request, error }
                } else {
                    CatalogEvent::FetchSuperseded { request }
                }
            }
        };
        drop(state);
        self.emit(event);
    }

    pub async fn sort_by_name(&self) {
        let mut state = self.state.lock().await;
        state.sort_by_name();
        let count = state.items().len();
        drop(state);
        self.emit(CatalogEvent::ItemsChanged { count });
    }

    pub async fn sort_by_range_price(&self, range: PriceRange) -> usize {
        self.narrow(|state| state.sort_by_range_price(range)).await
    }

    pub async fn search_title(&self, query: &str) -> usize {
        self.narrow(|state| state.search_title(query)).await
    }

    pub async fn filter_by_category(&self, category: &str) -> usize {
        self.narrow(|state| state.filter_by_category(category)).await
    }

    async fn narrow(&self, apply: impl FnOnce(&mut CatalogViewState) -> usize) -> usize {
        let mut state = self.state.lock().await;
        let removed = apply(&mut state);
        let count = state.items().len();
        drop(state);
        self.emit(CatalogEvent::ItemsChanged { count });
        removed
    }

    fn emit(&self, event: CatalogEvent) {
        // No receivers is the normal case for headless callers.
        let _ = self.events.send(event);
    }
}

/// Abandons its fetch on drop unless the outcome was committed.
struct InFlightFetch<'a, S: CatalogSource> {
    store: &'a CatalogStore<S>,
    token: FetchToken,
    armed: bool,
}

impl<S: CatalogSource> Drop for InFlightFetch<'_, S> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let request = self.token.get();
        // Busy lock: another task is mid-update; the next fetch settles it.
        let Ok(mut state) = self.store.state.try_lock() else {
            warn!(request, "could not abandon dropped fetch; state busy");
            return;
        };
        if state.abandon(self.token) {
            drop(state);
            debug!(request, "abandoned dropped fetch");
            self.store.emit(CatalogEvent::FetchAbandoned { request });
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

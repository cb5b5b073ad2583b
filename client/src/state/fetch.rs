//! Loading/error/data state for views that fetch on mount.
//!
//! DESIGN
//! ======
//! Every list or dashboard view runs the same cycle: mark loading, await one
//! API call, then store either the data or a fixed failure message. Retry is
//! just running the cycle again. [`Store`] abstracts the reactive cell so the
//! cycle can be driven without a Leptos runtime.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Result of the most recent fetch for one view.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> Loadable<T> {
    /// State before the first fetch completes.
    pub fn pending() -> Self {
        Self { data: None, loading: true, error: None }
    }

    /// State for on-demand fetches that have not been requested yet.
    pub fn idle() -> Self {
        Self { data: None, loading: false, error: None }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a completed fetch. Failures keep any earlier data.
    pub fn finish(&mut self, result: Result<T, ApiError>, failure: &str) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(_) => self.error = Some(failure.to_owned()),
        }
    }
}

/// Reactive cell a fetch cycle writes into.
pub trait Store<S> {
    fn update_with(&self, f: impl FnOnce(&mut S));
}

impl<S: Send + Sync + 'static> Store<S> for RwSignal<S> {
    fn update_with(&self, f: impl FnOnce(&mut S)) {
        self.update(f);
    }
}

/// Run one fetch cycle against `store`, logging and recording any failure.
pub async fn load<S, T, F, Fut>(store: &S, fetch: F, failure: &str)
where
    S: Store<Loadable<T>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    load_if(store, fetch, failure, || true).await;
}

/// Like [`load`], but the response is dropped unless `still_wanted` holds
/// once it arrives. A newer request sharing the same store then owns the
/// loading flag.
pub async fn load_if<S, T, F, Fut, W>(store: &S, fetch: F, failure: &str, still_wanted: W)
where
    S: Store<Loadable<T>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    W: FnOnce() -> bool,
{
    store.update_with(Loadable::begin);
    let result = fetch().await;
    if let Err(err) = &result {
        leptos::logging::error!("{failure}: {err}");
    }
    if still_wanted() {
        store.update_with(|state| state.finish(result, failure));
    }
}

use super::*;
use std::cell::{Cell, RefCell};

impl<S> Store<S> for RefCell<S> {
    fn update_with(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut());
    }
}

// =============================================================
// Loadable transitions
// =============================================================

#[test]
fn pending_starts_loading_and_idle_does_not() {
    let pending = Loadable::<u32>::pending();
    assert!(pending.loading);
    assert!(pending.data.is_none());
    assert!(!Loadable::<u32>::idle().loading);
    assert_eq!(Loadable::<u32>::default(), pending);
}

#[test]
fn finish_ok_stores_data_and_clears_error() {
    let mut state = Loadable::pending();
    state.error = Some("old".to_owned());
    state.finish(Ok(3), "Failed");
    assert_eq!(state.data, Some(3));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_err_records_fixed_message_and_keeps_data() {
    let mut state = Loadable::pending();
    state.finish(Ok(1), "Failed to fetch posts");
    state.begin();
    state.finish(Err(ApiError::Status(500)), "Failed to fetch posts");
    assert_eq!(state.error.as_deref(), Some("Failed to fetch posts"));
    assert_eq!(state.data, Some(1));
}

// =============================================================
// Fetch cycle
// =============================================================

#[test]
fn load_failure_then_retry_reissues_fetch() {
    let store = RefCell::new(Loadable::<Vec<u32>>::pending());
    let calls = Cell::new(0);
    let fetch = || {
        calls.set(calls.get() + 1);
        let attempt = calls.get();
        async move {
            if attempt == 1 {
                Err(ApiError::Transport("offline".to_owned()))
            } else {
                Ok(vec![7, 8])
            }
        }
    };

    futures::executor::block_on(load(&store, fetch, "Failed to fetch posts"));
    assert_eq!(calls.get(), 1);
    assert_eq!(store.borrow().error.as_deref(), Some("Failed to fetch posts"));
    assert!(!store.borrow().loading);

    futures::executor::block_on(load(&store, fetch, "Failed to fetch posts"));
    assert_eq!(calls.get(), 2);
    let state = store.borrow();
    assert_eq!(state.data, Some(vec![7, 8]));
    assert!(state.error.is_none());
}

#[test]
fn load_marks_loading_while_request_is_in_flight() {
    let store = RefCell::new(Loadable::<u32>::idle());
    let seen_loading = Cell::new(false);
    futures::executor::block_on(load(
        &store,
        || {
            seen_loading.set(store.borrow().loading);
            async { Ok(1) }
        },
        "Failed",
    ));
    assert!(seen_loading.get());
    assert!(!store.borrow().loading);
}

#[test]
fn load_if_drops_unwanted_response() {
    let store = RefCell::new(Loadable::<u32>::idle());
    futures::executor::block_on(load_if(&store, || async { Ok(5) }, "Failed", || false));
    let state = store.borrow();
    assert!(state.data.is_none());
    assert!(state.loading);
}

#[test]
fn late_response_for_superseded_request_does_not_overwrite_newer_one() {
    let store = RefCell::new(Loadable::<u32>::idle());
    let open = Cell::new(Some(1));
    let (release_first, first_gate) = futures::channel::oneshot::channel::<()>();

    let first = load_if(
        &store,
        move || async move {
            let _ = first_gate.await;
            Ok(1)
        },
        "Failed",
        || open.get() == Some(1),
    );
    let second = async {
        open.set(Some(2));
        load_if(&store, || async { Ok(2) }, "Failed", || open.get() == Some(2)).await;
        let _ = release_first.send(());
    };
    futures::executor::block_on(futures::future::join(first, second));

    let state = store.borrow();
    assert_eq!(state.data, Some(2));
    assert!(!state.loading);
}

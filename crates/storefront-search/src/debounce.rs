//! Debounced search-suggestion state machine.
//!
//! The header search box coalesces rapid keystrokes into one request: a
//! request fires only after a quiet period with no further input. Superseded
//! timers are aborted, never left to fire, so only the most recent query is
//! ever dispatched. Clearing the box cancels synchronously — no stale
//! results flash after the overlay closes.
//!
//! Fired requests carry a [`Generation`] from a shared [`RequestSequencer`];
//! consumers check `is_current` before applying a response, which closes the
//! race where a slow early response overwrites a fast later one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sequencer::{Generation, RequestSequencer};

/// Where the suggestion box is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestState {
    /// No query text; overlay closed.
    Idle,
    /// Query text present; debounce window running.
    Pending,
    /// A request has fired; overlay open.
    Suggesting,
}

/// One dispatched search, tagged for latest-wins resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub generation: Generation,
}

/// The debounced search box.
///
/// Input events mutate the machine synchronously; the only asynchronous
/// piece is the debounce timer, which fires at most one [`SearchRequest`]
/// per quiet period onto the channel handed out by [`SuggestionBox::new`].
///
/// Methods must be called from within a tokio runtime (the timer is a
/// spawned task).
pub struct SuggestionBox {
    inner: Arc<Inner>,
}

struct Inner {
    window: Duration,
    tx: mpsc::UnboundedSender<SearchRequest>,
    sequencer: Arc<RequestSequencer>,
    state: Mutex<BoxState>,
}

struct BoxState {
    state: SuggestState,
    query: String,
    timer: Option<JoinHandle<()>>,
    /// Bumped on every input event; a timer only fires if its epoch is
    /// still current when it wakes, closing the abort/fire race.
    timer_epoch: u64,
}

impl SuggestionBox {
    /// Creates a suggestion box with the given debounce window, returning
    /// the receiving end of the request channel.
    #[must_use]
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<SearchRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let inner = Arc::new(Inner {
            window,
            tx,
            sequencer: Arc::new(RequestSequencer::new()),
            state: Mutex::new(BoxState {
                state: SuggestState::Idle,
                query: String::new(),
                timer: None,
                timer_epoch: 0,
            }),
        });
        (Self { inner }, rx)
    }

    /// The sequencer requests are tagged with; consumers use it to discard
    /// stale responses.
    #[must_use]
    pub fn sequencer(&self) -> Arc<RequestSequencer> {
        Arc::clone(&self.inner.sequencer)
    }

    #[must_use]
    pub fn state(&self) -> SuggestState {
        self.inner.state.lock().expect("suggestion state poisoned").state
    }

    /// Whether the results overlay is open.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.state() == SuggestState::Suggesting
    }

    /// Handles an input-box edit.
    ///
    /// A non-empty query (re)starts the debounce window, superseding any
    /// pending timer. The empty query cancels synchronously: pending timer
    /// aborted, overlay closed, state back to `Idle` — zero requests fire.
    pub fn on_input(&self, query: &str) {
        let mut st = self.inner.state.lock().expect("suggestion state poisoned");
        st.timer_epoch += 1;
        if let Some(timer) = st.timer.take() {
            timer.abort();
        }

        if query.is_empty() {
            st.state = SuggestState::Idle;
            st.query.clear();
            return;
        }

        st.state = SuggestState::Pending;
        st.query = query.to_owned();

        let epoch = st.timer_epoch;
        let inner = Arc::clone(&self.inner);
        st.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.window).await;
            inner.fire(epoch);
        }));
    }

    /// Explicit form submission: bypasses the debounce window and fires
    /// immediately for the literal query. Any pending timer is cancelled;
    /// the machine returns to `Idle` (the page navigates away).
    ///
    /// Empty queries are ignored.
    pub fn submit(&self, query: &str) {
        let mut st = self.inner.state.lock().expect("suggestion state poisoned");
        st.timer_epoch += 1;
        if let Some(timer) = st.timer.take() {
            timer.abort();
        }
        st.state = SuggestState::Idle;
        st.query.clear();

        if query.is_empty() {
            return;
        }
        let generation = self.inner.sequencer.issue();
        let _ = self.inner.tx.send(SearchRequest {
            query: query.to_owned(),
            generation,
        });
    }

    /// Closes the overlay (click-outside, escape, explicit close) without
    /// revoking a request already in flight.
    pub fn close_overlay(&self) {
        let mut st = self.inner.state.lock().expect("suggestion state poisoned");
        if st.state == SuggestState::Suggesting {
            st.state = SuggestState::Idle;
        }
    }
}

impl Inner {
    /// Runs when a debounce timer wakes: fires the request if the timer is
    /// still the current one.
    fn fire(&self, epoch: u64) {
        let mut st = self.state.lock().expect("suggestion state poisoned");
        if st.timer_epoch != epoch || st.state != SuggestState::Pending {
            return;
        }
        st.state = SuggestState::Suggesting;
        st.timer = None;
        let generation = self.sequencer.issue();
        let request = SearchRequest {
            query: st.query.clone(),
            generation,
        };
        drop(st);
        if self.tx.send(request).is_err() {
            tracing::debug!("suggestion consumer dropped; request discarded");
        }
    }
}

impl Drop for SuggestionBox {
    fn drop(&mut self) {
        if let Some(timer) = self
            .inner
            .state
            .lock()
            .ok()
            .and_then(|mut st| st.timer.take())
        {
            timer.abort();
        }
    }
}

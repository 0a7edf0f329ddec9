//! Per-call loading/error tracker
//!
//! Wraps one outstanding API call at a time with a loading flag and a
//! stored display error. Overlapping calls are not queued or coalesced:
//! both write the same state and the last writer wins. That is acceptable
//! only because the UI disables the triggering control while
//! [`CallState::is_loading`] is true.

use cortado_client::ClientResult;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Loading flag plus last error for one call site
#[derive(Debug, Default)]
pub struct CallState {
    loading: AtomicBool,
    error: Mutex<Option<String>>,
}

impl CallState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a call is currently in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Display string of the last failed call, if any
    pub fn error(&self) -> Option<String> {
        self.error.lock().expect("call state poisoned").clone()
    }

    /// Drop the stored error (e.g. when the user dismisses the toast)
    pub fn clear_error(&self) {
        *self.error.lock().expect("call state poisoned") = None;
    }

    /// Run one API call, tracking loading state and translating any failure
    /// into a stored display string. Returns `None` on failure.
    pub async fn run<T, F>(&self, call: F) -> Option<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        self.loading.store(true, Ordering::SeqCst);
        self.clear_error();

        let result = call.await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("API call failed: {}", err);
                *self.error.lock().expect("call state poisoned") = Some(err.display_message());
                None
            }
        }
    }
}

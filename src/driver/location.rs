//! Hash location and its change notifications.
//!
//! Stands in for the host's `location.hash` plus its hash-change event:
//! writers call [`HashLocation::set_hash`], and a single live subscriber
//! receives every later change in order.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::error::{RouterError, RouterResult};

/// Receiving half of a hash-change subscription. Dropping it deregisters.
pub type HashChanges = mpsc::UnboundedReceiver<String>;

#[derive(Debug)]
struct State {
    current: String,
    subscriber: Option<mpsc::UnboundedSender<String>>,
}

/// Shared, cloneable handle to the current hash URL.
#[derive(Debug, Clone)]
pub struct HashLocation {
    state: Arc<Mutex<State>>,
}

impl HashLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                current: initial.into(),
                subscriber: None,
            })),
        }
    }

    /// The current URL.
    pub fn current(&self) -> String {
        self.state
            .lock()
            .expect("hash location mutex poisoned")
            .current
            .clone()
    }

    /// Navigate to `url`.
    ///
    /// Like the browser event, a notification is only published when the
    /// URL actually changes. Returns whether it did.
    pub fn set_hash(&self, url: impl Into<String>) -> bool {
        let url = url.into();
        let mut state = self.state.lock().expect("hash location mutex poisoned");
        if state.current == url {
            return false;
        }
        state.current.clone_from(&url);

        if let Some(tx) = &state.subscriber {
            if tx.send(url).is_err() {
                tracing::trace!("hash change dropped, subscriber is gone");
            }
        }
        true
    }

    /// Register the hash-change subscriber.
    ///
    /// Returns the current URL together with the receiver for every change
    /// after it. Only one live subscription is allowed; once the previous
    /// receiver is dropped a new one may register.
    pub fn subscribe(&self) -> RouterResult<(String, HashChanges)> {
        let mut state = self.state.lock().expect("hash location mutex poisoned");
        if state.subscriber.as_ref().is_some_and(|tx| !tx.is_closed()) {
            return Err(RouterError::AlreadySubscribed);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        state.subscriber = Some(tx);
        Ok((state.current.clone(), rx))
    }
}

impl Default for HashLocation {
    fn default() -> Self {
        Self::new("")
    }
}

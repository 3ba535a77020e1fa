//! A minimal cooperative cancellation signal for the async façade
//! (`spec` §4.6: "the asynchronous entry points accept a cancellation
//! signal and check it at I/O boundaries, never mid-symbol").
//!
//! This is deliberately not `tokio_util::sync::CancellationToken`: the
//! façade only needs a flag checked between reads/writes, not the
//! hierarchical child-token machinery that type provides.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply cloned, shareable cancel flag.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next I/O boundary the
    /// façade checks, not immediately.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

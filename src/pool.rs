//! The shared scratch-buffer pool used by the array decoder.
//!
//! One [`Pool<T>`] exists per element type `T`, published through the
//! type-identity [`registry`](crate::registry). Rent/return is lock-free
//! (`crossbeam_queue::SegQueue`); only the first lookup for a
//! never-before-seen `T` touches the registry's lock.

use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_queue::SegQueue;

use crate::registry;

struct PoolKey<T>(PhantomData<T>);

/// A lock-free free-list of `Vec<T>` scratch buffers, plus an outstanding
/// rental counter used to verify pool hygiene in tests.
pub struct Pool<T> {
    free: SegQueue<Vec<T>>,
    outstanding: AtomicUsize,
}

impl<T> Pool<T> {
    fn new() -> Self {
        Pool {
            free: SegQueue::new(),
            outstanding: AtomicUsize::new(0),
        }
    }

    /// Number of rentals not yet returned. Exposed for the pool-hygiene
    /// test property in `spec` §8.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    /// Rent a buffer with at least `min_capacity` spare room. The pool
    /// may hand back a larger buffer than requested; the extra capacity
    /// is simply unused until the next growth.
    pub fn rent(&'static self, min_capacity: usize) -> PooledVec<T> {
        let outstanding = self.outstanding.fetch_add(1, Ordering::Relaxed) + 1;
        let mut buf = self.free.pop().unwrap_or_default();
        buf.clear();
        buf.reserve(min_capacity.saturating_sub(buf.capacity()));
        tracing::trace!(min_capacity, outstanding, "rented pool buffer");
        PooledVec { buf: Some(buf), pool: self }
    }

    fn give_back(&self, mut buf: Vec<T>) {
        buf.clear();
        self.free.push(buf);
        let outstanding = self.outstanding.fetch_sub(1, Ordering::Relaxed) - 1;
        tracing::trace!(outstanding, "returned pool buffer");
    }
}

/// An RAII-owned scratch buffer. Always returned to its pool on drop,
/// success or failure, satisfying the pool-hygiene invariant in `spec`
/// §3 without any manual cleanup at call sites.
pub struct PooledVec<T: 'static> {
    buf: Option<Vec<T>>,
    pool: &'static Pool<T>,
}

impl<T> Deref for PooledVec<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Vec<T> {
        self.buf.as_ref().expect("buffer taken before drop")
    }
}

impl<T> DerefMut for PooledVec<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        self.buf.as_mut().expect("buffer taken before drop")
    }
}

impl<T> Drop for PooledVec<T> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.give_back(buf);
        }
    }
}

/// Look up (or idempotently create) the process-wide [`Pool<T>`].
pub fn pool<T: Send + Sync + 'static>() -> &'static Pool<T> {
    registry::cell::<PoolKey<T>, Pool<T>>(Pool::new)
}

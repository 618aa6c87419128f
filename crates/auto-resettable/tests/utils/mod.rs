#![allow(dead_code)]

use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A default with a side effect.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

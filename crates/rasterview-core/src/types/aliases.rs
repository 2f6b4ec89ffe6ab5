//! Type alias for the shared listener storage.
//!
//! The viewer itself is driven from a single thread, but its overlay and
//! listener registries may be touched from loader threads. This alias
//! names the `parking_lot`-backed container used for that.
//!
//! ## Usage
//!
//! ```rust
//! use rasterview_core::types::*;
//!
//! let queue: ThreadSafeVec<String> = thread_safe_vec();
//! queue.lock().push("loaded".to_string());
//! assert_eq!(queue.lock().len(), 1);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A vector shared across threads behind a `parking_lot` mutex.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

/// Creates a new empty `ThreadSafeVec<T>`.
#[inline]
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

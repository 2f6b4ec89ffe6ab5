//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: `ThreadSafeVec<T>`, a mutex-protected shared vector.

pub mod aliases;

pub use aliases::*;

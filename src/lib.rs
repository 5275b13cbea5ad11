//! Arrayish - scripting-style array operations over a Rust `Vec`
//!
//! # Overview
//!
//! [`Array<T>`] wraps an ordered, growable list and exposes the familiar
//! higher-order array toolkit: `map`, `filter`, `for_each`, `some`, `every`,
//! `find`, `find_index`, `includes`, `index_of`, `push`/`pop`,
//! `shift`/`unshift`, `slice`, `fill`, `concat` and `join`.
//!
//! Callbacks receive both the element and its index. Lookups return
//! `Option` instead of sentinel values, and removal from an empty array is a
//! checked [`Error`] rather than a crash.
//!
//! # Quick Start
//!
//! ```
//! use arrayish::{Error, array};
//!
//! let mut arr = array![23, 24, 2, 5, 10];
//!
//! assert_eq!(arr.get(1), Ok(&24));
//! assert_eq!(arr.get(9), Err(Error::OutOfRange { index: 9, len: 5 }));
//!
//! let evens = arr.filter(|x, _| x % 2 == 0);
//! assert_eq!(evens.join_with(":"), "24:2:10");
//! assert!(arr.every(|x, _| *x > 0));
//! assert_eq!(arr.find_index(|x, _| *x < 5), Some(2));
//!
//! arr.fill(3, 0..);
//! assert_eq!(arr.to_string(), "Array [3 3 3 3 3]");
//! ```
//!
//! # Heterogeneous arrays
//!
//! Use [`Value`] as the element type when one array must hold several kinds
//! of values.
//!
//! # Features
//!
//! - `std` (default): link against `std`. Without it the crate is `no_std`
//!   and only needs `alloc`.
//! - `serde`: `Array<T>` serializes as a plain sequence of `T`. Its tests
//!   live in `tests/serde_feature.rs` and only run with `cargo test --features serde`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that `array!` can always refer to them.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

mod array;
mod bounds;
mod error;
mod value;

pub use array::{Array, DEFAULT_SEPARATOR};
pub use bounds::Bounds;
pub use error::{Error, Result};
pub use value::Value;

/// Creates an [`Array`] containing the arguments, like `vec!`.
///
/// ```
/// use arrayish::{Array, array};
///
/// let empty: Array<i32> = array![];
/// assert!(empty.is_empty());
///
/// let arr = array![1, 2, 3];
/// assert_eq!(arr.len(), 3);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::default()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Array::new($crate::shim::vec![$($x),+])
    };
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_pop_empty() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

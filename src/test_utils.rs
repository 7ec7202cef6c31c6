// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Re-exports the `approx` assertion macros so unit tests compare floats
//! with a tolerance instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Opacities are `f32` fractions computed from integer percentages, so tests
//! compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

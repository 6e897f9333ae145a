//! # outcome
//!
//! A two-track outcome container for Rust: a typed success-or-failure value
//! with a closed combinator algebra.
//!
//! ## Overview
//!
//! This library provides [`Outcome<S, F>`], a discriminated container that is
//! permanently either `Ok(S)` or `Err(F)`, together with the operations needed
//! to work with it without branching on the active variant at the call site:
//!
//! - **Mapping**: `map_ok`, `map_err`, `bimap` transform one or both payload
//!   axes while preserving the variant.
//! - **Taps**: `tap_ok`, `tap_err` run a side effect against the active
//!   payload and hand the container back unchanged.
//! - **Catamorphism**: `fold`, `fold_err`, `reduce` collapse the container
//!   into a plain value, supplying one case per variant.
//!
//! Every combinator takes its transformation function by value, so an absent
//! function is a compile error on both variants; there is no runtime check
//! and no tolerance on the inactive branch.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for [`Outcome`]
//!
//! ## Example
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let report = parse_port("8080")
//!     .map_ok(|port| format!("listening on {port}"))
//!     .fold(|failure| format!("unusable port: {failure}"));
//! assert_eq!(report, "listening on 8080");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
///
/// let value: Outcome<i32, String> = Outcome::ok(42);
/// assert!(value.is_ok());
/// ```
pub mod prelude {
    pub use crate::container::Outcome;
}

pub mod container;

pub use container::Outcome;

//! Holder Types - value provider capabilities
//!
//! A value provider is anything that can hand back a `T` on request. This
//! crate defines that capability and two holders that satisfy it for
//! different element types:
//!
//! - **NumericHolder**: wraps an `f64`. The stored field is public and may be
//!   overwritten directly.
//! - **TextHolder**: wraps a `String`. The stored field is private and only
//!   reachable through `value()`.
//!
//! `Addable` and `Multipliable` are declared as extension points. Nothing in
//! this crate implements them.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod capability;
mod errors;
mod numeric;
mod text;

pub use capability::*;
pub use errors::*;
pub use numeric::*;
pub use text::*;

/// Alternate name for [`NumericHolder`]
pub type Calculator = NumericHolder;
/// Alternate name for [`TextHolder`]
pub type StringComposer = TextHolder;

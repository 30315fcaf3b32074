//! Core field logic: list normalization, conditional visibility, price
//! adjustment math, order value binding and the import/export codec.
//!
//! Everything here is a pure, synchronous function over the `common`
//! models. The HTTP layer in `services` is a thin wrapper that loads the
//! relevant documents, calls into this module and persists the result.

pub mod binder;
pub mod codec;
pub mod conditions;
pub mod normalize;
pub mod pricing;

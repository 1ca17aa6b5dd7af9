//! JavaScript-facing API
//!
//! Thin wrappers over the layout module: deserialize the JS inputs,
//! run the calculation, serialize the result back. Every failure is
//! surfaced as a JS exception with a descriptive message.

pub mod overlay;
pub mod range;

//! JSON-backed runtime configuration for the demo tooling.

pub mod normalize;

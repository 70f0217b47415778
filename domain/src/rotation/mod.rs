//! Credential rotation domain
//!
//! Round-robin selection over a fixed set of values, used to spread
//! completion calls across several API keys.

mod queue;

pub use queue::RotationQueue;

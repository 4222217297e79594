//! Node Label - Proxy Node Classifier
//!
//! This crate renames proxy nodes into normalized display labels.
//! It reads the hostname and remark of a node and encodes provider, tier,
//! traffic multiplier, location and feature tags into a single label.

pub mod node;
pub mod rename;

pub use node::*;
pub use rename::*;

/// Application result type
pub type Result<T> = anyhow::Result<T>;

//! Rename module for classifying proxy nodes
//!
//! This module provides functionality for:
//! - Identifying the provider of a node from its hostname
//! - Reading tier and traffic multiplier from the node remark
//! - Resolving country, city and NAT hop from the node remark
//! - Tagging network and streaming features
//! - Rendering all of the above into a normalized display label

pub mod features;
pub mod location;
pub mod matcher;
pub mod multiplier;
pub mod provider;
pub mod renamer;
pub mod tables;
pub mod template;
pub mod tier;

pub use features::NodeFeatures;
pub use location::ExactLocation;
pub use renamer::{NodeLabel, Renamer, RenamerConfig};
pub use template::DEFAULT_TEMPLATE;

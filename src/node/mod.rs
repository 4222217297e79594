//! Node module for reading proxy node records
//!
//! This module provides functionality for:
//! - Decoding the structured proxy info carried by a node
//! - Loading node lists from JSON arrays or JSON lines
//! - Saving produced labels to a file

pub mod models;
pub mod parser;

pub use models::{Node, ProxyInfo};
pub use parser::NodeParser;

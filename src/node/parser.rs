//! Node parser module for decoding node records from strings and files

use crate::node::models::{Node, ProxyInfo};
use crate::Result;
use anyhow::{anyhow, Context};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Node parser for decoding nodes and their proxy info
pub struct NodeParser;

impl NodeParser {
    /// Decode the structured proxy info carried by a node
    ///
    /// The payload must be a JSON object with at least `Hostname` and `Remark`.
    pub fn parse_info(node: &Node) -> Result<ProxyInfo> {
        serde_json::from_str(&node.proxy_info)
            .with_context(|| format!("Invalid proxy info for node {:?}", node.remark))
    }

    /// Build a node from a JSON value
    ///
    /// Accepts either a full node record (with `ProxyInfo`) or a bare proxy
    /// info object, which gets wrapped into a node.
    pub fn parse_value(value: Value) -> Result<Node> {
        if value.get("ProxyInfo").is_some() {
            Ok(serde_json::from_value(value)?)
        } else {
            let info: ProxyInfo = serde_json::from_value(value)?;
            Ok(Node::from_info(&info))
        }
    }

    /// Parse a single JSON line
    ///
    /// Returns `None` for empty lines and `#` comments.
    pub fn parse_line(line: &str) -> Option<Result<Node>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let node = serde_json::from_str::<Value>(line)
            .map_err(anyhow::Error::from)
            .and_then(Self::parse_value);
        Some(node)
    }

    /// Parse nodes from a string holding a JSON array or JSON lines
    pub fn parse_string(content: &str) -> Result<Vec<Node>> {
        if content.trim_start().starts_with('[') {
            let values: Vec<Value> =
                serde_json::from_str(content).context("Invalid node array")?;
            return values
                .into_iter()
                .enumerate()
                .map(|(index, value)| {
                    Self::parse_value(value).map_err(|e| {
                        tracing::warn!(index, error = %e, "rejected node record");
                        e.context(format!("Invalid node at index {}", index))
                    })
                })
                .collect();
        }

        content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                Self::parse_line(line).map(|node| {
                    node.map_err(|e| {
                        tracing::warn!(line = index + 1, error = %e, "rejected node record");
                        e.context(format!("Invalid node on line {}", index + 1))
                    })
                })
            })
            .collect()
    }

    /// Parse nodes from a file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Node>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let nodes = Self::parse_string(&content)?;
        if nodes.is_empty() {
            tracing::warn!(path = %path.display(), "no nodes found");
        }
        Ok(nodes)
    }

    /// Save labels to a file, one per line
    pub fn save_to_file<P: AsRef<Path>>(labels: &[String], path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, labels.join("\n"))
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))
    }
}

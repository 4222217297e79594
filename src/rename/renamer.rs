//! Node renamer combining all classifiers into a display label

use crate::node::models::{Node, ProxyInfo};
use crate::node::parser::NodeParser;
use crate::rename::features::{node_features, NodeFeatures};
use crate::rename::location::{identify_location, is_domestic};
use crate::rename::multiplier::extract_multiplier;
use crate::rename::provider::identify_provider;
use crate::rename::template::{render, DEFAULT_TEMPLATE};
use crate::rename::tier::identify_tier;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Configuration for the node renamer
#[derive(Debug, Clone)]
pub struct RenamerConfig {
    /// Label template with `{airport_name}`, `{node_level}`, `{traffic_times}`,
    /// `{node_location}` and `{node_features}` placeholders
    pub template: String,
    /// Append a counter to labels that repeat within a batch
    pub dedupe: bool,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            dedupe: true,
        }
    }
}

impl RenamerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: String) -> Self {
        self.template = template;
        self
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }
}

/// Classification of a single node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLabel {
    pub provider: &'static str,
    pub tier: &'static str,
    pub multiplier: String,
    pub location: &'static str,
    pub domestic: bool,
    pub features: NodeFeatures,
    /// Rendered display label
    pub label: String,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Renamer producing normalized labels for proxy nodes
pub struct Renamer {
    config: RenamerConfig,
}

impl Renamer {
    /// Create a new renamer with default configuration
    pub fn new() -> Self {
        Self::with_config(RenamerConfig::default())
    }

    /// Create a new renamer with custom configuration
    pub fn with_config(config: RenamerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    /// Classify a node from its serialized proxy info
    pub fn classify(&self, node: &Node) -> Result<NodeLabel> {
        let info = NodeParser::parse_info(node)?;
        self.classify_info(&info)
    }

    /// Classify already parsed proxy info
    pub fn classify_info(&self, info: &ProxyInfo) -> Result<NodeLabel> {
        let hostname = info.hostname.as_str();
        let remark = info.remark.replacen(' ', "", 1);

        let provider = identify_provider(hostname);
        let tier = identify_tier(&remark);
        let multiplier = extract_multiplier(&remark)
            .with_context(|| format!("Failed to classify node {:?}", info.remark))?;
        let location = identify_location(&remark);
        let domestic = is_domestic(location);
        let features = node_features(hostname, &remark, domestic);

        let rendered_features = features.to_string();
        let label = render(
            &self.config.template,
            &[
                ("airport_name", provider),
                ("node_level", tier),
                ("traffic_times", multiplier.as_str()),
                ("node_location", location),
                ("node_features", rendered_features.as_str()),
            ],
        )
        .trim()
        .to_string();

        tracing::debug!(hostname, remark = %info.remark, %label, "renamed node");

        Ok(NodeLabel {
            provider,
            tier,
            multiplier,
            location,
            domestic,
            features,
            label,
        })
    }

    /// Produce the display label of a node
    pub fn rename(&self, node: &Node) -> Result<String> {
        Ok(self.classify(node)?.label)
    }

    /// Rename a list of nodes, keeping their order
    ///
    /// With de-duplication enabled a label that was already produced gets
    /// ` 2`, ` 3`, ... appended until it is unique. Any node that cannot be
    /// classified fails the whole batch.
    pub fn rename_all(&self, nodes: &[Node]) -> Result<Vec<String>> {
        let mut labels = Vec::with_capacity(nodes.len());
        let mut seen = HashSet::new();

        for (index, node) in nodes.iter().enumerate() {
            let label = match self.rename(node) {
                Ok(label) => label,
                Err(e) => {
                    tracing::warn!(
                        index = index + 1,
                        node = %node,
                        error = %e,
                        "rejected node"
                    );
                    return Err(e.context(format!("Failed to rename node #{}", index + 1)));
                }
            };

            let label = if self.config.dedupe {
                unique_label(label, &seen)
            } else {
                label
            };

            seen.insert(label.clone());
            labels.push(label);
        }

        tracing::info!(nodes = nodes.len(), unique = seen.len(), "renamed nodes");
        Ok(labels)
    }
}

impl Default for Renamer {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_label(label: String, seen: &HashSet<String>) -> String {
    if !seen.contains(&label) {
        return label;
    }
    let mut count = 2;
    loop {
        let candidate = format!("{} {}", label, count);
        if !seen.contains(&candidate) {
            return candidate;
        }
        count += 1;
    }
}

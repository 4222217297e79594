//! Feature tagging
//!
//! Features start with the exact city of the node, followed by network and
//! service tags in a fixed order, followed by the NAT hop annotation.

use crate::rename::location::{exact_location, ExactLocation};
use crate::rename::matcher::is_included;
use crate::rename::tables::{NETWORK_TAGS, UNLOCK_TAG};
use serde::Serialize;
use std::fmt;

/// Exact location and tags of a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeFeatures {
    pub city: Option<&'static str>,
    pub tags: Vec<&'static str>,
    pub nat_hop: Option<&'static str>,
}

impl NodeFeatures {
    fn from_location(location: ExactLocation, tags: Vec<&'static str>) -> Self {
        Self {
            city: location.city,
            tags,
            nat_hop: location.nat_hop,
        }
    }
}

impl fmt::Display for NodeFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self
            .city
            .into_iter()
            .chain(self.tags.iter().copied())
            .collect();
        write!(f, "{}", parts.join(" "))?;
        if let Some(city) = self.nat_hop {
            write!(f, " ({} NAT)", city)?;
        }
        Ok(())
    }
}

/// Collect feature tags in their fixed order
///
/// Network tags match either the remark or the hostname; the unlock tag only
/// looks at the remark.
pub fn tag_features(hostname: &str, remark: &str) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = NETWORK_TAGS
        .iter()
        .filter(|rule| {
            is_included(remark, rule.keywords) || is_included(hostname, rule.keywords)
        })
        .map(|rule| rule.label)
        .collect();

    if is_included(remark, UNLOCK_TAG.keywords) {
        tags.push(UNLOCK_TAG.label);
    }

    tags
}

/// Resolve the exact location and tags of a node
pub fn node_features(hostname: &str, remark: &str, domestic: bool) -> NodeFeatures {
    let location = exact_location(remark, domestic);
    let tags = tag_features(hostname, remark);
    tracing::debug!(hostname, remark, ?tags, "tagged features");
    NodeFeatures::from_location(location, tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_in_fixed_order() {
        assert_eq!(tag_features("", "IPLC-BGP"), vec!["BGP", "IPLC"]);
        assert_eq!(
            tag_features("", "AGA AIA CEN IEPL IPLC BGP"),
            vec!["BGP", "IPLC", "IEPL", "CEN", "AIA", "AGA"]
        );
    }

    #[test]
    fn test_tags_from_hostname() {
        assert_eq!(tag_features("bgp.example0.net", "HK"), vec!["BGP"]);
        assert_eq!(tag_features("gaming.example0.net", "HK"), vec!["Game"]);
    }

    #[test]
    fn test_unlock_tag_only_from_remark() {
        assert_eq!(tag_features("netflix.example0.net", "HK"), Vec::<&str>::new());
        assert_eq!(tag_features("", "HK 奈飞"), vec!["Unlocked"]);
        assert_eq!(tag_features("", "游戏 Netflix"), vec!["Game", "Unlocked"]);
    }

    #[test]
    fn test_render_city_and_tags() {
        let features = node_features("", "TokyoBGP Netflix", false);
        assert_eq!(features.city, Some("Tokyo"));
        assert_eq!(features.to_string(), "Tokyo BGP Unlocked");
    }

    #[test]
    fn test_render_tags_without_city() {
        assert_eq!(node_features("", "HKBGP x2", false).to_string(), "BGP");
    }

    #[test]
    fn test_render_nat_hop() {
        let features = node_features("", "上海-Tokyo IPLC", false);
        assert_eq!(features.to_string(), "Tokyo IPLC (Shanghai NAT)");

        let features = node_features("", "广州-HK", false);
        assert_eq!(features.to_string(), " (Guangzhou NAT)");
    }

    #[test]
    fn test_render_domestic() {
        let features = node_features("", "上海 IEPL", true);
        assert_eq!(features.to_string(), "Shanghai IEPL");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(node_features("", "node", false).to_string(), "");
    }
}

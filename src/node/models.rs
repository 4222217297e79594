//! Node data models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Structured proxy info serialized inside a node
///
/// `Port` and `Type` are kept untyped: converters pack the local port into the
/// upper bits of `Port`, so it does not fit a `u16`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProxyInfo {
    pub hostname: String,
    pub remark: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<Value>,
}

impl ProxyInfo {
    pub fn new(hostname: impl Into<String>, remark: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            remark: remark.into(),
            port: None,
            proxy_type: None,
        }
    }
}

/// Node record as handed over by a subscription converter
///
/// Only `proxy_info` is used for classification; it holds the serialized
/// [`ProxyInfo`] payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub group_id: i32,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub remark: String,
    pub proxy_info: String,
}

impl Node {
    /// Create a node carrying only a hostname and remark
    pub fn new(hostname: &str, remark: &str) -> Self {
        Self::from_info(&ProxyInfo::new(hostname, remark))
    }

    /// Create a node wrapping the given proxy info
    pub fn from_info(info: &ProxyInfo) -> Self {
        let mut payload = serde_json::json!({
            "Hostname": info.hostname,
            "Remark": info.remark,
        });
        if let Some(port) = &info.port {
            payload["Port"] = port.clone();
        }
        if let Some(proxy_type) = &info.proxy_type {
            payload["Type"] = proxy_type.clone();
        }

        Self {
            remark: info.remark.clone(),
            proxy_info: payload.to_string(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.remark)
        } else {
            write!(f, "{} - {}", self.group, self.remark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new("node.example0.net", "HK 01");
        assert_eq!(node.remark, "HK 01");
        assert!(node.proxy_info.contains("\"Hostname\":\"node.example0.net\""));
        assert!(node.proxy_info.contains("\"Remark\":\"HK 01\""));
    }

    #[test]
    fn test_node_from_info_round_trip() {
        let mut info = ProxyInfo::new("a.demo1.io", "日本 东京");
        info.port = Some(Value::from(443));
        info.proxy_type = Some(Value::from("vmess"));

        let node = Node::from_info(&info);
        let parsed: ProxyInfo = serde_json::from_str(&node.proxy_info).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_proxy_info_packed_port() {
        let json = r#"{"Type":"VMess","Remark":"HK","Hostname":"h","Port":65536443}"#;
        let info: ProxyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.port, Some(Value::from(65536443u64)));
        assert_eq!(info.proxy_type, Some(Value::from("VMess")));
    }

    #[test]
    fn test_node_deserialize() {
        let json = r#"{"Group":"sub","GroupId":2,"Remark":"HK","ProxyInfo":"{}"}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.group, "sub");
        assert_eq!(node.group_id, 2);
        assert_eq!(node.id, 0);
        assert_eq!(node.proxy_info, "{}");
    }

    #[test]
    fn test_node_display() {
        let mut node = Node::new("", "HK 01");
        assert_eq!(node.to_string(), "HK 01");
        node.group = "sub".to_string();
        assert_eq!(node.to_string(), "sub - HK 01");
    }
}

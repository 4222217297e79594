//! Provider (airport) identification from the node hostname

use crate::rename::matcher::first_match;
use crate::rename::tables::{PROVIDERS, UNKNOWN};

/// Identify the operator of a node by a domain fragment of its hostname
pub fn identify_provider(hostname: &str) -> &'static str {
    let provider = first_match(hostname, PROVIDERS).unwrap_or(UNKNOWN);
    tracing::debug!(hostname, provider, "identified provider");
    provider
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers() {
        assert_eq!(identify_provider("node.example0.net"), "Example0cloud");
        assert_eq!(identify_provider("hk01.DEMO0.io"), "Example0cloud");
        assert_eq!(identify_provider("jp.example1.com"), "Example1cloud");
        assert_eq!(identify_provider("a.demo1.b"), "Example1cloud");
    }

    #[test]
    fn test_unknown_provider() {
        assert_eq!(identify_provider("1.2.3.4"), "Unknown");
        assert_eq!(identify_provider(""), "Unknown");
        // the fragment must be delimited by dots on both sides
        assert_eq!(identify_provider("example0.net"), "Unknown");
    }
}

//! Service tier from the node remark

use crate::rename::matcher::is_included;
use crate::rename::tables::TIER_ONE_MARKERS;

/// Map a remark to its tier, `"1"` for VIP2 nodes and `"0"` otherwise
pub fn identify_tier(remark: &str) -> &'static str {
    if is_included(remark, TIER_ONE_MARKERS) {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vip2_is_tier_one() {
        assert_eq!(identify_tier("Tokyo VIP2"), "1");
        assert_eq!(identify_tier("tokyo vip2"), "1");
        assert_eq!(identify_tier("VIP2HK"), "1");
    }

    #[test]
    fn test_default_tier() {
        assert_eq!(identify_tier("Tokyo VIP1"), "0");
        assert_eq!(identify_tier(""), "0");
    }
}

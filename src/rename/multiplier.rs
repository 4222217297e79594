//! Traffic multiplier extraction
//!
//! A multiplier is written next to one of the markers `x`, `*`, `倍` or `率`,
//! either before or after the number. The patterns below are tried in order
//! and every pattern that matches replaces the previous capture, so a decimal
//! form always beats an integer form found in the same remark.

use crate::Result;
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

/// Multiplier used when the remark carries none
pub const DEFAULT_MULTIPLIER: &str = "1.00";

/// Capture patterns in ascending priority
static MULTIPLIER_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"[x*倍率][0-9]+").expect("Invalid marker-integer regex"),
        Regex::new(r"[0-9]+[x*倍率]").expect("Invalid integer-marker regex"),
        Regex::new(r"[x*倍率][0-9]+\.[0-9]+").expect("Invalid marker-decimal regex"),
        Regex::new(r"[0-9]+\.[0-9]+[x*倍率]").expect("Invalid decimal-marker regex"),
    ]
});

/// Extract the multiplier from a remark, formatted with two decimals
pub fn extract_multiplier(remark: &str) -> Result<String> {
    let capture = MULTIPLIER_PATTERNS
        .iter()
        .filter_map(|re| re.find(remark))
        .last();

    let Some(capture) = capture else {
        return Ok(DEFAULT_MULTIPLIER.to_string());
    };

    let value = parse_capture(capture.as_str())?;
    tracing::debug!(remark, capture = capture.as_str(), value, "extracted multiplier");
    Ok(to_fixed(value))
}

/// Format with two decimals, rounding exact ties upwards
///
/// `{:.2}` rounds ties to even. A double sits exactly halfway between two
/// hundredths only when it is an odd multiple of 1/8 (0.125, 0.375, ...).
fn to_fixed(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", value)
}

/// Drop everything but digits and dots from a capture and parse the rest
fn parse_capture(capture: &str) -> Result<f64> {
    let digits: String = capture
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits
        .parse::<f64>()
        .with_context(|| format!("Invalid multiplier: {:?}", capture))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiplier(remark: &str) -> String {
        extract_multiplier(remark).unwrap()
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(multiplier("x3"), "3.00");
        assert_eq!(multiplier("3x"), "3.00");
        assert_eq!(multiplier("HK*2"), "2.00");
        assert_eq!(multiplier("Tokyo3x VIP2"), "3.00");
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(multiplier("x2.5"), "2.50");
        assert_eq!(multiplier("0.5x"), "0.50");
        assert_eq!(multiplier("1.5倍"), "1.50");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(multiplier("x0.125"), "0.13");
        assert_eq!(multiplier("1.125x"), "1.13");
        assert_eq!(multiplier("x0.625"), "0.63");
        assert_eq!(multiplier("x2.375"), "2.38");
    }

    #[test]
    fn test_near_ties_follow_binary_value() {
        // 2.675 is stored slightly below the halfway point
        assert_eq!(multiplier("x2.675"), "2.67");
        assert_eq!(multiplier("x0.126"), "0.13");
        assert_eq!(multiplier("x0.124"), "0.12");
    }

    #[test]
    fn test_chinese_markers() {
        assert_eq!(multiplier("倍率2"), "2.00");
        assert_eq!(multiplier("3倍"), "3.00");
    }

    #[test]
    fn test_default_multiplier() {
        assert_eq!(multiplier("Hong Kong"), "1.00");
        assert_eq!(multiplier(""), "1.00");
        // markers are case-sensitive
        assert_eq!(multiplier("X3"), "1.00");
    }

    #[test]
    fn test_later_pattern_wins() {
        // integer-before-marker overrides integer-after-marker
        assert_eq!(multiplier("x3 2x"), "2.00");
        // decimal overrides integer
        assert_eq!(multiplier("2x x1.5"), "1.50");
    }

    #[test]
    fn test_stable_on_repeat() {
        let first = multiplier("US x10");
        assert_eq!(first, "10.00");
        assert_eq!(multiplier("US x10"), first);
    }

    #[test]
    fn test_parse_capture_rejects_empty() {
        assert!(parse_capture("x").is_err());
        assert!(parse_capture("1.2.3x").is_err());
        assert_eq!(parse_capture("x12").unwrap(), 12.0);
    }
}

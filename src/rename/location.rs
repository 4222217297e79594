//! Location identification
//!
//! Two stages run over the same remark. The coarse stage maps it to a country
//! or region label. The exact stage looks for a known city and, for nodes that
//! are not themselves domestic, for a domestic city the traffic transits
//! through (reported as a NAT hop).

use crate::rename::matcher::{first_match, is_included};
use crate::rename::tables::{
    City, CHINA_MAINLAND, CITIES, CITY_ALIASES, COUNTRIES, DOMESTIC_CITIES, UNKNOWN,
};
use std::borrow::Cow;

/// Result of the exact location stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactLocation {
    /// City label, if one was recognised
    pub city: Option<&'static str>,
    /// Domestic city the node is reached through
    pub nat_hop: Option<&'static str>,
}

/// Map a remark to its country or region label
pub fn identify_location(remark: &str) -> &'static str {
    let location = first_match(remark, COUNTRIES).unwrap_or(UNKNOWN);
    tracing::debug!(remark, location, "identified coarse location");
    location
}

/// Whether a coarse location label denotes a domestic node
pub fn is_domestic(location: &str) -> bool {
    is_included(location, &[CHINA_MAINLAND])
}

/// Rewrite fused or short city spellings to their full English form
fn normalize_aliases(remark: &str) -> Cow<'_, str> {
    let mut normalized = Cow::Borrowed(remark);
    for &(from, to) in CITY_ALIASES {
        if normalized.contains(from) {
            normalized = Cow::Owned(normalized.replacen(from, to, 1));
        }
    }
    normalized
}

/// Find the first city of `cities` named in `remark`, English name first
fn find_city<'a, I>(remark: &str, cities: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a City>,
{
    cities
        .into_iter()
        .find(|city| is_included(remark, &[city.en]) || is_included(remark, &[city.cn]))
        .map(|city| city.en)
}

/// Resolve the city a remark names, and the NAT hop for foreign nodes
pub fn exact_location(remark: &str, domestic: bool) -> ExactLocation {
    let remark = normalize_aliases(remark);

    let location = if domestic {
        ExactLocation {
            city: find_city(&remark, CITIES.iter().chain(DOMESTIC_CITIES)),
            nat_hop: None,
        }
    } else {
        ExactLocation {
            city: find_city(&remark, CITIES),
            nat_hop: find_city(&remark, DOMESTIC_CITIES),
        }
    };

    tracing::debug!(
        remark = %remark,
        domestic,
        city = ?location.city,
        nat_hop = ?location.nat_hop,
        "resolved exact location"
    );
    location
}

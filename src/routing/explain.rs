//! Human-readable justification for a selected route.
//!
//! Each sentence describes one tier of the decision (prefix length, AD,
//! metric) by comparing the winner against the other matching routes. The
//! text is derived from the same match set used for ranking and never feeds
//! back into it.

use serde::{Deserialize, Serialize};

use crate::routing::table::RouteEntry;

/// Why the best route won, one sentence per decision tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub prefix_match: String,
    pub ad_reason: String,
    pub metric_reason: String,
}

/// Explain why `best` was chosen over `others`.
///
/// `others` is every other matching route. An exact duplicate of `best` still
/// belongs in it and counts as a peer.
pub fn explain(best: &RouteEntry, others: &[&RouteEntry]) -> Explanation {
    let length = best.prefix.length();
    let same_prefix: Vec<&RouteEntry> = others
        .iter()
        .copied()
        .filter(|e| e.prefix.length() == length)
        .collect();
    let same_ad: Vec<&RouteEntry> = same_prefix
        .iter()
        .copied()
        .filter(|e| e.ad == best.ad)
        .collect();

    Explanation {
        prefix_match: prefix_reason(best, others),
        ad_reason: ad_reason(best, &same_prefix),
        metric_reason: metric_reason(best, &same_ad),
    }
}

fn prefix_reason(best: &RouteEntry, others: &[&RouteEntry]) -> String {
    let length = i32::from(best.prefix.length());
    let max_other = others
        .iter()
        .map(|e| i32::from(e.prefix.length()))
        .max()
        .unwrap_or(-1);

    if others.is_empty() {
        format!("Prefix /{} is the only route matching this destination.", length)
    } else if length > max_other {
        format!(
            "Prefix /{} is the most specific among all matching routes (next longest is /{}).",
            length, max_other
        )
    } else if length == max_other {
        format!(
            "Prefix /{} ties for the most specific among matching routes; administrative distance decides.",
            length
        )
    } else {
        format!(
            "Prefix /{} matches this destination, but a more specific /{} route also matches.",
            length, max_other
        )
    }
}

fn ad_reason(best: &RouteEntry, same_prefix: &[&RouteEntry]) -> String {
    let length = best.prefix.length();
    let detail = match same_prefix.iter().map(|e| e.ad).min() {
        None => format!("Only route with prefix length /{}.", length),
        Some(min) if best.ad < min => format!(
            "Lowest AD (most trusted source) among routes with prefix /{}.",
            length
        ),
        Some(min) if best.ad == min => format!(
            "Ties for the lowest AD among routes with prefix /{}; the metric decides.",
            length
        ),
        Some(min) => format!(
            "Not the lowest AD among routes with prefix /{} (lowest is {}).",
            length, min
        ),
    };
    format!("AD = {}. {}", best.ad, detail)
}

fn metric_reason(best: &RouteEntry, same_ad: &[&RouteEntry]) -> String {
    let detail = match same_ad.iter().map(|e| e.metric).min() {
        None => "No other route with the same prefix length and AD to compare against.".to_string(),
        Some(min) if best.metric < min => {
            "Lowest metric (cheapest path) among routes with the same prefix length and AD.".to_string()
        }
        Some(min) if best.metric == min => {
            "Ties for the lowest metric among equivalent routes; table order decides.".to_string()
        }
        Some(min) => format!(
            "Not the lowest metric among equivalent routes (lowest is {}).",
            min
        ),
    };
    format!("Metric = {}. {}", best.metric, detail)
}

//! Revenue goal parsing — pulls an implied monthly target out of free text
//! such as "Make me $10K/month".

use once_cell::sync::Lazy;
use regex::Regex;

/// Target assumed when the goal text contains no number.
pub const DEFAULT_REVENUE_TARGET: u64 = 5_000;

static REVENUE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$?(\d+)([kmb])?").expect("revenue pattern is valid"));

/// Extracts the first `$<digits><K|M|B>` amount from `goal`.
///
/// Only the first match counts. Amounts too large for `u64` saturate.
pub fn parse_revenue_goal(goal: &str) -> u64 {
    let Some(caps) = REVENUE_PATTERN.captures(goal) else {
        return DEFAULT_REVENUE_TARGET;
    };

    let amount = caps[1].parse::<u64>().unwrap_or(u64::MAX);
    let factor = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(s) if s == "K" => 1_000,
        Some(s) if s == "M" => 1_000_000,
        Some(s) if s == "B" => 1_000_000_000,
        _ => 1,
    };

    amount.saturating_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_suffix() {
        assert_eq!(parse_revenue_goal("Make me $10K/month"), 10_000);
    }

    #[test]
    fn test_millions_suffix() {
        assert_eq!(parse_revenue_goal("Make me $1M"), 1_000_000);
    }

    #[test]
    fn test_billions_suffix_lowercase() {
        assert_eq!(parse_revenue_goal("build a $2b company"), 2_000_000_000);
    }

    #[test]
    fn test_no_number_falls_back_to_default() {
        assert_eq!(parse_revenue_goal("grow my business"), DEFAULT_REVENUE_TARGET);
        assert_eq!(parse_revenue_goal(""), DEFAULT_REVENUE_TARGET);
    }

    #[test]
    fn test_plain_number_without_dollar() {
        assert_eq!(parse_revenue_goal("earn 750 per month"), 750);
    }

    #[test]
    fn test_only_first_amount_is_used() {
        assert_eq!(parse_revenue_goal("save $5K, earn $10K"), 5_000);
    }

    #[test]
    fn test_huge_amount_saturates() {
        assert_eq!(parse_revenue_goal("$99999999999999999999999B"), u64::MAX);
    }
}

use chrono::{DateTime, Utc};

use crate::model::Currency;

/// Format an age in seconds as a short "ago" string.
/// - < 60s: "just now"
/// - < 1h: "Xm ago"
/// - < 1d: "Xh ago"
/// - otherwise: "Xd ago"
pub fn format_ago(secs: i64) -> String {
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

pub fn format_since(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_ago((now - time).num_seconds())
}

/// Crypto balances get four decimals, everything else two.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Btc | Currency::Eth => format!("{:.4} {}", amount, currency.symbol()),
        _ => format!("{:.2} {}", amount, currency.symbol()),
    }
}

/// Cut `text` to at most `max` chars, marking the cut with "…".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_ago_buckets() {
        assert_eq!(format_ago(0), "just now");
        assert_eq!(format_ago(59), "just now");
        assert_eq!(format_ago(60), "1m ago");
        assert_eq!(format_ago(3599), "59m ago");
        assert_eq!(format_ago(7200), "2h ago");
        assert_eq!(format_ago(86_400 * 3), "3d ago");
    }

    #[test]
    fn format_ago_negative_is_just_now() {
        assert_eq!(format_ago(-10), "just now");
    }

    #[test]
    fn format_amount_precision() {
        assert_eq!(format_amount(12.5, Currency::Usd), "12.50 $");
        assert_eq!(format_amount(0.5, Currency::Btc), "0.5000 ₿");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}

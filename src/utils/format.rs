use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// US-dollar formatting with thousands separators and cents, e.g. `$15,000.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
        None => (text.clone(), String::new()),
    };
    format!("{}${}.{:0<2}", sign, group_thousands(&whole), fraction)
}

/// Whole thousands, e.g. `$892K`.
pub fn format_thousands(amount: Decimal) -> String {
    let thousands = (amount / Decimal::from(1000)).round().normalize();
    format!("${}K", thousands)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_date_time(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}

pub fn format_time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else if seconds < 604_800 {
        format!("{}d ago", seconds / 86_400)
    } else {
        format_date(date)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(Decimal::from(15000)), "$15,000.00");
        assert_eq!(format_currency(Decimal::from(450)), "$450.00");
        assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
        assert_eq!(format_currency(Decimal::new(-25, 1)), "-$2.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_thousands(Decimal::from(892000)), "$892K");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_time_ago(now - Duration::hours(2), now), "2h ago");
        assert_eq!(format_time_ago(now - Duration::days(3), now), "3d ago");
        assert_eq!(format_time_ago(now - Duration::days(10), now), "Jun 5, 2024");
        assert_eq!(format_time_ago(now + Duration::hours(1), now), "Just now");
    }
}

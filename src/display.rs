//! Formatting helpers for money, logistics, and schedule strings. Pure
//! functions over domain values; no locale machinery involved.

use chrono::{DateTime, Local};

use crate::domain::{Rupees, SpiceLevel};

/// Currency display with the Indian grouping convention: the last three
/// digits, then groups of two. `12000` renders as `₹12,000` and `123456`
/// as `₹1,23,456`.
pub fn format_price(amount: Rupees) -> String {
    format!("₹{}", group_indian(amount))
}

fn group_indian(amount: Rupees) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{}{},{}", sign, groups.join(","), tail)
}

/// `"45 mins"` under an hour, `"2h"` or `"2h 5m"` from an hour up.
pub fn format_delivery_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} mins", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}h", hours)
    }
}

/// Metres below one kilometre, one-decimal kilometres from there up.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", km)
    }
}

/// `"15 Jan 2025, 08:05 pm"`, the order receipt timestamp.
pub fn format_date_time(at: &DateTime<Local>) -> String {
    at.format("%-d %b %Y, %I:%M %P").to_string()
}

/// `"15 Jan 2025"`, used for review dates.
pub fn format_date(at: &DateTime<Local>) -> String {
    at.format("%-d %b %Y").to_string()
}

/// `"08:05 pm"`, the estimated-delivery clock on the tracking page.
pub fn format_time(at: &DateTime<Local>) -> String {
    at.format("%I:%M %P").to_string()
}

/// One pepper per heat step; empty when the dish has no rating.
pub fn spice_level_emoji(level: Option<SpiceLevel>) -> String {
    let count = match level {
        None => return String::new(),
        Some(SpiceLevel::Mild) => 1,
        Some(SpiceLevel::Medium) => 2,
        Some(SpiceLevel::Hot) => 3,
        Some(SpiceLevel::ExtraHot) => 4,
    };
    "🌶️".repeat(count)
}

/// Fixed colour, symbol, and label for the dietary badge on a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VegIndicator {
    pub color: &'static str,
    pub symbol: &'static str,
    pub label: &'static str,
}

pub fn veg_indicator(is_veg: bool) -> VegIndicator {
    if is_veg {
        VegIndicator {
            color: "green",
            symbol: "●",
            label: "Veg",
        }
    } else {
        VegIndicator {
            color: "red",
            symbol: "●",
            label: "Non-Veg",
        }
    }
}

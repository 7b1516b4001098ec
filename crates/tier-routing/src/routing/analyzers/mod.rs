//! Stateless factor analyzers. Each one maps a single intake attribute to a [`RoutingFactor`]
//! and never reads another analyzer's output, so they can run in any order.
//!
//! [`RoutingFactor`]: super::domain::RoutingFactor

mod assets;
mod budget;
mod project_type;
mod timeline;

pub use assets::analyze_assets;
pub use budget::analyze_budget;
pub use project_type::analyze_project_type;
pub use timeline::analyze_timeline;

use super::domain::Tier;

/// Fallback suggestion for answers the table cannot place.
pub const NEUTRAL_TIER: Tier = Tier::Two;

/// Whole-dollar rendering with thousands separators, e.g. `$15,000`.
pub(crate) fn format_currency(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

pub(crate) fn format_weeks(weeks: f64) -> String {
    if weeks == 1.0 {
        "1 week".to_string()
    } else if weeks.fract() == 0.0 {
        format!("{weeks:.0} weeks")
    } else {
        format!("{weeks:.1} weeks")
    }
}

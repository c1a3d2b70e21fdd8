//! Derived view models for the dashboard panels.
//!
//! Every function here is a pure aggregation over a borrowed slice: nothing is
//! mutated, and empty input produces zeroed defaults rather than NaN or a
//! panic.

pub mod communications;
pub mod competitive;
pub mod funnel;
pub mod leads;
pub mod notifications;
pub mod response;
pub mod revenue;
pub mod scores;

pub use communications::{communication_stats, group_by_lead, CommunicationStats, LeadThread};
pub use competitive::{competitive_summary, CompetitiveSummary};
pub use funnel::{funnel_summary, stage_conversions, FunnelSummary, StageConversion, BOTTLENECK_THRESHOLD};
pub use leads::{lead_summary, LeadSummary};
pub use notifications::{
    apply_read_state, critical_unread_count, mark_all_read, mark_read, notification_order,
    sort_notifications, unread_count,
};
pub use response::{
    benchmark_for, metrics_from_leads, response_performance, response_slices, response_trend,
    Benchmark, ResponsePerformance, ResponseSlice, ResponseTrend,
};
pub use revenue::{period_performance, revenue_summary, PeriodPerformance, RevenueSummary};
pub use scores::{score_distribution, scoring_summary, ScoreBucket, ScoreTrend, ScoringSummary};

/// `part / whole * 100`, or 0 when there is nothing to divide by.
pub(crate) fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part * 100.0 / whole
    }
}

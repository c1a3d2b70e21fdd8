use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// One stage of the sales pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionFunnelData {
    pub stage: String,
    pub count: u32,
    /// Share of the initial cohort still present at this stage.
    pub percentage: f64,
    pub value: Decimal,
}

/// One reporting period of the revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueData {
    pub period: String,
    pub revenue: Decimal,
    pub target: Decimal,
    pub leads: u32,
    pub conversions: u32,
    /// Stored as delivered by the source; see `metrics::revenue` for the derived value.
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeMetrics {
    pub average: f64,
    pub target: f64,
    /// Percentages of leads per response window.
    pub within_5_min: f64,
    pub within_15_min: f64,
    pub over_15_min: f64,
    pub total_leads: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimePoint {
    pub period: String,
    pub average: f64,
    pub target: f64,
}

/// Headline KPIs shown on the overview. These are fixture values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_leads: u32,
    pub converted_leads: u32,
    pub conversion_rate: f64,
    pub average_response_time: f64,
    pub total_revenue: Decimal,
    pub average_deal_size: Decimal,
    pub top_source: String,
    pub competitor_wins: u32,
}

/// Display-only funnel figures that are not derived from any data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelFixtures {
    pub average_cycle: String,
    pub pipeline_velocity: String,
}

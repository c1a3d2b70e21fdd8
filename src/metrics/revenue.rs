use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use super::percentage;
use crate::models::RevenueData;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub total_revenue: Decimal,
    pub total_target: Decimal,
    pub total_leads: u32,
    pub total_conversions: u32,
    pub average_conversion_rate: f64,
    pub target_achievement: f64,
    /// Latest period against the one before it; 0 with fewer than two periods.
    pub revenue_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodPerformance {
    pub period: String,
    pub revenue: Decimal,
    pub target: Decimal,
    pub achievement: f64,
    pub leads: u32,
    pub conversions: u32,
    pub conversion_rate: f64,
    pub met_target: bool,
}

fn ratio(part: Decimal, whole: Decimal) -> f64 {
    percentage(part.to_f64().unwrap_or(0.0), whole.to_f64().unwrap_or(0.0))
}

pub fn revenue_summary(periods: &[RevenueData]) -> RevenueSummary {
    let total_revenue: Decimal = periods.iter().map(|p| p.revenue).sum();
    let total_target: Decimal = periods.iter().map(|p| p.target).sum();
    let total_leads: u32 = periods.iter().map(|p| p.leads).sum();
    let total_conversions: u32 = periods.iter().map(|p| p.conversions).sum();

    let revenue_growth = match periods {
        [.., previous, latest] => ratio(latest.revenue - previous.revenue, previous.revenue),
        _ => 0.0,
    };

    RevenueSummary {
        total_revenue,
        total_target,
        total_leads,
        total_conversions,
        average_conversion_rate: percentage(total_conversions as f64, total_leads as f64),
        target_achievement: ratio(total_revenue, total_target),
        revenue_growth,
    }
}

/// Per-period achievement, with the conversion rate recomputed from the
/// lead and conversion counts rather than trusted from the source.
pub fn period_performance(periods: &[RevenueData]) -> Vec<PeriodPerformance> {
    periods
        .iter()
        .map(|p| PeriodPerformance {
            period: p.period.clone(),
            revenue: p.revenue,
            target: p.target,
            achievement: ratio(p.revenue, p.target),
            leads: p.leads,
            conversions: p.conversions,
            conversion_rate: percentage(p.conversions as f64, p.leads as f64),
            met_target: p.revenue >= p.target,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(name: &str, revenue: i64, target: i64, leads: u32, conversions: u32) -> RevenueData {
        RevenueData {
            period: name.to_string(),
            revenue: Decimal::from(revenue),
            target: Decimal::from(target),
            leads,
            conversions,
            conversion_rate: 0.0,
        }
    }

    #[test]
    fn test_summary_totals() {
        let data = vec![
            period("Jan", 125_000, 120_000, 45, 28),
            period("Feb", 135_000, 130_000, 52, 34),
        ];
        let summary = revenue_summary(&data);
        assert_eq!(summary.total_revenue, Decimal::from(260_000));
        assert_eq!(summary.total_leads, 97);
        assert_eq!(summary.total_conversions, 62);
        assert!((summary.average_conversion_rate - 63.917).abs() < 0.001);
        assert!((summary.target_achievement - 104.0).abs() < 1e-9);
        assert!((summary.revenue_growth - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_single_period() {
        let empty = revenue_summary(&[]);
        assert_eq!(empty.total_revenue, Decimal::ZERO);
        assert_eq!(empty.average_conversion_rate, 0.0);
        assert_eq!(empty.target_achievement, 0.0);
        assert_eq!(empty.revenue_growth, 0.0);

        let single = revenue_summary(&[period("Jan", 100, 100, 10, 5)]);
        assert_eq!(single.revenue_growth, 0.0);
        assert_eq!(single.average_conversion_rate, 50.0);
    }

    #[test]
    fn test_period_rate_is_derived() {
        let rows = period_performance(&[period("Jun", 175_000, 170_000, 55, 38), period("Jul", 0, 0, 0, 0)]);
        assert!((rows[0].conversion_rate - 69.0909).abs() < 0.001);
        assert!(rows[0].met_target);
        assert_eq!(rows[1].achievement, 0.0);
        assert_eq!(rows[1].conversion_rate, 0.0);
    }
}

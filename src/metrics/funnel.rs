use serde::Serialize;

use super::percentage;
use crate::models::ConversionFunnelData;

/// A stage-to-stage rate below this is flagged as a bottleneck.
pub const BOTTLENECK_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageConversion {
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub dropped: i64,
    pub is_bottleneck: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelSummary {
    pub overall_rate: f64,
    pub total_lost: i64,
    pub average_stage_rate: f64,
    pub conversions: Vec<StageConversion>,
    pub bottlenecks: Vec<StageConversion>,
}

/// Rates between each adjacent pair of stages. The first stage has no
/// predecessor and so contributes no entry.
pub fn stage_conversions(stages: &[ConversionFunnelData]) -> Vec<StageConversion> {
    stages
        .windows(2)
        .map(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            let rate = percentage(current.count as f64, previous.count as f64);
            StageConversion {
                from: previous.stage.clone(),
                to: current.stage.clone(),
                rate,
                dropped: previous.count as i64 - current.count as i64,
                is_bottleneck: rate < BOTTLENECK_THRESHOLD,
            }
        })
        .collect()
}

pub fn funnel_summary(stages: &[ConversionFunnelData]) -> FunnelSummary {
    let conversions = stage_conversions(stages);

    let (overall_rate, total_lost) = match (stages.first(), stages.last()) {
        (Some(first), Some(last)) => (
            percentage(last.count as f64, first.count as f64),
            first.count as i64 - last.count as i64,
        ),
        _ => (0.0, 0),
    };

    let average_stage_rate = if conversions.is_empty() {
        0.0
    } else {
        conversions.iter().map(|c| c.rate).sum::<f64>() / conversions.len() as f64
    };

    let bottlenecks = conversions.iter().filter(|c| c.is_bottleneck).cloned().collect();

    FunnelSummary {
        overall_rate,
        total_lost,
        average_stage_rate,
        conversions,
        bottlenecks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn stage(name: &str, count: u32) -> ConversionFunnelData {
        ConversionFunnelData {
            stage: name.to_string(),
            count,
            percentage: 0.0,
            value: Decimal::ZERO,
        }
    }

    #[test]
    fn test_adjacent_rate_and_drop() {
        let rates = stage_conversions(&[stage("New Leads", 150), stage("Contacted", 135)]);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].rate, 90.0);
        assert_eq!(rates[0].dropped, 15);
        assert!(!rates[0].is_bottleneck);
    }

    #[test]
    fn test_bottleneck_threshold() {
        let rates = stage_conversions(&[stage("a", 100), stage("b", 70), stage("c", 48)]);
        assert!(!rates[0].is_bottleneck);
        assert!(rates[1].is_bottleneck);
    }

    #[test]
    fn test_sample_funnel_summary() {
        let stages = vec![
            stage("New Leads", 150),
            stage("Contacted", 135),
            stage("Qualified", 108),
            stage("Proposal Sent", 85),
            stage("Converted", 68),
        ];
        let summary = funnel_summary(&stages);
        assert_eq!(summary.conversions.len(), 4);
        assert_eq!(summary.total_lost, 82);
        assert!((summary.overall_rate - 45.333).abs() < 0.01);
        // 85/108 = 78.7 and 68/85 = 80.0, nothing below 70
        assert!(summary.bottlenecks.is_empty());
    }

    #[test]
    fn test_empty_and_single_stage() {
        let empty = funnel_summary(&[]);
        assert_eq!(empty.overall_rate, 0.0);
        assert_eq!(empty.average_stage_rate, 0.0);
        assert!(empty.conversions.is_empty());

        let single = funnel_summary(&[stage("only", 10)]);
        assert_eq!(single.overall_rate, 100.0);
        assert_eq!(single.total_lost, 0);
        assert!(single.conversions.is_empty());
    }

    #[test]
    fn test_zero_previous_count_yields_zero_rate() {
        let rates = stage_conversions(&[stage("a", 0), stage("b", 0)]);
        assert_eq!(rates[0].rate, 0.0);
        assert!(rates[0].is_bottleneck);
    }
}

use rust_decimal::Decimal;
use serde::Serialize;

use super::percentage;
use crate::models::Lead;

pub const TOP_PROSPECT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub range: &'static str,
    pub count: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTrend {
    Up,
    Down,
    Stable,
}

impl ScoreTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringSummary {
    pub average_score: u32,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub distribution: Vec<ScoreBucket>,
    pub top_prospects: Vec<Lead>,
    pub total_value: Decimal,
    /// Heuristic against a fixed 65-point baseline, not a period comparison.
    pub trend: ScoreTrend,
    pub trend_percentage: u32,
}

/// Partitions leads into the 80–100, 60–79 and 0–59 bands. Always returns
/// the three bands, in that order.
pub fn score_distribution(leads: &[Lead]) -> Vec<ScoreBucket> {
    let total = leads.len() as f64;
    let high = leads.iter().filter(|l| l.score >= 80).count();
    let medium = leads.iter().filter(|l| (60..80).contains(&l.score)).count();
    let low = leads.iter().filter(|l| l.score < 60).count();

    [("80-100", high), ("60-79", medium), ("0-59", low)]
        .into_iter()
        .map(|(range, count)| ScoreBucket {
            range,
            count,
            percentage: percentage(count as f64, total).round() as u32,
        })
        .collect()
}

pub fn scoring_summary(leads: &[Lead]) -> ScoringSummary {
    let distribution = score_distribution(leads);

    let average_score = if leads.is_empty() {
        0
    } else {
        let sum: u32 = leads.iter().map(|l| l.score as u32).sum();
        (sum as f64 / leads.len() as f64).round() as u32
    };

    let mut top_prospects = leads.to_vec();
    top_prospects.sort_by(|a, b| b.score.cmp(&a.score));
    top_prospects.truncate(TOP_PROSPECT_LIMIT);

    let (trend, trend_percentage) = if leads.is_empty() {
        (ScoreTrend::Stable, 0)
    } else if average_score > 70 {
        (ScoreTrend::Up, average_score.abs_diff(65))
    } else if average_score < 60 {
        (ScoreTrend::Down, average_score.abs_diff(65))
    } else {
        (ScoreTrend::Stable, average_score.abs_diff(65))
    };

    ScoringSummary {
        average_score,
        high_count: distribution[0].count,
        medium_count: distribution[1].count,
        low_count: distribution[2].count,
        distribution,
        top_prospects,
        total_value: leads.iter().map(|l| l.estimated_value).sum(),
        trend,
        trend_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SampleData;
    use chrono::Utc;

    fn leads_with_scores(scores: &[u8]) -> Vec<Lead> {
        let template = SampleData::generate(Utc::now()).leads.remove(0);
        scores
            .iter()
            .enumerate()
            .map(|(i, score)| Lead {
                id: (i + 1).to_string(),
                score: *score,
                estimated_value: Decimal::from(1000),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn test_empty_distribution_is_all_zero() {
        let buckets = score_distribution(&[]);
        assert_eq!(buckets.len(), 3);
        assert!(buckets.iter().all(|b| b.count == 0 && b.percentage == 0));
    }

    #[test]
    fn test_distribution_band_edges() {
        let buckets = score_distribution(&leads_with_scores(&[100, 80, 79, 60, 59, 0]));
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[2].count, 2);
        assert_eq!(buckets[0].percentage, 33);
    }

    #[test]
    fn test_percentages_round_to_nearest() {
        let buckets = score_distribution(&leads_with_scores(&[90, 70, 70]));
        assert_eq!(buckets[0].percentage, 33);
        assert_eq!(buckets[1].percentage, 67);
    }

    #[test]
    fn test_summary_of_sample_leads() {
        let leads = SampleData::generate(Utc::now()).leads;
        let summary = scoring_summary(&leads);
        // 95, 78, 85, 92
        assert_eq!(summary.average_score, 88);
        assert_eq!(summary.high_count, 3);
        assert_eq!(summary.medium_count, 1);
        assert_eq!(summary.trend, ScoreTrend::Up);
        assert_eq!(summary.trend_percentage, 23);
        assert_eq!(summary.top_prospects[0].score, 95);
        assert_eq!(summary.total_value, Decimal::from(29200));
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = scoring_summary(&[]);
        assert_eq!(summary.average_score, 0);
        assert_eq!(summary.trend, ScoreTrend::Stable);
        assert!(summary.top_prospects.is_empty());
        assert_eq!(summary.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_top_prospects_are_capped() {
        let summary = scoring_summary(&leads_with_scores(&[10, 20, 30, 40, 50, 60, 70]));
        let scores: Vec<u8> = summary.top_prospects.iter().map(|l| l.score).collect();
        assert_eq!(scores, vec![70, 60, 50, 40, 30]);
        assert_eq!(summary.trend, ScoreTrend::Down);
    }
}

use serde::Serialize;

use super::percentage;
use crate::models::{Lead, ResponseTimeMetrics, ResponseTimePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Benchmark {
    Excellent,
    Good,
    Fair,
    Poor,
}

// Ordered; the first threshold the average satisfies wins.
const BENCHMARK_THRESHOLDS: [(f64, Benchmark); 3] = [
    (2.0, Benchmark::Excellent),
    (5.0, Benchmark::Good),
    (10.0, Benchmark::Fair),
];

impl Benchmark {
    pub const ALL: [Benchmark; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            Self::Excellent => "≤2 min",
            Self::Good => "2-5 min",
            Self::Fair => "5-10 min",
            Self::Poor => ">10 min",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "bar-green",
            Self::Good => "bar-blue",
            Self::Fair => "bar-yellow",
            Self::Poor => "bar-red",
        }
    }
}

pub fn benchmark_for(average: f64) -> Benchmark {
    BENCHMARK_THRESHOLDS
        .iter()
        .find(|(threshold, _)| average <= *threshold)
        .map(|(_, benchmark)| *benchmark)
        .unwrap_or(Benchmark::Poor)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsePerformance {
    pub on_target: bool,
    pub benchmark: Benchmark,
    /// How far under target the average is, as a percentage of target.
    pub performance_score: f64,
    /// Progress-bar fill, capped at 100.
    pub progress: f64,
}

pub fn response_performance(metrics: &ResponseTimeMetrics) -> ResponsePerformance {
    let performance_score = if metrics.target == 0.0 {
        0.0
    } else {
        (metrics.target - metrics.average) / metrics.target * 100.0
    };

    ResponsePerformance {
        on_target: metrics.average <= metrics.target,
        benchmark: benchmark_for(metrics.average),
        performance_score,
        progress: (metrics.target / metrics.average.max(1.0) * 100.0).min(100.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTrend {
    Improving,
    Declining,
    Stable,
}

impl ResponseTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Compares the two most recent periods.
pub fn response_trend(history: &[ResponseTimePoint]) -> ResponseTrend {
    match history {
        [.., previous, latest] if latest.average < previous.average => ResponseTrend::Improving,
        [.., _, _] => ResponseTrend::Declining,
        _ => ResponseTrend::Stable,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSlice {
    pub label: &'static str,
    pub percentage: f64,
    pub leads: u32,
}

pub fn response_slices(metrics: &ResponseTimeMetrics) -> Vec<ResponseSlice> {
    [
        ("≤5 minutes", metrics.within_5_min),
        ("5-15 minutes", metrics.within_15_min),
        (">15 minutes", metrics.over_15_min),
    ]
    .into_iter()
    .map(|(label, pct)| ResponseSlice {
        label,
        percentage: pct,
        leads: (pct / 100.0 * metrics.total_leads as f64).round() as u32,
    })
    .collect()
}

/// Builds response-time metrics from the leads that have been contacted.
/// Leads without a response time are not counted.
pub fn metrics_from_leads(leads: &[Lead], target: f64) -> ResponseTimeMetrics {
    let times: Vec<u32> = leads.iter().filter_map(|l| l.response_time).collect();
    let total = times.len() as f64;

    let average = if times.is_empty() {
        0.0
    } else {
        times.iter().map(|&t| t as f64).sum::<f64>() / total
    };

    let within_5 = times.iter().filter(|&&t| t <= 5).count() as f64;
    let within_15 = times.iter().filter(|&&t| t > 5 && t <= 15).count() as f64;
    let over_15 = times.iter().filter(|&&t| t > 15).count() as f64;

    ResponseTimeMetrics {
        average,
        target,
        within_5_min: percentage(within_5, total),
        within_15_min: percentage(within_15, total),
        over_15_min: percentage(over_15, total),
        total_leads: times.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(average: f64, target: f64) -> ResponseTimeMetrics {
        ResponseTimeMetrics {
            average,
            target,
            within_5_min: 87.0,
            within_15_min: 12.0,
            over_15_min: 1.0,
            total_leads: 100,
        }
    }

    fn point(average: f64) -> ResponseTimePoint {
        ResponseTimePoint {
            period: "week".to_string(),
            average,
            target: 5.0,
        }
    }

    #[test]
    fn test_benchmark_tiers() {
        assert_eq!(benchmark_for(0.5), Benchmark::Excellent);
        assert_eq!(benchmark_for(2.0), Benchmark::Excellent);
        assert_eq!(benchmark_for(4.2), Benchmark::Good);
        assert_eq!(benchmark_for(5.0), Benchmark::Good);
        assert_eq!(benchmark_for(10.0), Benchmark::Fair);
        assert_eq!(benchmark_for(10.1), Benchmark::Poor);
    }

    #[test]
    fn test_performance_against_target() {
        let perf = response_performance(&metrics(4.2, 5.0));
        assert!(perf.on_target);
        assert_eq!(perf.benchmark, Benchmark::Good);
        assert!((perf.performance_score - 16.0).abs() < 1e-9);
        assert_eq!(perf.progress, 100.0);

        let slow = response_performance(&metrics(10.0, 5.0));
        assert!(!slow.on_target);
        assert_eq!(slow.progress, 50.0);
    }

    #[test]
    fn test_zero_target_does_not_divide() {
        let perf = response_performance(&metrics(0.0, 0.0));
        assert_eq!(perf.performance_score, 0.0);
        assert!(perf.on_target);
    }

    #[test]
    fn test_trend_uses_last_two_points() {
        assert_eq!(response_trend(&[]), ResponseTrend::Stable);
        assert_eq!(response_trend(&[point(4.0)]), ResponseTrend::Stable);
        assert_eq!(response_trend(&[point(5.2), point(4.8), point(4.1), point(4.2)]), ResponseTrend::Declining);
        assert_eq!(response_trend(&[point(5.2), point(4.8)]), ResponseTrend::Improving);
    }

    #[test]
    fn test_slices_convert_to_lead_counts() {
        let slices = response_slices(&metrics(4.2, 5.0));
        let counts: Vec<u32> = slices.iter().map(|s| s.leads).collect();
        assert_eq!(counts, vec![87, 12, 1]);
    }

    #[test]
    fn test_metrics_from_leads_skip_missing_times() {
        let mut leads = crate::store::SampleData::generate(chrono::Utc::now()).leads;
        // 3, 7, 12 and one lead without a response
        let computed = metrics_from_leads(&leads, 5.0);
        assert_eq!(computed.total_leads, 3);
        assert!((computed.average - 22.0 / 3.0).abs() < 1e-9);
        assert!((computed.within_5_min - 100.0 / 3.0).abs() < 1e-9);
        assert!((computed.within_15_min - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(computed.over_15_min, 0.0);

        leads.clear();
        let empty = metrics_from_leads(&leads, 5.0);
        assert_eq!(empty.average, 0.0);
        assert_eq!(empty.within_5_min, 0.0);
        assert_eq!(empty.total_leads, 0);
    }
}

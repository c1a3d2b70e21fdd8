//! Lead score calculator.
//!
//! A score is the sum of four independently capped point buckets (deal
//! value, source channel, speed of first response, service type). The bucket
//! maxima add up to exactly 100; the final clamp only guards that bound.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Lead, ServiceType};

pub const MAX_SCORE: u8 = 100;
pub const HIGH_VALUE_THRESHOLD: i64 = 1000;

/// The attributes of a lead that feed its score.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub estimated_value: Decimal,
    pub source: &'a str,
    /// Minutes to first response; fractional minutes are allowed.
    pub response_time: Option<f64>,
    pub service_type: ServiceType,
}

impl<'a> From<&'a Lead> for ScoringInput<'a> {
    fn from(lead: &'a Lead) -> Self {
        Self {
            estimated_value: lead.estimated_value,
            source: &lead.source,
            response_time: lead.response_time.map(f64::from),
            service_type: lead.service_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub value_points: u8,
    pub source_points: u8,
    pub response_points: u8,
    pub service_points: u8,
    pub total: u8,
}

pub fn score_breakdown(input: &ScoringInput<'_>) -> ScoreBreakdown {
    let value_points = value_points(input.estimated_value);
    let source_points = source_points(input.source);
    let response_points = input.response_time.map(response_points).unwrap_or(0);
    let service_points = service_points(input.service_type);

    let sum = value_points as u16 + source_points as u16 + response_points as u16 + service_points as u16;

    ScoreBreakdown {
        value_points,
        source_points,
        response_points,
        service_points,
        total: sum.min(MAX_SCORE as u16) as u8,
    }
}

fn value_points(value: Decimal) -> u8 {
    if value >= Decimal::from(5000) {
        40
    } else if value >= Decimal::from(2000) {
        30
    } else if value >= Decimal::from(1000) {
        20
    } else if value >= Decimal::from(500) {
        10
    } else {
        0
    }
}

fn source_points(source: &str) -> u8 {
    match source {
        "referral" => 20,
        "website" => 15,
        "social_media" => 10,
        "cold_outreach" => 5,
        _ => 0,
    }
}

fn response_points(minutes: f64) -> u8 {
    if minutes <= 5.0 {
        20
    } else if minutes <= 15.0 {
        15
    } else if minutes <= 60.0 {
        10
    } else if minutes <= 240.0 {
        5
    } else {
        0
    }
}

fn service_points(service_type: ServiceType) -> u8 {
    match service_type {
        ServiceType::Corporate => 20,
        ServiceType::Wedding => 15,
        ServiceType::SpecialEvent => 10,
        ServiceType::Airport => 5,
        ServiceType::Other => 0,
    }
}

pub fn is_high_value(estimated_value: Decimal) -> bool {
    estimated_value >= Decimal::from(HIGH_VALUE_THRESHOLD)
}

/// Whole minutes from lead creation to first contact, rounded down.
pub fn response_minutes(created_at: DateTime<Utc>, first_contact: Option<DateTime<Utc>>) -> Option<i64> {
    first_contact.map(|contact| (contact - created_at).num_seconds().div_euclid(60))
}

/// Colour band used when displaying a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "score-excellent",
            Self::Good => "score-good",
            Self::Fair => "score-fair",
            Self::Poor => "score-poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn input(value: i64, source: &str, response: Option<f64>, service: &str) -> (Decimal, String, Option<f64>, ServiceType) {
        (Decimal::from(value), source.to_string(), response, ServiceType::parse(service))
    }

    fn score_of(parts: &(Decimal, String, Option<f64>, ServiceType)) -> ScoreBreakdown {
        score_breakdown(&ScoringInput {
            estimated_value: parts.0,
            source: &parts.1,
            response_time: parts.2,
            service_type: parts.3,
        })
    }

    #[test]
    fn test_every_bucket_maxed_scores_100() {
        let breakdown = score_of(&input(5000, "referral", Some(5.0), "corporate"));
        assert_eq!(breakdown.total, 100);
        assert_eq!(breakdown.value_points, 40);
        assert_eq!(breakdown.response_points, 20);
    }

    #[test]
    fn test_unknown_inputs_score_zero() {
        assert_eq!(score_of(&input(0, "unknown", None, "unknown")).total, 0);
    }

    #[test]
    fn test_value_thresholds() {
        let cases = [(4999, 30), (2000, 30), (1999, 20), (1000, 20), (999, 10), (500, 10), (499, 0)];
        for (value, expected) in cases {
            assert_eq!(score_of(&input(value, "", None, "")).value_points, expected, "value {}", value);
        }
    }

    #[test]
    fn test_response_thresholds() {
        let cases = [
            (0.0, 20),
            (5.0, 20),
            (5.5, 15),
            (15.0, 15),
            (15.1, 10),
            (60.0, 10),
            (61.0, 5),
            (240.0, 5),
            (240.5, 0),
        ];
        for (minutes, expected) in cases {
            assert_eq!(score_of(&input(0, "", Some(minutes), "")).response_points, expected, "minutes {}", minutes);
        }
        assert_eq!(score_of(&input(0, "", None, "")).response_points, 0);
    }

    #[test]
    fn test_source_and_service_points() {
        assert_eq!(score_of(&input(0, "website", None, "wedding")).total, 30);
        assert_eq!(score_of(&input(0, "social_media", None, "special_event")).total, 20);
        assert_eq!(score_of(&input(0, "cold_outreach", None, "airport")).total, 10);
        // matching is exact; a capitalised source earns nothing
        assert_eq!(score_of(&input(0, "Referral", None, "")).source_points, 0);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let values = [0, 499, 500, 1000, 2000, 5000, 1_000_000];
        let sources = ["referral", "website", "social_media", "cold_outreach", "other"];
        let responses = [None, Some(0.0), Some(15.0), Some(240.0), Some(10_000.0)];
        let services = ["corporate", "wedding", "airport", "special_event", "other"];
        for value in values {
            for source in sources {
                for response in responses {
                    for service in services {
                        let total = score_of(&input(value, source, response, service)).total;
                        assert!(total <= MAX_SCORE);
                    }
                }
            }
        }
    }

    #[test]
    fn test_high_value_threshold() {
        assert!(is_high_value(Decimal::from(1000)));
        assert!(!is_high_value(Decimal::new(99999, 2)));
    }

    #[test]
    fn test_response_minutes() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(response_minutes(created, None), None);
        assert_eq!(response_minutes(created, Some(created + Duration::seconds(299))), Some(4));
        assert_eq!(response_minutes(created, Some(created - Duration::seconds(30))), Some(-1));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Poor);
    }
}

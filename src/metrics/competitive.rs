use serde::Serialize;

use crate::models::{AdvantageCategory, CompetitiveAdvantage, Impact};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitiveSummary {
    /// Distinct categories in first-seen order, with their counts.
    pub categories: Vec<(AdvantageCategory, usize)>,
    pub high_impact: usize,
    pub certifications: usize,
    /// Share of advantages rated high impact, rounded.
    pub competitive_score: u32,
}

pub fn competitive_summary(advantages: &[CompetitiveAdvantage]) -> CompetitiveSummary {
    let mut categories: Vec<(AdvantageCategory, usize)> = Vec::new();
    for advantage in advantages {
        match categories.iter_mut().find(|(c, _)| *c == advantage.category) {
            Some((_, count)) => *count += 1,
            None => categories.push((advantage.category, 1)),
        }
    }

    let high_impact = advantages.iter().filter(|a| a.impact == Impact::High).count();
    let certifications = advantages
        .iter()
        .filter(|a| a.category == AdvantageCategory::Certification)
        .count();

    CompetitiveSummary {
        categories,
        high_impact,
        certifications,
        competitive_score: super::percentage(high_impact as f64, advantages.len() as f64).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SampleData;
    use chrono::Utc;

    #[test]
    fn test_sample_advantages() {
        let summary = competitive_summary(&SampleData::generate(Utc::now()).advantages);
        assert_eq!(summary.high_impact, 3);
        assert_eq!(summary.certifications, 2);
        assert_eq!(summary.competitive_score, 50);
        assert_eq!(
            summary.categories,
            vec![
                (AdvantageCategory::Certification, 2),
                (AdvantageCategory::Experience, 1),
                (AdvantageCategory::Technology, 1),
                (AdvantageCategory::Service, 2),
            ]
        );
    }

    #[test]
    fn test_no_advantages() {
        let summary = competitive_summary(&[]);
        assert_eq!(summary.competitive_score, 0);
        assert!(summary.categories.is_empty());
    }
}

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Lead, LeadPriority, LeadStatus};
use crate::scoring::is_high_value;

/// Counters shown above the high-priority lead table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSummary {
    pub total: usize,
    pub urgent: usize,
    pub high_value: usize,
    pub new: usize,
    pub total_value: Decimal,
}

pub fn lead_summary(leads: &[Lead]) -> LeadSummary {
    LeadSummary {
        total: leads.len(),
        urgent: leads.iter().filter(|l| l.priority == LeadPriority::Urgent).count(),
        high_value: leads.iter().filter(|l| is_high_value(l.estimated_value)).count(),
        new: leads.iter().filter(|l| l.status == LeadStatus::New).count(),
        total_value: leads.iter().map(|l| l.estimated_value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SampleData;
    use chrono::Utc;

    #[test]
    fn test_sample_lead_counters() {
        let summary = lead_summary(&SampleData::generate(Utc::now()).leads);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.urgent, 2);
        assert_eq!(summary.high_value, 4);
        assert_eq!(summary.new, 2);
        assert_eq!(summary.total_value, Decimal::from(29200));
    }

    #[test]
    fn test_empty_counters() {
        let summary = lead_summary(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.total_value, Decimal::ZERO);
    }
}

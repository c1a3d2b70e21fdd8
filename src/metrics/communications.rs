use serde::Serialize;

use super::percentage;
use crate::models::{CommunicationRecord, CommunicationType, Direction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunicationStats {
    pub total: usize,
    /// Counts for every type that occurs, in `CommunicationType::ALL` order.
    pub by_type: Vec<(CommunicationType, usize)>,
    pub success_rate: f64,
    pub outbound: usize,
    pub inbound: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadThread {
    pub lead_id: String,
    pub records: Vec<CommunicationRecord>,
}

pub fn communication_stats(records: &[CommunicationRecord]) -> CommunicationStats {
    let total = records.len();

    let by_type = CommunicationType::ALL
        .iter()
        .map(|kind| (*kind, records.iter().filter(|r| r.kind == *kind).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    let successful = records.iter().filter(|r| r.successful).count();
    let outbound = records.iter().filter(|r| r.direction == Direction::Outbound).count();
    let inbound = records.iter().filter(|r| r.direction == Direction::Inbound).count();

    CommunicationStats {
        total,
        by_type,
        success_rate: percentage(successful as f64, total as f64),
        outbound,
        inbound,
    }
}

/// Groups records by lead, keeping leads in first-seen order and records in
/// their incoming order.
pub fn group_by_lead(records: &[CommunicationRecord]) -> Vec<LeadThread> {
    let mut threads: Vec<LeadThread> = Vec::new();
    for record in records {
        match threads.iter_mut().find(|t| t.lead_id == record.lead_id) {
            Some(thread) => thread.records.push(record.clone()),
            None => threads.push(LeadThread {
                lead_id: record.lead_id.clone(),
                records: vec![record.clone()],
            }),
        }
    }
    threads
}

//! Filter and sort pipeline for the list views.
//!
//! Filters are optional equality predicates; a `None` filter lets every
//! record through. Sorting is stable, so records that compare equal keep
//! their input order in either direction.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{
    AdvantageCategory, CommunicationRecord, CommunicationType, CompetitiveAdvantage, Direction,
    Lead, LeadPriority, LeadStatus,
};

/// Stand-in for a missing response time, so uncontacted leads sort as the
/// slowest.
pub const MISSING_RESPONSE_SENTINEL: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSortField {
    #[default]
    Score,
    EstimatedValue,
    CreatedAt,
    ResponseTime,
}

impl LeadSortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "score" => Some(Self::Score),
            "estimated_value" | "estimatedValue" => Some(Self::EstimatedValue),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            "response_time" | "responseTime" => Some(Self::ResponseTime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::EstimatedValue => "estimated_value",
            Self::CreatedAt => "created_at",
            Self::ResponseTime => "response_time",
        }
    }

    fn compare(&self, a: &Lead, b: &Lead) -> Ordering {
        match self {
            Self::Score => a.score.cmp(&b.score),
            Self::EstimatedValue => a.estimated_value.cmp(&b.estimated_value),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::ResponseTime => response_key(a).cmp(&response_key(b)),
        }
    }
}

fn response_key(lead: &Lead) -> u32 {
    lead.response_time.unwrap_or(MISSING_RESPONSE_SENTINEL)
}

/// Reads a select-box value: empty or `all` means "no filter", anything the
/// parser rejects is ignored as well.
pub fn parse_filter<T>(value: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    match value.map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(v) => parse(v),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    pub priority: Option<LeadPriority>,
    pub status: Option<LeadStatus>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        self.priority.map_or(true, |p| lead.priority == p)
            && self.status.map_or(true, |s| lead.status == s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeadSort {
    pub field: LeadSortField,
    pub direction: SortDirection,
}

pub fn filter_leads(leads: &[Lead], filter: &LeadFilter) -> Vec<Lead> {
    leads.iter().filter(|l| filter.matches(l)).cloned().collect()
}

pub fn sort_leads(leads: &mut [Lead], sort: LeadSort) {
    leads.sort_by(|a, b| sort.direction.apply(sort.field.compare(a, b)));
}

/// The urgent/high subset of `leads`, filtered and sorted for the triage table.
pub fn high_priority_leads(leads: &[Lead], filter: &LeadFilter, sort: LeadSort) -> Vec<Lead> {
    let mut selected: Vec<Lead> = leads
        .iter()
        .filter(|l| matches!(l.priority, LeadPriority::Urgent | LeadPriority::High))
        .filter(|l| filter.matches(l))
        .cloned()
        .collect();
    sort_leads(&mut selected, sort);
    selected
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunicationFilter {
    pub lead_id: Option<String>,
    pub kind: Option<CommunicationType>,
    pub direction: Option<Direction>,
    pub search: Option<String>,
}

impl CommunicationFilter {
    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.direction.is_some() || self.search_term().is_some()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, record: &CommunicationRecord) -> bool {
        self.lead_id.as_deref().map_or(true, |id| record.lead_id == id)
            && self.kind.map_or(true, |k| record.kind == k)
            && self.direction.map_or(true, |d| record.direction == d)
            && self.search_term().map_or(true, |term| search_matches(record, &term))
    }
}

fn search_matches(record: &CommunicationRecord, term: &str) -> bool {
    record.message.to_lowercase().contains(term)
        || record
            .subject
            .as_deref()
            .map_or(false, |s| s.to_lowercase().contains(term))
        || record.user_name.to_lowercase().contains(term)
}

/// Matching records, newest first.
pub fn filter_communications(
    records: &[CommunicationRecord],
    filter: &CommunicationFilter,
) -> Vec<CommunicationRecord> {
    let mut matched: Vec<CommunicationRecord> =
        records.iter().filter(|r| filter.matches(r)).cloned().collect();
    matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matched
}

pub fn filter_advantages(
    advantages: &[CompetitiveAdvantage],
    category: Option<AdvantageCategory>,
) -> Vec<CompetitiveAdvantage> {
    advantages
        .iter()
        .filter(|a| category.map_or(true, |c| a.category == c))
        .cloned()
        .collect()
}

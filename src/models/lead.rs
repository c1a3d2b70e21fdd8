use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::utils::format::{format_currency, format_date_time, format_time_ago};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl LeadPriority {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Urgent => "badge-red",
            Self::High => "badge-orange",
            Self::Medium => "badge-yellow",
            Self::Low => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "qualified" => Some(Self::Qualified),
            "converted" => Some(Self::Converted),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Converted => "badge-green",
            Self::Qualified => "badge-blue",
            Self::Contacted => "badge-yellow",
            Self::New => "badge-purple",
            Self::Lost => "badge-red",
        }
    }
}

/// Kind of transportation the lead is asking for. Anything we don't
/// recognise lands in `Other` and scores zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Corporate,
    Wedding,
    Airport,
    SpecialEvent,
    #[serde(other)]
    Other,
}

impl ServiceType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "corporate" => Self::Corporate,
            "wedding" => Self::Wedding,
            "airport" => Self::Airport,
            "special_event" => Self::SpecialEvent,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Corporate => "Corporate",
            Self::Wedding => "Wedding",
            Self::Airport => "Airport",
            Self::SpecialEvent => "Special Event",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub score: u8,
    pub priority: LeadPriority,
    /// Free-form channel name, e.g. `referral` or `website`.
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub status: LeadStatus,
    pub estimated_value: Decimal,
    /// Minutes until first contact.
    pub response_time: Option<u32>,
    pub last_contact: Option<DateTime<Utc>>,
    pub next_follow_up: Option<DateTime<Utc>>,
    pub service_type: ServiceType,
    pub notes: Option<String>,
}

// Template-friendly display version for listing and detail views
#[derive(Debug, Serialize)]
pub struct LeadDisplay {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub score: u8,
    pub score_class: String,
    pub priority: String,
    pub priority_class: String,
    pub status: String,
    pub status_class: String,
    pub source: String,
    pub estimated_value: String,
    pub response_time: String,
    pub created_ago: String,
    pub service_type: String,
    pub notes: String,
    pub last_contact: String,
    pub next_follow_up: String,
}

impl LeadDisplay {
    pub fn at(lead: &Lead, now: DateTime<Utc>) -> Self {
        Self {
            id: lead.id.clone(),
            company_name: lead.company_name.clone(),
            contact_name: lead.contact_name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            score: lead.score,
            score_class: crate::scoring::ScoreBand::from_score(lead.score).css_class().to_string(),
            priority: lead.priority.as_str().to_string(),
            priority_class: lead.priority.badge_class().to_string(),
            status: lead.status.as_str().to_string(),
            status_class: lead.status.badge_class().to_string(),
            source: lead.source.replace('_', " "),
            estimated_value: format_currency(lead.estimated_value),
            response_time: lead
                .response_time
                .map(|minutes| format!("{}m", minutes))
                .unwrap_or_else(|| "Pending".to_string()),
            created_ago: format_time_ago(lead.created_at, now),
            service_type: lead.service_type.label().to_string(),
            notes: lead.notes.clone().unwrap_or_default(),
            last_contact: lead.last_contact.map(format_date_time).unwrap_or_default(),
            next_follow_up: lead.next_follow_up.map(format_date_time).unwrap_or_default(),
        }
    }
}

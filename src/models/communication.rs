use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::utils::format::format_date_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationType {
    Email,
    Phone,
    Sms,
    Meeting,
    Note,
    #[serde(other)]
    Other,
}

impl CommunicationType {
    pub const ALL: [CommunicationType; 5] = [
        Self::Email,
        Self::Phone,
        Self::Sms,
        Self::Meeting,
        Self::Note,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "sms" => Some(Self::Sms),
            "meeting" => Some(Self::Meeting),
            "note" => Some(Self::Note),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
            Self::Meeting => "meeting",
            Self::Note => "note",
            Self::Other => "other",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Email => "badge-blue",
            Self::Phone => "badge-green",
            Self::Sms => "badge-purple",
            Self::Meeting => "badge-orange",
            Self::Note | Self::Other => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
    #[serde(other)]
    Other,
}

impl Direction {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationRecord {
    pub id: String,
    pub lead_id: String,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    pub direction: Direction,
    pub subject: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub user_name: String,
    pub successful: bool,
    /// Call or meeting length in minutes.
    pub duration: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct CommunicationDisplay {
    pub id: String,
    pub lead_id: String,
    pub lead_name: String,
    pub kind: String,
    pub kind_class: String,
    pub direction: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
    pub user_name: String,
    pub successful: bool,
    pub duration: String,
}

impl CommunicationDisplay {
    pub fn new(record: &CommunicationRecord, lead_name: Option<&str>) -> Self {
        Self {
            id: record.id.clone(),
            lead_id: record.lead_id.clone(),
            lead_name: lead_name.unwrap_or("Unknown Lead").to_string(),
            kind: record.kind.as_str().to_string(),
            kind_class: record.kind.badge_class().to_string(),
            direction: record.direction.as_str().to_string(),
            subject: record.subject.clone().unwrap_or_default(),
            message: record.message.clone(),
            timestamp: format_date_time(record.timestamp),
            user_name: record.user_name.clone(),
            successful: record.successful,
            duration: record.duration.map(|d| format!("{} min", d)).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_kinds_fall_back_to_other() {
        let record: CommunicationRecord = serde_json::from_value(json!({
            "id": "7",
            "lead_id": "1",
            "type": "fax",
            "direction": "sideways",
            "subject": null,
            "message": "Sent over the signed contract",
            "timestamp": "2024-03-01T12:00:00Z",
            "user_id": "1",
            "user_name": "John Martinez",
            "successful": true,
            "duration": null
        }))
        .unwrap();

        assert_eq!(record.kind, CommunicationType::Other);
        assert_eq!(record.direction, Direction::Other);
        assert_eq!(CommunicationType::parse("fax"), None);
        assert!(!CommunicationType::ALL.contains(&CommunicationType::Other));
    }

    #[test]
    fn test_known_kinds_keep_their_names() {
        let kind: CommunicationType = serde_json::from_value(json!("sms")).unwrap();
        assert_eq!(kind, CommunicationType::Sms);
        assert_eq!(serde_json::to_value(Direction::Inbound).unwrap(), json!("inbound"));
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::utils::format::format_time_ago;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    HighValueLead,
    UrgentResponse,
    MissedTarget,
    Conversion,
    SystemAlert,
    #[serde(other)]
    Other,
}

impl NotificationType {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::HighValueLead | Self::Conversion => "trending-up",
            Self::UrgentResponse | Self::MissedTarget => "alert",
            Self::SystemAlert | Self::Other => "bell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl NotificationPriority {
    /// Sort rank, most severe first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Critical => "badge-red",
            Self::High => "badge-orange",
            Self::Medium => "badge-yellow",
            Self::Low => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub priority: NotificationPriority,
    pub lead_id: Option<String>,
    #[serde(default)]
    pub action_required: bool,
}

#[derive(Debug, Serialize)]
pub struct NotificationDisplay {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub message: String,
    pub time_ago: String,
    pub read: bool,
    pub priority: String,
    pub priority_class: String,
    pub lead_id: String,
    pub action_required: bool,
}

impl NotificationDisplay {
    pub fn at(notification: &Notification, now: DateTime<Utc>) -> Self {
        Self {
            id: notification.id.clone(),
            icon: notification.kind.icon().to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            time_ago: format_time_ago(notification.timestamp, now),
            read: notification.read,
            priority: notification.priority.as_str().to_string(),
            priority_class: notification.priority.badge_class().to_string(),
            lead_id: notification.lead_id.clone().unwrap_or_default(),
            action_required: notification.action_required,
        }
    }
}

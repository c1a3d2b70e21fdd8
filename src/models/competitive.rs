use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::High => "badge-green",
            Self::Medium => "badge-yellow",
            Self::Low => "badge-gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvantageCategory {
    Experience,
    Certification,
    Technology,
    Service,
    #[serde(other)]
    Other,
}

impl AdvantageCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "experience" => Some(Self::Experience),
            "certification" => Some(Self::Certification),
            "technology" => Some(Self::Technology),
            "service" => Some(Self::Service),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Certification => "certification",
            Self::Technology => "technology",
            Self::Service => "service",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveAdvantage {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub impact: Impact,
    pub category: AdvantageCategory,
}

/// Market position figures passed to the competitive panel as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPosition {
    pub competitor_wins: u32,
    pub position: String,
}

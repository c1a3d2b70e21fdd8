//! Static sample data the dashboard is driven by.
//!
//! Built once at startup with timestamps relative to the supplied `now`, then
//! shared read-only. Handlers clone what they need.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{
    AdvantageCategory, AnalyticsSnapshot, CommunicationRecord, CommunicationType,
    CompetitiveAdvantage, ConversionFunnelData, Direction, FunnelFixtures, Impact, Lead,
    LeadPriority, LeadStatus, MarketPosition, Notification, NotificationPriority,
    NotificationType, ResponseTimeMetrics, ResponseTimePoint, RevenueData, ServiceType,
};

#[derive(Debug, Clone)]
pub struct SampleData {
    pub leads: Vec<Lead>,
    pub notifications: Vec<Notification>,
    pub communications: Vec<CommunicationRecord>,
    pub revenue: Vec<RevenueData>,
    pub funnel: Vec<ConversionFunnelData>,
    pub response_metrics: ResponseTimeMetrics,
    pub response_history: Vec<ResponseTimePoint>,
    pub advantages: Vec<CompetitiveAdvantage>,
    pub analytics: AnalyticsSnapshot,
    pub funnel_fixtures: FunnelFixtures,
    pub market_position: MarketPosition,
}

impl SampleData {
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self {
            leads: sample_leads(now),
            notifications: sample_notifications(now),
            communications: sample_communications(now),
            revenue: sample_revenue(),
            funnel: sample_funnel(),
            response_metrics: ResponseTimeMetrics {
                average: 4.2,
                target: 5.0,
                within_5_min: 87.0,
                within_15_min: 12.0,
                over_15_min: 1.0,
                total_leads: 100,
            },
            response_history: ["Week 1", "Week 2", "Week 3", "Week 4"]
                .iter()
                .zip([5.2, 4.8, 4.1, 4.2])
                .map(|(period, average)| ResponseTimePoint {
                    period: period.to_string(),
                    average,
                    target: 5.0,
                })
                .collect(),
            advantages: sample_advantages(),
            analytics: AnalyticsSnapshot {
                total_leads: 347,
                converted_leads: 234,
                conversion_rate: 67.4,
                average_response_time: 4.2,
                total_revenue: Decimal::from(892_000),
                average_deal_size: Decimal::from(3_812),
                top_source: "referral".to_string(),
                competitor_wins: 89,
            },
            funnel_fixtures: FunnelFixtures {
                average_cycle: "2.3 days avg".to_string(),
                pipeline_velocity: "$12K/day".to_string(),
            },
            market_position: MarketPosition {
                competitor_wins: 89,
                position: "Top 10".to_string(),
            },
        }
    }

    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    pub fn lead_name(&self, id: &str) -> Option<&str> {
        self.lead(id).map(|l| l.company_name.as_str())
    }
}

fn sample_leads(now: DateTime<Utc>) -> Vec<Lead> {
    vec![
        Lead {
            id: "1".to_string(),
            company_name: "Fortune 500 Corp".to_string(),
            contact_name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@fortune500corp.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            score: 95,
            priority: LeadPriority::Urgent,
            source: "referral".to_string(),
            created_at: now - Duration::hours(2),
            status: LeadStatus::New,
            estimated_value: Decimal::from(15_000),
            response_time: Some(3),
            last_contact: None,
            next_follow_up: None,
            service_type: ServiceType::Corporate,
            notes: Some("Executive team transportation for quarterly board meeting. High-priority client.".to_string()),
        },
        Lead {
            id: "2".to_string(),
            company_name: "Tech Startup Inc".to_string(),
            contact_name: "Mike Chen".to_string(),
            email: "mike@techstartup.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            score: 78,
            priority: LeadPriority::High,
            source: "website".to_string(),
            created_at: now - Duration::hours(4),
            status: LeadStatus::Contacted,
            estimated_value: Decimal::from(2_500),
            response_time: Some(7),
            last_contact: Some(now - Duration::hours(1)),
            next_follow_up: Some(now + Duration::hours(24)),
            service_type: ServiceType::Corporate,
            notes: None,
        },
        Lead {
            id: "3".to_string(),
            company_name: "Elite Wedding Co".to_string(),
            contact_name: "Jennifer Smith".to_string(),
            email: "jen@elitewedding.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            score: 85,
            priority: LeadPriority::High,
            source: "referral".to_string(),
            created_at: now - Duration::hours(6),
            status: LeadStatus::Qualified,
            estimated_value: Decimal::from(3_200),
            response_time: Some(12),
            last_contact: Some(now - Duration::minutes(30)),
            next_follow_up: None,
            service_type: ServiceType::Wedding,
            notes: None,
        },
        Lead {
            id: "4".to_string(),
            company_name: "Global Enterprises".to_string(),
            contact_name: "David Wilson".to_string(),
            email: "dwilson@globalent.com".to_string(),
            phone: "+1 (555) 321-0987".to_string(),
            score: 92,
            priority: LeadPriority::Urgent,
            source: "website".to_string(),
            created_at: now - Duration::hours(1),
            status: LeadStatus::New,
            estimated_value: Decimal::from(8_500),
            response_time: None,
            last_contact: None,
            next_follow_up: None,
            service_type: ServiceType::Corporate,
            notes: Some("International client visit. Requires multiple vehicles.".to_string()),
        },
    ]
}

fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            kind: NotificationType::HighValueLead,
            title: "High-Value Lead Alert".to_string(),
            message: "Fortune 500 Corp submitted a $15,000 corporate transportation request".to_string(),
            timestamp: now - Duration::minutes(5),
            read: false,
            priority: NotificationPriority::Critical,
            lead_id: Some("1".to_string()),
            action_required: true,
        },
        Notification {
            id: "2".to_string(),
            kind: NotificationType::UrgentResponse,
            title: "Response Time Critical".to_string(),
            message: "Global Enterprises lead requires immediate attention - 1 hour old".to_string(),
            timestamp: now - Duration::minutes(10),
            read: false,
            priority: NotificationPriority::High,
            lead_id: Some("4".to_string()),
            action_required: true,
        },
        Notification {
            id: "3".to_string(),
            kind: NotificationType::Conversion,
            title: "Lead Converted!".to_string(),
            message: "Elite Wedding Co confirmed booking for $3,200".to_string(),
            timestamp: now - Duration::minutes(30),
            read: true,
            priority: NotificationPriority::Medium,
            lead_id: Some("3".to_string()),
            action_required: false,
        },
    ]
}

fn sample_communications(now: DateTime<Utc>) -> Vec<CommunicationRecord> {
    vec![
        CommunicationRecord {
            id: "1".to_string(),
            lead_id: "1".to_string(),
            kind: CommunicationType::Phone,
            direction: Direction::Outbound,
            subject: Some("Initial Contact".to_string()),
            message: "Spoke with Sarah about corporate transportation needs. Very interested, requested detailed proposal.".to_string(),
            timestamp: now - Duration::hours(2),
            user_id: "user1".to_string(),
            user_name: "John Martinez".to_string(),
            successful: true,
            duration: Some(15),
        },
        CommunicationRecord {
            id: "2".to_string(),
            lead_id: "2".to_string(),
            kind: CommunicationType::Email,
            direction: Direction::Outbound,
            subject: Some("TNT Corporate Transportation Proposal".to_string()),
            message: "Sent comprehensive proposal with pricing and vehicle options.".to_string(),
            timestamp: now - Duration::hours(3),
            user_id: "user2".to_string(),
            user_name: "Lisa Chen".to_string(),
            successful: true,
            duration: None,
        },
        CommunicationRecord {
            id: "3".to_string(),
            lead_id: "3".to_string(),
            kind: CommunicationType::Meeting,
            direction: Direction::Inbound,
            subject: Some("Wedding Transportation Planning".to_string()),
            message: "In-person consultation to discuss wedding day logistics and vehicle requirements.".to_string(),
            timestamp: now - Duration::hours(24),
            user_id: "user1".to_string(),
            user_name: "John Martinez".to_string(),
            successful: true,
            duration: Some(60),
        },
    ]
}

fn sample_revenue() -> Vec<RevenueData> {
    [
        ("Jan", 125_000, 120_000, 45, 28, 62.2),
        ("Feb", 135_000, 130_000, 52, 34, 65.4),
        ("Mar", 145_000, 140_000, 48, 31, 64.6),
        ("Apr", 155_000, 150_000, 58, 39, 67.2),
        ("May", 165_000, 160_000, 62, 42, 67.7),
        ("Jun", 175_000, 170_000, 55, 38, 69.1),
    ]
    .into_iter()
    .map(|(period, revenue, target, leads, conversions, conversion_rate)| RevenueData {
        period: period.to_string(),
        revenue: Decimal::from(revenue),
        target: Decimal::from(target),
        leads,
        conversions,
        conversion_rate,
    })
    .collect()
}

fn sample_funnel() -> Vec<ConversionFunnelData> {
    [
        ("New Leads", 150, 100.0, 450_000),
        ("Contacted", 135, 90.0, 405_000),
        ("Qualified", 108, 72.0, 324_000),
        ("Proposal Sent", 85, 57.0, 255_000),
        ("Converted", 68, 45.0, 204_000),
    ]
    .into_iter()
    .map(|(stage, count, percentage, value)| ConversionFunnelData {
        stage: stage.to_string(),
        count,
        percentage,
        value: Decimal::from(value),
    })
    .collect()
}

fn sample_advantages() -> Vec<CompetitiveAdvantage> {
    [
        (
            "National Limousine Association Member",
            "Certified member ensuring highest industry standards and professional service excellence.",
            "🏆",
            Impact::High,
            AdvantageCategory::Certification,
        ),
        (
            "Trust Analytica Top 10 Ranking",
            "Ranked in top 10 most trusted transportation companies by independent analysis.",
            "⭐",
            Impact::High,
            AdvantageCategory::Certification,
        ),
        (
            "15+ Years Experience",
            "Over 15 years of proven track record in luxury transportation services.",
            "📅",
            Impact::High,
            AdvantageCategory::Experience,
        ),
        (
            "AI-Powered Lead Response",
            "Advanced speed-to-lead system ensuring <5 minute response times.",
            "🤖",
            Impact::Medium,
            AdvantageCategory::Technology,
        ),
        (
            "24/7 Customer Support",
            "Round-the-clock availability for all client needs and emergency situations.",
            "🕐",
            Impact::Medium,
            AdvantageCategory::Service,
        ),
        (
            "Fleet Diversity",
            "Comprehensive fleet including luxury sedans, SUVs, limos, and specialty vehicles.",
            "🚗",
            Impact::Medium,
            AdvantageCategory::Service,
        ),
    ]
    .into_iter()
    .map(|(title, description, icon, impact, category)| CompetitiveAdvantage {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        impact,
        category,
    })
    .collect()
}

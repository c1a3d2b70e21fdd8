pub mod analytics;
pub mod communication;
pub mod competitive;
pub mod lead;
pub mod notification;
pub mod rbac;
pub mod user;

pub use analytics::{
    AnalyticsSnapshot, ConversionFunnelData, FunnelFixtures,
    ResponseTimeMetrics, ResponseTimePoint, RevenueData,
};
pub use communication::{CommunicationDisplay, CommunicationRecord, CommunicationType, Direction};
pub use competitive::{AdvantageCategory, CompetitiveAdvantage, Impact, MarketPosition};
pub use lead::{Lead, LeadDisplay, LeadPriority, LeadStatus, ServiceType};
pub use notification::{Notification, NotificationDisplay, NotificationPriority, NotificationType};
pub use rbac::{has_permission, permission_keys, role_permissions, Permission};
pub use user::{Role, User};

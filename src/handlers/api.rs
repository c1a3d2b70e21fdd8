use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use super::{leads::LeadQuery, notifications::session_feed};
use crate::{
    error::AppError,
    metrics::{
        communication_stats, competitive_summary, critical_unread_count, funnel_summary,
        metrics_from_leads, response_performance, revenue_summary, scoring_summary, unread_count,
        CommunicationStats, CompetitiveSummary, FunnelSummary, ResponsePerformance,
        RevenueSummary, ScoringSummary,
    },
    middleware::require_api_user,
    models::{AnalyticsSnapshot, Lead, Notification, ResponseTimeMetrics, ServiceType},
    pipeline::{filter_leads, sort_leads},
    scoring::{is_high_value, response_minutes, score_breakdown, ScoreBand, ScoreBreakdown, ScoringInput},
    state::AppState,
};

pub async fn leads(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(query): Query<LeadQuery>,
) -> Result<Json<Vec<Lead>>, AppError> {
    require_api_user(cookies, &state)?;

    let mut leads = filter_leads(&state.data.leads, &query.filter());
    sort_leads(&mut leads, query.sort());

    Ok(Json(leads))
}

#[derive(Serialize)]
pub struct NotificationFeed {
    pub unread: usize,
    pub critical_unread: usize,
    pub notifications: Vec<Notification>,
}

pub async fn notifications(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Json<NotificationFeed>, AppError> {
    require_api_user(cookies.clone(), &state)?;

    let feed = session_feed(&cookies, &state);
    Ok(Json(NotificationFeed {
        unread: unread_count(&feed),
        critical_unread: critical_unread_count(&feed),
        notifications: feed,
    }))
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub overview: AnalyticsSnapshot,
    pub scoring: ScoringSummary,
    pub funnel: FunnelSummary,
    pub response: ResponseTimeMetrics,
    pub response_performance: ResponsePerformance,
    /// Computed from the response times recorded on the current leads.
    pub live_response: ResponseTimeMetrics,
    pub revenue: RevenueSummary,
    pub communications: CommunicationStats,
    pub competitive: CompetitiveSummary,
}

pub async fn metrics(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    let user = require_api_user(cookies, &state)?;
    user.require("analytics", "read")?;

    let data = &state.data;
    Ok(Json(MetricsResponse {
        overview: data.analytics.clone(),
        scoring: scoring_summary(&data.leads),
        funnel: funnel_summary(&data.funnel),
        response: data.response_metrics.clone(),
        response_performance: response_performance(&data.response_metrics),
        live_response: metrics_from_leads(&data.leads, state.config.response_target_minutes),
        revenue: revenue_summary(&data.revenue),
        communications: communication_stats(&data.communications),
        competitive: competitive_summary(&data.advantages),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub estimated_value: Decimal,
    pub source: String,
    /// Minutes to first response. When absent, derived from the two timestamps.
    pub response_time: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub first_contact_at: Option<DateTime<Utc>>,
    pub service_type: String,
}

impl ScoreRequest {
    fn response_time(&self) -> Result<Option<f64>, AppError> {
        if let Some(minutes) = self.response_time {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(AppError::BadRequest(
                    "response_time must be a non-negative number".to_string(),
                ));
            }
            return Ok(Some(minutes));
        }
        let Some(created_at) = self.created_at else {
            return Ok(None);
        };

        match response_minutes(created_at, self.first_contact_at) {
            Some(minutes) if minutes < 0 => Err(AppError::BadRequest(
                "first_contact_at is before created_at".to_string(),
            )),
            Some(minutes) => Ok(Some(minutes as f64)),
            None => Ok(None),
        }
    }
}

#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub band: ScoreBand,
    pub high_value: bool,
}

pub async fn score(
    cookies: Cookies,
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    require_api_user(cookies, &state)?;

    if request.estimated_value.is_sign_negative() {
        return Err(AppError::BadRequest("estimated_value must not be negative".to_string()));
    }

    let input = ScoringInput {
        estimated_value: request.estimated_value,
        source: &request.source,
        response_time: request.response_time()?,
        service_type: ServiceType::parse(&request.service_type),
    };
    let breakdown = score_breakdown(&input);

    Ok(Json(ScoreResponse {
        band: ScoreBand::from_score(breakdown.total),
        high_value: is_high_value(request.estimated_value),
        breakdown,
    }))
}

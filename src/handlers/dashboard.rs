use axum::{extract::State, response::Html};
use askama::Template;
use chrono::Utc;
use tower_cookies::Cookies;

use super::{notifications::session_feed, render, NavContext};
use crate::{
    error::AppError,
    filters,
    metrics::{
        critical_unread_count, lead_summary, response_performance, scoring_summary, unread_count,
        LeadSummary, ResponsePerformance, ScoreBucket,
    },
    middleware::require_user,
    models::{AnalyticsSnapshot, LeadDisplay, NotificationDisplay},
    pipeline::{high_priority_leads, LeadFilter, LeadSort},
    state::AppState,
};

const RECENT_NOTIFICATIONS: usize = 3;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    nav: NavContext,
    kpis: AnalyticsSnapshot,
    response: ResponsePerformance,
    response_target: f64,
    lead_counts: LeadSummary,
    average_score: u32,
    score_trend: String,
    score_trend_percentage: u32,
    distribution: Vec<ScoreBucket>,
    top_prospects: Vec<LeadDisplay>,
    priority_leads: Vec<LeadDisplay>,
    notifications: Vec<NotificationDisplay>,
    critical_count: usize,
}

pub async fn dashboard(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    let data = &state.data;
    let now = Utc::now();

    let feed = session_feed(&cookies, &state);
    let scoring = scoring_summary(&data.leads);
    let priority = high_priority_leads(&data.leads, &LeadFilter::default(), LeadSort::default());

    let template = DashboardTemplate {
        nav: NavContext::new(&user, "dashboard", unread_count(&feed)),
        kpis: data.analytics.clone(),
        response: response_performance(&data.response_metrics),
        response_target: data.response_metrics.target,
        lead_counts: lead_summary(&priority),
        average_score: scoring.average_score,
        score_trend: scoring.trend.as_str().to_string(),
        score_trend_percentage: scoring.trend_percentage,
        distribution: scoring.distribution,
        top_prospects: scoring
            .top_prospects
            .iter()
            .map(|l| LeadDisplay::at(l, now))
            .collect(),
        priority_leads: priority.iter().map(|l| LeadDisplay::at(l, now)).collect(),
        critical_count: critical_unread_count(&feed),
        notifications: feed
            .iter()
            .take(RECENT_NOTIFICATIONS)
            .map(|n| NotificationDisplay::at(n, now))
            .collect(),
    };

    render(&template)
}

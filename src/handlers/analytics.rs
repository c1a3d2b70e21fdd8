use axum::{extract::State, response::Html};
use askama::Template;
use tower_cookies::Cookies;

use super::{notifications::session_unread, render, NavContext};
use crate::{
    error::AppError,
    filters,
    metrics::{
        funnel_summary, period_performance, response_performance, response_slices, response_trend,
        revenue_summary, Benchmark, FunnelSummary, PeriodPerformance, ResponsePerformance,
        ResponseSlice, RevenueSummary,
    },
    middleware::require_user,
    models::{
        AnalyticsSnapshot, ConversionFunnelData, FunnelFixtures, ResponseTimeMetrics,
        ResponseTimePoint,
    },
    state::AppState,
};

pub struct BenchmarkRow {
    pub label: &'static str,
    pub range: &'static str,
    pub css_class: &'static str,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "analytics.html")]
struct AnalyticsTemplate {
    nav: NavContext,
    kpis: AnalyticsSnapshot,
    funnel: Vec<ConversionFunnelData>,
    funnel_summary: FunnelSummary,
    fixtures: FunnelFixtures,
    response: ResponseTimeMetrics,
    performance: ResponsePerformance,
    trend: String,
    slices: Vec<ResponseSlice>,
    history: Vec<ResponseTimePoint>,
    benchmarks: Vec<BenchmarkRow>,
    revenue: RevenueSummary,
    periods: Vec<PeriodPerformance>,
}

pub async fn analytics_page(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    user.require("analytics", "read")?;

    let data = &state.data;
    let performance = response_performance(&data.response_metrics);

    let template = AnalyticsTemplate {
        nav: NavContext::new(&user, "analytics", session_unread(&cookies, &state)),
        kpis: data.analytics.clone(),
        funnel: data.funnel.clone(),
        funnel_summary: funnel_summary(&data.funnel),
        fixtures: data.funnel_fixtures.clone(),
        response: data.response_metrics.clone(),
        trend: response_trend(&data.response_history).as_str().to_string(),
        slices: response_slices(&data.response_metrics),
        history: data.response_history.clone(),
        benchmarks: Benchmark::ALL
            .iter()
            .map(|b| BenchmarkRow {
                label: b.label(),
                range: b.range(),
                css_class: b.css_class(),
                current: *b == performance.benchmark,
            })
            .collect(),
        performance,
        revenue: revenue_summary(&data.revenue),
        periods: period_performance(&data.revenue),
    };

    render(&template)
}

use axum::{
    extract::{Query, State},
    response::Html,
};
use askama::Template;
use serde::Deserialize;
use tower_cookies::Cookies;

use super::{notifications::session_unread, render, NavContext, SelectOption};
use crate::{
    error::AppError,
    filters,
    metrics::competitive_summary,
    middleware::require_user,
    models::{AdvantageCategory, CompetitiveAdvantage, MarketPosition},
    pipeline::{filter_advantages, parse_filter},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct CompetitiveQuery {
    pub category: Option<String>,
}

pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Template)]
#[template(path = "competitive.html")]
struct CompetitiveTemplate {
    nav: NavContext,
    advantages: Vec<CompetitiveAdvantage>,
    categories: Vec<CategoryCount>,
    category_options: Vec<SelectOption>,
    high_impact: usize,
    certifications: usize,
    competitive_score: u32,
    market: MarketPosition,
}

pub async fn competitive_page(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(query): Query<CompetitiveQuery>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    let data = &state.data;

    // Summary figures always describe the full set; the category only narrows the list.
    let summary = competitive_summary(&data.advantages);
    let category = parse_filter(query.category.as_deref(), AdvantageCategory::parse);

    let template = CompetitiveTemplate {
        nav: NavContext::new(&user, "competitive", session_unread(&cookies, &state)),
        advantages: filter_advantages(&data.advantages, category),
        category_options: SelectOption::with_all(
            summary.categories.iter().map(|(c, _)| (c.as_str(), c.as_str())),
            query.category.as_deref(),
        ),
        categories: summary
            .categories
            .iter()
            .map(|(c, count)| CategoryCount {
                name: c.as_str().to_string(),
                count: *count,
            })
            .collect(),
        high_impact: summary.high_impact,
        certifications: summary.certifications,
        competitive_score: summary.competitive_score,
        market: data.market_position.clone(),
    };

    render(&template)
}

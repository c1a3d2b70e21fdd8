use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use askama::Template;
use chrono::Utc;
use serde::Deserialize;
use tower_cookies::Cookies;

use super::{notifications::session_feed, render, NavContext, SelectOption};
use crate::{
    error::AppError,
    filters,
    metrics::{lead_summary, unread_count, LeadSummary},
    middleware::require_user,
    models::{CommunicationDisplay, LeadDisplay, LeadPriority, LeadStatus, NotificationDisplay},
    pipeline::{
        filter_communications, high_priority_leads, parse_filter, CommunicationFilter, LeadFilter,
        LeadSort, LeadSortField, SortDirection,
    },
    scoring::{is_high_value, score_breakdown, ScoreBreakdown, ScoringInput},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct LeadQuery {
    pub priority: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl LeadQuery {
    pub fn filter(&self) -> LeadFilter {
        LeadFilter {
            priority: parse_filter(self.priority.as_deref(), LeadPriority::parse),
            status: parse_filter(self.status.as_deref(), LeadStatus::parse),
        }
    }

    pub fn sort(&self) -> LeadSort {
        LeadSort {
            field: self
                .sort
                .as_deref()
                .and_then(LeadSortField::parse)
                .unwrap_or_default(),
            direction: self
                .dir
                .as_deref()
                .and_then(SortDirection::parse)
                .unwrap_or_default(),
        }
    }
}

/// A clickable column header. Clicking the active column flips direction.
#[derive(Debug, Clone)]
pub struct SortLink {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
}

fn sort_links(query: &LeadQuery, current: LeadSort) -> Vec<SortLink> {
    const COLUMNS: [(LeadSortField, &str); 4] = [
        (LeadSortField::Score, "Score"),
        (LeadSortField::EstimatedValue, "Value"),
        (LeadSortField::ResponseTime, "Response"),
        (LeadSortField::CreatedAt, "Created"),
    ];

    COLUMNS
        .into_iter()
        .map(|(field, label)| {
            let active = field == current.field;
            let direction = if active { current.direction.toggled() } else { SortDirection::Desc };
            let href = format!(
                "/leads?priority={}&status={}&sort={}&dir={}",
                urlencoding::encode(query.priority.as_deref().unwrap_or("all")),
                urlencoding::encode(query.status.as_deref().unwrap_or("all")),
                field.as_str(),
                direction.as_str(),
            );
            let indicator = match (active, current.direction) {
                (false, _) => "",
                (true, SortDirection::Asc) => "▲",
                (true, SortDirection::Desc) => "▼",
            };
            SortLink { label, href, indicator }
        })
        .collect()
}

#[derive(Template)]
#[template(path = "leads.html")]
struct LeadsTemplate {
    nav: NavContext,
    leads: Vec<LeadDisplay>,
    counts: LeadSummary,
    priority_options: Vec<SelectOption>,
    status_options: Vec<SelectOption>,
    sort_links: Vec<SortLink>,
    sort_field: String,
    sort_dir: String,
}

#[derive(Template)]
#[template(path = "lead_detail.html")]
struct LeadDetailTemplate {
    nav: NavContext,
    lead: LeadDisplay,
    breakdown: ScoreBreakdown,
    high_value: bool,
    communications: Vec<CommunicationDisplay>,
    notifications: Vec<NotificationDisplay>,
}

pub async fn leads_list(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(query): Query<LeadQuery>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    let now = Utc::now();

    let sort = query.sort();
    let leads = high_priority_leads(&state.data.leads, &query.filter(), sort);

    let template = LeadsTemplate {
        nav: NavContext::new(&user, "leads", unread_count(&session_feed(&cookies, &state))),
        counts: lead_summary(&leads),
        leads: leads.iter().map(|l| LeadDisplay::at(l, now)).collect(),
        priority_options: SelectOption::with_all(
            [LeadPriority::Urgent, LeadPriority::High]
                .iter()
                .map(|p| (p.as_str(), p.as_str())),
            query.priority.as_deref(),
        ),
        status_options: SelectOption::with_all(
            [
                LeadStatus::New,
                LeadStatus::Contacted,
                LeadStatus::Qualified,
                LeadStatus::Converted,
                LeadStatus::Lost,
            ]
            .iter()
            .map(|s| (s.as_str(), s.as_str())),
            query.status.as_deref(),
        ),
        sort_links: sort_links(&query, sort),
        sort_field: sort.field.as_str().to_string(),
        sort_dir: sort.direction.as_str().to_string(),
    };

    render(&template)
}

pub async fn lead_detail(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    let now = Utc::now();

    let lead = state
        .data
        .lead(&id)
        .ok_or_else(|| AppError::NotFound(format!("lead {}", id)))?;

    let history = filter_communications(
        &state.data.communications,
        &CommunicationFilter {
            lead_id: Some(lead.id.clone()),
            ..CommunicationFilter::default()
        },
    );

    let feed = session_feed(&cookies, &state);
    let template = LeadDetailTemplate {
        nav: NavContext::new(&user, "leads", unread_count(&feed)),
        lead: LeadDisplay::at(lead, now),
        breakdown: score_breakdown(&ScoringInput::from(lead)),
        high_value: is_high_value(lead.estimated_value),
        communications: history
            .iter()
            .map(|r| CommunicationDisplay::new(r, Some(lead.company_name.as_str())))
            .collect(),
        notifications: feed
            .iter()
            .filter(|n| n.lead_id.as_deref() == Some(lead.id.as_str()))
            .map(|n| NotificationDisplay::at(n, now))
            .collect(),
    };

    render(&template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_to_score_desc() {
        let sort = LeadQuery::default().sort();
        assert_eq!(sort.field, LeadSortField::Score);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_query_all_means_no_filter() {
        let query = LeadQuery {
            priority: Some("all".to_string()),
            status: Some("qualified".to_string()),
            ..LeadQuery::default()
        };
        let filter = query.filter();
        assert_eq!(filter.priority, None);
        assert_eq!(filter.status, Some(LeadStatus::Qualified));
    }

    #[test]
    fn test_active_sort_link_flips_direction() {
        let query = LeadQuery::default();
        let links = sort_links(&query, query.sort());
        assert_eq!(links[0].label, "Score");
        assert!(links[0].href.ends_with("sort=score&dir=asc"));
        assert_eq!(links[0].indicator, "▼");
        assert!(links[1].href.ends_with("sort=estimated_value&dir=desc"));
    }
}

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
    metrics::{communication_stats, group_by_lead},
    middleware::require_user,
    models::{CommunicationDisplay, CommunicationRecord, CommunicationType, Direction},
    pipeline::{filter_communications, parse_filter, CommunicationFilter},
    state::AppState,
    store::SampleData,
};

#[derive(Debug, Default, Deserialize)]
pub struct CommunicationQuery {
    pub lead_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub direction: Option<String>,
    pub q: Option<String>,
    pub view: Option<String>,
}

impl CommunicationQuery {
    pub fn filter(&self) -> CommunicationFilter {
        CommunicationFilter {
            lead_id: parse_filter(self.lead_id.as_deref(), |id| Some(id.to_string())),
            kind: parse_filter(self.kind.as_deref(), CommunicationType::parse),
            direction: parse_filter(self.direction.as_deref(), Direction::parse),
            search: self.q.clone(),
        }
    }

    fn grouped(&self) -> bool {
        self.view.as_deref() == Some("grouped")
    }
}

pub struct TypeCount {
    pub kind: String,
    pub kind_class: String,
    pub count: usize,
}

pub struct ThreadView {
    pub lead_id: String,
    pub lead_name: String,
    pub records: Vec<CommunicationDisplay>,
}

#[derive(Template)]
#[template(path = "communications.html")]
struct CommunicationsTemplate {
    nav: NavContext,
    total: usize,
    success_rate: f64,
    outbound: usize,
    inbound: usize,
    type_counts: Vec<TypeCount>,
    records: Vec<CommunicationDisplay>,
    threads: Vec<ThreadView>,
    grouped: bool,
    filters_active: bool,
    search: String,
    lead_options: Vec<SelectOption>,
    type_options: Vec<SelectOption>,
    direction_options: Vec<SelectOption>,
}

fn display(record: &CommunicationRecord, data: &SampleData) -> CommunicationDisplay {
    CommunicationDisplay::new(record, data.lead_name(&record.lead_id))
}

pub async fn communications_page(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(query): Query<CommunicationQuery>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    let data = &state.data;

    let filter = query.filter();
    let records = filter_communications(&data.communications, &filter);
    let stats = communication_stats(&records);

    let threads = if query.grouped() {
        group_by_lead(&records)
            .into_iter()
            .map(|thread| ThreadView {
                lead_name: data.lead_name(&thread.lead_id).unwrap_or("Unknown Lead").to_string(),
                records: thread.records.iter().map(|r| display(r, data)).collect(),
                lead_id: thread.lead_id,
            })
            .collect()
    } else {
        Vec::new()
    };

    let template = CommunicationsTemplate {
        nav: NavContext::new(&user, "communications", session_unread(&cookies, &state)),
        total: stats.total,
        success_rate: stats.success_rate,
        outbound: stats.outbound,
        inbound: stats.inbound,
        type_counts: stats
            .by_type
            .iter()
            .map(|(kind, count)| TypeCount {
                kind: kind.as_str().to_string(),
                kind_class: kind.badge_class().to_string(),
                count: *count,
            })
            .collect(),
        records: records.iter().map(|r| display(r, data)).collect(),
        threads,
        grouped: query.grouped(),
        filters_active: filter.is_active(),
        search: query.q.clone().unwrap_or_default(),
        lead_options: SelectOption::with_all(
            data.leads.iter().map(|l| (l.id.as_str(), l.company_name.as_str())),
            query.lead_id.as_deref(),
        ),
        type_options: SelectOption::with_all(
            CommunicationType::ALL.iter().map(|k| (k.as_str(), k.as_str())),
            query.kind.as_deref(),
        ),
        direction_options: SelectOption::with_all(
            [Direction::Inbound, Direction::Outbound]
                .iter()
                .map(|d| (d.as_str(), d.as_str())),
            query.direction.as_deref(),
        ),
    };

    render(&template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builds_filter() {
        let query = CommunicationQuery {
            kind: Some("email".to_string()),
            direction: Some("all".to_string()),
            q: Some("proposal".to_string()),
            ..CommunicationQuery::default()
        };
        let filter = query.filter();
        assert_eq!(filter.kind, Some(CommunicationType::Email));
        assert_eq!(filter.direction, None);
        assert!(filter.is_active());
        assert!(!query.grouped());
    }

    #[test]
    fn test_empty_query_is_inactive() {
        assert!(!CommunicationQuery::default().filter().is_active());
    }
}

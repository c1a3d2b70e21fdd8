pub mod analytics;
pub mod api;
pub mod auth;
pub mod communications;
pub mod competitive;
pub mod dashboard;
pub mod leads;
pub mod notifications;

use askama::Template;
use axum::response::Html;
use serde::Serialize;

use crate::{error::AppError, middleware::CurrentUser};

pub use dashboard::dashboard;

/// Header and sidebar data every page template carries.
#[derive(Debug, Clone, Serialize)]
pub struct NavContext {
    pub user_name: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub has_analytics_access: bool,
    pub unread_count: usize,
    pub active: &'static str,
}

impl NavContext {
    pub fn new(user: &CurrentUser, active: &'static str, unread_count: usize) -> Self {
        Self {
            user_name: user.name.clone(),
            role: user.role.as_str().to_string(),
            permissions: user.permissions.clone(),
            has_analytics_access: user.has_analytics_access,
            unread_count,
            active,
        }
    }
}

/// One entry of a filter `<select>`.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Builds the options for `values`, preceded by an "All" entry.
    pub fn with_all<'a>(
        values: impl IntoIterator<Item = (&'a str, &'a str)>,
        current: Option<&str>,
    ) -> Vec<Self> {
        let current = current.unwrap_or("all");
        std::iter::once(("all", "All"))
            .chain(values)
            .map(|(value, label)| Self {
                value: value.to_string(),
                label: label.to_string(),
                selected: value == current,
            })
            .collect()
    }
}

pub(crate) fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_mark_current() {
        let options = SelectOption::with_all([("urgent", "Urgent"), ("high", "High")], Some("high"));
        assert_eq!(options.len(), 3);
        assert!(!options[0].selected);
        assert!(options[2].selected);
    }

    #[test]
    fn test_select_options_default_to_all() {
        let options = SelectOption::with_all([("email", "Email")], None);
        assert!(options[0].selected);
    }
}

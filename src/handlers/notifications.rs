use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use askama::Template;
use chrono::Utc;
use tower_cookies::{Cookie, Cookies};

use super::{render, NavContext};
use crate::{
    error::AppError,
    filters,
    metrics::{
        apply_read_state, critical_unread_count, mark_all_read, mark_read, sort_notifications,
        unread_count,
    },
    middleware::require_user,
    models::{Notification, NotificationDisplay},
    state::AppState,
};

/// Ids this browser session has marked read, comma-joined and url-encoded.
pub const READ_COOKIE: &str = "read_notifications";

#[derive(Template)]
#[template(path = "notifications.html")]
struct NotificationsTemplate {
    nav: NavContext,
    notifications: Vec<NotificationDisplay>,
    unread_count: usize,
    critical_count: usize,
}

pub(crate) fn read_ids(cookies: &Cookies) -> HashSet<String> {
    let Some(cookie) = cookies.get(READ_COOKIE) else {
        return HashSet::new();
    };

    urlencoding::decode(cookie.value())
        .map(|decoded| {
            decoded
                .split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn store_read_ids(cookies: &Cookies, ids: &HashSet<String>) {
    let mut ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    ids.sort_unstable();
    let value = urlencoding::encode(&ids.join(",")).into_owned();

    // No max-age: the read state lives as long as the browser session.
    let cookie = Cookie::build((READ_COOKIE, value))
        .path("/")
        .http_only(true)
        .build();
    cookies.add(cookie);
}

/// The shared feed with this session's read marks applied, in display order.
pub(crate) fn session_feed(cookies: &Cookies, state: &AppState) -> Vec<Notification> {
    sort_notifications(&apply_read_state(&state.data.notifications, &read_ids(cookies)))
}

pub(crate) fn session_unread(cookies: &Cookies, state: &AppState) -> usize {
    unread_count(&session_feed(cookies, state))
}

pub async fn notifications_page(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let user = require_user(cookies.clone(), &state)?;
    let feed = session_feed(&cookies, &state);
    let now = Utc::now();

    let unread = unread_count(&feed);
    let template = NotificationsTemplate {
        nav: NavContext::new(&user, "notifications", unread),
        unread_count: unread,
        critical_count: critical_unread_count(&feed),
        notifications: feed.iter().map(|n| NotificationDisplay::at(n, now)).collect(),
    };

    render(&template)
}

pub async fn mark_notification_read(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    require_user(cookies.clone(), &state)?;

    let feed = apply_read_state(&state.data.notifications, &read_ids(&cookies));
    store_read_ids(&cookies, &read_set(&mark_read(&feed, &id)));

    Ok(Redirect::to("/notifications"))
}

pub async fn mark_all_notifications_read(
    cookies: Cookies,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    require_user(cookies.clone(), &state)?;

    store_read_ids(&cookies, &read_set(&mark_all_read(&state.data.notifications)));

    Ok(Redirect::to("/notifications"))
}

fn read_set(notifications: &[Notification]) -> HashSet<String> {
    notifications
        .iter()
        .filter(|n| n.read)
        .map(|n| n.id.clone())
        .collect()
}

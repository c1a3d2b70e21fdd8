use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{Notification, NotificationPriority};

/// Unread first, then most severe, then newest.
pub fn notification_order(a: &Notification, b: &Notification) -> Ordering {
    a.read
        .cmp(&b.read)
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
        .then_with(|| b.timestamp.cmp(&a.timestamp))
}

pub fn sort_notifications(notifications: &[Notification]) -> Vec<Notification> {
    let mut sorted = notifications.to_vec();
    sorted.sort_by(notification_order);
    sorted
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn critical_unread_count(notifications: &[Notification]) -> usize {
    notifications
        .iter()
        .filter(|n| !n.read && n.priority == NotificationPriority::Critical)
        .count()
}

pub fn mark_read(notifications: &[Notification], id: &str) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| Notification {
            read: n.read || n.id == id,
            ..n.clone()
        })
        .collect()
}

pub fn mark_all_read(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| Notification { read: true, ..n.clone() })
        .collect()
}

/// Overlays the ids a session has marked read onto the shared feed.
pub fn apply_read_state(notifications: &[Notification], read_ids: &HashSet<String>) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| Notification {
            read: n.read || read_ids.contains(&n.id),
            ..n.clone()
        })
        .collect()
}

//! # Dashboard metrics
//!
//! Pure aggregations over collections the web frontend has already fetched. Each
//! function takes the records plus the current time and returns a small metrics struct.
//! Empty input yields all zeros. Amounts that are not finite are skipped so sums never
//! become NaN.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{Event, Payment, PaymentStatus, Role, UserProfile, UserStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserMetrics {
    pub booked_events: usize,
    pub upcoming_events: usize,
    pub total_spent: f64,
    pub pending_payments: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostMetrics {
    pub hosted_events: usize,
    pub upcoming_events: usize,
    pub participants: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminMetrics {
    pub users: usize,
    pub hosts: usize,
    pub blocked_accounts: usize,
    pub events: usize,
    pub upcoming_events: usize,
    pub revenue: f64,
}

fn paid_total<'a>(payments: impl Iterator<Item = &'a Payment>) -> f64 {
    payments
        .filter(|p| p.is_paid())
        .map(|p| p.amount)
        .filter(|amount| amount.is_finite())
        .sum()
}

pub fn user_metrics(
    user_id: &str,
    events: &[Event],
    payments: &[Payment],
    now: DateTime<Utc>,
) -> UserMetrics {
    let mine: Vec<&Payment> = payments.iter().filter(|p| p.user_id == user_id).collect();
    let booked: HashSet<&str> = mine
        .iter()
        .filter(|p| p.is_paid())
        .map(|p| p.event_id.as_str())
        .collect();
    let upcoming_events = events
        .iter()
        .filter(|e| booked.contains(e.id.as_str()) && e.is_upcoming(now))
        .count();

    UserMetrics {
        booked_events: booked.len(),
        upcoming_events,
        total_spent: paid_total(mine.iter().copied()),
        pending_payments: mine
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending)
            .count(),
    }
}

pub fn host_metrics(
    host_id: &str,
    events: &[Event],
    payments: &[Payment],
    now: DateTime<Utc>,
) -> HostMetrics {
    let hosted: HashSet<&str> = events
        .iter()
        .filter(|e| e.host_id == host_id)
        .map(|e| e.id.as_str())
        .collect();
    let on_hosted: Vec<&Payment> = payments
        .iter()
        .filter(|p| hosted.contains(p.event_id.as_str()))
        .collect();

    HostMetrics {
        hosted_events: hosted.len(),
        upcoming_events: events
            .iter()
            .filter(|e| e.host_id == host_id && e.is_upcoming(now))
            .count(),
        participants: on_hosted.iter().filter(|p| p.is_paid()).count(),
        revenue: paid_total(on_hosted.iter().copied()),
    }
}

pub fn admin_metrics(
    users: &[UserProfile],
    events: &[Event],
    payments: &[Payment],
    now: DateTime<Utc>,
) -> AdminMetrics {
    AdminMetrics {
        users: users.len(),
        hosts: users.iter().filter(|u| u.role == Role::Host).count(),
        blocked_accounts: users
            .iter()
            .filter(|u| u.status == UserStatus::Blocked)
            .count(),
        events: events.len(),
        upcoming_events: events.iter().filter(|e| e.is_upcoming(now)).count(),
        revenue: paid_total(payments.iter()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;
    use chrono::Duration;

    fn event(id: &str, host: &str, date: DateTime<Utc>, status: EventStatus) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            category: None,
            location: None,
            date,
            fee: 25.0,
            host_id: host.into(),
            capacity: 100,
            status,
        }
    }

    fn payment(event: &str, user: &str, amount: f64, status: PaymentStatus) -> Payment {
        Payment {
            id: format!("{event}-{user}"),
            event_id: event.into(),
            user_id: user.into(),
            amount,
            status,
            created_at: Utc::now(),
        }
    }

    fn user(id: &str, role: Role, status: UserStatus) -> UserProfile {
        UserProfile {
            id: id.into(),
            email: format!("{id}@eventora.dev"),
            role,
            status,
            full_name: None,
            profile_image: None,
        }
    }

    #[test]
    fn test_empty_collections_are_zero() {
        let now = Utc::now();
        let u = user_metrics("u1", &[], &[], now);
        let h = host_metrics("h1", &[], &[], now);
        let a = admin_metrics(&[], &[], &[], now);

        assert_eq!(u, UserMetrics::default());
        assert_eq!(h, HostMetrics::default());
        assert_eq!(a, AdminMetrics::default());
        assert_eq!(u.total_spent, 0.0);
        assert!(!h.revenue.is_nan());
        assert!(!a.revenue.is_nan());
    }

    #[test]
    fn test_user_metrics() {
        let now = Utc::now();
        let events = vec![
            event("e1", "h1", now + Duration::days(3), EventStatus::Open),
            event("e2", "h1", now - Duration::days(3), EventStatus::Completed),
            event("e3", "h2", now + Duration::days(9), EventStatus::Cancelled),
        ];
        let payments = vec![
            payment("e1", "u1", 40.0, PaymentStatus::Paid),
            payment("e2", "u1", 10.5, PaymentStatus::Paid),
            payment("e3", "u1", 99.0, PaymentStatus::Paid),
            payment("e1", "u1", 40.0, PaymentStatus::Pending),
            payment("e1", "u2", 40.0, PaymentStatus::Paid),
        ];

        let m = user_metrics("u1", &events, &payments, now);
        assert_eq!(m.booked_events, 3);
        assert_eq!(m.upcoming_events, 1);
        assert_eq!(m.total_spent, 149.5);
        assert_eq!(m.pending_payments, 1);
    }

    #[test]
    fn test_host_metrics() {
        let now = Utc::now();
        let events = vec![
            event("e1", "h1", now + Duration::days(1), EventStatus::Open),
            event("e2", "h1", now - Duration::days(1), EventStatus::Completed),
            event("e3", "h2", now + Duration::days(1), EventStatus::Open),
        ];
        let payments = vec![
            payment("e1", "u1", 20.0, PaymentStatus::Paid),
            payment("e1", "u2", 20.0, PaymentStatus::Refunded),
            payment("e2", "u3", 15.0, PaymentStatus::Paid),
            payment("e3", "u1", 50.0, PaymentStatus::Paid),
        ];

        let m = host_metrics("h1", &events, &payments, now);
        assert_eq!(m.hosted_events, 2);
        assert_eq!(m.upcoming_events, 1);
        assert_eq!(m.participants, 2);
        assert_eq!(m.revenue, 35.0);
    }

    #[test]
    fn test_admin_metrics_skip_non_finite_amounts() {
        let now = Utc::now();
        let users = vec![
            user("a", Role::Admin, UserStatus::Active),
            user("h", Role::Host, UserStatus::Active),
            user("u", Role::User, UserStatus::Blocked),
        ];
        let events = vec![event("e1", "h", now + Duration::hours(2), EventStatus::Full)];
        let payments = vec![
            payment("e1", "u", f64::NAN, PaymentStatus::Paid),
            payment("e1", "u", 12.0, PaymentStatus::Paid),
            payment("e1", "u", 7.0, PaymentStatus::Failed),
        ];

        let m = admin_metrics(&users, &events, &payments, now);
        assert_eq!(m.users, 3);
        assert_eq!(m.hosts, 1);
        assert_eq!(m.blocked_accounts, 1);
        assert_eq!(m.events, 1);
        assert_eq!(m.upcoming_events, 1);
        assert_eq!(m.revenue, 12.0);
    }
}

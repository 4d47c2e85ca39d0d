//! Role dashboards. Each one renders inside [`DashboardLayout`], which puts the
//! role-scoped sidebar next to the page content.

use api::dashboard::{AdminMetrics, HostMetrics, UserMetrics};
use api::SessionIdentity;
use dioxus::prelude::*;

use crate::{money, Navbar, Sidebar, StatCard};

#[component]
pub fn DashboardLayout(
    identity: SessionIdentity,
    active: String,
    title: String,
    children: Element,
) -> Element {
    // Without the backend profile only the token claims are known.
    let degraded = identity.profile().is_none();

    rsx! {
        Navbar { identity: Some(identity.clone()) }
        div {
            class: "dashboard",
            Sidebar { identity: identity.clone(), active: active.clone() }
            main {
                class: "content",
                h1 { "{title}" }
                if degraded {
                    p {
                        class: "notice",
                        "Profile details are temporarily unavailable. Some figures may be missing."
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn UserDashboard(identity: SessionIdentity, metrics: UserMetrics) -> Element {
    rsx! {
        DashboardLayout {
            identity: identity,
            active: "/user/dashboard".to_string(),
            title: "My Dashboard".to_string(),
            div {
                class: "stats",
                StatCard {
                    anchor: "bookings",
                    label: "Booked events",
                    value: metrics.booked_events.to_string(),
                }
                StatCard {
                    anchor: "upcoming",
                    label: "Upcoming",
                    value: metrics.upcoming_events.to_string(),
                }
                StatCard {
                    anchor: "payments",
                    label: "Total spent",
                    value: money(metrics.total_spent),
                }
                StatCard {
                    anchor: "pending",
                    label: "Pending payments",
                    value: metrics.pending_payments.to_string(),
                }
            }
        }
    }
}

#[component]
pub fn HostDashboard(identity: SessionIdentity, metrics: HostMetrics) -> Element {
    rsx! {
        DashboardLayout {
            identity: identity,
            active: "/host/dashboard".to_string(),
            title: "Host Dashboard".to_string(),
            div {
                class: "stats",
                StatCard {
                    anchor: "events",
                    label: "Hosted events",
                    value: metrics.hosted_events.to_string(),
                }
                StatCard {
                    anchor: "upcoming",
                    label: "Upcoming",
                    value: metrics.upcoming_events.to_string(),
                }
                StatCard {
                    anchor: "participants",
                    label: "Participants",
                    value: metrics.participants.to_string(),
                }
                StatCard {
                    anchor: "revenue",
                    label: "Revenue",
                    value: money(metrics.revenue),
                }
            }
        }
    }
}

#[component]
pub fn AdminDashboard(identity: SessionIdentity, metrics: AdminMetrics) -> Element {
    rsx! {
        DashboardLayout {
            identity: identity,
            active: "/admin/dashboard".to_string(),
            title: "Admin Dashboard".to_string(),
            div {
                class: "stats",
                StatCard {
                    anchor: "users",
                    label: "Accounts",
                    value: metrics.users.to_string(),
                }
                StatCard {
                    anchor: "hosts",
                    label: "Hosts",
                    value: metrics.hosts.to_string(),
                }
                StatCard {
                    anchor: "blocked",
                    label: "Blocked accounts",
                    value: metrics.blocked_accounts.to_string(),
                }
                StatCard {
                    anchor: "events",
                    label: "Events",
                    value: metrics.events.to_string(),
                }
                StatCard {
                    anchor: "upcoming",
                    label: "Upcoming",
                    value: metrics.upcoming_events.to_string(),
                }
                StatCard {
                    anchor: "revenue",
                    label: "Revenue",
                    value: money(metrics.revenue),
                }
            }
        }
    }
}

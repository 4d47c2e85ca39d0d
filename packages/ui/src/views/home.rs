//! Public landing page listing upcoming events.

use api::models::Event;
use api::SessionIdentity;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{money, Navbar};

#[component]
pub fn HomePage(
    #[props(!optional)] identity: Option<SessionIdentity>,
    events: Vec<Event>,
    now: DateTime<Utc>,
) -> Element {
    let upcoming: Vec<(String, String, String, String, String)> = events
        .iter()
        .filter(|e| e.is_upcoming(now))
        .map(|e| {
            (
                e.id.clone(),
                e.title.clone(),
                e.date.format("%b %e, %Y %H:%M").to_string(),
                e.location.clone().unwrap_or_else(|| "Online".to_string()),
                money(e.fee),
            )
        })
        .collect();

    rsx! {
        Navbar { identity: identity }
        main {
            class: "content",
            h1 { "Discover events" }
            if upcoming.is_empty() {
                p { class: "empty", "No upcoming events yet." }
            } else {
                ul {
                    class: "events",
                    for (id, title, when, location, fee) in upcoming {
                        li {
                            key: "{id}",
                            class: "event-card",
                            h2 { "{title}" }
                            p { "{when} · {location}" }
                            p { class: "fee", "{fee}" }
                        }
                    }
                }
            }
        }
    }
}

//! Event listings as served by `GET /events`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Open,
    Full,
    Cancelled,
    Completed,
}

/// A bookable event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub fee: f64,
    pub host_id: String,
    #[serde(default)]
    pub capacity: u32,
    pub status: EventStatus,
}

impl Event {
    /// Whether the event still lies ahead of `now` and has not been called off.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now && self.status != EventStatus::Cancelled
    }
}

//! Data models shared by the backend and the web frontend.

mod event;
mod payment;
mod user;

pub use event::{Event, EventStatus};
pub use payment::{Payment, PaymentStatus};
pub use user::{Role, UserProfile, UserStatus};

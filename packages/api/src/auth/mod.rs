//! Authentication: credential cookies, JWT handling, password hashing, per-request
//! session resolution and the role gate.

pub mod cookies;
mod gate;
mod password;
mod session;
mod token;

pub use gate::{authorize, GateDecision, RoleRequirement, LOGIN_PATH};
pub use password::{hash_password, verify_password};
pub use session::{SessionIdentity, SessionResolver, TokenIdentity};
pub use token::{Claims, TokenKeys};

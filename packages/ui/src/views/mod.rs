mod dashboard;
pub use dashboard::{AdminDashboard, DashboardLayout, HostDashboard, UserDashboard};

mod home;
pub use home::HomePage;

mod login;
pub use login::LoginPage;

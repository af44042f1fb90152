mod about_me;
mod admin_dashboard;
mod admin_login;
mod contact;
mod home;
mod not_found;
mod projects;

pub use about_me::AboutMe;
pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;

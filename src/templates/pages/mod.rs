pub mod analyze;
pub mod home;

pub use analyze::analyze_page;
pub use home::home_page;

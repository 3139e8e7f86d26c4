mod analyze;
mod extract;
mod followup;
mod health;

pub use analyze::analyze_handler;
pub use extract::extract_handler;
pub use followup::followup_handler;
pub use health::health_handler;

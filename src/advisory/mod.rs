//! Keyword advisory engine and the district alert filter.

pub mod engine;
pub mod filter;
pub mod rules;

pub use engine::{current_month, AdvisoryContext, AdvisoryEngine};
pub use filter::{alerts_for_district, alerts_for_district_in_month};
pub use rules::{default_rules, AdvisoryRule};

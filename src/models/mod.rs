pub mod chat;
pub mod fixtures;
pub mod profile;

pub use chat::{Author, ChatMessage};
pub use fixtures::{
    CropCalendar, FixtureSet, MarketPrice, MonthlyActivity, PestAlert, PestAlertsBundle, Severity,
    SoilData,
};
pub use profile::{Crop, District, FarmerProfile, RegistrationInput};

mod advisory;
mod app;
mod chat;
mod cli;
mod db;
mod fixtures;
mod models;
mod registration;
mod screens;
mod settings;

pub use advisory::{
    alerts_for_district, alerts_for_district_in_month, default_rules, AdvisoryContext,
    AdvisoryEngine, AdvisoryRule,
};
pub use app::{App, AppConfig};
pub use chat::{ChatSession, WELCOME_MESSAGE};
pub use db::{Database, StorageItem, PROFILE_KEY};
pub use fixtures::FixtureLoader;
pub use models::{
    Author, ChatMessage, Crop, CropCalendar, District, FarmerProfile, FixtureSet, MarketPrice,
    MonthlyActivity, PestAlert, PestAlertsBundle, RegistrationInput, Severity, SoilData,
};
pub use registration::{register, validate, MISSING_FIELDS_MESSAGE};
pub use screens::Route;
pub use settings::{FixtureSources, SettingsStore};

use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    // Initialize logging (reads RUST_LOG env var); stdout is reserved for screens.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    log::info!("farmassist starting up...");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cli::dispatch(cli))
}

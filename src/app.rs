use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::Month;
use log::debug;

use crate::{
    advisory::{current_month, AdvisoryContext, AdvisoryEngine},
    db::Database,
    fixtures::FixtureLoader,
    models::RegistrationInput,
    screens::{self, Route},
    settings::SettingsStore,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Overrides the directory stored in settings.
    pub fixtures_dir: Option<PathBuf>,
    /// Answer as if it were this month instead of the local calendar month.
    pub month: Option<Month>,
}

pub struct App {
    data_dir: PathBuf,
    db: Database,
    settings: SettingsStore,
    loader: FixtureLoader,
    engine: AdvisoryEngine,
    month: Option<Month>,
}

impl App {
    pub fn open(config: AppConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!("failed to create data directory {}", config.data_dir.display())
        })?;

        let db = Database::new(config.data_dir.join("farmassist.sqlite3"))?;
        let settings = SettingsStore::new(config.data_dir.join("settings.json"))?;

        let sources = settings.fixtures();
        let fixtures_dir = sources.resolve_dir(config.fixtures_dir.as_deref());
        debug!("Reading fixtures from {}", fixtures_dir.display());

        Ok(Self {
            data_dir: config.data_dir,
            db,
            settings,
            loader: FixtureLoader::new(fixtures_dir, sources),
            engine: AdvisoryEngine::default(),
            month: config.month,
        })
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn loader(&self) -> &FixtureLoader {
        &self.loader
    }

    pub fn engine(&self) -> &AdvisoryEngine {
        &self.engine
    }

    pub fn month(&self) -> Month {
        self.month.unwrap_or_else(current_month)
    }

    /// One question, one answer, with the same data the chat screen would load.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let (profile, fixtures) = tokio::join!(self.db.load_profile(), self.loader.load_all());
        let profile = profile?;
        let ctx = AdvisoryContext::new(fixtures.as_ref(), profile.as_ref(), self.month());
        Ok(self.engine.respond(question, &ctx))
    }

    /// Run screens starting at `start` until one returns [`Route::Exit`].
    /// `prefill` seeds the first registration form shown.
    pub async fn navigate<R: BufRead, W: Write>(
        &self,
        start: Route,
        prefill: RegistrationInput,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        let mut prefill = Some(prefill);
        let mut route = start;

        while route != Route::Exit {
            debug!("Navigating to {}", route.path());
            route = match route {
                Route::Register => {
                    let form = prefill.take().unwrap_or_default();
                    screens::register::show(self, form, input, out).await?
                }
                Route::Chat => screens::chat::show(self, input, out).await?,
                Route::Notifications => screens::notifications::show(self, input, out).await?,
                Route::Exit => Route::Exit,
            };
            writeln!(out)?;
        }

        Ok(())
    }
}

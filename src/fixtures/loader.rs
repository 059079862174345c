use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::error;
use serde::de::DeserializeOwned;

use crate::{
    models::{CropCalendar, FixtureSet, PestAlertsBundle, SoilData},
    settings::FixtureSources,
};

/// Reads the static fixture documents from one directory. Nothing is cached;
/// every screen mount reads fresh.
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    dir: PathBuf,
    sources: FixtureSources,
}

impl FixtureLoader {
    pub fn new(dir: PathBuf, sources: FixtureSources) -> Self {
        Self { dir, sources }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads all three fixtures concurrently. Any failure is logged and the
    /// whole set stays unset.
    pub async fn load_all(&self) -> Option<FixtureSet> {
        let (soil, calendar, alerts) = tokio::join!(
            read_json::<SoilData>(self.dir.join(&self.sources.soil_file)),
            read_json::<CropCalendar>(self.dir.join(&self.sources.calendar_file)),
            read_json::<PestAlertsBundle>(self.dir.join(&self.sources.alerts_file)),
        );

        match (soil, calendar, alerts) {
            (Ok(soil), Ok(calendar), Ok(alerts)) => Some(FixtureSet {
                soil,
                calendar,
                alerts,
            }),
            (soil, calendar, alerts) => {
                for err in [soil.err(), calendar.err(), alerts.err()]
                    .into_iter()
                    .flatten()
                {
                    error!("Error loading fixture data: {err:#}");
                }
                None
            }
        }
    }

    /// Only the pest/price document, for the notifications screen.
    pub async fn load_alerts(&self) -> Option<PestAlertsBundle> {
        match read_json(self.dir.join(&self.sources.alerts_file)).await {
            Ok(bundle) => Some(bundle),
            Err(err) => {
                error!("Error loading notifications: {err:#}");
                None
            }
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

use anyhow::{Context, Result};
use log::warn;

use crate::{db::connection::Database, models::FarmerProfile};

/// Fixed local-storage key holding the registered farmer.
pub const PROFILE_KEY: &str = "farmerData";

impl Database {
    /// Persist the profile verbatim, overwriting any earlier registration.
    pub async fn save_profile(&self, profile: &FarmerProfile) -> Result<()> {
        let blob = serde_json::to_string(profile).context("failed to serialize profile")?;
        self.set_item(PROFILE_KEY, blob).await
    }

    /// The registered profile, or `None` when nothing valid is stored.
    /// A corrupt blob is logged and treated as absent.
    pub async fn load_profile(&self) -> Result<Option<FarmerProfile>> {
        let Some(item) = self.get_item(PROFILE_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<FarmerProfile>(&item.value) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!("Ignoring invalid stored profile: {err}");
                Ok(None)
            }
        }
    }
}

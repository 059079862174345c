use anyhow::{bail, Context, Result};

use crate::{
    db::Database,
    models::{Crop, District, FarmerProfile, RegistrationInput},
};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields";

/// Required-field check, then district/crop must come from the fixed lists.
pub fn validate(input: &RegistrationInput) -> Result<FarmerProfile> {
    if input.name.trim().is_empty()
        || input.district.trim().is_empty()
        || input.crop.trim().is_empty()
    {
        bail!(MISSING_FIELDS_MESSAGE);
    }

    let district = District::parse(&input.district).context("Please select a valid district")?;
    let crop = Crop::parse(&input.crop).context("Please select a valid crop")?;

    Ok(FarmerProfile {
        name: input.name.clone(),
        district,
        crop,
    })
}

/// Validate and persist. Nothing is written when validation fails.
pub async fn register(db: &Database, input: &RegistrationInput) -> Result<FarmerProfile> {
    let profile = validate(input)?;
    db.save_profile(&profile)
        .await
        .context("failed to save registration")?;
    log::info!("Registered farmer profile for {}", profile.district);
    Ok(profile)
}

use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum District {
    Palakkad,
    Thrissur,
    Alappuzha,
    Kottayam,
}

impl District {
    pub const ALL: [District; 4] = [
        District::Palakkad,
        District::Thrissur,
        District::Alappuzha,
        District::Kottayam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::Palakkad => "Palakkad",
            District::Thrissur => "Thrissur",
            District::Alappuzha => "Alappuzha",
            District::Kottayam => "Kottayam",
        }
    }

    /// Accepts a district name in any letter case.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|district| district.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow!("unknown district '{value}'"))
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Crop {
    #[default]
    Paddy,
}

impl Crop {
    pub const ALL: [Crop; 1] = [Crop::Paddy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Paddy => "Paddy",
        }
    }

    /// Key used by the market price table in the alerts fixture.
    pub fn price_key(&self) -> &'static str {
        match self {
            Crop::Paddy => "paddy",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow!("unknown crop '{value}'"))
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single registered farmer. Stored verbatim as JSON under one key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmerProfile {
    pub name: String,
    pub district: District,
    pub crop: Crop,
}

impl FarmerProfile {
    /// "name • district • crop" line shown in screen headers.
    pub fn summary(&self) -> String {
        format!("{} • {} • {}", self.name, self.district, self.crop)
    }
}

/// Raw registration form values, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub district: String,
    pub crop: String,
}

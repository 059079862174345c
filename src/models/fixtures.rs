//! Shapes of the three static JSON fixtures.
//!
//! Every field that the screens read is optional or defaulted so a partially
//! filled fixture still deserializes; missing values surface as fallback text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilData {
    #[serde(default)]
    pub soil_analysis: SoilAnalysis,
    #[serde(default)]
    pub recommendations: SoilRecommendations,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilAnalysis {
    pub ph_level: Option<f64>,
    pub moisture_percent: Option<f64>,
    pub nitrogen: Option<String>,
    pub phosphorus: Option<String>,
    pub potassium: Option<String>,
    pub organic_carbon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilRecommendations {
    pub fertilizer: Option<String>,
    pub irrigation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CropCalendar {
    #[serde(default)]
    pub crop: Option<String>,
    /// Keyed by lowercase English month name.
    #[serde(default)]
    pub monthly_activities: BTreeMap<String, MonthlyActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyActivity {
    pub activity: String,
    pub details: String,
    pub fertilizer: String,
    pub irrigation: String,
}

/// Alert severity. Values outside the known three are kept as written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Medium,
    Low,
    Other(String),
}

impl Severity {
    /// Uppercase badge text, e.g. `HIGH`.
    pub fn label(&self) -> String {
        match self {
            Severity::High => "HIGH".to_string(),
            Severity::Medium => "MEDIUM".to_string(),
            Severity::Low => "LOW".to_string(),
            Severity::Other(raw) => raw.to_uppercase(),
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => "high".to_string(),
            Severity::Medium => "medium".to_string(),
            Severity::Low => "low".to_string(),
            Severity::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PestAlert {
    pub id: String,
    pub pest_name: String,
    #[serde(default)]
    pub affected_districts: Vec<String>,
    pub month: String,
    pub severity: Severity,
    pub symptoms: String,
    pub treatment: String,
    pub prevention: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub current_price: f64,
    #[serde(default)]
    pub districts: BTreeMap<String, f64>,
    pub trend: String,
    pub last_updated: String,
}

impl MarketPrice {
    /// District rate when the fixture lists one, otherwise the generic current price.
    pub fn price_for(&self, district: Option<&str>) -> f64 {
        district
            .and_then(|name| self.districts.get(name).copied())
            .unwrap_or(self.current_price)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PestAlertsBundle {
    #[serde(default)]
    pub current_alerts: Vec<PestAlert>,
    /// Keyed by lowercase crop name.
    #[serde(default)]
    pub market_prices: BTreeMap<String, MarketPrice>,
}

/// All three fixtures, present only when every one of them loaded.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub soil: SoilData,
    pub calendar: CropCalendar,
    pub alerts: PestAlertsBundle,
}

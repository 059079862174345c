use chrono::{Datelike, Local, Month};
use log::debug;

use crate::models::{Crop, FarmerProfile, FixtureSet};

use super::rules::{default_rules, AdvisoryRule, CAPABILITIES_RESPONSE};

/// Everything a rule may consult. Fixtures and profile are optional; rules
/// degrade to generic text when either is missing.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryContext<'a> {
    pub fixtures: Option<&'a FixtureSet>,
    pub profile: Option<&'a FarmerProfile>,
    pub month: Month,
}

impl<'a> AdvisoryContext<'a> {
    pub fn new(
        fixtures: Option<&'a FixtureSet>,
        profile: Option<&'a FarmerProfile>,
        month: Month,
    ) -> Self {
        Self {
            fixtures,
            profile,
            month,
        }
    }

    /// Lowercase month name as used by the calendar and alert fixtures.
    pub fn month_key(&self) -> String {
        self.month.name().to_lowercase()
    }

    pub fn district(&self) -> Option<&'a str> {
        self.profile.map(|profile| profile.district.as_str())
    }

    pub fn crop(&self) -> Crop {
        self.profile.map(|profile| profile.crop).unwrap_or_default()
    }
}

pub fn current_month() -> Month {
    // month() is always 1..=12
    Month::try_from(Local::now().month() as u8).unwrap_or(Month::January)
}

#[derive(Debug, Clone)]
pub struct AdvisoryEngine {
    rules: Vec<AdvisoryRule>,
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl AdvisoryEngine {
    pub fn new(rules: Vec<AdvisoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AdvisoryRule] {
        &self.rules
    }

    /// Answer one free-text query. The first rule that matches and produces
    /// text wins; the result is never empty.
    pub fn respond(&self, query: &str, ctx: &AdvisoryContext<'_>) -> String {
        let query = query.to_lowercase();

        self.rules
            .iter()
            .filter(|rule| (rule.matches)(&query))
            .find_map(|rule| {
                let response = (rule.respond)(ctx)?;
                debug!("Advisory rule '{}' answered", rule.name);
                Some(response)
            })
            .filter(|response| !response.is_empty())
            .unwrap_or_else(|| CAPABILITIES_RESPONSE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::advisory::rules::{
        IRRIGATION_RESPONSE, MONTHLY_FALLBACK_RESPONSE, NO_PEST_ALERTS_RESPONSE,
    };
    use crate::models::{
        District, MarketPrice, MonthlyActivity, PestAlert, PestAlertsBundle, Severity,
    };

    fn profile(district: District) -> FarmerProfile {
        FarmerProfile {
            name: "Suresh".into(),
            district,
            crop: Crop::Paddy,
        }
    }

    fn fixtures() -> FixtureSet {
        let mut set = FixtureSet::default();
        set.soil.soil_analysis.ph_level = Some(6.2);
        set.soil.recommendations.fertilizer = Some("Apply 50kg urea per acre".into());
        set.calendar.monthly_activities.insert(
            "june".into(),
            MonthlyActivity {
                activity: "Transplanting".into(),
                details: "Transplant 21-day old seedlings".into(),
                fertilizer: "Basal dose of NPK".into(),
                irrigation: "Keep 2cm standing water".into(),
            },
        );
        set.alerts = PestAlertsBundle {
            current_alerts: vec![
                PestAlert {
                    id: "bph".into(),
                    pest_name: "Brown Plant Hopper".into(),
                    affected_districts: vec!["Palakkad".into(), "Thrissur".into()],
                    month: "june".into(),
                    severity: Severity::High,
                    symptoms: "Hopper burn".into(),
                    treatment: "Drain the field".into(),
                    prevention: "Avoid excess nitrogen".into(),
                },
                PestAlert {
                    id: "blast".into(),
                    pest_name: "Blast".into(),
                    affected_districts: vec!["Kottayam".into()],
                    month: "july".into(),
                    severity: Severity::Medium,
                    symptoms: "Spindle lesions".into(),
                    treatment: "Tricyclazole".into(),
                    prevention: "Resistant varieties".into(),
                },
            ],
            market_prices: BTreeMap::from([(
                "paddy".to_string(),
                MarketPrice {
                    current_price: 28.0,
                    districts: BTreeMap::from([("Palakkad".to_string(), 29.5)]),
                    trend: "rising".into(),
                    last_updated: "2024-06-10".into(),
                },
            )]),
        };
        set
    }

    #[test]
    fn water_always_gets_irrigation_text() {
        let engine = AdvisoryEngine::default();
        let set = fixtures();
        let farmer = profile(District::Palakkad);

        for ctx in [
            AdvisoryContext::new(None, None, Month::June),
            AdvisoryContext::new(Some(&set), Some(&farmer), Month::June),
        ] {
            assert_eq!(engine.respond("How much WATER?", &ctx), IRRIGATION_RESPONSE);
            assert_eq!(engine.respond("irrigation schedule", &ctx), IRRIGATION_RESPONSE);
        }
    }

    #[test]
    fn earlier_rule_wins_over_later_match() {
        let engine = AdvisoryEngine::default();
        let set = fixtures();
        let farmer = profile(District::Palakkad);
        let ctx = AdvisoryContext::new(Some(&set), Some(&farmer), Month::June);

        assert_eq!(engine.respond("water and pest", &ctx), IRRIGATION_RESPONSE);
        assert!(engine
            .respond("pest damage, what price to sell?", &ctx)
            .starts_with("🐛 PEST ALERT"));
    }

    #[test]
    fn monthly_activity_uses_calendar() {
        let engine = AdvisoryEngine::default();
        let set = fixtures();
        let ctx = AdvisoryContext::new(Some(&set), None, Month::June);

        let response = engine.respond("What to do this month?", &ctx);
        assert_eq!(
            response,
            "📅 This month (june): Transplanting\n\n🔸 Transplant 21-day old seedlings\n🔸 Fertilizer: Basal dose of NPK\n🔸 Irrigation: Keep 2cm standing water"
        );

        let august = AdvisoryContext::new(Some(&set), None, Month::August);
        assert_eq!(
            engine.respond("what to do this month", &august),
            MONTHLY_FALLBACK_RESPONSE
        );
        let empty = AdvisoryContext::new(None, None, Month::June);
        assert_eq!(
            engine.respond("what to do this month", &empty),
            MONTHLY_FALLBACK_RESPONSE
        );
    }

    #[test]
    fn what_to_do_without_month_is_not_monthly_rule() {
        let engine = AdvisoryEngine::default();
        let ctx = AdvisoryContext::new(None, None, Month::June);
        assert_eq!(
            engine.respond("what to do today", &ctx),
            CAPABILITIES_RESPONSE
        );
    }

    #[test]
    fn pest_alert_requires_district_and_month() {
        let engine = AdvisoryEngine::default();
        let set = fixtures();

        let palakkad = profile(District::Palakkad);
        let ctx = AdvisoryContext::new(Some(&set), Some(&palakkad), Month::June);
        assert_eq!(
            engine.respond("any insect trouble?", &ctx),
            "🐛 PEST ALERT: Brown Plant Hopper detected in Palakkad!\n\n🔸 Symptoms: Hopper burn\n🔸 Treatment: Drain the field\n🔸 Prevention: Avoid excess nitrogen"
        );

        let wrong_month = AdvisoryContext::new(Some(&set), Some(&palakkad), Month::July);
        assert_eq!(engine.respond("disease", &wrong_month), NO_PEST_ALERTS_RESPONSE);

        let alappuzha = profile(District::Alappuzha);
        let other_district = AdvisoryContext::new(Some(&set), Some(&alappuzha), Month::June);
        assert_eq!(engine.respond("pest", &other_district), NO_PEST_ALERTS_RESPONSE);

        let anonymous = AdvisoryContext::new(Some(&set), None, Month::June);
        assert_eq!(engine.respond("pest", &anonymous), NO_PEST_ALERTS_RESPONSE);
    }

    #[test]
    fn market_price_prefers_district_rate() {
        let engine = AdvisoryEngine::default();
        let set = fixtures();

        let palakkad = profile(District::Palakkad);
        let ctx = AdvisoryContext::new(Some(&set), Some(&palakkad), Month::June);
        assert_eq!(
            engine.respond("market price?", &ctx),
            "💰 Current paddy prices:\n🔸 Your district (Palakkad): ₹29.5/kg\n🔸 Market trend: rising\n🔸 Last updated: 2024-06-10"
        );

        let kottayam = profile(District::Kottayam);
        let ctx = AdvisoryContext::new(Some(&set), Some(&kottayam), Month::June);
        assert!(engine
            .respond("when should I sell", &ctx)
            .contains("Your district (Kottayam): ₹28/kg"));
    }

    #[test]
    fn missing_price_data_falls_through_to_later_rules() {
        let engine = AdvisoryEngine::default();
        let mut set = fixtures();
        set.alerts.market_prices.clear();
        let farmer = profile(District::Palakkad);
        let ctx = AdvisoryContext::new(Some(&set), Some(&farmer), Month::June);

        assert_eq!(engine.respond("price today", &ctx), CAPABILITIES_RESPONSE);
        assert!(engine
            .respond("price of fertilizer", &ctx)
            .starts_with("🌱 Based on soil analysis"));

        let unloaded = AdvisoryContext::new(None, Some(&farmer), Month::June);
        assert_eq!(engine.respond("market", &unloaded), CAPABILITIES_RESPONSE);
    }

    #[test]
    fn fertilizer_uses_soil_fields() {
        let engine = AdvisoryEngine::default();
        let set = fixtures();
        let ctx = AdvisoryContext::new(Some(&set), None, Month::June);

        assert_eq!(
            engine.respond("Nutrition tips", &ctx),
            "🌱 Based on soil analysis:\n🔸 Apply 50kg urea per acre\n🔸 Soil pH: 6.2 (Good for paddy)\n🔸 Apply fertilizers in split doses for better absorption."
        );
    }

    #[test]
    fn nothing_loaded_never_yields_empty_text() {
        let engine = AdvisoryEngine::default();
        let ctx = AdvisoryContext::new(None, None, Month::March);

        for query in [
            "",
            "hello",
            "water",
            "what to do this month",
            "pest",
            "price",
            "fertilizer",
            "ചോദ്യം",
        ] {
            assert!(!engine.respond(query, &ctx).is_empty(), "empty for {query:?}");
        }
    }

    #[test]
    fn empty_rule_list_still_answers() {
        let engine = AdvisoryEngine::new(Vec::new());
        let ctx = AdvisoryContext::new(None, None, Month::March);
        assert_eq!(engine.respond("anything", &ctx), CAPABILITIES_RESPONSE);
    }

    #[test]
    fn default_rule_order_is_fixed() {
        let names: Vec<_> = AdvisoryEngine::default()
            .rules()
            .iter()
            .map(|rule| rule.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "irrigation",
                "monthly-activity",
                "pest-alert",
                "market-price",
                "fertilizer",
                "capabilities"
            ]
        );
    }
}

//! Keyword rules for the chat assistant, evaluated top to bottom.
//!
//! A rule fires when its predicate matches the lowercased query. Its builder
//! may still decline (return `None`) when the data it needs is missing, in
//! which case evaluation continues with the next rule.

use super::{engine::AdvisoryContext, filter::alerts_for_district_in_month};

pub const IRRIGATION_RESPONSE: &str = "💧 Based on current soil moisture (45%), your field has good water levels. Check weather tomorrow and water if no rain is expected. Maintain 2-3cm water level for paddy.";

pub const MONTHLY_FALLBACK_RESPONSE: &str = "📅 For this month, continue regular monitoring of your crops and maintain proper irrigation.";

pub const NO_PEST_ALERTS_RESPONSE: &str = "🐛 No major pest alerts for your district currently. Keep monitoring your crops regularly.";

pub const CAPABILITIES_RESPONSE: &str = "🤔 I can help you with:\n🔸 Irrigation advice\n🔸 Monthly farming activities\n🔸 Pest and disease management\n🔸 Market prices\n🔸 Fertilizer recommendations\n\nTry asking \"what to do this month\" or \"irrigation advice\".";

pub type Predicate = fn(&str) -> bool;
pub type ResponseBuilder = fn(&AdvisoryContext<'_>) -> Option<String>;

#[derive(Clone, Copy)]
pub struct AdvisoryRule {
    pub name: &'static str,
    pub matches: Predicate,
    pub respond: ResponseBuilder,
}

impl std::fmt::Debug for AdvisoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryRule").field("name", &self.name).finish()
    }
}

/// The fixed priority order: irrigation, monthly plan, pests, prices,
/// fertilizer, then the capability menu.
pub fn default_rules() -> Vec<AdvisoryRule> {
    vec![
        AdvisoryRule {
            name: "irrigation",
            matches: |q| contains_any(q, &["irrigation", "water"]),
            respond: |_| Some(IRRIGATION_RESPONSE.to_string()),
        },
        AdvisoryRule {
            name: "monthly-activity",
            matches: |q| q.contains("what to do") && q.contains("month"),
            respond: monthly_activity,
        },
        AdvisoryRule {
            name: "pest-alert",
            matches: |q| contains_any(q, &["pest", "disease", "insect"]),
            respond: pest_alert,
        },
        AdvisoryRule {
            name: "market-price",
            matches: |q| contains_any(q, &["price", "market", "sell"]),
            respond: market_price,
        },
        AdvisoryRule {
            name: "fertilizer",
            matches: |q| contains_any(q, &["fertilizer", "nutrition"]),
            respond: fertilizer,
        },
        AdvisoryRule {
            name: "capabilities",
            matches: |_| true,
            respond: |_| Some(CAPABILITIES_RESPONSE.to_string()),
        },
    ]
}

fn contains_any(query: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| query.contains(needle))
}

fn monthly_activity(ctx: &AdvisoryContext<'_>) -> Option<String> {
    let month = ctx.month_key();
    let activity = ctx
        .fixtures
        .and_then(|fixtures| fixtures.calendar.monthly_activities.get(&month));

    Some(match activity {
        Some(record) => format!(
            "📅 This month ({month}): {}\n\n🔸 {}\n🔸 Fertilizer: {}\n🔸 Irrigation: {}",
            record.activity, record.details, record.fertilizer, record.irrigation
        ),
        None => MONTHLY_FALLBACK_RESPONSE.to_string(),
    })
}

fn pest_alert(ctx: &AdvisoryContext<'_>) -> Option<String> {
    let district = ctx.district();
    let first_alert = match (ctx.fixtures, district) {
        (Some(fixtures), Some(district)) => {
            alerts_for_district_in_month(&fixtures.alerts, district, &ctx.month_key())
                .into_iter()
                .next()
        }
        _ => None,
    };

    Some(match (first_alert, district) {
        (Some(alert), Some(district)) => format!(
            "🐛 PEST ALERT: {} detected in {district}!\n\n🔸 Symptoms: {}\n🔸 Treatment: {}\n🔸 Prevention: {}",
            alert.pest_name, alert.symptoms, alert.treatment, alert.prevention
        ),
        _ => NO_PEST_ALERTS_RESPONSE.to_string(),
    })
}

fn market_price(ctx: &AdvisoryContext<'_>) -> Option<String> {
    let crop = ctx.crop();
    let price = ctx.fixtures?.alerts.market_prices.get(crop.price_key())?;
    let district = ctx.district();

    Some(format!(
        "💰 Current {} prices:\n🔸 Your district ({}): ₹{}/kg\n🔸 Market trend: {}\n🔸 Last updated: {}",
        crop.price_key(),
        district.unwrap_or("not registered"),
        price.price_for(district),
        price.trend,
        price.last_updated
    ))
}

fn fertilizer(ctx: &AdvisoryContext<'_>) -> Option<String> {
    let soil = ctx.fixtures.map(|fixtures| &fixtures.soil);
    let recommendation = soil
        .and_then(|soil| soil.recommendations.fertilizer.as_deref())
        .unwrap_or("No soil-based recommendation available yet.");
    let ph = soil
        .and_then(|soil| soil.soil_analysis.ph_level)
        .map(|ph| ph.to_string())
        .unwrap_or_else(|| "not measured".to_string());

    Some(format!(
        "🌱 Based on soil analysis:\n🔸 {recommendation}\n🔸 Soil pH: {ph} (Good for {})\n🔸 Apply fertilizers in split doses for better absorption.",
        ctx.crop().price_key()
    ))
}

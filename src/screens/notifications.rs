use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::{
    advisory::alerts_for_district,
    app::App,
    models::{FarmerProfile, PestAlertsBundle},
};

use super::{prompt, Route};

pub const GENERAL_ADVISORY: &str = "🌤️ Weather is good for field activities. Monitor your crops daily and maintain proper irrigation. Keep checking for pest symptoms and apply recommended treatments if needed.";

pub async fn show<R: BufRead, W: Write>(app: &App, input: &mut R, out: &mut W) -> Result<Route> {
    let (profile, bundle) = tokio::join!(app.db().load_profile(), app.loader().load_alerts());
    let profile = profile?;

    render(out, profile.as_ref(), bundle.as_ref())?;

    let answer = prompt(input, out, "Go to [chat] or [home], Enter to exit: ")?;
    Ok(match answer.as_deref().map(str::trim) {
        Some("chat" | "/chat") => Route::Chat,
        Some("home" | "/") => Route::Register,
        _ => Route::Exit,
    })
}

/// Write the whole notifications page. Without a profile no district
/// alerts are shown and the generic current price is used.
pub fn render<W: Write>(
    out: &mut W,
    profile: Option<&FarmerProfile>,
    bundle: Option<&PestAlertsBundle>,
) -> io::Result<()> {
    writeln!(out, "🔔 Notifications")?;
    if let Some(profile) = profile {
        writeln!(out, "{} • {}", profile.name, profile.district)?;
    }
    writeln!(out)?;

    let crop = profile.map(|p| p.crop).unwrap_or_default();
    let district = profile.map(|p| p.district.as_str());

    if let Some(price) = bundle.and_then(|b| b.market_prices.get(crop.price_key())) {
        writeln!(out, "💰 Market Prices (latest {} rates)", crop.price_key())?;
        writeln!(out, "   {} Price Today: ₹{}/kg", crop, price.price_for(district))?;
        writeln!(out, "   Trend: {}   Updated: {}", price.trend, price.last_updated)?;
        writeln!(out)?;
    }

    writeln!(out, "🐛 Pest Alerts")?;
    let alerts = match (bundle, district) {
        (Some(bundle), Some(district)) => alerts_for_district(bundle, district),
        _ => Vec::new(),
    };
    if alerts.is_empty() {
        writeln!(out, "   ✅ No Pest Alerts")?;
        writeln!(
            out,
            "   No pest issues reported in your district currently. Keep monitoring your crops!"
        )?;
    }
    for alert in alerts {
        writeln!(out, "   🚨 {} [{}]", alert.pest_name, alert.severity.label())?;
        writeln!(out, "      Affecting: {}", alert.affected_districts.join(", "))?;
        writeln!(out, "      🔍 Symptoms: {}", alert.symptoms)?;
        writeln!(out, "      💊 Treatment: {}", alert.treatment)?;
        writeln!(out, "      🛡️ Prevention: {}", alert.prevention)?;
    }
    writeln!(out)?;

    writeln!(out, "📋 General Advisory")?;
    writeln!(out, "   {GENERAL_ADVISORY}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{Crop, District, MarketPrice, PestAlert, Severity};

    fn page(profile: Option<&FarmerProfile>, bundle: Option<&PestAlertsBundle>) -> String {
        let mut out = Vec::new();
        render(&mut out, profile, bundle).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn bundle() -> PestAlertsBundle {
        PestAlertsBundle {
            current_alerts: vec![
                PestAlert {
                    id: "1".into(),
                    pest_name: "Stem Borer".into(),
                    affected_districts: vec!["Palakkad".into(), "Thrissur".into()],
                    month: "august".into(),
                    severity: Severity::High,
                    symptoms: "Dead hearts".into(),
                    treatment: "Cartap hydrochloride".into(),
                    prevention: "Light traps".into(),
                },
                PestAlert {
                    id: "2".into(),
                    pest_name: "Leaf Folder".into(),
                    affected_districts: vec!["Kottayam".into()],
                    month: "september".into(),
                    severity: Severity::Low,
                    symptoms: "Folded leaves".into(),
                    treatment: "Neem oil".into(),
                    prevention: "Balanced nitrogen".into(),
                },
            ],
            market_prices: BTreeMap::from([(
                "paddy".to_string(),
                MarketPrice {
                    current_price: 28.0,
                    districts: BTreeMap::from([("Thrissur".to_string(), 28.75)]),
                    trend: "stable".into(),
                    last_updated: "2024-08-01".into(),
                },
            )]),
        }
    }

    fn farmer(district: District) -> FarmerProfile {
        FarmerProfile {
            name: "Gopi".into(),
            district,
            crop: Crop::Paddy,
        }
    }

    #[test]
    fn shows_district_alerts_of_any_month_and_district_price() {
        let bundle = bundle();
        let text = page(Some(&farmer(District::Thrissur)), Some(&bundle));

        assert!(text.contains("Gopi • Thrissur"));
        assert!(text.contains("Paddy Price Today: ₹28.75/kg"));
        assert!(text.contains("🚨 Stem Borer [HIGH]"));
        assert!(text.contains("Affecting: Palakkad, Thrissur"));
        assert!(!text.contains("Leaf Folder"));
        assert!(text.contains(GENERAL_ADVISORY));
    }

    #[test]
    fn no_profile_means_no_alerts_and_generic_price() {
        let bundle = bundle();
        let text = page(None, Some(&bundle));

        assert!(text.contains("Paddy Price Today: ₹28/kg"));
        assert!(text.contains("No Pest Alerts"));
        assert!(!text.contains("🚨"));
    }

    #[test]
    fn unlisted_severity_is_shown_as_written() {
        let mut bundle = bundle();
        bundle.current_alerts[0].severity = Severity::Other("critical".into());

        let text = page(Some(&farmer(District::Palakkad)), Some(&bundle));
        assert!(text.contains("🚨 Stem Borer [CRITICAL]"));
    }

    #[test]
    fn missing_bundle_omits_prices() {
        let text = page(Some(&farmer(District::Palakkad)), None);
        assert!(!text.contains("Market Prices"));
        assert!(text.contains("No Pest Alerts"));
    }
}

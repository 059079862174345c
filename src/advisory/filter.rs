use crate::models::{PestAlert, PestAlertsBundle};

/// Alerts whose affected districts include `district`, in bundle order.
pub fn alerts_for_district<'a>(bundle: &'a PestAlertsBundle, district: &str) -> Vec<&'a PestAlert> {
    bundle
        .current_alerts
        .iter()
        .filter(|alert| alert.affected_districts.iter().any(|d| d == district))
        .collect()
}

/// Same as [`alerts_for_district`], narrowed to alerts raised for `month`
/// (lowercase English month name).
pub fn alerts_for_district_in_month<'a>(
    bundle: &'a PestAlertsBundle,
    district: &str,
    month: &str,
) -> Vec<&'a PestAlert> {
    alerts_for_district(bundle, district)
        .into_iter()
        .filter(|alert| alert.month == month)
        .collect()
}

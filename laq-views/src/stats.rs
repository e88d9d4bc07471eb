use laq_core::pollutant::Pollutant;
use laq_core::reading::SiteReading;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default AQI value above which a reading counts as poor air quality.
pub const POOR_AIR_THRESHOLD: f64 = 100.0;

/// Exceedance counts for one pollutant over a filtered set of readings.
///
/// Computed fresh per selection and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceedanceStat {
    pub pollutant: Pollutant,
    /// Readings with AQI strictly above the threshold.
    pub poor_count: usize,
    /// Size of the filtered set.
    pub total_count: usize,
}

/// Count threshold exceedances per pollutant, one stat per entry of the
/// filtered map in its (display) order.
///
/// An empty filtered set still emits a zero stat; no division happens
/// here, so there is no failure mode.
pub fn summarize(
    filtered: &BTreeMap<Pollutant, Vec<SiteReading>>,
    threshold: f64,
) -> Vec<ExceedanceStat> {
    filtered
        .iter()
        .map(|(&pollutant, readings)| ExceedanceStat {
            pollutant,
            poor_count: readings.iter().filter(|r| r.aqi > threshold).count(),
            total_count: readings.len(),
        })
        .collect()
}

//! View model structs and assembly for the rendering layer.
//!
//! All structs derive `Serialize` so payloads can be handed to a JS/JSON
//! map or chart renderer. Nothing here draws anything; these are the exact
//! shapes the presentation layer consumes.

use crate::aggregate::DailyAverage;
use crate::stats::ExceedanceStat;
use laq_core::pollutant::Pollutant;
use laq_core::reading::SiteReading;
use serde::Serialize;
use std::collections::BTreeMap;

/// One marker on the pollution map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: f64,
    /// Hover text: site name, newline, AQI to one decimal place.
    pub hover_text: String,
}

impl From<&SiteReading> for MapPoint {
    fn from(reading: &SiteReading) -> MapPoint {
        MapPoint {
            site_name: reading.site_name.clone(),
            latitude: reading.latitude,
            longitude: reading.longitude,
            aqi: reading.aqi,
            hover_text: format!("{}\nAQI: {:.1}", reading.site_name, reading.aqi),
        }
    }
}

/// One pollutant's map markers. Layer position in the payload fixes the
/// rendered z-order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub pollutant: Pollutant,
    pub points: Vec<MapPoint>,
}

/// A single (date, value) pair for a trend line, date as "YYYY-MM-DD".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub value: f64,
}

/// One pollutant's trend line with its chart title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub pollutant: Pollutant,
    pub title: String,
    pub points: Vec<TrendPoint>,
}

/// Everything the rendering layer needs for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPayload {
    pub map_layers: Vec<MapLayer>,
    pub trends: Vec<TrendSeries>,
    pub statistics: Vec<String>,
}

/// Package filtered readings as map layers, ozone before PM2.5 so the
/// z-order is deterministic across calls.
pub fn assemble_map_view(filtered: &BTreeMap<Pollutant, Vec<SiteReading>>) -> Vec<MapLayer> {
    filtered
        .iter()
        .map(|(&pollutant, readings)| MapLayer {
            pollutant,
            points: readings.iter().map(MapPoint::from).collect(),
        })
        .collect()
}

/// Package daily averages as trend series for the selected pollutants,
/// each strictly ordered by ascending date.
pub fn assemble_trend_view(
    daily: &BTreeMap<Pollutant, Vec<DailyAverage>>,
    selected: &[Pollutant],
) -> Vec<TrendSeries> {
    daily
        .iter()
        .filter(|(pollutant, _)| selected.contains(pollutant))
        .map(|(&pollutant, averages)| TrendSeries {
            pollutant,
            title: pollutant.trend_title().to_string(),
            points: averages
                .iter()
                .map(|average| TrendPoint {
                    date: average.date.format("%Y-%m-%d").to_string(),
                    value: average.value,
                })
                .collect(),
        })
        .collect()
}

/// Render exceedance stats as human-readable summary lines.
pub fn assemble_statistics_view(stats: &[ExceedanceStat], threshold: f64) -> Vec<String> {
    stats
        .iter()
        .map(|stat| {
            format!(
                "{}: {} out of {} sites show poor air quality (AQI > {})",
                stat.pollutant.label().to_uppercase(),
                stat.poor_count,
                stat.total_count,
                threshold
            )
        })
        .collect()
}

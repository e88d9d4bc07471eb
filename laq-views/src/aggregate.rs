use chrono::NaiveDate;
use laq_core::error::AirQualityError;
use laq_core::reading::SiteReading;
use laq_core::series::PollutantSeries;
use serde::Serialize;
use std::collections::BTreeMap;

/// County-wide mean AQI for a single date, averaged across all sites
/// reporting that day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub value: f64,
}

/// Group a series by date and average the AQI across sites.
///
/// Output is ascending by date with no duplicate dates. A date with zero
/// readings never appears in the grouping, so no division by zero can
/// arise; an empty series yields an empty sequence.
pub fn daily_averages(series: &PollutantSeries) -> Vec<DailyAverage> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for reading in series.readings() {
        let entry = by_date.entry(reading.date).or_insert((0.0, 0));
        entry.0 += reading.aqi;
        entry.1 += 1;
    }
    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailyAverage {
            date,
            value: sum / count as f64,
        })
        .collect()
}

/// All readings taken on the most recent date in the series.
///
/// Used when no explicit month is selected. An empty series is an error
/// here: an empty map cannot be silently substituted without misleading
/// the user.
pub fn latest_snapshot(series: &PollutantSeries) -> Result<Vec<SiteReading>, AirQualityError> {
    let Some(max_date) = series.max_date() else {
        return Err(AirQualityError::EmptySeries(series.pollutant()));
    };
    Ok(series
        .readings()
        .iter()
        .filter(|reading| reading.date == max_date)
        .cloned()
        .collect())
}

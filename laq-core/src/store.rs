use crate::error::AirQualityError;
use crate::month::YearMonth;
use crate::pollutant::{Pollutant, ALL_POLLUTANTS};
use crate::reading::parse_readings_csv;
use crate::series::PollutantSeries;
use std::collections::{BTreeMap, BTreeSet};

/// Embedded sample ozone readings for Los Angeles County monitoring sites.
pub static LA_OZONE_CSV: &str = include_str!("../../fixtures/la_ozone.csv");

/// Embedded sample PM2.5 readings for Los Angeles County monitoring sites.
pub static LA_PM25_CSV: &str = include_str!("../../fixtures/la_pm25.csv");

/// The loaded-once measurement store: one series per pollutant.
///
/// Loading either fully succeeds or fails on the first malformed record;
/// no partially loaded store is ever exposed. Once constructed, the store
/// is read-only and safe to share across recomputation passes.
#[derive(Debug, Clone)]
pub struct MeasurementStore {
    ozone: PollutantSeries,
    pm25: PollutantSeries,
}

impl MeasurementStore {
    /// Parse both pollutant sources into an immutable store.
    ///
    /// Expected format per source (with headers):
    /// `Date,Site Name,Site Latitude,Site Longitude,Daily AQI Value`,
    /// dates in month/day/year form.
    pub fn load(ozone_csv: &str, pm25_csv: &str) -> Result<MeasurementStore, AirQualityError> {
        let ozone = load_series(Pollutant::Ozone, ozone_csv)?;
        let pm25 = load_series(Pollutant::Pm25, pm25_csv)?;
        Ok(MeasurementStore { ozone, pm25 })
    }

    /// Load the bundled Los Angeles sample datasets.
    pub fn load_samples() -> Result<MeasurementStore, AirQualityError> {
        MeasurementStore::load(LA_OZONE_CSV, LA_PM25_CSV)
    }

    pub fn series(&self, pollutant: Pollutant) -> &PollutantSeries {
        match pollutant {
            Pollutant::Ozone => &self.ozone,
            Pollutant::Pm25 => &self.pm25,
        }
    }

    /// All loaded series keyed by pollutant, iterating in display order.
    pub fn available(&self) -> BTreeMap<Pollutant, &PollutantSeries> {
        ALL_POLLUTANTS
            .iter()
            .map(|&pollutant| (pollutant, self.series(pollutant)))
            .collect()
    }

    /// Distinct months covered by either series, ascending.
    pub fn months(&self) -> Vec<YearMonth> {
        let months: BTreeSet<YearMonth> = ALL_POLLUTANTS
            .iter()
            .flat_map(|&pollutant| self.series(pollutant).months())
            .collect();
        months.into_iter().collect()
    }

    /// The most recent month with data in any series.
    pub fn latest_month(&self) -> Option<YearMonth> {
        self.months().last().copied()
    }
}

fn load_series(pollutant: Pollutant, csv_data: &str) -> Result<PollutantSeries, AirQualityError> {
    let readings = parse_readings_csv(csv_data).map_err(|e| match e {
        AirQualityError::MalformedInput(reason) => {
            AirQualityError::MalformedInput(format!("{pollutant}: {reason}"))
        }
        other => other,
    })?;
    let series = PollutantSeries::from_readings(pollutant, readings);
    log::info!("store: loaded {} {} readings", series.len(), pollutant);
    Ok(series)
}

//! The dashboard computation core behind the presentation layer's event
//! handler.
//!
//! A [`Dashboard`] wraps a loaded-once [`MeasurementStore`] plus the
//! daily-average cache derived from it, and answers each user selection
//! with one complete, side-effect-free recomputation pass: filter →
//! summarize → assemble. Both store and cache are read-only after
//! construction, so a dashboard can be shared across concurrent passes
//! without locking.

use crate::aggregate::{self, DailyAverage};
use crate::filter::{self, SelectionState};
use crate::stats::{self, POOR_AIR_THRESHOLD};
use crate::views::{self, ViewPayload};
use laq_core::error::AirQualityError;
use laq_core::month::YearMonth;
use laq_core::pollutant::{Pollutant, ALL_POLLUTANTS};
use laq_core::reading::SiteReading;
use laq_core::store::MeasurementStore;
use std::collections::BTreeMap;

/// Configuration for the computation core, passed in explicitly rather
/// than read from process-wide globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardConfig {
    /// AQI value above which a reading counts as poor air quality.
    pub poor_air_threshold: f64,
    /// Month preselected on first render; `None` means the latest month
    /// with data.
    pub default_period: Option<YearMonth>,
}

impl Default for DashboardConfig {
    fn default() -> DashboardConfig {
        DashboardConfig {
            poor_air_threshold: POOR_AIR_THRESHOLD,
            default_period: None,
        }
    }
}

/// A loaded store plus its derived caches, queried per selection event.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: MeasurementStore,
    daily: BTreeMap<Pollutant, Vec<DailyAverage>>,
    config: DashboardConfig,
}

impl Dashboard {
    /// Wrap a loaded store, computing the per-pollutant daily-average
    /// cache once.
    pub fn new(store: MeasurementStore, config: DashboardConfig) -> Dashboard {
        let daily = ALL_POLLUTANTS
            .iter()
            .map(|&pollutant| (pollutant, aggregate::daily_averages(store.series(pollutant))))
            .collect();
        Dashboard {
            store,
            daily,
            config,
        }
    }

    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Cached daily averages for one pollutant.
    pub fn daily_averages(&self, pollutant: Pollutant) -> &[DailyAverage] {
        self.daily
            .get(&pollutant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The selection used on first render: every pollutant, over the
    /// configured default month or the latest month with data.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState {
            pollutants: ALL_POLLUTANTS.to_vec(),
            period: self.config.default_period.or_else(|| self.store.latest_month()),
        }
    }

    /// Recompute the full view payload for a selection.
    ///
    /// Narrows to the selected pollutants, takes the month subset (or the
    /// latest-day snapshot when no month is chosen), counts exceedances,
    /// and packages the map, trend, and statistics views. Trend lines
    /// always span the full loaded range; the month selection narrows
    /// only the map and the statistics. Every derived structure is
    /// freshly allocated, so identical selections yield equal payloads.
    pub fn on_selection_changed(
        &self,
        selection: &SelectionState,
    ) -> Result<ViewPayload, AirQualityError> {
        let available = self.store.available();
        let selected_series = filter::filter_by_pollutants(&available, &selection.pollutants)?;

        let mut filtered: BTreeMap<Pollutant, Vec<SiteReading>> = BTreeMap::new();
        for (&pollutant, series) in &selected_series {
            let readings = match selection.period {
                Some(period) => filter::filter_by_month(series, period),
                None => aggregate::latest_snapshot(series)?,
            };
            filtered.insert(pollutant, readings);
        }

        let exceedance = stats::summarize(&filtered, self.config.poor_air_threshold);
        let payload = ViewPayload {
            map_layers: views::assemble_map_view(&filtered),
            trends: views::assemble_trend_view(&self.daily, &selection.pollutants),
            statistics: views::assemble_statistics_view(
                &exceedance,
                self.config.poor_air_threshold,
            ),
        };
        log::debug!(
            "dashboard: recomputed views for {} pollutant(s), period {:?}",
            selection.pollutants.len(),
            selection.period
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dashboard, DashboardConfig};
    use crate::filter::SelectionState;
    use laq_core::error::AirQualityError;
    use laq_core::month::YearMonth;
    use laq_core::pollutant::{Pollutant, ALL_POLLUTANTS};
    use laq_core::store::MeasurementStore;

    const OZONE_CSV: &str = "\
Date,Site Name,Site Latitude,Site Longitude,Daily AQI Value
01/05/2024,SiteA,34.0,-118.0,120
01/05/2024,SiteB,34.1,-118.1,80
02/09/2024,SiteA,34.0,-118.0,60
";

    const PM25_CSV: &str = "\
Date,Site Name,Site Latitude,Site Longitude,Daily AQI Value
01/05/2024,SiteA,34.0,-118.0,110
02/09/2024,SiteA,34.0,-118.0,90
";

    fn dashboard() -> Dashboard {
        let store = MeasurementStore::load(OZONE_CSV, PM25_CSV).unwrap();
        Dashboard::new(store, DashboardConfig::default())
    }

    #[test]
    fn test_default_selection_uses_latest_month() {
        let dashboard = dashboard();
        let selection = dashboard.default_selection();
        assert_eq!(selection.pollutants, ALL_POLLUTANTS.to_vec());
        assert_eq!(selection.period, YearMonth::new(2024, 2));
    }

    #[test]
    fn test_month_selection_payload() {
        let dashboard = dashboard();
        let selection = SelectionState {
            pollutants: vec![Pollutant::Ozone],
            period: YearMonth::new(2024, 1),
        };
        let payload = dashboard.on_selection_changed(&selection).unwrap();

        assert_eq!(payload.map_layers.len(), 1);
        assert_eq!(payload.map_layers[0].pollutant, Pollutant::Ozone);
        assert_eq!(payload.map_layers[0].points.len(), 2);

        // Trend lines span the full range regardless of the month.
        assert_eq!(payload.trends.len(), 1);
        assert_eq!(payload.trends[0].points.len(), 2);
        assert_eq!(payload.trends[0].points[0].value, 100.0);
        assert_eq!(dashboard.daily_averages(Pollutant::Ozone).len(), 2);

        assert_eq!(
            payload.statistics,
            vec!["OZONE: 1 out of 2 sites show poor air quality (AQI > 100)"]
        );
    }

    #[test]
    fn test_no_period_falls_back_to_latest_snapshot() {
        let dashboard = dashboard();
        let selection = SelectionState {
            pollutants: vec![Pollutant::Pm25],
            period: None,
        };
        let payload = dashboard.on_selection_changed(&selection).unwrap();
        assert_eq!(payload.map_layers[0].points.len(), 1);
        assert_eq!(payload.map_layers[0].points[0].hover_text, "SiteA\nAQI: 90.0");
    }

    #[test]
    fn test_empty_month_renders_as_no_data() {
        let dashboard = dashboard();
        let selection = SelectionState {
            pollutants: vec![Pollutant::Ozone, Pollutant::Pm25],
            period: YearMonth::new(2024, 7),
        };
        let payload = dashboard.on_selection_changed(&selection).unwrap();
        assert!(payload.map_layers.iter().all(|layer| layer.points.is_empty()));
        assert_eq!(
            payload.statistics,
            vec![
                "OZONE: 0 out of 0 sites show poor air quality (AQI > 100)",
                "PM2.5: 0 out of 0 sites show poor air quality (AQI > 100)",
            ]
        );
    }

    #[test]
    fn test_empty_selection_yields_empty_payload() {
        let dashboard = dashboard();
        let selection = SelectionState {
            pollutants: Vec::new(),
            period: YearMonth::new(2024, 1),
        };
        let payload = dashboard.on_selection_changed(&selection).unwrap();
        assert!(payload.map_layers.is_empty());
        assert!(payload.trends.is_empty());
        assert!(payload.statistics.is_empty());
    }

    #[test]
    fn test_snapshot_over_empty_series_is_error() {
        let empty_pm25 = "Date,Site Name,Site Latitude,Site Longitude,Daily AQI Value\n";
        let store = MeasurementStore::load(OZONE_CSV, empty_pm25).unwrap();
        let dashboard = Dashboard::new(store, DashboardConfig::default());
        let selection = SelectionState {
            pollutants: vec![Pollutant::Pm25],
            period: None,
        };
        assert_eq!(
            dashboard.on_selection_changed(&selection).unwrap_err(),
            AirQualityError::EmptySeries(Pollutant::Pm25)
        );
    }

    #[test]
    fn test_identical_selections_yield_equal_payloads() {
        let dashboard = dashboard();
        let selection = dashboard.default_selection();
        let first = dashboard.on_selection_changed(&selection).unwrap();
        let second = dashboard.on_selection_changed(&selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_threshold_is_honored() {
        let store = MeasurementStore::load(OZONE_CSV, PM25_CSV).unwrap();
        let config = DashboardConfig {
            poor_air_threshold: 75.0,
            default_period: None,
        };
        let dashboard = Dashboard::new(store, config);
        let selection = SelectionState {
            pollutants: vec![Pollutant::Ozone],
            period: YearMonth::new(2024, 1),
        };
        let payload = dashboard.on_selection_changed(&selection).unwrap();
        assert_eq!(
            payload.statistics,
            vec!["OZONE: 2 out of 2 sites show poor air quality (AQI > 75)"]
        );
    }
}

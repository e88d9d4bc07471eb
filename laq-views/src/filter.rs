use laq_core::error::AirQualityError;
use laq_core::month::YearMonth;
use laq_core::pollutant::Pollutant;
use laq_core::reading::SiteReading;
use laq_core::series::PollutantSeries;
use std::collections::BTreeMap;

/// A user selection: which pollutants to show and which calendar month to
/// inspect.
///
/// Built fresh on each interaction and read immediately to produce a view
/// payload; it has no storage of its own. `period: None` means no explicit
/// month was chosen, which falls back to the latest-day snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub pollutants: Vec<Pollutant>,
    pub period: Option<YearMonth>,
}

/// Readings whose date falls inside the given calendar month, in series
/// order.
///
/// A month with no matching readings yields an empty set, not an error;
/// the rendering layer decides how to show the empty state. Repeated calls
/// over the same immutable series return equal results.
pub fn filter_by_month(series: &PollutantSeries, period: YearMonth) -> Vec<SiteReading> {
    series
        .readings()
        .iter()
        .filter(|reading| period.contains(&reading.date))
        .cloned()
        .collect()
}

/// Restrict the available series to the selected pollutants.
///
/// An empty selection yields an empty map (the rendering layer owns the
/// empty-state decision). Selecting a pollutant with no loaded series is
/// rejected rather than silently ignored; duplicate selections collapse.
pub fn filter_by_pollutants<'a>(
    available: &BTreeMap<Pollutant, &'a PollutantSeries>,
    selected: &[Pollutant],
) -> Result<BTreeMap<Pollutant, &'a PollutantSeries>, AirQualityError> {
    let mut filtered = BTreeMap::new();
    for pollutant in selected {
        match available.get(pollutant) {
            Some(series) => {
                filtered.insert(*pollutant, *series);
            }
            None => {
                return Err(AirQualityError::InvalidSelection(format!(
                    "no series loaded for {pollutant}"
                )));
            }
        }
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::{filter_by_month, filter_by_pollutants};
    use laq_core::error::AirQualityError;
    use laq_core::month::YearMonth;
    use laq_core::pollutant::Pollutant;
    use laq_core::reading::SiteReading;
    use laq_core::series::PollutantSeries;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn reading(year: i32, month: u32, day: u32, site: &str) -> SiteReading {
        SiteReading {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            site_name: site.to_string(),
            latitude: 34.0,
            longitude: -118.0,
            aqi: 50.0,
        }
    }

    fn january_series() -> PollutantSeries {
        PollutantSeries::from_readings(
            Pollutant::Ozone,
            vec![
                reading(2024, 1, 5, "SiteA"),
                reading(2024, 1, 26, "SiteA"),
                reading(2024, 2, 9, "SiteA"),
            ],
        )
    }

    #[test]
    fn test_filter_by_month_matches_year_and_month() {
        let series = january_series();
        let january = YearMonth::new(2024, 1).unwrap();
        let filtered = filter_by_month(&series, january);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| january.contains(&r.date)));
    }

    #[test]
    fn test_filter_by_month_empty_month_is_not_an_error() {
        let series = january_series();
        let july = YearMonth::new(2024, 7).unwrap();
        assert!(filter_by_month(&series, july).is_empty());
    }

    #[test]
    fn test_filter_by_month_is_idempotent() {
        let series = january_series();
        let january = YearMonth::new(2024, 1).unwrap();
        let first = filter_by_month(&series, january);
        let second = filter_by_month(&series, january);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_by_pollutants_empty_selection() {
        let ozone = january_series();
        let mut available = BTreeMap::new();
        available.insert(Pollutant::Ozone, &ozone);
        let filtered = filter_by_pollutants(&available, &[]).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_pollutants_rejects_missing_series() {
        let ozone = january_series();
        let mut available = BTreeMap::new();
        available.insert(Pollutant::Ozone, &ozone);
        let err = filter_by_pollutants(&available, &[Pollutant::Pm25]).unwrap_err();
        assert!(matches!(err, AirQualityError::InvalidSelection(_)));
    }

    #[test]
    fn test_filter_by_pollutants_collapses_duplicates() {
        let ozone = january_series();
        let mut available = BTreeMap::new();
        available.insert(Pollutant::Ozone, &ozone);
        let filtered =
            filter_by_pollutants(&available, &[Pollutant::Ozone, Pollutant::Ozone]).unwrap();
        assert_eq!(filtered.len(), 1);
    }
}

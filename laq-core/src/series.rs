use crate::month::YearMonth;
use crate::pollutant::Pollutant;
use crate::reading::SiteReading;
use chrono::NaiveDate;

/// An ordered-by-date collection of readings for exactly one pollutant.
///
/// Readings are sorted once at construction and immutable afterwards;
/// aggregates, snapshots, and filtered subsets are always freshly
/// allocated, never views that could mutate the originals.
#[derive(Debug, Clone)]
pub struct PollutantSeries {
    pollutant: Pollutant,
    readings: Vec<SiteReading>,
}

impl PollutantSeries {
    pub fn from_readings(pollutant: Pollutant, mut readings: Vec<SiteReading>) -> PollutantSeries {
        readings.sort();
        PollutantSeries {
            pollutant,
            readings,
        }
    }

    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    pub fn readings(&self) -> &[SiteReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Most recent observation date in the series.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.readings.last().map(|reading| reading.date)
    }

    /// Distinct calendar months covered by the series, ascending.
    pub fn months(&self) -> Vec<YearMonth> {
        let mut months: Vec<YearMonth> = Vec::new();
        for reading in &self.readings {
            let month = YearMonth::of(&reading.date);
            if months.last() != Some(&month) {
                months.push(month);
            }
        }
        months
    }

    /// The calendar month of the most recent observation.
    pub fn latest_month(&self) -> Option<YearMonth> {
        self.max_date().map(|date| YearMonth::of(&date))
    }
}

#[cfg(test)]
mod tests {
    use super::PollutantSeries;
    use crate::month::YearMonth;
    use crate::pollutant::Pollutant;
    use crate::reading::SiteReading;
    use chrono::NaiveDate;

    fn reading(year: i32, month: u32, day: u32, site: &str) -> SiteReading {
        SiteReading {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            site_name: site.to_string(),
            latitude: 34.0,
            longitude: -118.0,
            aqi: 50.0,
        }
    }

    #[test]
    fn test_sorted_on_construction() {
        let series = PollutantSeries::from_readings(
            Pollutant::Ozone,
            vec![
                reading(2024, 2, 9, "Reseda"),
                reading(2024, 1, 5, "Reseda"),
                reading(2024, 1, 26, "Reseda"),
            ],
        );
        let dates: Vec<_> = series.readings().iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(
            series.max_date(),
            NaiveDate::from_ymd_opt(2024, 2, 9)
        );
    }

    #[test]
    fn test_months_distinct_ascending() {
        let series = PollutantSeries::from_readings(
            Pollutant::Pm25,
            vec![
                reading(2024, 1, 5, "Compton"),
                reading(2024, 1, 12, "Compton"),
                reading(2023, 12, 29, "Compton"),
                reading(2024, 2, 9, "Compton"),
            ],
        );
        assert_eq!(
            series.months(),
            vec![
                YearMonth::new(2023, 12).unwrap(),
                YearMonth::new(2024, 1).unwrap(),
                YearMonth::new(2024, 2).unwrap(),
            ]
        );
        assert_eq!(series.latest_month(), YearMonth::new(2024, 2));
    }

    #[test]
    fn test_empty_series() {
        let series = PollutantSeries::from_readings(Pollutant::Ozone, Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.max_date(), None);
        assert!(series.months().is_empty());
        assert_eq!(series.latest_month(), None);
    }
}

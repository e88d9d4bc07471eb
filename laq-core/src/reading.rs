use crate::error::AirQualityError;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Date format used by the daily-summary CSV exports: "month/day/year".
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Expected number of columns in a readings CSV row:
/// `Date,Site Name,Site Latitude,Site Longitude,Daily AQI Value`.
pub const CSV_ROW_LENGTH: usize = 5;

/// One observation: one pollutant, one monitoring site, one day.
///
/// Within a single pollutant series, (`date`, `site_name`) is unique, and
/// that pair is the record's identity for `Eq`/`Ord`/`Hash`. Records are
/// created once at load time and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReading {
    pub date: NaiveDate,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Non-negative air quality index for this site and day.
    pub aqi: f64,
}

impl TryFrom<&StringRecord> for SiteReading {
    type Error = AirQualityError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() != CSV_ROW_LENGTH {
            return Err(AirQualityError::MalformedInput(format!(
                "expected {CSV_ROW_LENGTH} columns, found {}",
                record.len()
            )));
        }
        let date_field = record.get(0).unwrap_or_default().trim();
        let date = NaiveDate::parse_from_str(date_field, DATE_FORMAT).map_err(|_| {
            AirQualityError::MalformedInput(format!("unparsable date {date_field:?}"))
        })?;
        let site_name = record.get(1).unwrap_or_default().trim();
        if site_name.is_empty() {
            return Err(AirQualityError::MalformedInput(
                "missing site name".to_string(),
            ));
        }
        let latitude = parse_field(record.get(2), "latitude")?;
        let longitude = parse_field(record.get(3), "longitude")?;
        let aqi = parse_field(record.get(4), "AQI value")?;
        if aqi < 0.0 {
            return Err(AirQualityError::MalformedInput(format!(
                "negative AQI value {aqi}"
            )));
        }
        Ok(SiteReading {
            date,
            site_name: site_name.to_string(),
            latitude,
            longitude,
            aqi,
        })
    }
}

fn parse_field(field: Option<&str>, name: &str) -> Result<f64, AirQualityError> {
    let field = field.unwrap_or_default().trim();
    field
        .parse()
        .map_err(|_| AirQualityError::MalformedInput(format!("unparsable {name} {field:?}")))
}

/// Parse a headered readings CSV into typed records.
///
/// Fails on the first malformed row, with the 1-based data row number in
/// the error message. Loading is all-or-nothing: either every row parses
/// or the whole source is rejected.
pub fn parse_readings_csv(csv_data: &str) -> Result<Vec<SiteReading>, AirQualityError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());
    let mut readings = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| AirQualityError::MalformedInput(format!("row {}: {e}", row + 1)))?;
        let reading = SiteReading::try_from(&record).map_err(|e| match e {
            AirQualityError::MalformedInput(reason) => {
                AirQualityError::MalformedInput(format!("row {}: {reason}", row + 1))
            }
            other => other,
        })?;
        readings.push(reading);
    }
    Ok(readings)
}

impl PartialEq for SiteReading {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.site_name == other.site_name
    }
}

impl Eq for SiteReading {}

impl Hash for SiteReading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
        self.site_name.hash(state);
    }
}

impl Ord for SiteReading {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.site_name.cmp(&other.site_name))
    }
}

impl PartialOrd for SiteReading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

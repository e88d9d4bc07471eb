use crate::pollutant::Pollutant;
use std::fmt;

/// Errors surfaced by the air quality computation core.
///
/// All three variants propagate to the presentation layer's event handler;
/// none of them is ever swallowed into a default value. Empty filtered
/// results are not errors and never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub enum AirQualityError {
    /// A source record could not be parsed at load time. Fatal: the
    /// dashboard cannot render without fully valid data.
    MalformedInput(String),
    /// A latest-reading snapshot was requested for a series with no records.
    EmptySeries(Pollutant),
    /// A selection referenced a pollutant with no loaded series.
    InvalidSelection(String),
}

impl fmt::Display for AirQualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirQualityError::MalformedInput(reason) => {
                write!(f, "malformed input: {reason}")
            }
            AirQualityError::EmptySeries(pollutant) => {
                write!(f, "no records loaded for {pollutant}")
            }
            AirQualityError::InvalidSelection(reason) => {
                write!(f, "invalid selection: {reason}")
            }
        }
    }
}

impl std::error::Error for AirQualityError {}

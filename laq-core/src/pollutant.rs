use serde::{Deserialize, Serialize};
use std::fmt;

/// All tracked pollutants in display order: ozone layers before PM2.5.
pub const ALL_POLLUTANTS: [Pollutant; 2] = [Pollutant::Ozone, Pollutant::Pm25];

/// The pollutant kind of a measurement series.
///
/// Declaration order drives `Ord`, so ordered maps keyed by `Pollutant`
/// iterate in the fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pollutant {
    Ozone,
    Pm25,
}

impl Pollutant {
    /// Lower-case display label, matching the dashboard dropdown values.
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Ozone => "ozone",
            Pollutant::Pm25 => "pm2.5",
        }
    }

    /// Parse a display label back into a pollutant.
    /// Accepts `"pm25"` as an alias for `"pm2.5"`.
    pub fn from_label(label: &str) -> Option<Pollutant> {
        match label.trim().to_ascii_lowercase().as_str() {
            "ozone" => Some(Pollutant::Ozone),
            "pm2.5" | "pm25" => Some(Pollutant::Pm25),
            _ => None,
        }
    }

    /// Chart title for this pollutant's trend line.
    pub fn trend_title(&self) -> &'static str {
        match self {
            Pollutant::Ozone => "Ozone Levels Over Time",
            Pollutant::Pm25 => "PM2.5 Levels Over Time",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

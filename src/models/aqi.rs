//! AQI bands.

use serde::Serialize;
use std::fmt;

/// One of the six US EPA AQI bands, ordered from cleanest to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Classify an AQI value. Upper bounds are inclusive and compared
    /// against the unrounded value; anything above 300 is hazardous.
    pub fn classify(aqi: f64) -> Self {
        if aqi <= 50.0 {
            Self::Good
        } else if aqi <= 100.0 {
            Self::Moderate
        } else if aqi <= 150.0 {
            Self::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            Self::Unhealthy
        } else if aqi <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// CSS class applied to the AQI card
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::UnhealthyForSensitiveGroups => "unhealthy-sensitive",
            Self::Unhealthy => "unhealthy",
            Self::VeryUnhealthy => "very-unhealthy",
            Self::Hazardous => "hazardous",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            Self::Good => "Air quality is excellent. Safe to breathe.",
            Self::Moderate => "Air quality is acceptable with minor risks for sensitive groups.",
            Self::UnhealthyForSensitiveGroups => "May cause irritation for asthma or heart patients.",
            Self::Unhealthy => "Everyone may feel discomfort. Reduce outdoor activities.",
            Self::VeryUnhealthy => "Serious health risks. Stay indoors as much as possible.",
            Self::Hazardous => "Emergency warning. Avoid going outside.",
        }
    }

    /// Text shown under the AQI value, e.g. `Good — Air quality is excellent...`
    pub fn health_message(self) -> String {
        format!("{} — {}", self.label(), self.advisory())
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

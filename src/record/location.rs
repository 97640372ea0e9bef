// Tue Jan 13 2026 - Alex

use crate::record::{RawRecord, CITY, COUNTRY, COUNTY, STATE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic scope of a source or record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(country: &str) -> Self {
        Self {
            country: Some(country.to_string()),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_county(mut self, county: &str) -> Self {
        self.county = Some(county.to_string());
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Present parts as record fields, most specific first.
    pub fn to_fields(&self) -> RawRecord {
        let mut fields = RawRecord::new();
        let parts = [
            (CITY, &self.city),
            (COUNTY, &self.county),
            (STATE, &self.state),
            (COUNTRY, &self.country),
        ];
        for (name, part) in parts {
            if let Some(value) = part {
                fields.insert(name.to_string(), value.as_str().into());
            }
        }
        fields
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.city, &self.county, &self.state, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();

        if parts.is_empty() {
            write!(f, "<unscoped>")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

//! Country and city reference data

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A country with its selectable cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub cities: Vec<String>,
}

/// Ordered, immutable country/city lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

const BUILTIN: &[(&str, &str, [&str; 10])] = &[
    (
        "India",
        "IN",
        [
            "Delhi",
            "Mumbai",
            "Bangalore",
            "Hyderabad",
            "Chennai",
            "Kolkata",
            "Pune",
            "Ahmedabad",
            "Jaipur",
            "Lucknow",
        ],
    ),
    (
        "United States",
        "US",
        [
            "New York",
            "Los Angeles",
            "Chicago",
            "Houston",
            "Phoenix",
            "Philadelphia",
            "San Antonio",
            "San Diego",
            "Dallas",
            "San Jose",
        ],
    ),
    (
        "United Kingdom",
        "UK",
        [
            "London",
            "Birmingham",
            "Manchester",
            "Glasgow",
            "Liverpool",
            "Bristol",
            "Sheffield",
            "Leeds",
            "Edinburgh",
            "Leicester",
        ],
    ),
    (
        "Canada",
        "CA",
        [
            "Toronto",
            "Montreal",
            "Vancouver",
            "Calgary",
            "Edmonton",
            "Ottawa",
            "Quebec City",
            "Winnipeg",
            "Hamilton",
            "Halifax",
        ],
    ),
    (
        "Australia",
        "AU",
        [
            "Sydney",
            "Melbourne",
            "Brisbane",
            "Perth",
            "Adelaide",
            "Gold Coast",
            "Canberra",
            "Newcastle",
            "Wollongong",
            "Hobart",
        ],
    ),
];

impl CountryCatalog {
    /// The catalog shipped with the binary
    pub fn builtin() -> Self {
        let countries = BUILTIN
            .iter()
            .map(|(name, code, cities)| Country {
                name: name.to_string(),
                code: code.to_string(),
                cities: cities.iter().map(|c| c.to_string()).collect(),
            })
            .collect();
        Self { countries }
    }

    /// Parse a JSON array of `{name, code, cities}` entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: CountryCatalog =
            serde_json::from_str(json).context("country catalog is not valid JSON")?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read country catalog {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("invalid country catalog {}", path.display()))
    }

    fn check(&self) -> Result<()> {
        if self.countries.is_empty() {
            bail!("country catalog has no entries");
        }
        let mut seen = HashSet::new();
        for country in &self.countries {
            if country.name.trim().is_empty() {
                bail!("country catalog has an entry without a name");
            }
            if !seen.insert(country.name.as_str()) {
                bail!("country {:?} is listed more than once", country.name);
            }
        }
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }

    /// Cities of the country named `country`, in catalog order
    pub fn cities(&self, country: &str) -> Option<&[String]> {
        self.countries
            .iter()
            .find(|c| c.name == country)
            .map(|c| c.cities.as_slice())
    }

    /// Whether `city` is one of `country`'s cities
    pub fn contains_city(&self, country: &str, city: &str) -> bool {
        self.cities(country)
            .is_some_and(|cities| cities.iter().any(|c| c == city))
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

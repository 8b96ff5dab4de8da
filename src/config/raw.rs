use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("addressable.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub address: Option<Address>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

/// A single string fixes the value, a list restricts it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AllowedValues {
    Literal(String),
    OneOf(Vec<String>),
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    pub allowed_regions: Option<AllowedValues>,
    pub allowed_countries: Option<AllowedValues>,
    pub postcode_pattern: Option<String>,
}

impl Default for Address {
    fn default() -> Self {
        Config::default().address.expect("Address configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    GoogleMaps,
    Opencage,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleMaps {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google_maps: Option<GoogleMaps>,
    pub opencage: Option<OpenCage>,
}

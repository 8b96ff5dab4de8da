use addressable_core::gateways::geocode::GeoCodingGateway;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Provider { status: String, message: String },
}

type Result<T> = std::result::Result<T, Error>;

/// Geocoding with the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GoogleMaps {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL.to_string(), api_key, timeout)
    }

    pub fn with_api_url(api_url: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_url,
            api_key,
            client,
        })
    }

    fn request(&self, address: &str, region_hint: &str) -> Result<GeocodeResponse> {
        let mut params = vec![("address", address)];
        if !region_hint.is_empty() {
            params.push(("region", region_hint));
        }
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }
        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

/// Takes the first result of a successful response.
fn first_position(response: GeocodeResponse) -> Result<Option<(f64, f64)>> {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = response;
    match status.as_str() {
        "OK" => Ok(results
            .into_iter()
            .next()
            .map(|r| (r.geometry.location.lat, r.geometry.location.lng))),
        "ZERO_RESULTS" => Ok(None),
        _ => Err(Error::Provider {
            status,
            message: error_message.unwrap_or_else(|| "no error message".to_string()),
        }),
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)> {
        match self.request(address, region_hint).and_then(first_position) {
            Ok(Some(pos)) => Some(pos),
            Ok(None) => {
                log::info!("Google Maps did not find '{address}'");
                None
            }
            Err(err) => {
                log::warn!("Cannot resolve address '{address}': {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Option<(f64, f64)>> {
        first_position(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn first_result_is_used() {
        let json = r#"{
            "status": "OK",
            "results": [
                { "geometry": { "location": { "lat": 51.5237038, "lng": -0.1585531 } } },
                { "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
            ]
        }"#;
        assert_eq!(parse(json).unwrap(), Some((51.5237038, -0.1585531)));
    }

    #[test]
    fn zero_results() {
        let json = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;
        assert_eq!(parse(json).unwrap(), None);
    }

    #[test]
    fn provider_errors() {
        let json = r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#;
        let err = parse(json).unwrap_err();
        assert!(matches!(&err, Error::Provider { status, .. } if status == "REQUEST_DENIED"));
        assert_eq!(
            err.to_string(),
            "REQUEST_DENIED: The provided API key is invalid."
        );
    }

    #[test]
    fn unreachable_provider_degrades_to_none() {
        let gw = GoogleMaps::with_api_url(
            "http://127.0.0.1:9/geocode/json".to_string(),
            None,
            Duration::from_millis(500),
        )
        .unwrap();
        assert_eq!(gw.resolve_address_lat_lng("221B Baker St, London", "gb"), None);
    }
}

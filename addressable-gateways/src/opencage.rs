use crate::with_timeout;
use addressable_core::gateways::geocode::GeoCodingGateway;
use geocoding::{Forward, Opencage, Point};
use std::time::Duration;

/// Geocoding with the OpenCage API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: Option<String>,
    timeout: Duration,
}

impl OpenCage {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self { api_key, timeout }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)> {
        let Some(api_key) = self.api_key.clone() else {
            log::debug!("No OpenCage API key configured");
            return None;
        };
        let address = address.to_string();
        let region_hint = region_hint.to_string();
        with_timeout(self.timeout, move || {
            // The request parameters borrow the region hint,
            // so a client is created for every lookup.
            let mut oc = Opencage::new(api_key);
            if !region_hint.is_empty() {
                oc.parameters.countrycode = Some(&region_hint);
            }
            let res: Vec<Point<f64>> = match oc.forward(&address) {
                Ok(res) => res,
                Err(err) => {
                    log::warn!("Cannot resolve address '{address}': {err}");
                    return None;
                }
            };
            match res.first() {
                Some(p) => Some((p.y(), p.x())),
                None => {
                    log::info!("OpenCage did not find '{address}'");
                    None
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_api_key_nothing_is_resolved() {
        let gw = OpenCage::new(None, Duration::from_secs(1));
        assert_eq!(gw.resolve_address_lat_lng("221B Baker St, London", "gb"), None);
    }
}

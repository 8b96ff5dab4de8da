use crate::config::{Config, GeocodingGateway};
use addressable_core::gateways::geocode::GeoCodingGateway;
use addressable_gateways::{google_maps::GoogleMaps, opencage::OpenCage};
use anyhow::Result;

pub fn geocoding_gateway(cfg: &Config) -> Result<GeoCodingGw> {
    let timeout = cfg.geocoding.timeout;
    let gw = match &cfg.geocoding.gateway {
        Some(GeocodingGateway::GoogleMaps { api_key, api_url }) => {
            log::info!("Use Google Maps geocoding gateway");
            if api_key.is_none() {
                log::warn!("No Google Maps API key was configured");
            }
            let gw = match api_url {
                Some(url) => GoogleMaps::with_api_url(url.clone(), api_key.clone(), timeout)?,
                None => GoogleMaps::new(api_key.clone(), timeout)?,
            };
            GeoCodingGw::new(gw)
        }
        Some(GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            if api_key.is_none() {
                log::warn!("No OpenCage API key was configured");
            }
            GeoCodingGw::new(OpenCage::new(api_key.clone(), timeout))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            GeoCodingGw::new(DummyGeoGw)
        }
    };
    Ok(gw)
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, _address: &str, _region_hint: &str) -> Option<(f64, f64)> {
        log::debug!("Cannot geocode addresses because no geocoding gateway was configured");
        None
    }
}

pub struct GeoCodingGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoCodingGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoCodingGw {
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)> {
        self.0.resolve_address_lat_lng(address, region_hint)
    }
}

use addressable_core::usecases::{AddressSettings, AllowedValues};
use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "addressable.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

const DEFAULT_GEOCODING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct Config {
    pub address: AddressSettings,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if dotenvy::dotenv().is_ok() {
            log::debug!("Loaded environment from .env file");
        }
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        match &mut self.geocoding.gateway {
            Some(GeocodingGateway::GoogleMaps { api_key, .. }) => {
                if let Ok(key) = env::var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
                    *api_key = Some(key);
                }
            }
            Some(GeocodingGateway::OpenCage { api_key }) => {
                if let Ok(key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
                    *api_key = Some(key);
                }
            }
            None => {}
        }
    }
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    GoogleMaps {
        api_key: Option<String>,
        api_url: Option<String>,
    },
    OpenCage {
        api_key: Option<String>,
    },
}

fn allowed_values(from: Option<raw::AllowedValues>) -> AllowedValues {
    match from {
        None => AllowedValues::Free,
        Some(raw::AllowedValues::Literal(value)) => AllowedValues::Literal(value),
        Some(raw::AllowedValues::OneOf(values)) => AllowedValues::OneOf(values),
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            address,
            geocoding,
            gateway,
        } = from;

        let raw::Address {
            allowed_regions,
            allowed_countries,
            postcode_pattern,
        } = address.unwrap_or_default();

        let postcode_pattern = postcode_pattern.filter(|p| !p.is_empty());
        if postcode_pattern.is_none() {
            log::info!("Postcode validation is disabled");
        }
        let address = AddressSettings::try_new(
            allowed_values(allowed_regions),
            allowed_values(allowed_countries),
            postcode_pattern.as_deref(),
        )
        .map_err(|err| anyhow!("Invalid address configuration: {err}"))?;

        let raw::Geocoding { gateway: gw_name, timeout } = geocoding.unwrap_or_default();
        let gateway = gateway.unwrap_or_default();

        let geo_gateway = match gw_name {
            Some(raw::GeocodingGateway::GoogleMaps) => {
                let raw::GoogleMaps { api_key, api_url } = gateway
                    .google_maps
                    .ok_or_else(|| anyhow!("Missing 'google-maps' gateway configuration"))?;
                Some(GeocodingGateway::GoogleMaps { api_key, api_url })
            }
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway
                    .opencage
                    .ok_or_else(|| anyhow!("Missing 'opencage' gateway configuration"))?;
                Some(GeocodingGateway::OpenCage { api_key })
            }
            None => None,
        };

        let geocoding = Geocoding {
            gateway: geo_gateway,
            timeout: timeout.unwrap_or(DEFAULT_GEOCODING_TIMEOUT),
        };

        Ok(Self { address, geocoding })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.address.allowed_countries(), &AllowedValues::Free);
        assert!(cfg.address.postcode_pattern().is_some());
        assert_eq!(cfg.geocoding.timeout, Duration::from_secs(5));
    }

    #[test]
    fn load_full_example() {
        let cfg = Config::try_load_from_file_or_default(Some(
            "src/config/addressable.full-example.toml",
        ))
        .unwrap();
        assert_eq!(
            cfg.address.allowed_countries(),
            &AllowedValues::Literal("AU".into())
        );
        assert!(cfg.address.postcode_pattern().unwrap().is_match("2000"));
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::OpenCage { .. })
        ));
        assert_eq!(cfg.geocoding.timeout, Duration::from_secs(3));
    }

    #[test]
    fn empty_postcode_pattern_disables_validation() {
        let raw: raw::Config = toml::from_str("[address]\npostcode-pattern = \"\"").unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert!(cfg.address.postcode_pattern().is_none());
    }

    #[test]
    fn malformed_postcode_pattern_is_a_configuration_error() {
        let raw: raw::Config = toml::from_str("[address]\npostcode-pattern = \"^[0-9\"").unwrap();
        let err = Config::try_from(raw).unwrap_err();
        assert!(err.to_string().starts_with("Invalid address configuration"));
    }

    fn config_with_gateway(gateway: GeocodingGateway) -> Config {
        Config {
            address: AddressSettings::default(),
            geocoding: Geocoding {
                gateway: Some(gateway),
                timeout: DEFAULT_GEOCODING_TIMEOUT,
            },
        }
    }

    #[test]
    fn api_keys_from_environment() {
        env::set_var(ENV_NAME_GOOGLE_MAPS_API_KEY, "google-key-from-env");
        env::set_var(ENV_NAME_OPENCAGE_API_KEY, "opencage-key-from-env");

        let mut cfg = config_with_gateway(GeocodingGateway::GoogleMaps {
            api_key: Some("google-key-from-file".into()),
            api_url: Some("http://localhost/geocode".into()),
        });
        cfg.apply_env_overrides();
        assert_eq!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::GoogleMaps {
                api_key: Some("google-key-from-env".into()),
                api_url: Some("http://localhost/geocode".into()),
            })
        );

        let mut cfg = config_with_gateway(GeocodingGateway::OpenCage { api_key: None });
        cfg.apply_env_overrides();
        assert_eq!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::OpenCage {
                api_key: Some("opencage-key-from-env".into()),
            })
        );

        env::remove_var(ENV_NAME_GOOGLE_MAPS_API_KEY);
        env::remove_var(ENV_NAME_OPENCAGE_API_KEY);
    }

    #[test]
    fn selected_gateway_needs_its_section() {
        let raw: raw::Config = toml::from_str("[geocoding]\ngateway = \"opencage\"").unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}

use super::{full_address::full_address, prelude::*};
use crate::{
    gateways::{country::CountryNameLookup, geocode::GeoCodingGateway},
    util::validate::Validate,
};

/// What the geocoding step did with a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeocodingOutcome {
    AddressUnchanged,
    ManuallySet,
    NoAddress,
    NotFound,
    Updated(Coordinate),
}

/// Resolves the coordinate of a record that is about to be saved.
///
/// The provider is only asked if the address has changed and the
/// coordinate has not been set manually. If the provider has no
/// valid result the previous coordinate is kept.
pub fn geocode_on_save<G, C>(
    geo_gw: &G,
    countries: &C,
    record: &mut HostRecord,
    address_changed: bool,
) -> GeocodingOutcome
where
    G: GeoCodingGateway + ?Sized,
    C: CountryNameLookup + ?Sized,
{
    if !address_changed {
        return GeocodingOutcome::AddressUnchanged;
    }
    if record.is_manually_located() {
        log::debug!("Keeping manually set location of record {}", record.id);
        return GeocodingOutcome::ManuallySet;
    }
    let Some(address) = record.address.as_ref().filter(|a| !a.is_empty()) else {
        return GeocodingOutcome::NoAddress;
    };
    let query = full_address(address, countries);
    let region_hint = record.country().unwrap_or_default().to_lowercase();
    match geo_gw.resolve_address_lat_lng(&query, &region_hint) {
        Some((lat, lng)) => {
            let pos = Coordinate::geocoded(lat, lng);
            if let Err(err) = pos.validate() {
                log::warn!("Ignoring invalid location {:?} for '{query}': {err}", pos.lat_lng());
                return GeocodingOutcome::NotFound;
            }
            log::info!(
                "Updating location of record {}: {:?} -> {:?}",
                record.id,
                record.coordinate.map(|c| c.lat_lng()),
                pos.lat_lng()
            );
            record.coordinate = Some(pos);
            GeocodingOutcome::Updated(pos)
        }
        None => {
            log::debug!("No location found for '{query}'");
            GeocodingOutcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyGeoGw, FixedGeoGw},
        *,
    };
    use crate::gateways::country::IsoCountries;
    use addressable_entities::builders::*;

    fn record() -> HostRecord {
        HostRecord::build()
            .address(
                Address::build()
                    .line1("221B Baker St")
                    .city("London")
                    .country("GB")
                    .finish(),
            )
            .finish()
    }

    #[test]
    fn manually_set_coordinate_is_never_overwritten() {
        let gw = FixedGeoGw::new(51.5, -0.1);
        let mut r = record();
        r.coordinate = Some(Coordinate::try_manual(48.1, 11.5).unwrap());
        let before = r.clone();
        assert_eq!(
            geocode_on_save(&gw, &IsoCountries, &mut r, true),
            GeocodingOutcome::ManuallySet
        );
        assert_eq!(gw.calls(), 0);
        assert_eq!(r, before);
    }

    #[test]
    fn changed_address_is_geocoded() {
        let gw = FixedGeoGw::new(51.5, -0.1);
        let mut r = record();
        let outcome = geocode_on_save(&gw, &IsoCountries, &mut r, true);
        assert_eq!(outcome, GeocodingOutcome::Updated(Coordinate::geocoded(51.5, -0.1)));
        let c = r.coordinate.unwrap();
        assert_eq!(c.lat_lng(), (51.5, -0.1));
        assert!(!c.manually_set);
        assert_eq!(
            gw.last_query(),
            Some((
                "221B Baker St, London, United Kingdom".to_string(),
                "gb".to_string()
            ))
        );
    }

    #[test]
    fn unchanged_address_is_not_geocoded() {
        let gw = FixedGeoGw::new(51.5, -0.1);
        let mut r = record();
        assert_eq!(
            geocode_on_save(&gw, &IsoCountries, &mut r, false),
            GeocodingOutcome::AddressUnchanged
        );
        assert_eq!(gw.calls(), 0);
        assert!(r.coordinate.is_none());
    }

    #[test]
    fn missing_result_keeps_previous_coordinate() {
        let mut r = record();
        r.coordinate = Some(Coordinate::geocoded(51.5, -0.1));
        let before = r.coordinate.unwrap();
        assert_eq!(
            geocode_on_save(&DummyGeoGw, &IsoCountries, &mut r, true),
            GeocodingOutcome::NotFound
        );
        let after = r.coordinate.unwrap();
        assert_eq!(after.lat.to_bits(), before.lat.to_bits());
        assert_eq!(after.lng.to_bits(), before.lng.to_bits());
        assert_eq!(after.manually_set, before.manually_set);
    }

    #[test]
    fn invalid_provider_result_is_ignored() {
        for (lat, lng) in [(200.0, 0.0), (0.0, -181.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            let gw = FixedGeoGw::new(lat, lng);
            let mut r = record();
            r.coordinate = Some(Coordinate::geocoded(51.5, -0.1));
            assert_eq!(
                geocode_on_save(&gw, &IsoCountries, &mut r, true),
                GeocodingOutcome::NotFound
            );
            assert_eq!(gw.calls(), 1);
            assert_eq!(r.coordinate, Some(Coordinate::geocoded(51.5, -0.1)));
        }
    }

    #[test]
    fn empty_address_is_not_sent_to_the_provider() {
        let gw = FixedGeoGw::new(51.5, -0.1);
        let mut r = HostRecord::build().address(Address::default()).finish();
        assert_eq!(
            geocode_on_save(&gw, &IsoCountries, &mut r, true),
            GeocodingOutcome::NoAddress
        );
        assert_eq!(gw.calls(), 0);
    }
}

use super::{
    coordinate_field::CoordinateField,
    detect_changes::{is_address_changed, ChangeLevel},
    geocode_on_save::{geocode_on_save, GeocodingOutcome},
    prelude::*,
    AddressSettings,
};
use crate::{
    gateways::{country::CountryNameLookup, geocode::GeoCodingGateway},
    repositories::Error as RepoError,
    util::validate::{validate_address, AutoCorrect},
};

/// Creates an unsaved record with the fixed region
/// and country already filled in.
pub fn new_record(settings: &AddressSettings) -> HostRecord {
    let mut address = Address::default();
    settings.populate_defaults(&mut address);
    HostRecord {
        address: Some(address).filter(|a| !a.is_empty()),
        ..HostRecord::new(Id::new())
    }
}

/// Collaborators and options of [`save_record`].
#[derive(Debug)]
pub struct SaveContext<'a, R, G, C>
where
    R: ?Sized,
    G: ?Sized,
    C: ?Sized,
{
    pub repo: &'a R,
    pub geo_gw: &'a G,
    pub countries: &'a C,
    pub settings: &'a AddressSettings,
    pub change_level: ChangeLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedRecord {
    pub record: HostRecord,
    pub geocoding: GeocodingOutcome,
}

/// Validates, geocodes and stores a host record.
///
/// The coordinate field is applied before geocoding so that an
/// unticked manual flag cannot overwrite a freshly resolved position.
pub fn save_record<R, G, C>(
    ctx: &SaveContext<'_, R, G, C>,
    mut record: HostRecord,
    coordinate_field: Option<&CoordinateField>,
) -> Result<SavedRecord>
where
    R: HostRecordRepo + ?Sized,
    G: GeoCodingGateway + ?Sized,
    C: CountryNameLookup + ?Sized,
{
    record.address = record
        .address
        .map(AutoCorrect::auto_correct)
        .filter(|a| !a.is_empty());
    if let Some(address) = &record.address {
        validate_address(ctx.settings, address)?;
    }
    if let Some(field) = coordinate_field {
        field.save_into(&mut record)?;
    }
    if record.is_persisted() {
        let latest = ctx.repo.get_record(record.id.as_str())?;
        if latest.revision != record.revision {
            log::warn!(
                "Record {} has been modified concurrently: expected revision {:?}, found {:?}",
                record.id,
                record.revision,
                latest.revision
            );
            return Err(RepoError::InvalidVersion.into());
        }
    }
    let changed = is_address_changed(ctx.repo, &record, ctx.change_level)?;
    let geocoding = geocode_on_save(ctx.geo_gw, ctx.countries, &mut record, changed);
    record.revision = record.revision.next();
    log::debug!("Saving record {} as revision {:?}", record.id, record.revision);
    ctx.repo.save_record(record.clone())?;
    Ok(SavedRecord { record, geocoding })
}

use crate::{
    config::Config,
    gateways::{geocoding_gateway, GeoCodingGw},
};
use addressable_core::{
    entities::*,
    gateways::{country::IsoCountries, geocode::GeoCodingGateway},
    repositories::HostRecordRepo,
    usecases::{self, *},
};
use addressable_gateways::render;
use anyhow::Result;

/// Everything needed to edit, save and display the address of host records.
pub struct AddressService {
    settings: AddressSettings,
    geo_gw: GeoCodingGw,
    countries: IsoCountries,
    layouts: AddressLayoutTable,
    change_level: ChangeLevel,
}

impl AddressService {
    pub fn new(settings: AddressSettings, geo_gw: GeoCodingGw) -> Self {
        Self {
            settings,
            geo_gw,
            countries: IsoCountries,
            layouts: AddressLayoutTable::default(),
            change_level: ChangeLevel::default(),
        }
    }

    pub fn from_config(cfg: Config) -> Result<Self> {
        let geo_gw = geocoding_gateway(&cfg)?;
        Ok(Self::new(cfg.address, geo_gw))
    }

    pub fn with_change_level(mut self, level: ChangeLevel) -> Self {
        self.change_level = level;
        self
    }

    pub fn with_layouts(mut self, layouts: AddressLayoutTable) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn settings(&self) -> &AddressSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AddressSettings {
        &mut self.settings
    }

    pub fn geocoding_gateway(&self) -> &dyn GeoCodingGateway {
        &self.geo_gw
    }

    pub fn new_record(&self) -> HostRecord {
        usecases::new_record(&self.settings)
    }

    pub fn save<R>(
        &self,
        repo: &R,
        record: HostRecord,
        coordinate_field: Option<&CoordinateField>,
    ) -> Result<SavedRecord, usecases::Error>
    where
        R: HostRecordRepo + ?Sized,
    {
        let ctx = SaveContext {
            repo,
            geo_gw: &self.geo_gw,
            countries: &self.countries,
            settings: &self.settings,
            change_level: self.change_level,
        };
        usecases::save_record(&ctx, record, coordinate_field)
    }

    pub fn full_address(&self, record: &HostRecord) -> String {
        record
            .address
            .as_ref()
            .map(|a| usecases::full_address(a, &self.countries))
            .unwrap_or_default()
    }

    pub fn has_address(&self, record: &HostRecord) -> bool {
        record
            .address
            .as_ref()
            .map(usecases::has_address)
            .unwrap_or(false)
    }

    pub fn is_address_changed<R>(&self, repo: &R, record: &HostRecord) -> Result<bool, usecases::Error>
    where
        R: HostRecordRepo + ?Sized,
    {
        usecases::is_address_changed(repo, record, self.change_level)
    }

    pub fn address_form_fields(&self, has_content_tab: bool) -> FieldGroup {
        usecases::address_form_fields(&self.settings, has_content_tab)
    }

    /// The coordinate field starts out with the stored position of the record.
    pub fn geocoder_fields(&self, record: &HostRecord, has_content_tab: bool) -> (CoordinateField, FieldGroup) {
        let mut field = CoordinateField::new("Location", "Location");
        if let Some(c) = record.coordinate {
            field.set_value(c);
        }
        let group = usecases::geocoder_fields(&field, has_content_tab);
        (field, group)
    }

    pub fn address_html(&self, record: &HostRecord) -> Result<String> {
        let empty = Address::default();
        let address = record.address.as_ref().unwrap_or(&empty);
        render::localised_address_html(address, &self.countries, &self.layouts)
    }

    /// `None` if the record has no address to show.
    pub fn map_preview_html(&self, record: &HostRecord, width: u32, height: u32) -> Result<Option<String>> {
        let Some(preview) = record
            .address
            .as_ref()
            .and_then(|a| usecases::map_preview(a, &self.countries, width, height))
        else {
            return Ok(None);
        };
        render::address_map_html(&preview).map(Some)
    }
}

use addressable_entities::country::country_name;

pub trait CountryNameLookup {
    fn country_name(&self, code: &str) -> Option<String>;
}

/// Country names from the built-in ISO 3166-1 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCountries;

impl CountryNameLookup for IsoCountries {
    fn country_name(&self, code: &str) -> Option<String> {
        country_name(code).map(ToString::to_string)
    }
}

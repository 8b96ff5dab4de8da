use crate::{entities::*, gateways::country::CountryNameLookup};

/// Display name of the country, falling back to the code itself.
pub fn country_display_name<C>(countries: &C, code: &str) -> String
where
    C: CountryNameLookup + ?Sized,
{
    countries
        .country_name(code)
        .unwrap_or_else(|| code.to_string())
}

/// All non-empty address fields in their canonical order joined by `", "`.
/// The country is rendered by its name instead of its code.
pub fn full_address<C>(address: &Address, countries: &C) -> String
where
    C: CountryNameLookup + ?Sized,
{
    AddressField::all()
        .filter_map(|field| {
            address.get(field).map(|value| match field {
                AddressField::Country => country_display_name(countries, value),
                _ => value.to_string(),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// An address is usable only with a first line and a country.
pub fn has_address(address: &Address) -> bool {
    address.get(AddressField::Line1).is_some() && address.get(AddressField::Country).is_some()
}

use super::full_address::country_display_name;
use crate::{entities::*, gateways::country::CountryNameLookup};
use std::collections::HashMap;

/// Country specific arrangement of the address lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressLayout {
    /// One field per line.
    #[default]
    Generic,
    /// `<postcode> <city>` on one line, e.g. Germany.
    PostcodeCity,
    /// `<city> <region> <postcode>` on one line, e.g. United States.
    CityRegionPostcode,
    /// Post town in capitals followed by the postcode, e.g. United Kingdom.
    PostTown,
}

/// Lookup from country code to layout with a fallback.
#[derive(Debug, Clone)]
pub struct AddressLayoutTable {
    layouts: HashMap<String, AddressLayout>,
    fallback: AddressLayout,
}

impl Default for AddressLayoutTable {
    fn default() -> Self {
        use AddressLayout as L;
        let layouts = [
            ("AT", L::PostcodeCity),
            ("BE", L::PostcodeCity),
            ("CH", L::PostcodeCity),
            ("DE", L::PostcodeCity),
            ("DK", L::PostcodeCity),
            ("ES", L::PostcodeCity),
            ("FR", L::PostcodeCity),
            ("IT", L::PostcodeCity),
            ("NL", L::PostcodeCity),
            ("AU", L::CityRegionPostcode),
            ("CA", L::CityRegionPostcode),
            ("US", L::CityRegionPostcode),
            ("GB", L::PostTown),
            ("IE", L::PostTown),
        ]
        .into_iter()
        .map(|(code, layout)| (code.to_string(), layout))
        .collect();
        Self {
            layouts,
            fallback: L::Generic,
        }
    }
}

impl AddressLayoutTable {
    pub fn new(fallback: AddressLayout) -> Self {
        Self {
            layouts: HashMap::new(),
            fallback,
        }
    }

    pub fn insert(&mut self, country: &str, layout: AddressLayout) {
        self.layouts.insert(country.to_ascii_uppercase(), layout);
    }

    pub fn layout_for(&self, country: Option<&str>) -> AddressLayout {
        country
            .and_then(|c| self.layouts.get(&c.to_ascii_uppercase()))
            .copied()
            .unwrap_or(self.fallback)
    }
}

fn joined(parts: &[Option<&str>]) -> Option<String> {
    let parts: Vec<_> = parts.iter().flatten().copied().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Display lines of an address, empty fields omitted.
pub fn address_lines<C>(address: &Address, countries: &C, layout: AddressLayout) -> Vec<String>
where
    C: CountryNameLookup + ?Sized,
{
    use AddressField as F;
    let line1 = address.get(F::Line1).map(ToString::to_string);
    let line2 = address.get(F::Line2).map(ToString::to_string);
    let city = address.get(F::City);
    let region = address.get(F::Region);
    let postcode = address.get(F::Postcode);
    let country = address
        .get(F::Country)
        .map(|code| country_display_name(countries, code));
    let middle = match layout {
        AddressLayout::Generic => vec![
            city.map(ToString::to_string),
            region.map(ToString::to_string),
            postcode.map(ToString::to_string),
        ],
        AddressLayout::PostcodeCity => vec![
            joined(&[postcode, city]),
            region.map(ToString::to_string),
        ],
        AddressLayout::CityRegionPostcode => vec![joined(&[city, region, postcode])],
        AddressLayout::PostTown => vec![
            city.map(str::to_uppercase),
            region.map(ToString::to_string),
            postcode.map(ToString::to_string),
        ],
    };
    [line1, line2]
        .into_iter()
        .chain(middle)
        .chain(std::iter::once(country))
        .flatten()
        .collect()
}

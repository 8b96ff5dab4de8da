use crate::{
    entities::*,
    usecases::{AddressSettings, AllowedValues},
};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressInvalidation {
    #[error("The postcode does not match the required format")]
    Postcode,
    #[error("The region is not allowed")]
    Region,
    #[error("The country is not allowed")]
    Country,
    #[error(transparent)]
    CountryCode(#[from] CountryCodeParseError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateInvalidation {
    #[error("Missing latitude")]
    MissingLatitude,
    #[error("Missing longitude")]
    MissingLongitude,
    #[error(transparent)]
    Range(#[from] CoordinateRangeError),
}

fn is_allowed(allowed: &AllowedValues, value: &str, eq: impl Fn(&str, &str) -> bool) -> bool {
    match allowed {
        AllowedValues::Free => true,
        AllowedValues::Literal(literal) => eq(literal, value),
        AllowedValues::OneOf(values) => values.iter().any(|v| eq(v, value)),
    }
}

/// Checks an address against the configured constraints.
/// Empty fields are always accepted.
pub fn validate_address(
    settings: &AddressSettings,
    address: &Address,
) -> Result<(), AddressInvalidation> {
    if let (Some(postcode), Some(pattern)) = (
        address.get(AddressField::Postcode),
        settings.postcode_pattern(),
    ) {
        if !pattern.is_match(postcode) {
            return Err(AddressInvalidation::Postcode);
        }
    }
    if let Some(region) = address.get(AddressField::Region) {
        if !is_allowed(settings.allowed_regions(), region, |a, b| a == b) {
            return Err(AddressInvalidation::Region);
        }
    }
    if let Some(country) = address.get(AddressField::Country) {
        let code: CountryCode = country.parse()?;
        if code.name().is_none() {
            return Err(CountryCodeParseError(country.to_string()).into());
        }
        if !is_allowed(settings.allowed_countries(), code.as_str(), |a, b| {
            a.eq_ignore_ascii_case(b)
        }) {
            return Err(AddressInvalidation::Country);
        }
    }
    Ok(())
}

impl Validate for Coordinate {
    type Error = CoordinateInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        Coordinate::try_manual(self.lat, self.lng)?;
        Ok(())
    }
}

impl AutoCorrect for Address {
    fn auto_correct(self) -> Self {
        let trimmed = |x: Option<String>| {
            x.map(|x| x.trim().to_string())
                .filter(|x| !x.is_empty())
        };
        Self {
            line1: trimmed(self.line1),
            line2: trimmed(self.line2),
            city: trimmed(self.city),
            region: trimmed(self.region),
            postcode: trimmed(self.postcode),
            country: trimmed(self.country).map(|c| c.to_ascii_uppercase()),
        }
    }
}

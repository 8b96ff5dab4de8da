use crate::entities::*;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Postcodes are numeric unless configured otherwise.
    pub static ref DEFAULT_POSTCODE_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// How users may enter a region or country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedValues {
    /// Any value can be entered.
    #[default]
    Free,
    /// The value is fixed and not editable.
    Literal(String),
    /// The value has to be picked from the list.
    OneOf(Vec<String>),
}

impl AllowedValues {
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid postcode pattern: {0}")]
    PostcodePattern(#[from] regex::Error),
    #[error("The list of allowed {0} is empty")]
    EmptyList(&'static str),
    #[error("The fixed {0} is empty")]
    EmptyLiteral(&'static str),
    #[error(transparent)]
    CountryCode(#[from] CountryCodeParseError),
}

/// Validation and input configuration of the address fields.
#[derive(Debug, Clone)]
pub struct AddressSettings {
    allowed_regions: AllowedValues,
    allowed_countries: AllowedValues,
    postcode_pattern: Option<Regex>,
}

impl Default for AddressSettings {
    fn default() -> Self {
        Self {
            allowed_regions: AllowedValues::Free,
            allowed_countries: AllowedValues::Free,
            postcode_pattern: Some(DEFAULT_POSTCODE_REGEX.clone()),
        }
    }
}

fn check_allowed(allowed: &AllowedValues, what: &'static str) -> Result<(), SettingsError> {
    match allowed {
        AllowedValues::Free => Ok(()),
        AllowedValues::Literal(v) if v.trim().is_empty() => Err(SettingsError::EmptyLiteral(what)),
        AllowedValues::Literal(_) => Ok(()),
        AllowedValues::OneOf(values) if values.is_empty() => Err(SettingsError::EmptyList(what)),
        AllowedValues::OneOf(_) => Ok(()),
    }
}

fn parse_country(code: &str) -> Result<String, SettingsError> {
    let code: CountryCode = code.parse()?;
    if code.name().is_none() {
        return Err(CountryCodeParseError(code.to_string()).into());
    }
    Ok(code.to_string())
}

impl AddressSettings {
    pub fn try_new(
        allowed_regions: AllowedValues,
        allowed_countries: AllowedValues,
        postcode_pattern: Option<&str>,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.set_allowed_regions(allowed_regions)?;
        settings.set_allowed_countries(allowed_countries)?;
        settings.set_postcode_regex(postcode_pattern)?;
        Ok(settings)
    }

    pub fn allowed_regions(&self) -> &AllowedValues {
        &self.allowed_regions
    }

    pub fn allowed_countries(&self) -> &AllowedValues {
        &self.allowed_countries
    }

    pub fn postcode_pattern(&self) -> Option<&Regex> {
        self.postcode_pattern.as_ref()
    }

    pub fn set_allowed_regions(&mut self, regions: AllowedValues) -> Result<(), SettingsError> {
        check_allowed(&regions, "regions")?;
        self.allowed_regions = regions;
        Ok(())
    }

    /// Country codes are normalized to upper case.
    pub fn set_allowed_countries(&mut self, countries: AllowedValues) -> Result<(), SettingsError> {
        check_allowed(&countries, "countries")?;
        self.allowed_countries = match countries {
            AllowedValues::Free => AllowedValues::Free,
            AllowedValues::Literal(code) => AllowedValues::Literal(parse_country(&code)?),
            AllowedValues::OneOf(codes) => AllowedValues::OneOf(
                codes
                    .iter()
                    .map(|c| parse_country(c))
                    .collect::<Result<_, _>>()?,
            ),
        };
        Ok(())
    }

    /// `None` disables postcode validation.
    pub fn set_postcode_regex(&mut self, pattern: Option<&str>) -> Result<(), SettingsError> {
        self.postcode_pattern = pattern.map(Regex::new).transpose()?;
        Ok(())
    }

    /// Pre-fills fixed values into a new address.
    pub fn populate_defaults(&self, address: &mut Address) {
        if let Some(region) = self.allowed_regions.literal() {
            address.region = Some(region.to_string());
        }
        if let Some(country) = self.allowed_countries.literal() {
            address.country = Some(country.to_string());
        }
    }
}

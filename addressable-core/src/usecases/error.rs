use crate::{
    repositories,
    util::validate::{AddressInvalidation, CoordinateInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The postcode is invalid")]
    Postcode,
    #[error("The region is not allowed")]
    Region,
    #[error("The country is not allowed")]
    Country,
    #[error("Invalid country code")]
    CountryCode,
    #[error("Missing latitude")]
    MissingLatitude,
    #[error("Missing longitude")]
    MissingLongitude,
    #[error("Invalid position")]
    InvalidPosition,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<AddressInvalidation> for Error {
    fn from(err: AddressInvalidation) -> Self {
        match err {
            AddressInvalidation::Postcode => Self::Postcode,
            AddressInvalidation::Region => Self::Region,
            AddressInvalidation::Country => Self::Country,
            AddressInvalidation::CountryCode(_) => Self::CountryCode,
        }
    }
}

impl From<CoordinateInvalidation> for Error {
    fn from(err: CoordinateInvalidation) -> Self {
        match err {
            CoordinateInvalidation::MissingLatitude => Self::MissingLatitude,
            CoordinateInvalidation::MissingLongitude => Self::MissingLongitude,
            CoordinateInvalidation::Range(_) => Self::InvalidPosition,
        }
    }
}

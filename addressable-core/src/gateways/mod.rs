pub mod country;
pub mod geocode;

use thiserror::Error;

/// Geographic position of a host record.
///
/// While `manually_set` is `true` the position has been asserted
/// by a user and must not be replaced by automatic geocoding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    pub manually_set: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateRangeError {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
}

impl Coordinate {
    pub const COLUMN_LAT: &'static str = "coordinate_lat";
    pub const COLUMN_LNG: &'static str = "coordinate_lng";
    pub const COLUMN_MANUALLY_SET: &'static str = "coordinate_manually_set";

    const LAT_DEG_MAX: f64 = 90.0;
    const LNG_DEG_MAX: f64 = 180.0;

    /// A position resolved by a geocoding provider.
    pub const fn geocoded(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            manually_set: false,
        }
    }

    /// A position entered by a user.
    pub fn try_manual(lat: f64, lng: f64) -> Result<Self, CoordinateRangeError> {
        if !(-Self::LAT_DEG_MAX..=Self::LAT_DEG_MAX).contains(&lat) {
            return Err(CoordinateRangeError::Latitude);
        }
        if !(-Self::LNG_DEG_MAX..=Self::LNG_DEG_MAX).contains(&lng) {
            return Err(CoordinateRangeError::Longitude);
        }
        Ok(Self {
            lat,
            lng,
            manually_set: true,
        })
    }

    pub fn lat_lng(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Both components are zero, i.e. nothing has been resolved yet.
    pub fn is_origin(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

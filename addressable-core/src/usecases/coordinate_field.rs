use crate::{entities::*, util::validate::CoordinateInvalidation};
use std::collections::HashMap;

pub const MANUALLY_SET_HELP: &str = "By ticking this box, you can update the location by \
dragging and dropping the marker on the map. While this box is ticked, the location will \
not update automatically when the address changes.";

const DEFAULT_MAP_WIDTH: &str = "400px";
const DEFAULT_MAP_HEIGHT: &str = "250px";
const DEFAULT_ZOOM: u8 = 11;
const MAX_ZOOM: u8 = 12;

/// Values accepted by [`CoordinateField::set_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Coordinate(Coordinate),
    /// Submitted form data with the keys `lat`, `lng` and `manually_set`.
    Map(HashMap<String, String>),
}

impl From<Coordinate> for FieldValue {
    fn from(from: Coordinate) -> Self {
        Self::Coordinate(from)
    }
}

impl From<HashMap<String, String>> for FieldValue {
    fn from(from: HashMap<String, String>) -> Self {
        Self::Map(from)
    }
}

fn is_checked(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "off" | "no"
    )
}

fn parse_number(value: Option<&String>) -> Option<f64> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .filter(|v: &f64| v.is_finite())
}

fn normalize_width(width: &str) -> String {
    if width.contains("px") || width.contains('%') {
        width.to_string()
    } else {
        format!("{width}px")
    }
}

fn normalize_height(height: &str) -> String {
    if height.contains("px") && !height.contains('%') {
        height.to_string()
    } else {
        format!("{}px", height.replace('%', ""))
    }
}

/// Composite input for the coordinate of a host record.
///
/// Consists of a latitude, a longitude and a "manually set" checkbox.
/// Only a ticked checkbox lets the edited numbers reach the record,
/// otherwise the coordinate is left to automatic geocoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateField {
    name: String,
    title: String,
    value: Option<Coordinate>,
    lat: Option<f64>,
    lng: Option<f64>,
    manually_set: bool,
    start_lat: f64,
    start_lng: f64,
    map_width: String,
    map_height: String,
    zoom: u8,
}

impl CoordinateField {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            value: None,
            lat: None,
            lng: None,
            manually_set: false,
            start_lat: 0.0,
            start_lng: 0.0,
            map_width: DEFAULT_MAP_WIDTH.to_string(),
            map_height: DEFAULT_MAP_HEIGHT.to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }

    pub fn with_start(mut self, lat: f64, lng: f64) -> Self {
        self.start_lat = lat;
        self.start_lng = lng;
        self
    }

    /// Plain numbers are taken as pixels.
    pub fn with_map_size(mut self, width: &str, height: &str) -> Self {
        self.map_width = normalize_width(width);
        self.map_height = normalize_height(height);
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom.clamp(1, MAX_ZOOM);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lat_field_name(&self) -> String {
        format!("{}[Lat]", self.name)
    }

    pub fn lng_field_name(&self) -> String {
        format!("{}[Lng]", self.name)
    }

    pub fn manually_set_field_name(&self) -> String {
        format!("{}[IsManuallySet]", self.name)
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lng(&self) -> Option<f64> {
        self.lng
    }

    pub fn is_manually_set(&self) -> bool {
        self.manually_set
    }

    pub fn start(&self) -> (f64, f64) {
        (self.start_lat, self.start_lng)
    }

    pub fn map_size(&self) -> (&str, &str) {
        (&self.map_width, &self.map_height)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// The map is centered on the start position as
    /// long as the value has no location.
    pub fn should_use_start(&self) -> bool {
        self.value.map(|c| c.is_origin()).unwrap_or(true)
    }

    pub fn set_value(&mut self, value: impl Into<FieldValue>) {
        match value.into() {
            FieldValue::Coordinate(c) => {
                self.lat = Some(c.lat);
                self.lng = Some(c.lng);
                self.manually_set = c.manually_set;
                self.value = Some(c);
            }
            FieldValue::Map(map) => {
                self.lat = parse_number(map.get("lat"));
                self.lng = parse_number(map.get("lng"));
                self.manually_set = map
                    .get("manually_set")
                    .map(|v| is_checked(v))
                    .unwrap_or(false);
                self.value = match (self.lat, self.lng) {
                    (Some(lat), Some(lng)) => Some(Coordinate {
                        lat,
                        lng,
                        manually_set: self.manually_set,
                    }),
                    _ => None,
                };
            }
        }
    }

    /// Writes the field into the coordinate of the record.
    ///
    /// Without the manual flag the stored position is kept as it is
    /// and the sub-input values are ignored.
    pub fn save_into(&self, record: &mut HostRecord) -> Result<(), CoordinateInvalidation> {
        if self.manually_set {
            let lat = self.lat.ok_or(CoordinateInvalidation::MissingLatitude)?;
            let lng = self.lng.ok_or(CoordinateInvalidation::MissingLongitude)?;
            record.coordinate = Some(Coordinate::try_manual(lat, lng)?);
        } else if let Some(c) = record.coordinate.as_mut() {
            c.manually_set = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addressable_entities::builders::*;

    fn form_data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn set_value_from_coordinate() {
        let mut field = CoordinateField::new("Location", "Location");
        field.set_value(Coordinate::geocoded(51.5, -0.1));
        assert_eq!(field.lat(), Some(51.5));
        assert_eq!(field.lng(), Some(-0.1));
        assert!(!field.is_manually_set());
        assert!(!field.should_use_start());
    }

    #[test]
    fn set_value_from_form_data() {
        let mut field = CoordinateField::new("Location", "Location");
        field.set_value(form_data(&[("lat", "48.1"), ("lng", " 11.5 "), ("manually_set", "1")]));
        assert_eq!(field.lat(), Some(48.1));
        assert_eq!(field.lng(), Some(11.5));
        assert!(field.is_manually_set());

        field.set_value(form_data(&[("lat", "48.1"), ("lng", "x")]));
        assert_eq!(field.lng(), None);
        assert!(!field.is_manually_set());
        assert!(field.should_use_start());

        field.set_value(form_data(&[("manually_set", "false")]));
        assert!(!field.is_manually_set());
    }

    #[test]
    fn save_manual_coordinate() {
        let mut record = HostRecord::build().geocoded(51.5, -0.1).finish();
        let mut field = CoordinateField::new("Location", "Location");
        field.set_value(form_data(&[("lat", "48.1"), ("lng", "11.5"), ("manually_set", "on")]));
        field.save_into(&mut record).unwrap();
        assert_eq!(
            record.coordinate,
            Some(Coordinate {
                lat: 48.1,
                lng: 11.5,
                manually_set: true
            })
        );
    }

    #[test]
    fn save_without_manual_flag_keeps_stored_coordinate() {
        let mut record = HostRecord::build().manually_located(51.5, -0.1).finish();
        let mut field = CoordinateField::new("Location", "Location");
        field.set_value(form_data(&[("lat", "1.0"), ("lng", "2.0")]));
        field.save_into(&mut record).unwrap();
        assert_eq!(record.coordinate, Some(Coordinate::geocoded(51.5, -0.1)));

        let mut record = HostRecord::build().finish();
        field.save_into(&mut record).unwrap();
        assert!(record.coordinate.is_none());
    }

    #[test]
    fn invalid_manual_input_is_rejected() {
        let mut record = HostRecord::build().finish();
        let mut field = CoordinateField::new("Location", "Location");
        field.set_value(form_data(&[("lng", "11.5"), ("manually_set", "1")]));
        assert_eq!(
            field.save_into(&mut record),
            Err(CoordinateInvalidation::MissingLatitude)
        );
        field.set_value(form_data(&[("lat", "95"), ("lng", "11.5"), ("manually_set", "1")]));
        assert!(matches!(
            field.save_into(&mut record),
            Err(CoordinateInvalidation::Range(_))
        ));
        assert!(record.coordinate.is_none());
    }

    #[test]
    fn sub_field_names() {
        let field = CoordinateField::new("Location", "Location");
        assert_eq!(field.lat_field_name(), "Location[Lat]");
        assert_eq!(field.lng_field_name(), "Location[Lng]");
        assert_eq!(field.manually_set_field_name(), "Location[IsManuallySet]");
    }

    #[test]
    fn map_settings() {
        let field = CoordinateField::new("Location", "Location");
        assert_eq!(field.map_size(), ("400px", "250px"));
        assert_eq!(field.zoom(), 11);
        assert_eq!(field.start(), (0.0, 0.0));
        let field = field
            .with_map_size("600", "50%")
            .with_zoom(20)
            .with_start(52.5, 13.4);
        assert_eq!(field.map_size(), ("600px", "50px"));
        assert_eq!(field.zoom(), 12);
        assert_eq!(field.start(), (52.5, 13.4));
        let field = field.with_map_size("100%", "300");
        assert_eq!(field.map_size(), ("100%", "300px"));
    }
}

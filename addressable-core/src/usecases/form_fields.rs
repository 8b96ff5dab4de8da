use super::{coordinate_field::CoordinateField, AddressSettings, AllowedValues};
use crate::entities::*;

pub const ADDRESS_TAB: &str = "Root.Address";
pub const CONTENT_ADDRESS_TAB: &str = "Root.Content.Address";

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Numeric,
    Checkbox,
    /// Options as `(value, label)` pairs.
    Dropdown(Vec<(String, String)>),
    /// Dropdown with all known countries.
    CountryDropdown,
    Coordinate(Vec<FormField>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

/// Fields to be inserted into a tab of the edit form of a host record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGroup {
    pub tab: &'static str,
    pub fields: Vec<FormField>,
}

impl FieldGroup {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub fn address_tab(has_content_tab: bool) -> &'static str {
    if has_content_tab {
        CONTENT_ADDRESS_TAB
    } else {
        ADDRESS_TAB
    }
}

/// Field for a region or country, `None` if the value is fixed.
fn restricted_field(
    field: AddressField,
    label: &str,
    allowed: &AllowedValues,
    free: FieldKind,
    option_label: impl Fn(&str) -> String,
) -> Option<FormField> {
    let kind = match allowed {
        AllowedValues::Literal(_) => return None,
        AllowedValues::Free => free,
        AllowedValues::OneOf(values) => FieldKind::Dropdown(
            values
                .iter()
                .map(|v| (v.clone(), option_label(v)))
                .collect(),
        ),
    };
    Some(FormField::new(field.column_name(), label, kind))
}

pub fn address_form_fields(settings: &AddressSettings, has_content_tab: bool) -> FieldGroup {
    use AddressField as F;
    let mut fields = vec![
        FormField::new(F::Line1.column_name(), "Address Line 1", FieldKind::Text),
        FormField::new(F::Line2.column_name(), "Address Line 2", FieldKind::Text),
        FormField::new(F::City.column_name(), "Town/City", FieldKind::Text),
    ];
    fields.extend(restricted_field(
        F::Region,
        "County/State",
        settings.allowed_regions(),
        FieldKind::Text,
        ToString::to_string,
    ));
    fields.push(FormField::new(
        F::Postcode.column_name(),
        "Postcode",
        FieldKind::Text,
    ));
    fields.extend(restricted_field(
        F::Country,
        "Country",
        settings.allowed_countries(),
        FieldKind::CountryDropdown,
        |code| country_name(code).unwrap_or(code).to_string(),
    ));
    FieldGroup {
        tab: address_tab(has_content_tab),
        fields,
    }
}

pub fn geocoder_fields(field: &CoordinateField, has_content_tab: bool) -> FieldGroup {
    let sub_fields = vec![
        FormField::new(&field.lat_field_name(), "Latitude", FieldKind::Numeric),
        FormField::new(&field.lng_field_name(), "Longitude", FieldKind::Numeric),
        FormField::new(
            &field.manually_set_field_name(),
            "Manually set location",
            FieldKind::Checkbox,
        ),
    ];
    FieldGroup {
        tab: address_tab(has_content_tab),
        fields: vec![FormField::new(
            field.name(),
            field.title(),
            FieldKind::Coordinate(sub_fields),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(group: &FieldGroup) -> Vec<&str> {
        group.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn free_text_fields() {
        let group = address_form_fields(&AddressSettings::default(), false);
        assert_eq!(group.tab, "Root.Address");
        assert_eq!(
            names(&group),
            vec![
                "address_line1",
                "address_line2",
                "city",
                "region",
                "postcode",
                "country"
            ]
        );
        assert_eq!(group.field("region").unwrap().kind, FieldKind::Text);
        assert_eq!(
            group.field("country").unwrap().kind,
            FieldKind::CountryDropdown
        );
    }

    #[test]
    fn restricted_and_fixed_fields() {
        let settings = AddressSettings::try_new(
            AllowedValues::OneOf(vec!["NSW".into(), "VIC".into()]),
            AllowedValues::Literal("AU".into()),
            None,
        )
        .unwrap();
        let group = address_form_fields(&settings, true);
        assert_eq!(group.tab, "Root.Content.Address");
        assert!(group.field("country").is_none());
        assert_eq!(
            group.field("region").unwrap().kind,
            FieldKind::Dropdown(vec![
                ("NSW".into(), "NSW".into()),
                ("VIC".into(), "VIC".into())
            ])
        );

        let settings = AddressSettings::try_new(
            AllowedValues::Literal("NSW".into()),
            AllowedValues::OneOf(vec!["AU".into(), "NZ".into()]),
            None,
        )
        .unwrap();
        let group = address_form_fields(&settings, false);
        assert!(group.field("region").is_none());
        assert_eq!(
            group.field("country").unwrap().kind,
            FieldKind::Dropdown(vec![
                ("AU".into(), "Australia".into()),
                ("NZ".into(), "New Zealand".into())
            ])
        );
    }

    #[test]
    fn coordinate_field_group() {
        let field = CoordinateField::new("Location", "Location");
        let group = geocoder_fields(&field, false);
        assert_eq!(group.tab, ADDRESS_TAB);
        let FieldKind::Coordinate(sub_fields) = &group.field("Location").unwrap().kind else {
            panic!("not a coordinate field");
        };
        let labels: Vec<_> = sub_fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Latitude", "Longitude", "Manually set location"]);
        assert_eq!(sub_fields[2].kind, FieldKind::Checkbox);
    }
}

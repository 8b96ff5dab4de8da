use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Postal address attached to a host record.
///
/// Empty strings are treated the same as missing values.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub line1    : Option<String>,
    pub line2    : Option<String>,
    pub city     : Option<String>,
    pub region   : Option<String>,
    pub postcode : Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country  : Option<String>,
}

/// The persisted address columns in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum AddressField {
    #[strum(serialize = "address_line1")]
    Line1,
    #[strum(serialize = "address_line2")]
    Line2,
    City,
    Region,
    Postcode,
    Country,
}

impl AddressField {
    pub fn column_name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Address {
    /// Returns the value of a field if it is not empty.
    pub fn get(&self, field: AddressField) -> Option<&str> {
        use AddressField as F;
        match field {
            F::Line1 => non_empty(&self.line1),
            F::Line2 => non_empty(&self.line2),
            F::City => non_empty(&self.city),
            F::Region => non_empty(&self.region),
            F::Postcode => non_empty(&self.postcode),
            F::Country => non_empty(&self.country),
        }
    }

    pub fn set(&mut self, field: AddressField, value: Option<String>) {
        use AddressField as F;
        let slot = match field {
            F::Line1 => &mut self.line1,
            F::Line2 => &mut self.line2,
            F::City => &mut self.city,
            F::Region => &mut self.region,
            F::Postcode => &mut self.postcode,
            F::Country => &mut self.country,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        AddressField::all().all(|f| self.get(f).is_none())
    }

    /// Fields that differ from `other`, ignoring the
    /// difference between empty and missing values.
    pub fn changed_fields<'a>(&'a self, other: &'a Address) -> impl Iterator<Item = AddressField> + 'a {
        AddressField::all().filter(move |f| self.get(*f) != other.get(*f))
    }
}

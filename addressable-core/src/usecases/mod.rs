mod address_layout;
mod address_settings;
mod coordinate_field;
mod detect_changes;
mod error;
mod form_fields;
mod full_address;
mod geocode_on_save;
mod map_preview;
mod save_record;

#[cfg(test)]
pub mod tests;

pub use self::{
    address_layout::*, address_settings::*, coordinate_field::*, detect_changes::*,
    error::Error, form_fields::*, full_address::*, geocode_on_save::*, map_preview::*,
    save_record::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}

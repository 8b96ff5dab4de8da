//! # addressable-core
//!
//! Business logic for postal addresses and automatic geocoding
//! of host records. All external collaborators (storage, geocoding
//! providers, country names) are accessed through traits.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use addressable_entities::{
        address::*, coordinate::*, country::*, id::*, record::*, revision::*,
    };
}

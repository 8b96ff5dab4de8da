//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # addressable-entities
//!
//! Reusable, agnostic entities for attaching postal addresses and
//! geographic coordinates to host records.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod coordinate;
pub mod country;
pub mod id;
pub mod record;
pub mod revision;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

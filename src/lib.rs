//! # addressable
//!
//! Postal addresses for host records that are geocoded
//! automatically whenever the address changes.

pub mod config;
pub mod gateways;
mod service;

pub use self::service::AddressService;

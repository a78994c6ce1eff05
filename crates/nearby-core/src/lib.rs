//! Nearby Core - Domain models, ports, and configuration
//!
//! This crate contains the domain types shared by every Nearby crate: coordinates,
//! POI records as delivered by the external source, the static landmark catalog,
//! filter criteria, and the port definitions for the location service and the
//! POI data source.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{LocationError, NearbyError, Result};

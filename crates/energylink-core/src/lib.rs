//! Presentation logic for the EnergyLink royalty viewer.
//!
//! Everything here is independent of the UI framework: the web crate renders
//! what these modules compute and talks to the backend through [`dashboard::RoyaltyApi`].

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod fmt;
pub mod invoice_doc;
pub mod invoice_filter;
pub mod months;
pub mod records;
pub mod tables;

pub use error::{FetchError, Result};

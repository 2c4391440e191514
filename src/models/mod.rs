//! Data models shared by storage and API.

pub mod lead;

pub use lead::{EmailEntry, LeadRecord};

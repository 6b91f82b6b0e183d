//! Ports for the Font List Gateway.

pub mod outbound;

pub use outbound::FontCatalogSource;

//! Adapters for the Font List Gateway.
//!
//! Infrastructure implementations for the outbound ports.

pub mod error_conversions;
pub mod google_fonts;

pub use google_fonts::GoogleFontsClient;

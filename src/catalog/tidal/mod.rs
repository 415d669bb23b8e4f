//! Tidal Open API integration (catalog B)
//!
//! Bearer-token auth; the token request uses HTTP Basic client credentials.
//! API docs: https://developer.tidal.com/documentation

mod adapter;
mod client;
pub mod dto;

pub use adapter::to_catalog_result;
pub use client::TidalClient;

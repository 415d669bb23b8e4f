//! Deezer search via RapidAPI (catalog C)
//!
//! No login step; every request carries the RapidAPI key.

mod adapter;
mod client;
pub mod dto;

pub use adapter::to_catalog_result;
pub use client::DeezerClient;

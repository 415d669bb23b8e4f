//! Spotify Web API integration (catalog A)
//!
//! Bearer-token auth via the client-credentials flow.
//! API docs: https://developer.spotify.com/documentation/web-api

mod adapter;
mod client;
pub mod dto;

pub use adapter::to_catalog_result;
pub use client::SpotifyClient;

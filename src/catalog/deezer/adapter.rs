//! Adapter layer: Convert Deezer DTOs to domain models

use super::dto;
use crate::catalog::domain::{CatalogError, CatalogResult};

/// Map the top search hit to a catalog result.
pub fn to_catalog_result(response: dto::SearchResponse) -> Result<CatalogResult, CatalogError> {
    if let Some(error) = response.error {
        return Err(CatalogError::ApiError(error.message));
    }

    let track = response
        .data
        .into_iter()
        .next()
        .ok_or(CatalogError::NoMatches)?;

    let artist = track.artist.ok_or_else(|| CatalogError::ContractViolation {
        expected: "track artist".to_string(),
        actual: "missing".to_string(),
    })?;

    // The album object is required; its cover_xl may be absent
    let album = track.album.ok_or_else(|| CatalogError::ContractViolation {
        expected: "track album".to_string(),
        actual: "missing".to_string(),
    })?;

    Ok(CatalogResult {
        song_name: Some(track.title),
        artist: Some(artist.name),
        album_art: album.cover_xl,
        link: track.link,
    })
}

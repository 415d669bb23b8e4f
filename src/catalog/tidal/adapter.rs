//! Adapter layer: Convert Tidal DTOs to domain models

use super::dto;
use crate::catalog::domain::{CatalogError, CatalogResult};

/// Index of the cover variant we display (640x640 on current responses)
const COVER_VARIANT: usize = 1;

/// Map the top search hit to a catalog result.
pub fn to_catalog_result(response: dto::SearchResponse) -> Result<CatalogResult, CatalogError> {
    let track = response
        .tracks
        .into_iter()
        .next()
        .ok_or(CatalogError::NoMatches)?
        .resource;

    let artist = track
        .artists
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::ContractViolation {
            expected: "at least one artist".to_string(),
            actual: "empty artists list".to_string(),
        })?;

    let album = track.album.ok_or_else(|| CatalogError::ContractViolation {
        expected: "track album".to_string(),
        actual: "missing".to_string(),
    })?;
    let covers = album.image_cover.len();
    let cover = album
        .image_cover
        .into_iter()
        .nth(COVER_VARIANT)
        .ok_or_else(|| CatalogError::ContractViolation {
            expected: format!("cover variant {}", COVER_VARIANT),
            actual: format!("{} cover images", covers),
        })?;

    Ok(CatalogResult {
        song_name: Some(track.title),
        artist: Some(artist.name),
        album_art: Some(cover.url),
        link: track.tidal_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str) -> dto::Image {
        dto::Image {
            url: url.to_string(),
            width: None,
            height: None,
        }
    }

    fn make_response(covers: Vec<dto::Image>) -> dto::SearchResponse {
        dto::SearchResponse {
            tracks: vec![dto::TrackHit {
                id: Some("1".to_string()),
                status: Some(200),
                resource: dto::Track {
                    title: "Song Y".to_string(),
                    artists: vec![dto::Artist {
                        name: "Artist Y".to_string(),
                        main: Some(true),
                    }],
                    album: Some(dto::Album { image_cover: covers }),
                    tidal_url: Some("https://tidal.com/browse/track/1".to_string()),
                },
            }],
        }
    }

    #[test]
    fn test_uses_second_cover_variant() {
        let response = make_response(vec![image("https://img/1080"), image("https://img/640")]);
        let result = to_catalog_result(response).unwrap();
        assert_eq!(result.song_name.as_deref(), Some("Song Y"));
        assert_eq!(result.artist.as_deref(), Some("Artist Y"));
        assert_eq!(result.album_art.as_deref(), Some("https://img/640"));
        assert_eq!(result.link.as_deref(), Some("https://tidal.com/browse/track/1"));
    }

    #[test]
    fn test_single_cover_is_contract_violation() {
        let response = make_response(vec![image("https://img/1080")]);
        let result = to_catalog_result(response);
        assert!(matches!(result, Err(CatalogError::ContractViolation { .. })));
    }

    #[test]
    fn test_missing_album_is_contract_violation() {
        let mut response = make_response(vec![]);
        response.tracks[0].resource.album = None;
        let result = to_catalog_result(response);
        assert!(matches!(result, Err(CatalogError::ContractViolation { .. })));
    }

    #[test]
    fn test_missing_link_leaves_link_absent() {
        let mut response = make_response(vec![image("https://img/1080"), image("https://img/640")]);
        response.tracks[0].resource.tidal_url = None;
        let result = to_catalog_result(response).unwrap();
        assert_eq!(result.song_name.as_deref(), Some("Song Y"));
        assert!(result.link.is_none());
    }

    #[test]
    fn test_no_tracks_is_no_match() {
        let response = dto::SearchResponse { tracks: vec![] };
        assert!(matches!(to_catalog_result(response), Err(CatalogError::NoMatches)));
    }
}

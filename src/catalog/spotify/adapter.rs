//! Adapter layer: Convert Spotify DTOs to domain models

use super::dto;
use crate::catalog::domain::{CatalogError, CatalogResult};

/// Map the top search hit to a catalog result.
pub fn to_catalog_result(response: dto::SearchResponse) -> Result<CatalogResult, CatalogError> {
    let track = response
        .tracks
        .items
        .into_iter()
        .next()
        .ok_or(CatalogError::NoMatches)?;

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
    let image = album
        .images
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::ContractViolation {
            expected: "at least one album image".to_string(),
            actual: "empty images list".to_string(),
        })?;

    Ok(CatalogResult {
        song_name: Some(track.name),
        artist: Some(artist.name),
        album_art: Some(image.url),
        link: track.external_urls.spotify,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_track(artists: Vec<&str>, images: Vec<&str>) -> dto::Track {
        dto::Track {
            name: "Song Z".to_string(),
            artists: artists
                .into_iter()
                .map(|name| dto::Artist {
                    name: name.to_string(),
                })
                .collect(),
            album: Some(dto::Album {
                images: images
                    .into_iter()
                    .map(|url| dto::Image {
                        url: url.to_string(),
                        width: None,
                        height: None,
                    })
                    .collect(),
            }),
            external_urls: dto::ExternalUrls {
                spotify: Some("https://open.spotify.com/track/1".to_string()),
            },
        }
    }

    fn make_response(items: Vec<dto::Track>) -> dto::SearchResponse {
        dto::SearchResponse {
            tracks: dto::Paging { items, total: None },
        }
    }

    #[test]
    fn test_first_artist_and_first_image() {
        let response = make_response(vec![make_track(
            vec!["Artist Q", "Featured"],
            vec!["https://img/large", "https://img/small"],
        )]);

        let result = to_catalog_result(response).unwrap();
        assert_eq!(result.song_name.as_deref(), Some("Song Z"));
        assert_eq!(result.artist.as_deref(), Some("Artist Q"));
        assert_eq!(result.album_art.as_deref(), Some("https://img/large"));
        assert_eq!(result.link.as_deref(), Some("https://open.spotify.com/track/1"));
    }

    #[test]
    fn test_no_items_is_no_match() {
        let result = to_catalog_result(make_response(vec![]));
        assert!(matches!(result, Err(CatalogError::NoMatches)));
    }

    #[test]
    fn test_missing_artist_is_contract_violation() {
        let response = make_response(vec![make_track(vec![], vec!["https://img/large"])]);
        let result = to_catalog_result(response);
        assert!(matches!(result, Err(CatalogError::ContractViolation { .. })));
    }

    #[test]
    fn test_missing_images_is_contract_violation() {
        let response = make_response(vec![make_track(vec!["Artist Q"], vec![])]);
        let result = to_catalog_result(response);
        assert!(matches!(result, Err(CatalogError::ContractViolation { .. })));
    }

    #[test]
    fn test_missing_album_is_contract_violation() {
        let mut track = make_track(vec!["Artist Q"], vec!["https://img/large"]);
        track.album = None;
        let result = to_catalog_result(make_response(vec![track]));
        assert!(matches!(result, Err(CatalogError::ContractViolation { .. })));
    }

    #[test]
    fn test_missing_link_leaves_link_absent() {
        let mut track = make_track(vec!["Artist Q"], vec!["https://img/large"]);
        track.external_urls.spotify = None;
        let result = to_catalog_result(make_response(vec![track])).unwrap();
        assert_eq!(result.song_name.as_deref(), Some("Song Z"));
        assert!(result.link.is_none());
    }
}

//! One-shot lookup and catalog commands.

use tokio::runtime::Runtime;

use crate::catalog::{self, Catalog, CatalogResult, MergedMetadata};
use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::lookup::{LookupStore, SongRecord, vibe_id_for};

use super::{build_aggregator, build_lookup};

/// Print the song and vibe rows for a music ID
pub fn cmd_lookup(rt: &Runtime, config: &Config, music_id: i64) -> anyhow::Result<()> {
    let http_client = catalog::http_client()?;
    let lookup = build_lookup(config, &http_client);

    rt.block_on(async {
        print_song_row(&lookup, music_id).await?;
        print_vibe_row(&lookup, music_id).await;
        Ok::<_, anyhow::Error>(())
    })
}

/// Look a music ID up in the song table, then resolve it through the catalogs
pub fn cmd_resolve(rt: &Runtime, config: &Config, music_id: i64) -> anyhow::Result<()> {
    let http_client = catalog::http_client()?;
    let lookup = build_lookup(config, &http_client);
    let aggregator = build_aggregator(config, http_client);

    rt.block_on(async {
        let song = print_song_row(&lookup, music_id).await?;
        print_vibe_row(&lookup, music_id).await;
        println!();

        match aggregator.resolve(&song.song_name, &song.artist).await {
            Some(metadata) => print_metadata(&metadata),
            None => println!("✗ No catalog knows this song"),
        }
        Ok::<_, anyhow::Error>(())
    })
}

/// Query every catalog for a title and artist, then show the merged result
pub fn cmd_search(rt: &Runtime, config: &Config, title: &str, artist: &str) -> anyhow::Result<()> {
    let http_client = catalog::http_client()?;
    let aggregator = build_aggregator(config, http_client);

    rt.block_on(async {
        println!("Searching for {:?} by {:?}", title, artist);
        println!();

        let results = aggregator.query_all(title, artist).await;
        for (catalog, result) in aggregator.catalogs().into_iter().zip(&results) {
            print_catalog_result(catalog, result);
        }

        let [spotify, tidal, deezer] = results;
        println!();
        match catalog::merge(spotify, tidal, deezer) {
            Some(metadata) => print_metadata(&metadata),
            None => println!("✗ Neither Spotify nor Tidal knows this song"),
        }
    });
    Ok(())
}

async fn print_song_row(lookup: &LookupStore, music_id: i64) -> Result<SongRecord> {
    let song = lookup
        .lookup_song(music_id)
        .await
        .with_context(format!("looking up music ID {}", music_id))?;
    println!("Song {}: {} by {}", music_id, song.song_name, song.artist);
    Ok(song)
}

async fn print_vibe_row(lookup: &LookupStore, music_id: i64) {
    let vibe_id = vibe_id_for(music_id);
    match lookup.lookup_vibe(vibe_id).await {
        Ok(vibe) => println!(
            "Vibe {}: {} ({} / {})",
            vibe_id, vibe.vibe_name, vibe.primary_colour, vibe.secondary_colour
        ),
        Err(e) => println!("Vibe {}: {}", vibe_id, e),
    }
}

fn print_catalog_result(catalog: Catalog, result: &CatalogResult) {
    if result.is_empty() {
        println!("  {:<8} (no match)", catalog);
        return;
    }
    println!(
        "  {:<8} {} by {}",
        catalog,
        result.song_name.as_deref().unwrap_or("?"),
        result.artist.as_deref().unwrap_or("?")
    );
    if let Some(link) = &result.link {
        println!("           {}", link);
    }
}

fn print_metadata(metadata: &MergedMetadata) {
    println!("✓ {} by {}", metadata.song_name, metadata.artist);
    if let Some(art) = &metadata.album_art {
        println!("  Art:     {}", art);
    }
    for (catalog, link) in metadata.links() {
        println!("  {:<8} {}", catalog, link.unwrap_or("offline"));
    }
}

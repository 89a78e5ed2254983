//! Fetch command implementation
//!
//! Downloads creature sprite archives from the sprite server (or reuses the
//! local cache), extracts the preferred animation sheet for each entity,
//! crops it to its valid direction grid, and writes one PNG per entity plus
//! a manifest describing the frame geometry.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::blocking::Client;
use thiserror::Error;

use spritepipe_core::png::{write_rgba, PngConfig};
use spritepipe_core::{
    extract_direction_grid, parse_anim_data, select_track, write_manifest, SpriteRecord,
};

use crate::archive::{read_archive_member, ArchiveError};
use crate::cache::ArchiveCache;
use crate::names::display_name;
use crate::remote::{archive_url, fetch_bytes};

/// Entity ids imported when the invocation names none.
pub const DEFAULT_IDS: &[u32] = &[1, 4, 7, 25, 133, 150];

/// Name of the metadata document inside every sprite archive.
const ANIM_DATA_MEMBER: &str = "AnimData.xml";

/// Why a single entity failed to import. Each of these is a per-entity
/// outcome; none of them aborts the run.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("no usable animation track in metadata")]
    NoTrack,

    #[error("failed to decode animation sheet: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to write sheet: {0}")]
    Write(#[from] spritepipe_core::png::PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Import one entity: archive → metadata → track → sheet → cropped PNG.
///
/// Prints per-step status lines; returns the manifest record on success or
/// the categorized reason the entity was skipped.
pub fn process_entity(
    client: &Client,
    cache: &ArchiveCache,
    out_dir: &Path,
    id: u32,
) -> Result<SpriteRecord, ImportError> {
    let zip_bytes = match cache.load(id) {
        Some(bytes) => {
            println!("  {} using cached archive", "·".dimmed());
            bytes
        }
        None => {
            let url = archive_url(id);
            let bytes = fetch_bytes(client, &url)?;
            cache.store(id, &bytes)?;
            println!("  {} downloaded and cached {}", "·".dimmed(), url);
            bytes
        }
    };

    let anim_xml = read_archive_member(&zip_bytes, ANIM_DATA_MEMBER)?;
    let tracks = parse_anim_data(&anim_xml);
    if tracks.is_empty() {
        println!(
            "  {} no parsable animation metadata",
            "WARN".yellow().bold()
        );
    }
    let track = select_track(&tracks).ok_or(ImportError::NoTrack)?.clone();
    println!(
        "  {} track '{}': {}x{}, {} frames",
        "·".dimmed(),
        track.name,
        track.frame_width,
        track.frame_height,
        track.frame_count
    );

    let sheet_member = format!("{}-Anim.png", track.name);
    let sheet_bytes = read_archive_member(&zip_bytes, &sheet_member)?;
    let raw_sheet = image::load_from_memory(&sheet_bytes)?.to_rgba8();

    let source_dims = raw_sheet.dimensions();
    let (sheet, directions) = extract_direction_grid(raw_sheet, &track);
    if sheet.dimensions() == source_dims {
        println!(
            "  {} keeping full sheet: {} directions x {} frames",
            "·".dimmed(),
            directions,
            track.frame_count
        );
    } else {
        println!(
            "  {} cropped to {}x{}: {} directions x {} frames",
            "·".dimmed(),
            sheet.width(),
            sheet.height(),
            directions,
            track.frame_count
        );
    }

    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(format!("{}.png", id));
    write_rgba(&sheet, &out_path, &PngConfig::default())?;
    println!("  {} saved {}", "·".dimmed(), out_path.display());

    Ok(SpriteRecord {
        id: id.to_string(),
        name: display_name(id),
        path: format!("assets/sprites/{}.png", id),
        frame_width: track.frame_width,
        frame_height: track.frame_height,
        frame_count: track.frame_count,
        directions,
    })
}

/// Resolve the entity id list: `--ids` overrides positional ids, and no ids
/// at all means the default list.
pub fn resolve_ids(positional: &[u32], ids_flag: Option<&str>) -> Result<Vec<u32>> {
    if let Some(list) = ids_flag {
        return list
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u32>()
                    .with_context(|| format!("invalid entity id in --ids: '{}'", part.trim()))
            })
            .collect();
    }
    if !positional.is_empty() {
        return Ok(positional.to_vec());
    }
    Ok(DEFAULT_IDS.to_vec())
}

/// Run the fetch command
///
/// # Arguments
/// * `positional` - Entity ids given as positional arguments
/// * `ids_flag` - Comma-separated id list overriding the positional ids
/// * `out_dir` - Directory receiving one PNG per entity
/// * `manifest` - Path of the JSON manifest to (re)write
/// * `cache_dir` - Directory holding cached sprite archives
///
/// # Returns
/// Exit code: 0 if every entity succeeded, 1 if any failed
pub fn run(
    positional: &[u32],
    ids_flag: Option<&str>,
    out_dir: &str,
    manifest: &str,
    cache_dir: &str,
) -> Result<ExitCode> {
    let ids = resolve_ids(positional, ids_flag)?;

    let client = crate::remote::build_client().context("failed to build HTTP client")?;
    let cache = ArchiveCache::new(cache_dir);
    let out_path = Path::new(out_dir);

    println!("{}", "======================================".cyan());
    println!("{}", "  spritepipe sprite importer".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {:?}", "Entity ids:".blue().bold(), ids);
    println!("{} {}", "Output directory:".blue().bold(), out_dir);
    println!("{} {}", "Cache directory:".blue().bold(), cache_dir);
    println!();

    // Sequential, one entity at a time; each outcome is inspected, never
    // thrown.
    let mut outcomes: Vec<(u32, Result<SpriteRecord, ImportError>)> = Vec::new();
    for &id in &ids {
        println!(
            "{} #{} ({})",
            "Processing".cyan().bold(),
            id,
            display_name(id)
        );
        let outcome = process_entity(&client, &cache, out_path, id);
        match &outcome {
            Ok(record) => println!("  {} {}", "SUCCESS".green().bold(), record.path),
            Err(err) => println!("  {} {}", "FAILED".red().bold(), err),
        }
        println!();
        outcomes.push((id, outcome));
    }

    let records: Vec<SpriteRecord> = outcomes
        .iter()
        .filter_map(|(_, outcome)| outcome.as_ref().ok().cloned())
        .collect();

    if !records.is_empty() {
        let manifest_path = Path::new(manifest);
        write_manifest(&records, manifest_path)
            .with_context(|| format!("failed to write manifest: {}", manifest))?;
        println!(
            "{} Manifest written to {}",
            "INFO".blue().bold(),
            manifest
        );
    }

    let failed: Vec<_> = outcomes
        .iter()
        .filter(|(_, outcome)| outcome.is_err())
        .collect();

    println!();
    println!("{}", "======================================".cyan());
    println!(
        "{} Processed {}/{} entities",
        "Summary:".cyan().bold(),
        records.len(),
        ids.len()
    );
    if !failed.is_empty() {
        println!("{}", "Failed entities:".red().bold());
        for (id, outcome) in &failed {
            if let Err(err) = outcome {
                println!("  - #{} ({}): {}", id, display_name(*id), err);
            }
        }
        return Ok(ExitCode::from(1));
    }

    Ok(ExitCode::SUCCESS)
}

//! Frame loading for the local sheet builder.
//!
//! Input is either a single image file or a directory of stills. Single
//! files are dispatched by sniffing the actual byte format rather than
//! trusting the extension: an animated GIF contributes all of its frames,
//! anything else decodable contributes exactly one.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, RgbaImage};

/// Extensions recognized when scanning a directory of stills.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff"];

/// Load the ordered frame set for `input`.
///
/// Fatal conditions (missing path, unrecognized format, directory without
/// images) surface as errors; a single undecodable file inside a directory
/// is only a warning and is skipped.
pub fn load_frames(input: &Path) -> Result<Vec<RgbaImage>> {
    if input.is_file() {
        load_file(input)
    } else if input.is_dir() {
        load_dir(input)
    } else {
        bail!("input not found: {}", input.display());
    }
}

fn load_file(path: &Path) -> Result<Vec<RgbaImage>> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read input: {}", path.display()))?;

    let format = image::guess_format(&bytes)
        .with_context(|| format!("unrecognized image format: {}", path.display()))?;

    if format == ImageFormat::Gif {
        return decode_gif_frames(&bytes)
            .with_context(|| format!("failed to decode GIF: {}", path.display()));
    }

    let still = image::load_from_memory_with_format(&bytes, format)
        .with_context(|| format!("failed to decode image: {}", path.display()))?;
    Ok(vec![still.to_rgba8()])
}

fn decode_gif_frames(bytes: &[u8]) -> Result<Vec<RgbaImage>> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;
    if frames.is_empty() {
        bail!("GIF contains no frames");
    }
    Ok(frames.into_iter().map(|f| f.into_buffer()).collect())
}

fn load_dir(dir: &Path) -> Result<Vec<RgbaImage>> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| has_image_extension(path))
        .collect();

    if files.is_empty() {
        bail!("no image files found in {}", dir.display());
    }

    // Alphanumeric filename order defines frame order.
    files.sort();

    let mut frames = Vec::with_capacity(files.len());
    for path in &files {
        match image::open(path) {
            Ok(img) => frames.push(img.to_rgba8()),
            Err(err) => println!(
                "{} could not open {}: {}",
                "WARN".yellow().bold(),
                path.display(),
                err
            ),
        }
    }

    if frames.is_empty() {
        bail!("no decodable image files in {}", dir.display());
    }
    Ok(frames)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

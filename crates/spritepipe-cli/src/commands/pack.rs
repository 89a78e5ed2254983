//! Pack command implementation
//!
//! Builds a sprite sheet from a GIF or a directory of still images,
//! arranging the frames into a row-major direction grid and printing the
//! manifest fragment for the packed sheet.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use spritepipe_core::png::{write_rgba, PngConfig};
use spritepipe_core::{manifest_snippet, pack_frames, SpriteRecord};

use crate::frames::load_frames;

/// Run the pack command
///
/// # Arguments
/// * `input` - Path to a GIF file or a directory of still images
/// * `output` - Output path for the packed sheet
/// * `rows` - Number of direction rows in the grid
///
/// # Returns
/// Exit code: 0 success, 1 on any fatal input error
pub fn run(input: &str, output: &str, rows: u32) -> Result<ExitCode> {
    let input_path = Path::new(input);
    let output_path = Path::new(output);

    let frames = load_frames(input_path)?;
    println!(
        "{} Loaded {} frames from {}",
        "INFO".blue().bold(),
        frames.len(),
        input
    );

    let sheet = pack_frames(&frames, rows)?;
    for warning in &sheet.warnings {
        println!("{} {}", "WARN".yellow().bold(), warning);
    }

    write_rgba(&sheet.image, output_path, &PngConfig::default())
        .with_context(|| format!("failed to write sheet: {}", output))?;
    println!(
        "{} Sheet saved to {} ({}x{}, {} cols x {} rows)",
        "SUCCESS".green().bold(),
        output,
        sheet.image.width(),
        sheet.image.height(),
        sheet.cols,
        sheet.rows
    );

    let file_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.to_string());
    let record = SpriteRecord {
        id: "TODO_KEY_NAME".to_string(),
        name: String::new(),
        path: format!("assets/sprites/{}", file_name),
        frame_width: sheet.frame_width,
        frame_height: sheet.frame_height,
        frame_count: sheet.cols,
        directions: sheet.rows,
    };

    println!();
    println!("{}", "Manifest JSON snippet:".cyan().bold());
    println!("{}", manifest_snippet(&record));

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn test_pack_directory_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..10u8 {
            let img = RgbaImage::from_pixel(8, 8, Rgba([i, i, i, 255]));
            img.save_with_format(dir.path().join(format!("f{:02}.png", i)), ImageFormat::Png)
                .unwrap();
        }

        let out = dir.path().join("sheet.png");
        let code = run(
            dir.path().to_str().unwrap(),
            out.to_str().unwrap(),
            4,
        )
        .unwrap();
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::SUCCESS));

        // 10 frames over 4 rows: 3 cols, last two cells transparent.
        let sheet = image::open(&out).unwrap().to_rgba8();
        assert_eq!(sheet.dimensions(), (3 * 8, 4 * 8));
        assert_eq!(sheet.get_pixel(0, 3 * 8), &Rgba([9, 9, 9, 255]));
        assert_eq!(sheet.get_pixel(8, 3 * 8), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_pack_missing_input_is_fatal() {
        assert!(run("/nonexistent/input", "out.png", 8).is_err());
    }
}

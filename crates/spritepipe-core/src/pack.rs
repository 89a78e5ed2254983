//! Row-major sheet packing for the local sheet builder.
//!
//! Packs an ordered set of frames into a single grid canvas: rows are facing
//! directions, columns are animation frames. Placement is purely arithmetic
//! so identical input always yields identical geometry.

use image::{imageops, RgbaImage};
use thiserror::Error;

/// Errors from sheet packing.
#[derive(Debug, Error)]
pub enum PackError {
    /// Nothing to pack; fatal for the invocation.
    #[error("frame set is empty")]
    EmptyFrameSet,

    /// Row count must be at least 1.
    #[error("row count must be positive")]
    ZeroRows,
}

/// Non-fatal conditions noticed while packing; the caller decides how to
/// surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackWarning {
    /// Frame `index` had `actual` dimensions and was stretched to `base`.
    FrameResized {
        index: usize,
        actual: (u32, u32),
        base: (u32, u32),
    },
    /// `total` frames do not fill `rows` rows evenly; the last row is left
    /// partially transparent.
    UnevenRows { total: usize, rows: u32 },
}

impl std::fmt::Display for PackWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackWarning::FrameResized {
                index,
                actual,
                base,
            } => write!(
                f,
                "frame {} is {}x{}, resizing to {}x{}",
                index, actual.0, actual.1, base.0, base.1
            ),
            PackWarning::UnevenRows { total, rows } => write!(
                f,
                "{} frames do not divide evenly into {} rows; last row will be incomplete",
                total, rows
            ),
        }
    }
}

/// A packed sheet canvas plus the geometry the manifest needs.
#[derive(Debug)]
pub struct PackedSheet {
    /// The assembled canvas.
    pub image: RgbaImage,
    /// Width of one cell in pixels.
    pub frame_width: u32,
    /// Height of one cell in pixels.
    pub frame_height: u32,
    /// Columns (frames per direction).
    pub cols: u32,
    /// Rows (directions).
    pub rows: u32,
    /// Non-fatal conditions noticed while packing.
    pub warnings: Vec<PackWarning>,
}

/// Pack `frames` into a `rows`-row grid, row-major.
///
/// Cell size is the first frame's size; frames that differ are stretched to
/// match with nearest-neighbor sampling (these are pixel sprites). Cells past
/// the last frame stay fully transparent.
pub fn pack_frames(frames: &[RgbaImage], rows: u32) -> Result<PackedSheet, PackError> {
    if frames.is_empty() {
        return Err(PackError::EmptyFrameSet);
    }
    if rows == 0 {
        return Err(PackError::ZeroRows);
    }

    let (frame_width, frame_height) = frames[0].dimensions();
    let total = frames.len();
    let cols = (total as u32).div_ceil(rows);

    let mut warnings = Vec::new();
    if total as u32 % rows != 0 {
        warnings.push(PackWarning::UnevenRows { total, rows });
    }

    // RgbaImage::new zeroes the buffer, so the canvas starts transparent.
    let mut canvas = RgbaImage::new(cols * frame_width, rows * frame_height);

    for (i, frame) in frames.iter().enumerate() {
        let resized;
        let frame = if frame.dimensions() == (frame_width, frame_height) {
            frame
        } else {
            warnings.push(PackWarning::FrameResized {
                index: i,
                actual: frame.dimensions(),
                base: (frame_width, frame_height),
            });
            resized = imageops::resize(
                frame,
                frame_width,
                frame_height,
                imageops::FilterType::Nearest,
            );
            &resized
        };

        let row = i as u32 / cols;
        let col = i as u32 % cols;
        imageops::replace(
            &mut canvas,
            frame,
            (col * frame_width) as i64,
            (row * frame_height) as i64,
        );
    }

    Ok(PackedSheet {
        image: canvas,
        frame_width,
        frame_height,
        cols,
        rows,
        warnings,
    })
}

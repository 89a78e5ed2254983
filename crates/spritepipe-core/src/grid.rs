//! Direction-grid extraction for downloaded animation sheets.
//!
//! Animation sheets are laid out as a grid: each row is one facing direction
//! (up to 8), each column one frame of the track. Archives sometimes pad the
//! sheet beyond the valid grid; the extractor crops back to exactly the cells
//! the track metadata accounts for, so every manifest geometry field can be
//! derived from the committed dimensions.

use image::{imageops, RgbaImage};

use crate::anim::AnimTrack;

/// Maximum number of direction rows in a full sheet.
pub const MAX_DIRECTIONS: u32 = 8;

/// Crop a raw animation sheet to its valid direction/frame grid.
///
/// Returns the cropped sheet and the number of direction rows it contains.
/// The output height is always `frame_height * directions`; the output width
/// never exceeds the source width. When the track reports a zero frame
/// dimension the sheet is passed through untouched with a single direction,
/// since no grid can be reasoned about.
pub fn extract_direction_grid(sheet: RgbaImage, track: &AnimTrack) -> (RgbaImage, u32) {
    let fw = track.frame_width;
    let fh = track.frame_height;

    if fw == 0 || fh == 0 {
        return (sheet, 1);
    }

    let directions = (sheet.height() / fh).clamp(1, MAX_DIRECTIONS);

    let crop_width = fw.saturating_mul(track.frame_count).min(sheet.width());
    let crop_height = fh * directions;

    // Already exactly the valid grid; skip the crop so callers can avoid a
    // pointless re-encode.
    if sheet.width() == crop_width && sheet.height() == crop_height {
        return (sheet, directions);
    }

    // Blit instead of a plain crop: a sheet shorter than one full frame row
    // still commits to a crop box of height `fh`, padded transparent.
    let mut cropped = RgbaImage::new(crop_width, crop_height);
    imageops::replace(&mut cropped, &sheet, 0, 0);
    (cropped, directions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn track(fw: u32, fh: u32, fc: u32) -> AnimTrack {
        AnimTrack {
            name: "Walk".to_string(),
            index: 0,
            frame_width: fw,
            frame_height: fh,
            frame_count: fc,
        }
    }

    #[test]
    fn test_crops_trailing_padding() {
        // 4 frames of 32x40, 8 directions, with 24px of junk below.
        let sheet = RgbaImage::new(32 * 4, 40 * 8 + 24);
        let (out, directions) = extract_direction_grid(sheet, &track(32, 40, 4));
        assert_eq!(directions, 8);
        assert_eq!(out.dimensions(), (128, 320));
    }

    #[test]
    fn test_height_is_multiple_of_frame_height() {
        for extra in [0, 1, 39, 41] {
            let sheet = RgbaImage::new(96, 40 * 3 + extra);
            let (out, directions) = extract_direction_grid(sheet, &track(32, 40, 3));
            assert_eq!(out.height() % 40, 0);
            assert_eq!(out.height(), 40 * directions);
        }
    }

    #[test]
    fn test_directions_clamped_to_eight() {
        let sheet = RgbaImage::new(64, 24 * 12);
        let (out, directions) = extract_direction_grid(sheet, &track(32, 24, 2));
        assert_eq!(directions, 8);
        assert_eq!(out.height(), 24 * 8);
    }

    #[test]
    fn test_short_sheet_keeps_one_direction() {
        // Sheet shorter than one frame row still commits to a full row,
        // padded transparent below the source pixels.
        let mut sheet = RgbaImage::from_pixel(64, 20, Rgba([9, 9, 9, 255]));
        sheet.put_pixel(0, 19, Rgba([1, 2, 3, 4]));
        let (out, directions) = extract_direction_grid(sheet, &track(32, 40, 2));
        assert_eq!(directions, 1);
        assert_eq!(out.dimensions(), (64, 40));
        assert_eq!(out.get_pixel(0, 19), &Rgba([1, 2, 3, 4]));
        assert_eq!(out.get_pixel(0, 20), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_crop_width_never_exceeds_source() {
        // Track claims 10 frames but the sheet only holds 4.
        let sheet = RgbaImage::new(32 * 4, 40 * 8);
        let (out, _) = extract_direction_grid(sheet, &track(32, 40, 10));
        assert_eq!(out.width(), 128);
    }

    #[test]
    fn test_identity_when_already_cropped() {
        let mut sheet = RgbaImage::new(64, 80);
        sheet.put_pixel(63, 79, Rgba([1, 2, 3, 4]));
        let (out, directions) = extract_direction_grid(sheet.clone(), &track(32, 40, 2));
        assert_eq!(directions, 2);
        assert_eq!(out, sheet);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let sheet = RgbaImage::new(200, 333);
        let t = track(32, 40, 5);
        let (once, d1) = extract_direction_grid(sheet, &t);
        let (twice, d2) = extract_direction_grid(once.clone(), &t);
        assert_eq!(once, twice);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_zero_frame_dimension_passthrough() {
        let sheet = RgbaImage::new(100, 77);
        let (out, directions) = extract_direction_grid(sheet.clone(), &track(0, 40, 2));
        assert_eq!(directions, 1);
        assert_eq!(out, sheet);

        let (out, directions) = extract_direction_grid(sheet.clone(), &track(32, 0, 2));
        assert_eq!(directions, 1);
        assert_eq!(out, sheet);
    }
}

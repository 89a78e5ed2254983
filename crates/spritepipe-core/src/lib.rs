//! spritepipe core library.
//!
//! Pure types and transforms shared by the spritepipe CLI: animation
//! metadata parsing, direction-grid extraction, row-major sheet packing,
//! manifest records, and deterministic PNG encoding. Everything here is
//! free of network and process concerns; the CLI crate owns those.

pub mod anim;
pub mod grid;
pub mod manifest;
pub mod pack;
pub mod png;

pub use anim::{parse_anim_data, select_track, AnimTrack};
pub use grid::extract_direction_grid;
pub use manifest::{manifest_snippet, write_manifest, SpriteRecord};
pub use pack::{pack_frames, PackError, PackWarning, PackedSheet};

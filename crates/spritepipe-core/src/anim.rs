//! Animation metadata parsing and track selection.
//!
//! Sprite archives carry an `AnimData.xml` document listing the named
//! animation tracks available for an entity. Each track declares its frame
//! geometry and one `<Duration>` entry per frame. Parsing is deliberately
//! lenient: a malformed document yields an empty track map rather than an
//! error, and missing numeric fields fall back to defaults so that a single
//! bad archive never aborts a whole import run.

use std::collections::BTreeMap;

/// Fallback frame edge length when `FrameWidth`/`FrameHeight` are absent.
pub const DEFAULT_FRAME_SIZE: u32 = 48;

/// Track names tried in order when picking the sheet to import.
const PREFERRED_TRACKS: &[&str] = &["Walk", "Idle", "Sleep"];

/// Metadata for a single named animation track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimTrack {
    /// Track name, e.g. "Walk".
    pub name: String,
    /// Track index within the archive.
    pub index: u32,
    /// Width of one frame in pixels.
    pub frame_width: u32,
    /// Height of one frame in pixels.
    pub frame_height: u32,
    /// Number of frames (one per `<Duration>` entry).
    pub frame_count: u32,
}

/// Parse an `AnimData.xml` document into a name-keyed track map.
///
/// Tracks without a `<Name>` are skipped. Numeric fields that are missing or
/// non-numeric take defaults: width/height 48, index 0, frame count 1. A
/// document that is not valid UTF-8 or not well-formed XML yields an empty
/// map; the caller decides how loudly to complain.
pub fn parse_anim_data(xml: &[u8]) -> BTreeMap<String, AnimTrack> {
    let mut tracks = BTreeMap::new();

    let text = match std::str::from_utf8(xml) {
        Ok(text) => text,
        Err(_) => return tracks,
    };
    let doc = match roxmltree::Document::parse(text) {
        Ok(doc) => doc,
        Err(_) => return tracks,
    };

    let Some(anims) = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("Anims"))
    else {
        return tracks;
    };

    for anim in anims.children().filter(|n| n.has_tag_name("Anim")) {
        let Some(name) = child_text(&anim, "Name") else {
            continue;
        };

        let index = child_number(&anim, "Index").unwrap_or(0);
        let frame_width = child_number(&anim, "FrameWidth").unwrap_or(DEFAULT_FRAME_SIZE);
        let frame_height = child_number(&anim, "FrameHeight").unwrap_or(DEFAULT_FRAME_SIZE);

        // One <Duration> per frame; a track without any duration entries is
        // treated as a single-frame track.
        let frame_count = anim
            .children()
            .find(|n| n.has_tag_name("Durations"))
            .map(|d| d.children().filter(|n| n.has_tag_name("Duration")).count() as u32)
            .filter(|&count| count > 0)
            .unwrap_or(1);

        tracks.insert(
            name.to_string(),
            AnimTrack {
                name: name.to_string(),
                index,
                frame_width,
                frame_height,
                frame_count,
            },
        );
    }

    tracks
}

/// Pick the track to import: `Walk`, then `Idle`, then `Sleep`, then the
/// first remaining track in map order. `None` only when the map is empty.
pub fn select_track(tracks: &BTreeMap<String, AnimTrack>) -> Option<&AnimTrack> {
    for name in PREFERRED_TRACKS {
        if let Some(track) = tracks.get(*name) {
            return Some(track);
        }
    }
    tracks.values().next()
}

fn child_text<'a>(node: &roxmltree::Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn child_number(node: &roxmltree::Node<'_, '_>, tag: &str) -> Option<u32> {
    child_text(node, tag).and_then(|t| t.parse().ok())
}

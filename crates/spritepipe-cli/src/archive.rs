//! Zip archive member access for downloaded sprite archives.

use std::io::{Cursor, Read};

use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

/// Errors from reading a sprite archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The blob is not a readable zip archive.
    #[error("corrupt archive: {0}")]
    Corrupt(ZipError),

    /// The archive lacks an expected member.
    #[error("archive member not found: {0}")]
    MissingMember(String),

    /// A member existed but could not be read out.
    #[error("failed to read archive member '{name}': {source}")]
    MemberRead {
        name: String,
        source: std::io::Error,
    },
}

/// Read one named member out of a zip blob.
pub fn read_archive_member(zip_bytes: &[u8], name: &str) -> Result<Vec<u8>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(zip_bytes)).map_err(ArchiveError::Corrupt)?;

    let mut member = match archive.by_name(name) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => return Err(ArchiveError::MissingMember(name.to_string())),
        Err(err) => return Err(ArchiveError::Corrupt(err)),
    };

    let mut bytes = Vec::with_capacity(member.size() as usize);
    member
        .read_to_end(&mut bytes)
        .map_err(|source| ArchiveError::MemberRead {
            name: name.to_string(),
            source,
        })?;
    Ok(bytes)
}

//! Sprite server access.
//!
//! The server publishes one `sprites.zip` per entity under a zero-padded
//! four-digit id. Fetches are blocking with a fixed timeout; a failed fetch
//! is a per-entity outcome, never retried here.

use std::time::Duration;

use reqwest::blocking::Client;

/// Base URL of the PMDCollab sprite server.
pub const SPRITESERVER_URL: &str = "https://spriteserver.pmdcollab.org/assets";

/// Timeout applied to every fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Archive URL for an entity id, e.g. `.../0025/sprites.zip`.
pub fn archive_url(id: u32) -> String {
    format!("{}/{:04}/sprites.zip", SPRITESERVER_URL, id)
}

/// Build the blocking HTTP client used for the whole run.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().timeout(FETCH_TIMEOUT).build()
}

/// Fetch `url`, treating non-success HTTP statuses as errors.
pub fn fetch_bytes(client: &Client, url: &str) -> reqwest::Result<Vec<u8>> {
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_url_zero_pads() {
        assert_eq!(
            archive_url(7),
            "https://spriteserver.pmdcollab.org/assets/0007/sprites.zip"
        );
        assert_eq!(
            archive_url(150),
            "https://spriteserver.pmdcollab.org/assets/0150/sprites.zip"
        );
    }

    #[test]
    fn test_wide_ids_are_not_truncated() {
        assert!(archive_url(99999).contains("/99999/"));
    }
}

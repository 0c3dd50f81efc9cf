//! Link parsing for the fallback album form and the showcase photos

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Hosts accepted as Google Photos album links
pub const ALLOWED_ALBUM_DOMAINS: [&str; 2] = ["photos.app.goo.gl", "photos.google.com"];

static DRIVE_FILE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:/file/d/|[?&]id=)([a-zA-Z0-9_-]+)").expect("valid Drive id pattern")
});

static IMGUR_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?imgur\.com/([a-zA-Z0-9]+)/?$").expect("valid Imgur pattern")
});

static BARE_FILE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{10,}$").expect("valid file id pattern"));

pub fn is_allowed_album_link(link: &str) -> bool {
    ALLOWED_ALBUM_DOMAINS
        .iter()
        .any(|domain| link.contains(domain))
}

/// Direct-view URL for a Google Drive file ID
pub fn drive_view_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={}", file_id)
}

/// Turns a cover photo reference into a displayable image URL.
///
/// Accepts a Drive share link (`/file/d/<id>/view` or `?id=<id>`), an Imgur
/// page link, any other direct URL, or a bare Drive file ID. Blank input
/// means no cover.
pub fn normalize_cover(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.contains("drive.google.com") {
        if let Some(caps) = DRIVE_FILE_ID.captures(input) {
            return Some(drive_view_url(&caps[1]));
        }
        return Some(input.to_string());
    }

    if let Some(caps) = IMGUR_PAGE.captures(input) {
        return Some(format!("https://i.imgur.com/{}.jpg", &caps[1]));
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        return Some(input.to_string());
    }

    if BARE_FILE_ID.is_match(input) {
        return Some(drive_view_url(input));
    }

    log::warn!("Ignoring unrecognised cover reference: {}", input);
    None
}

/// Where the showcase photos are served from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSource {
    #[default]
    Unsplash,
    Drive,
    Imgur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlot {
    Start,
    Race,
    Podium,
    Team,
}

impl PhotoSlot {
    pub fn label(&self) -> &'static str {
        match self {
            PhotoSlot::Start => "Largada",
            PhotoSlot::Race => "Corrida",
            PhotoSlot::Podium => "Pódio",
            PhotoSlot::Team => "Equipe",
        }
    }
}

/// One of the hardcoded showcase photos shown when there is no album data
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPhoto {
    pub slot: PhotoSlot,
    pub url: String,
}

const SHOWCASE_IDS: [(PhotoSlot, &str); 4] = [
    (PhotoSlot::Start, "1558618666-fcd25c85cd64"),
    (PhotoSlot::Race, "1583900985737-6d0495555783"),
    (PhotoSlot::Podium, "1593766827228-8737b4534aa6"),
    (PhotoSlot::Team, "1571019613454-1cb2f99b2d8b"),
];

// Direct links, already servable as-is
const IMGUR_SHOWCASE: [&str; 4] = [
    "https://i.imgur.com/EXEMPLO1.jpg",
    "https://i.imgur.com/EXEMPLO2.jpg",
    "https://i.imgur.com/EXEMPLO3.jpg",
    "https://i.imgur.com/EXEMPLO4.jpg",
];

pub fn default_photos(source: PhotoSource) -> Vec<DefaultPhoto> {
    SHOWCASE_IDS
        .iter()
        .zip(IMGUR_SHOWCASE)
        .map(|((slot, id), imgur)| DefaultPhoto {
            slot: *slot,
            url: match source {
                PhotoSource::Unsplash => {
                    format!("https://images.unsplash.com/photo-{}?w=800&q=80", id)
                }
                PhotoSource::Drive => drive_view_url(id),
                PhotoSource::Imgur => imgur.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_album_links() {
        assert!(is_allowed_album_link("https://photos.app.goo.gl/xyz"));
        assert!(is_allowed_album_link(
            "https://photos.google.com/share/AF1Qip"
        ));
        assert!(!is_allowed_album_link("https://www.flickr.com/photos/kart"));
        assert!(!is_allowed_album_link(""));
    }

    #[test]
    fn test_normalize_drive_links() {
        let expected = Some(
            "https://drive.google.com/uc?export=view&id=1W3GVQ88dC5JCW6WL4UxfC1ecZGal2kpf"
                .to_string(),
        );
        assert_eq!(
            normalize_cover(
                "https://drive.google.com/file/d/1W3GVQ88dC5JCW6WL4UxfC1ecZGal2kpf/view?usp=sharing"
            ),
            expected
        );
        assert_eq!(
            normalize_cover("https://drive.google.com/open?id=1W3GVQ88dC5JCW6WL4UxfC1ecZGal2kpf"),
            expected
        );
        assert_eq!(normalize_cover("1W3GVQ88dC5JCW6WL4UxfC1ecZGal2kpf"), expected);
    }

    #[test]
    fn test_normalize_other_references() {
        assert_eq!(
            normalize_cover("https://imgur.com/AbC123x"),
            Some("https://i.imgur.com/AbC123x.jpg".to_string())
        );
        assert_eq!(
            normalize_cover("https://i.imgur.com/AbC123x.jpg"),
            Some("https://i.imgur.com/AbC123x.jpg".to_string())
        );
        assert_eq!(normalize_cover("   "), None);
        assert_eq!(normalize_cover("not a link"), None);
    }

    #[test]
    fn test_default_photos_per_source() {
        let unsplash = default_photos(PhotoSource::Unsplash);
        assert_eq!(unsplash.len(), 4);
        assert_eq!(unsplash[0].slot, PhotoSlot::Start);
        assert!(unsplash[0]
            .url
            .starts_with("https://images.unsplash.com/photo-1558618666-fcd25c85cd64"));

        let drive = default_photos(PhotoSource::Drive);
        assert_eq!(
            drive[3].url,
            "https://drive.google.com/uc?export=view&id=1571019613454-1cb2f99b2d8b"
        );

        let imgur = default_photos(PhotoSource::Imgur);
        assert_eq!(imgur.len(), 4);
        assert_eq!(imgur[2].slot, PhotoSlot::Podium);
        assert_eq!(imgur[2].url, "https://i.imgur.com/EXEMPLO3.jpg");
        assert!(imgur.iter().all(|p| p.url.starts_with("https://i.imgur.com/")));
    }
}

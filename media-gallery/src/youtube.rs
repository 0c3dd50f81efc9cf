//! YouTube link handling for video cards and the video player

use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
        .expect("valid YouTube link pattern")
});

static BARE_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("valid YouTube id pattern")
});

/// Grey-red SVG tile used when a video has no resolvable thumbnail
pub const VIDEO_PLACEHOLDER: &str = "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 200 200%22><rect fill=%22%23c00%22 width=%22200%22 height=%22200%22/><text x=%2250%%22 y=%2250%%22 text-anchor=%22middle%22 dy=%22.3em%22 fill=%22%23fff%22 font-size=%2216%22>Video</text></svg>";

/// Extracts the video ID from a watch/short/embed link or a bare 11-character ID
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    [&*YOUTUBE_LINK, &*BARE_VIDEO_ID]
        .into_iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Medium-quality thumbnail, or the placeholder for non-YouTube links
pub fn thumbnail_url(url: &str) -> String {
    match extract_youtube_id(url) {
        Some(id) => format!("https://img.youtube.com/vi/{}/mqdefault.jpg", id),
        None => VIDEO_PLACEHOLDER.to_string(),
    }
}

/// Autoplaying embed URL; other links are played as given
pub fn embed_url(url: &str) -> String {
    match extract_youtube_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{}?autoplay=1", id),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_from_all_supported_forms() {
        for input in [
            "https://www.youtube.com/watch?v=abc12345678",
            "https://youtu.be/abc12345678",
            "abc12345678",
            "https://www.youtube.com/embed/abc12345678",
            "https://www.youtube.com/watch?v=abc12345678&t=42s",
        ] {
            assert_eq!(
                extract_youtube_id(input).as_deref(),
                Some("abc12345678"),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_unrelated_input() {
        assert_eq!(extract_youtube_id("https://vimeo.com/123456789"), None);
        assert_eq!(extract_youtube_id("https://example.com/watch"), None);
        assert_eq!(extract_youtube_id("abc123"), None);
        assert_eq!(extract_youtube_id(""), None);
    }

    #[test]
    fn test_thumbnail_and_embed() {
        assert_eq!(
            thumbnail_url("https://youtu.be/abc12345678"),
            "https://img.youtube.com/vi/abc12345678/mqdefault.jpg"
        );
        assert_eq!(thumbnail_url("https://vimeo.com/1"), VIDEO_PLACEHOLDER);
        assert_eq!(
            embed_url("abc12345678"),
            "https://www.youtube.com/embed/abc12345678?autoplay=1"
        );
        assert_eq!(embed_url("https://vimeo.com/1"), "https://vimeo.com/1");
    }
}

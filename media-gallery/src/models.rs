use serde::{Deserialize, Serialize};

/// Kind of an album entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Photo,
    Video,
}

/// A single photo or video reference inside an album
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    // Back-reference only, the album owns the item
    #[serde(default)]
    pub album_id: Option<i64>,
}

/// Album as listed by `/api/albums`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlbumSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub race_name: Option<String>,
    #[serde(default)]
    pub race_date: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub google_photos_link: Option<String>,
    #[serde(default)]
    pub media_count: Option<u32>,
    #[serde(default)]
    pub media_preview: Vec<MediaItem>,
}

impl AlbumSummary {
    /// Explicit cover, else the first photo of the preview
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_url
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| {
                self.media_preview
                    .iter()
                    .find(|item| item.media_type == MediaType::Photo)
                    .map(|item| item.url.as_str())
            })
    }
}

/// Album detail from `/api/albums/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub race_name: Option<String>,
    #[serde(default)]
    pub race_date: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub google_photos_link: Option<String>,
    #[serde(default)]
    pub media_items: Vec<MediaItem>,
}

impl Album {
    pub fn photos(&self) -> impl Iterator<Item = &MediaItem> {
        self.media_items
            .iter()
            .filter(|item| item.media_type == MediaType::Photo)
    }

    pub fn videos(&self) -> impl Iterator<Item = &MediaItem> {
        self.media_items
            .iter()
            .filter(|item| item.media_type == MediaType::Video)
    }
}

/// Entry of `/api/videos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub album_name: Option<String>,
}

/// Photos of one race, from `/api/photos/by-race`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RacePhotoGroup {
    pub race_name: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub race_date: Option<String>,
    #[serde(default)]
    pub photo_count: u32,
    #[serde(default)]
    pub photos: Vec<MediaItem>,
}

/// Locally stored race album (fallback mode)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceAlbumRecord {
    /// Creation time in milliseconds, as a string
    pub id: String,
    pub name: String,
    /// Google Photos album link
    pub link: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_prefers_explicit_cover() {
        let json = r#"{
            "id": 1, "name": "Etapa 1", "cover_url": "https://cdn/cover.jpg",
            "media_preview": [{"media_type": "photo", "url": "https://cdn/p1.jpg"}]
        }"#;
        let album: AlbumSummary = serde_json::from_str(json).unwrap();
        assert_eq!(album.cover_image(), Some("https://cdn/cover.jpg"));
    }

    #[test]
    fn test_cover_falls_back_to_first_photo() {
        let json = r#"{
            "id": 2, "name": "Etapa 2", "cover_url": null, "media_count": 3,
            "media_preview": [
                {"media_type": "video", "url": "https://youtu.be/abc12345678"},
                {"media_type": "photo", "url": "https://cdn/p2.jpg"}
            ]
        }"#;
        let album: AlbumSummary = serde_json::from_str(json).unwrap();
        assert_eq!(album.cover_image(), Some("https://cdn/p2.jpg"));
        assert_eq!(album.media_count, Some(3));
    }

    #[test]
    fn test_album_splits_photos_and_videos() {
        let json = r#"{
            "id": 3, "name": "Final",
            "media_items": [
                {"id": 1, "media_type": "photo", "url": "a.jpg"},
                {"id": 2, "media_type": "video", "url": "https://youtu.be/abc12345678"},
                {"id": 3, "media_type": "photo", "url": "b.jpg", "title": "Pódio"}
            ]
        }"#;
        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.photos().count(), 2);
        assert_eq!(album.videos().count(), 1);
    }
}

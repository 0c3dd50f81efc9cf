//! Media endpoints of the club API

use club_api::{ApiError, ClubApiClient};

use crate::models::{Album, AlbumSummary, RacePhotoGroup, VideoEntry};
use crate::upload::{PhotoUpload, VideoSubmission};

/// Remote side of the gallery. Implemented by `ClubApiClient`; tests swap in
/// recording fakes.
#[allow(async_fn_in_trait)]
pub trait MediaApi {
    async fn albums(&self) -> Result<Vec<AlbumSummary>, ApiError>;
    async fn album(&self, album_id: i64) -> Result<Album, ApiError>;
    async fn videos(&self) -> Result<Vec<VideoEntry>, ApiError>;
    async fn photos_by_race(&self) -> Result<Vec<RacePhotoGroup>, ApiError>;
    async fn upload_photo(&self, album_id: i64, upload: PhotoUpload) -> Result<(), ApiError>;
    async fn upload_video(&self, album_id: i64, video: &VideoSubmission) -> Result<(), ApiError>;
}

impl MediaApi for ClubApiClient {
    async fn albums(&self) -> Result<Vec<AlbumSummary>, ApiError> {
        self.get_envelope("/api/albums").await
    }

    async fn album(&self, album_id: i64) -> Result<Album, ApiError> {
        self.get_envelope(&format!("/api/albums/{}", album_id)).await
    }

    async fn videos(&self) -> Result<Vec<VideoEntry>, ApiError> {
        self.get_envelope("/api/videos").await
    }

    async fn photos_by_race(&self) -> Result<Vec<RacePhotoGroup>, ApiError> {
        self.get_envelope("/api/photos/by-race").await
    }

    async fn upload_photo(&self, album_id: i64, upload: PhotoUpload) -> Result<(), ApiError> {
        let form = upload
            .into_form()
            .map_err(|e| ApiError::NetworkError(format!("Invalid upload form: {}", e)))?;
        self.post_multipart(&format!("/upload/photo/{}", album_id), form)
            .await
    }

    async fn upload_video(&self, album_id: i64, video: &VideoSubmission) -> Result<(), ApiError> {
        self.post_json(&format!("/upload/video/{}", album_id), video)
            .await
    }
}

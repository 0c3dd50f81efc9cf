//! Gallery state: turns API records into view models for the media screens

use std::rc::Rc;

use club_api::format::format_date_numeric;
use club_api::ClubApiClient;

use crate::api::MediaApi;
use crate::error::GalleryError;
use crate::links::{default_photos, DefaultPhoto, PhotoSource};
use crate::models::{Album, AlbumSummary, MediaItem, RaceAlbumRecord, RacePhotoGroup, VideoEntry};
use crate::race_albums::{RaceAlbumForm, RaceAlbumRepository, RememberedInputs};
use crate::section::Collapsible;
use crate::store::LocalStore;
use crate::upload::{PhotoFile, PhotoUpload, UploadProgress, UploadSummary, VideoSubmission};
use crate::youtube::{embed_url, thumbnail_url};

/// Placeholder card shown instead of an empty grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    /// Extra line shown to admins only
    pub admin_hint: Option<&'static str>,
}

impl EmptyState {
    pub const NO_ALBUMS: EmptyState = EmptyState {
        icon: "📷",
        title: "Nenhum álbum ainda",
        message: "Os álbuns de fotos das corridas aparecerão aqui",
        admin_hint: Some("Use o painel admin para adicionar álbuns"),
    };

    pub const NO_VIDEOS: EmptyState = EmptyState {
        icon: "🎬",
        title: "Nenhum vídeo ainda",
        message: "Os vídeos das corridas aparecerão aqui",
        admin_hint: Some("Use o painel admin para adicionar vídeos"),
    };

    pub const VIDEOS_FAILED: EmptyState = EmptyState {
        icon: "⚠️",
        title: "Erro ao carregar vídeos",
        message: "Tente novamente mais tarde",
        admin_hint: None,
    };

    pub const NO_RACE_PHOTOS: EmptyState = EmptyState {
        icon: "🏁",
        title: "Nenhuma foto ainda",
        message: "As fotos das corridas aparecerão aqui organizadas por corrida",
        admin_hint: None,
    };
}

/// Either something to render or the empty state to show instead
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty(EmptyState),
}

impl<T> Listing<T> {
    fn from_items(items: Vec<T>, empty: EmptyState) -> Self {
        if items.is_empty() {
            Listing::Empty(empty)
        } else {
            Listing::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items(items) => items,
            Listing::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumCard {
    pub id: i64,
    pub name: String,
    pub race_name: Option<String>,
    /// dd/mm/yyyy
    pub race_date: Option<String>,
    pub cover_url: Option<String>,
    pub media_count: u32,
}

impl From<&AlbumSummary> for AlbumCard {
    fn from(album: &AlbumSummary) -> Self {
        AlbumCard {
            id: album.id,
            name: album.name.clone(),
            race_name: album.race_name.clone(),
            race_date: album.race_date.as_deref().map(format_date_numeric),
            cover_url: album.cover_image().map(str::to_string),
            media_count: album
                .media_count
                .unwrap_or(album.media_preview.len() as u32),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoCard {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub album_name: Option<String>,
    pub thumbnail: String,
    pub embed_url: String,
}

impl VideoCard {
    fn new(
        url: &str,
        title: Option<&str>,
        description: Option<&str>,
        album_name: Option<&str>,
    ) -> Self {
        VideoCard {
            url: url.to_string(),
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or("Vídeo")
                .to_string(),
            description: description.map(str::to_string),
            album_name: album_name.map(str::to_string),
            thumbnail: thumbnail_url(url),
            embed_url: embed_url(url),
        }
    }
}

impl From<&VideoEntry> for VideoCard {
    fn from(video: &VideoEntry) -> Self {
        VideoCard::new(
            &video.url,
            video.title.as_deref(),
            video.description.as_deref(),
            video.album_name.as_deref(),
        )
    }
}

impl From<&MediaItem> for VideoCard {
    fn from(item: &MediaItem) -> Self {
        VideoCard::new(
            &item.url,
            item.title.as_deref(),
            item.description.as_deref(),
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoTile {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
}

impl From<&MediaItem> for PhotoTile {
    fn from(item: &MediaItem) -> Self {
        PhotoTile {
            url: item.url.clone(),
            title: item.title.clone(),
            alt: item.title.clone().unwrap_or_else(|| "Foto".to_string()),
        }
    }
}

/// One race in the "photos by race" tab
#[derive(Debug, Clone, PartialEq)]
pub struct RacePhotoSection {
    pub heading: String,
    /// "album • N foto(s) • dd/mm/yyyy"
    pub subtitle: String,
    pub section: Collapsible<Vec<PhotoTile>>,
}

impl From<&RacePhotoGroup> for RacePhotoSection {
    fn from(group: &RacePhotoGroup) -> Self {
        let mut subtitle = format!(
            "{} • {} foto{}",
            group.album_name,
            group.photo_count,
            if group.photo_count == 1 { "" } else { "s" }
        );
        if let Some(date) = group.race_date.as_deref().filter(|d| !d.is_empty()) {
            subtitle.push_str(" • ");
            subtitle.push_str(&format_date_numeric(date));
        }

        RacePhotoSection {
            heading: group.race_name.clone(),
            subtitle,
            section: Collapsible::preloaded(group.photos.iter().map(PhotoTile::from).collect()),
        }
    }
}

/// Full-screen album detail
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumOverlay {
    pub id: i64,
    pub name: String,
    pub race_name: Option<String>,
    pub photos: Vec<PhotoTile>,
    pub videos: Vec<VideoCard>,
    pub google_photos_link: Option<String>,
    /// Upload buttons are rendered only for admins
    pub can_upload: bool,
}

impl AlbumOverlay {
    fn new(album: &Album, can_upload: bool) -> Self {
        AlbumOverlay {
            id: album.id,
            name: album.name.clone(),
            race_name: album.race_name.clone(),
            photos: album.photos().map(PhotoTile::from).collect(),
            videos: album.videos().map(VideoCard::from).collect(),
            google_photos_link: album.google_photos_link.clone(),
            can_upload,
        }
    }
}

/// Everything the media screen shows after `load_albums`
#[derive(Debug, Clone, PartialEq)]
pub struct MediaOverview {
    pub albums: Listing<AlbumCard>,
    pub videos: Listing<VideoCard>,
    pub race_photos: Listing<RacePhotoSection>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GalleryOptions {
    pub is_admin: bool,
    pub photo_source: PhotoSource,
}

/// Gallery state shared through the component tree.
///
/// Read operations never fail: errors are logged and turned into empty
/// states. Write operations return `GalleryError` so the caller can alert.
pub struct GalleryController<A = ClubApiClient> {
    api: Rc<A>,
    race_albums: RaceAlbumRepository,
    options: GalleryOptions,
}

impl<A> Clone for GalleryController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            race_albums: self.race_albums.clone(),
            options: self.options,
        }
    }
}

/// Same controller when both share the API handle and options
impl<A> PartialEq for GalleryController<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && self.options == other.options
    }
}

impl<A: MediaApi> GalleryController<A> {
    pub fn new(api: A, store: Rc<dyn LocalStore>, options: GalleryOptions) -> Self {
        Self {
            api: Rc::new(api),
            race_albums: RaceAlbumRepository::new(store),
            options,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn is_admin(&self) -> bool {
        self.options.is_admin
    }

    /// Loads the album grid, then videos and race photos one after the other
    pub async fn load_albums(&self) -> MediaOverview {
        let albums = match self.api.albums().await {
            Ok(albums) => albums,
            Err(e) => {
                log::error!("Failed to load albums: {}", e);
                Vec::new()
            }
        };

        if albums.is_empty() {
            return MediaOverview {
                albums: Listing::Empty(EmptyState::NO_ALBUMS),
                videos: Listing::Empty(EmptyState::NO_VIDEOS),
                race_photos: Listing::Empty(EmptyState::NO_RACE_PHOTOS),
            };
        }

        log::debug!("Loaded {} albums", albums.len());
        let cards = albums.iter().map(AlbumCard::from).collect();
        let videos = self.load_videos().await;
        let race_photos = self.load_photos_by_race().await;

        MediaOverview {
            albums: Listing::Items(cards),
            videos,
            race_photos,
        }
    }

    pub async fn load_videos(&self) -> Listing<VideoCard> {
        match self.api.videos().await {
            Ok(videos) => Listing::from_items(
                videos.iter().map(VideoCard::from).collect(),
                EmptyState::NO_VIDEOS,
            ),
            Err(e) => {
                log::error!("Failed to load videos: {}", e);
                Listing::Empty(EmptyState::VIDEOS_FAILED)
            }
        }
    }

    pub async fn load_photos_by_race(&self) -> Listing<RacePhotoSection> {
        match self.api.photos_by_race().await {
            Ok(groups) => Listing::from_items(
                groups.iter().map(RacePhotoSection::from).collect(),
                EmptyState::NO_RACE_PHOTOS,
            ),
            Err(e) => {
                log::error!("Failed to load photos by race: {}", e);
                Listing::Empty(EmptyState::NO_RACE_PHOTOS)
            }
        }
    }

    pub async fn open_album(&self, album_id: i64) -> Option<AlbumOverlay> {
        match self.api.album(album_id).await {
            Ok(album) => Some(AlbumOverlay::new(&album, self.options.is_admin)),
            Err(e) => {
                log::error!("Failed to open album {}: {}", album_id, e);
                None
            }
        }
    }

    /// Sends `files` one at a time, in order.
    ///
    /// `on_progress` is called before each request. A failed file is counted
    /// and the loop moves on; only an empty selection is an error.
    pub async fn upload_photos(
        &self,
        album_id: i64,
        files: Vec<PhotoFile>,
        title: &str,
        mut on_progress: impl FnMut(UploadProgress),
    ) -> Result<UploadSummary, GalleryError> {
        if files.is_empty() {
            return Err(GalleryError::Validation(
                "Por favor, selecione pelo menos uma foto".to_string(),
            ));
        }

        let total = files.len();
        let title = title.trim();
        let mut summary = UploadSummary::default();

        for (i, file) in files.into_iter().enumerate() {
            on_progress(UploadProgress {
                current: i + 1,
                total,
            });

            let file_name = file.file_name.clone();
            let upload = PhotoUpload {
                title: if title.is_empty() {
                    file_name.clone()
                } else {
                    title.to_string()
                },
                description: String::new(),
                file,
            };

            match self.api.upload_photo(album_id, upload).await {
                Ok(()) => summary.succeeded += 1,
                Err(e) => {
                    log::warn!("Upload of {} to album {} failed: {}", file_name, album_id, e);
                    summary.failed += 1;
                }
            }
        }

        log::info!(
            "Album {} upload finished: {} ok, {} failed",
            album_id,
            summary.succeeded,
            summary.failed
        );
        Ok(summary)
    }

    pub async fn upload_video(
        &self,
        album_id: i64,
        video: VideoSubmission,
    ) -> Result<(), GalleryError> {
        let video = VideoSubmission {
            url: video.url.trim().to_string(),
            ..video
        };
        if video.url.is_empty() {
            return Err(GalleryError::Validation(
                "Por favor, informe a URL do vídeo".to_string(),
            ));
        }

        self.api.upload_video(album_id, &video).await.map_err(|e| {
            log::error!("Video upload to album {} failed: {}", album_id, e);
            GalleryError::from(e)
        })
    }

    pub fn add_race_album(&self, form: &RaceAlbumForm) -> Result<RaceAlbumRecord, GalleryError> {
        self.race_albums.add(form)
    }

    /// Does nothing unless the user confirmed the deletion
    pub fn remove_race_album(&self, id: &str, confirmed: bool) -> Result<bool, GalleryError> {
        if !confirmed {
            return Ok(false);
        }
        self.race_albums.remove(id)
    }

    /// Stored race albums, most recent first; empty if the store is unreadable
    pub fn display_race_albums(&self) -> Vec<RaceAlbumRecord> {
        self.race_albums.list().unwrap_or_else(|e| {
            log::error!("Failed to read race albums: {}", e);
            Vec::new()
        })
    }

    pub fn load_default_photos(&self) -> Vec<DefaultPhoto> {
        default_photos(self.options.photo_source)
    }

    pub fn remembered_inputs(&self) -> RememberedInputs {
        self.race_albums.remembered_inputs().unwrap_or_else(|e| {
            log::warn!("Failed to read remembered inputs: {}", e);
            RememberedInputs::default()
        })
    }

    pub fn remember_drive_folder(&self, folder: &str) -> Result<(), GalleryError> {
        self.race_albums.remember_drive_folder(folder)
    }
}

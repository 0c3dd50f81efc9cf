//! # Media Gallery
//!
//! Race photo and video gallery for the kart club client.
//!
//! This crate provides:
//! - `GalleryController`, which turns API data into view models
//! - Sequential photo upload with progress and success/error counters
//! - YouTube ID extraction and Google Drive / Imgur link normalization
//! - A typed local-state repository (`LocalStore`) backed by SQLite or memory,
//!   used for the fallback race album list
//! - A collapsible-section state machine that loads its content once
//! - Dioxus components for all of the above (feature `components`)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use media_gallery::{GalleryController, GalleryOptions, SqliteStore};
//!
//! let api = club_api::ClubApiClient::new("http://localhost:5000")?;
//! let store = Rc::new(SqliteStore::open("./data/kart-club.db")?);
//! let gallery = GalleryController::new(api, store, GalleryOptions::default());
//!
//! let overview = gallery.load_albums().await;
//! ```

pub mod api;
pub mod controller;
pub mod error;
pub mod links;
pub mod models;
pub mod race_albums;
pub mod section;
pub mod store;
pub mod upload;
pub mod youtube;

#[cfg(feature = "components")]
pub mod components;

pub use api::MediaApi;
pub use controller::{
    AlbumCard, AlbumOverlay, EmptyState, GalleryController, GalleryOptions, Listing,
    MediaOverview, PhotoTile, RacePhotoSection, VideoCard,
};
pub use error::GalleryError;
pub use links::{DefaultPhoto, PhotoSlot, PhotoSource};
pub use models::{Album, AlbumSummary, MediaItem, MediaType, RaceAlbumRecord, RacePhotoGroup, VideoEntry};
pub use race_albums::{RaceAlbumForm, RaceAlbumRepository, RememberedInputs};
pub use section::{Collapsible, Toggle};
pub use store::{LocalStore, MemoryStore, SqliteStore, StoreError};
pub use upload::{PhotoFile, PhotoUpload, UploadProgress, UploadSummary, VideoSubmission};

#[cfg(feature = "components")]
pub use components::{AlbumOverlayView, MediaSection, RaceAlbumManager};

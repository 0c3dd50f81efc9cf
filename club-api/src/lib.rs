//! # Club API
//!
//! Client library for the kart club REST API.
//!
//! This crate provides:
//! - The `{status, data, message}` response envelope shared by every endpoint
//! - Typed models for racers, races, results, rankings and venues
//! - `ClubApiClient`, a thin reqwest wrapper with one method per endpoint
//! - pt-BR display helpers (dates, weather, prices)
//!
//! ## Separation of Concerns
//!
//! This crate only talks to the API. It does **not**:
//! - Render anything (handled by the application)
//! - Know about media albums beyond the generic request helpers
//!   (handled by `media-gallery`)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use club_api::ClubApiClient;
//!
//! let client = ClubApiClient::new("http://localhost:5000")?;
//! let stats = client.stats().await?;
//! println!("{} racers", stats.total_racers);
//! ```

pub mod format;
pub mod models;
pub mod service;

pub use models::{
    Envelope, EnvelopeStatus, FastestByLocation, FastestLap, LocationBestLaps, Race, RaceDetail,
    RaceResult, Racer, Stats, Standing, Venue,
};
pub use service::{decode_ack, decode_envelope, ApiError, ClubApiClient};

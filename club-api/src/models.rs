use serde::{Deserialize, Serialize};

use crate::service::ApiError;

/// Outcome flag of an API envelope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Wrapper returned by every endpoint: `{"status": ..., "data": ..., "message": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, turning an error envelope into `ApiError::Api`
    pub fn into_data(self) -> Result<T, ApiError> {
        match self.status {
            EnvelopeStatus::Success => self
                .data
                .ok_or_else(|| ApiError::Json("success envelope without data".to_string())),
            EnvelopeStatus::Error => Err(ApiError::Api(
                self.message.unwrap_or_else(|| "API Error".to_string()),
            )),
        }
    }
}

/// Dashboard summary from `/api/stats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Stats {
    pub total_racers: i64,
    pub total_races: i64,
    #[serde(default)]
    pub total_results: Option<i64>,
    #[serde(default)]
    pub fastest_lap_time: Option<f64>,
    #[serde(default)]
    pub fastest_lap_racer: Option<String>,
}

/// A race as listed by `/api/races` and `/api/recent-races`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Race {
    pub race_id: i64,
    pub race_name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub total_laps: Option<i64>,
    #[serde(default)]
    pub winner_id: Option<i64>,
}

/// A race together with its ordered results, from `/api/races/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceDetail {
    #[serde(flatten)]
    pub race: Race,
    #[serde(default)]
    pub results: Vec<RaceResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceResult {
    #[serde(default)]
    pub result_id: Option<i64>,
    #[serde(default)]
    pub racer_id: Option<i64>,
    /// Racer name, joined in by the server
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub laps: Option<i64>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub lap_time_best: Option<String>,
    #[serde(default)]
    pub points_earned: Option<i64>,
    #[serde(default)]
    pub dnf: bool,
}

/// Best laps of one racer at one venue, per track condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationBestLaps {
    pub location_name: String,
    #[serde(default)]
    pub dry: Option<String>,
    #[serde(default)]
    pub wet: Option<String>,
    #[serde(default)]
    pub indoor: Option<String>,
}

/// Racer profile, used by `/api/racers` and `/api/leaderboard`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Racer {
    pub racer_id: i64,
    pub name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub experience_years: Option<i64>,
    #[serde(default)]
    pub total_races: Option<i64>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub podium_finishes: Option<i64>,
    #[serde(default)]
    pub best_laps_by_location: Vec<LocationBestLaps>,
}

/// Championship standing row from `/api/standings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Standing {
    pub racer_id: i64,
    pub name: String,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub races_participated: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FastestLap {
    pub fastest_lap: String,
    pub fastest_racer: String,
}

/// Fastest laps per venue from `/api/fastest-by-location`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FastestByLocation {
    pub location_name: String,
    #[serde(default)]
    pub dry: Option<FastestLap>,
    #[serde(default)]
    pub wet: Option<FastestLap>,
    #[serde(default)]
    pub indoor: Option<FastestLap>,
}

/// Kart venue from `/api/locations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Venue {
    pub location_id: i64,
    pub name: String,
    #[serde(default)]
    pub rental_duration: Option<String>,
    #[serde(default)]
    pub price_per_person: f64,
    #[serde(default)]
    pub min_participants: Option<i64>,
    #[serde(default)]
    pub max_participants: Option<i64>,
    #[serde(default)]
    pub exclusive_info: Option<String>,
    #[serde(default)]
    pub min_height: Option<String>,
    #[serde(default)]
    pub schedule_weekday: Option<String>,
    #[serde(default)]
    pub schedule_saturday: Option<String>,
    #[serde(default)]
    pub schedule_sunday: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Venue {
    /// Instagram profile URL built from a handle like `@kartodromo`
    pub fn instagram_url(&self) -> Option<String> {
        self.instagram
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(|h| format!("https://instagram.com/{}", h.trim_start_matches('@')))
    }

    /// "address, neighborhood, city" with missing parts skipped
    pub fn full_address(&self) -> String {
        [&self.address, &self.neighborhood, &self.city]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_keeps_message() {
        let env: Envelope<Vec<Race>> =
            serde_json::from_str(r#"{"status":"error","message":"Race not found"}"#).unwrap();
        match env.into_data() {
            Err(ApiError::Api(msg)) => assert_eq!(msg, "Race not found"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_race_detail_flattens_race() {
        let json = r#"{
            "race_id": 7, "race_name": "Etapa 3", "date": "2025-03-15",
            "track_name": "Velopark", "weather": "Sunny", "total_laps": 20,
            "results": [
                {"position": 1, "name": "Ana", "laps": 20, "total_time": "18:02.1", "lap_time_best": "00:52.3", "dnf": false},
                {"position": null, "name": "Bruno", "dnf": true}
            ]
        }"#;
        let detail: RaceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.race.race_id, 7);
        assert_eq!(detail.results.len(), 2);
        assert!(detail.results[1].dnf);
        assert_eq!(detail.results[1].position, None);
    }

    #[test]
    fn test_venue_helpers() {
        let venue = Venue {
            name: "Kartódromo".to_string(),
            instagram: Some("@kartodromo".to_string()),
            address: Some("Rua A, 10".to_string()),
            city: Some("Rio de Janeiro".to_string()),
            ..Default::default()
        };
        assert_eq!(
            venue.instagram_url().as_deref(),
            Some("https://instagram.com/kartodromo")
        );
        assert_eq!(venue.full_address(), "Rua A, 10, Rio de Janeiro");
    }
}

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::models::{
    Envelope, FastestByLocation, Race, RaceDetail, Racer, Stats, Standing, Venue,
};

/// Error type for API operations
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be sent or the connection failed
    NetworkError(String),
    /// Server answered with a non-2xx status and no readable envelope
    HttpStatus(u16),
    /// Server answered with `status: "error"`
    Api(String),
    /// Body was not the expected JSON
    Json(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::HttpStatus(status) => write!(f, "Server returned status: {}", status),
            ApiError::Api(msg) => write!(f, "API error: {}", msg),
            ApiError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::NetworkError(e.to_string())
    }
}

impl ApiError {
    /// Message to show the user; server messages pass through unchanged
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api(msg) => msg.clone(),
            ApiError::NetworkError(_) | ApiError::HttpStatus(_) => {
                "Não foi possível conectar ao servidor.".to_string()
            }
            ApiError::Json(_) => "Resposta inválida do servidor.".to_string(),
        }
    }
}

/// Decodes an envelope body and returns its payload
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map_err(|e| ApiError::Json(format!("Failed to parse envelope: {}", e)))?
        .into_data()
}

/// Checks an envelope body for success without looking at its payload
pub fn decode_ack(body: &[u8]) -> Result<(), ApiError> {
    let envelope = serde_json::from_slice::<Envelope<IgnoredAny>>(body)
        .map_err(|e| ApiError::Json(format!("Failed to parse envelope: {}", e)))?;
    match envelope.status {
        crate::models::EnvelopeStatus::Success => Ok(()),
        crate::models::EnvelopeStatus::Error => Err(ApiError::Api(
            envelope.message.unwrap_or_else(|| "API Error".to_string()),
        )),
    }
}

/// Client for the club REST API
#[derive(Debug, Clone)]
pub struct ClubApiClient {
    base_url: String,
    client: reqwest::Client,
}

/// Clients pointing at the same server are interchangeable
impl PartialEq for ClubApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ClubApiClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:5000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(10))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .user_agent("KartClub/0.1.0")
            .build()
            .map_err(|e| ApiError::NetworkError(format!("Client build failed: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a server path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a request and returns the body, mapping non-2xx to an error.
    /// An error envelope in a non-2xx body wins over the bare status.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::NetworkError(format!("Failed to read body: {}", e)))?
            .to_vec();

        if !status.is_success() {
            return match decode_ack(&body) {
                Err(ApiError::Api(msg)) => Err(ApiError::Api(msg)),
                _ => Err(ApiError::HttpStatus(status.as_u16())),
            };
        }

        Ok(body)
    }

    /// GET an enveloped endpoint and return its `data`
    pub async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let body = self.send(self.client.get(&url)).await?;
        decode_envelope(&body)
    }

    /// POST a JSON body to an enveloped endpoint, only checking the status
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("POST {} (json)", url);
        let body = self.send(self.client.post(&url).json(body)).await?;
        decode_ack(&body)
    }

    /// POST a multipart form to an enveloped endpoint, only checking the status
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("POST {} (multipart)", url);
        let body = self.send(self.client.post(&url).multipart(form)).await?;
        decode_ack(&body)
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get_envelope("/api/stats").await
    }

    pub async fn recent_races(&self) -> Result<Vec<Race>, ApiError> {
        self.get_envelope("/api/recent-races").await
    }

    pub async fn fastest_by_location(&self) -> Result<Vec<FastestByLocation>, ApiError> {
        self.get_envelope("/api/fastest-by-location").await
    }

    pub async fn racers(&self) -> Result<Vec<Racer>, ApiError> {
        self.get_envelope("/api/racers").await
    }

    pub async fn races(&self) -> Result<Vec<Race>, ApiError> {
        self.get_envelope("/api/races").await
    }

    pub async fn race(&self, race_id: i64) -> Result<RaceDetail, ApiError> {
        self.get_envelope(&format!("/api/races/{}", race_id)).await
    }

    pub async fn leaderboard(&self) -> Result<Vec<Racer>, ApiError> {
        self.get_envelope("/api/leaderboard").await
    }

    pub async fn standings(&self) -> Result<Vec<Standing>, ApiError> {
        self.get_envelope("/api/standings").await
    }

    /// Venue directory. This endpoint answers with a bare JSON array.
    pub async fn venues(&self) -> Result<Vec<Venue>, ApiError> {
        let url = self.url("/api/locations");
        log::debug!("GET {}", url);
        let body = self.send(self.client.get(&url)).await?;
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::Json(format!("Failed to parse locations: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ClubApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.url("/api/albums"), "http://localhost:5000/api/albums");
        assert_eq!(
            client.url("upload/photo/3"),
            "http://localhost:5000/upload/photo/3"
        );
    }

    #[test]
    fn test_clients_equal_by_server() {
        let client = ClubApiClient::new("http://localhost:5000").unwrap();
        assert_eq!(client, client.clone());
        assert_ne!(client, ClubApiClient::new("http://10.0.0.2:5000").unwrap());
    }

    #[test]
    fn test_decode_envelope_success() {
        let body = br#"{"status":"success","count":1,"data":{"total_racers":12,"total_races":4}}"#;
        let stats: Stats = decode_envelope(body).unwrap();
        assert_eq!(stats.total_racers, 12);
        assert_eq!(stats.total_races, 4);
        assert_eq!(stats.fastest_lap_racer, None);
    }

    #[test]
    fn test_decode_envelope_error_status() {
        let body = br#"{"status":"error","message":"Racer not found"}"#;
        let result: Result<Stats, _> = decode_envelope(body);
        assert_eq!(result, Err(ApiError::Api("Racer not found".to_string())));
    }

    #[test]
    fn test_decode_envelope_garbage() {
        let result: Result<Stats, _> = decode_envelope(b"<html>502</html>");
        assert!(matches!(result, Err(ApiError::Json(_))));
    }

    #[test]
    fn test_decode_ack_ignores_payload_shape() {
        assert!(decode_ack(br#"{"status":"success","data":{"id":9,"url":"x"}}"#).is_ok());
        assert!(decode_ack(br#"{"status":"success"}"#).is_ok());
        assert_eq!(
            decode_ack(br#"{"status":"error","message":"Arquivo muito grande"}"#),
            Err(ApiError::Api("Arquivo muito grande".to_string()))
        );
    }

    /// Serves one canned HTTP response on a local port and returns its base URL
    async fn serve_once(
        status_line: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_error_envelope_in_failed_response_keeps_message() {
        let url = serve_once(
            "404 Not Found",
            "application/json",
            r#"{"status":"error","message":"Race not found"}"#,
        )
        .await;
        let client = ClubApiClient::new(url).unwrap();
        assert_eq!(
            client.race(99).await,
            Err(ApiError::Api("Race not found".to_string()))
        );
    }

    #[tokio::test]
    async fn test_failed_response_without_envelope_is_http_status() {
        let url = serve_once(
            "500 Internal Server Error",
            "text/html",
            "<html><body>Internal Server Error</body></html>",
        )
        .await;
        let client = ClubApiClient::new(url).unwrap();
        assert_eq!(client.stats().await, Err(ApiError::HttpStatus(500)));
    }

    #[tokio::test]
    async fn test_locations_bare_array() {
        let url = serve_once(
            "200 OK",
            "application/json",
            r#"[{"location_id":1,"name":"Velopark","price_per_person":120.0}]"#,
        )
        .await;
        let client = ClubApiClient::new(url).unwrap();
        let venues = client.venues().await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, "Velopark");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is closed on test machines
        let client = ClubApiClient::new("http://127.0.0.1:9").unwrap();
        let result = client.stats().await;
        assert!(matches!(result, Err(ApiError::NetworkError(_))));
    }
}

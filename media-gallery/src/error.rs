use club_api::ApiError;

use crate::store::StoreError;

/// Error type for gallery operations
#[derive(Debug)]
pub enum GalleryError {
    /// Request failed or the server answered non-2xx
    Network(String),
    /// Server answered with an error envelope
    Api(String),
    /// Form input rejected before any request was made
    Validation(String),
    /// Local store failure
    Storage(StoreError),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::Network(msg) => write!(f, "Network error: {}", msg),
            GalleryError::Api(msg) => write!(f, "API error: {}", msg),
            GalleryError::Validation(msg) => write!(f, "Validation error: {}", msg),
            GalleryError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<ApiError> for GalleryError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api(msg) => GalleryError::Api(msg),
            other => GalleryError::Network(other.to_string()),
        }
    }
}

impl From<StoreError> for GalleryError {
    fn from(err: StoreError) -> Self {
        GalleryError::Storage(err)
    }
}

impl GalleryError {
    /// Text for the blocking alert shown to the user
    pub fn user_message(&self) -> String {
        match self {
            GalleryError::Api(msg) => format!("Erro: {}", msg),
            GalleryError::Validation(msg) => msg.clone(),
            GalleryError::Network(_) => "Erro de conexão com o servidor".to_string(),
            GalleryError::Storage(_) => "Erro ao salvar os dados locais".to_string(),
        }
    }
}

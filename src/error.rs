use std::fmt;

use club_api::ApiError;
use media_gallery::StoreError;

/// Central error types for the kart club app
#[derive(Debug)]
pub enum AppError {
    /// Club API request failed
    Api(ApiError),
    /// Local store could not be opened
    Storage(StoreError),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Invalid configuration file
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

/// User-facing messages for the screens
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) => e.user_message(),
            AppError::Storage(_) => "Erro ao abrir os dados locais".to_string(),
            AppError::Filesystem(_) => "Erro ao acessar arquivos".to_string(),
            AppError::Config(msg) => format!("Configuração inválida: {}", msg),
        }
    }
}

/// Logs a failed load and keeps only the text the screen shows
pub fn report<T, E: Into<AppError>>(what: &str, result: Result<T, E>) -> Result<T, String> {
    result.map_err(|e| {
        let err = e.into();
        log::error!("Failed to load {}: {}", what, err);
        err.user_message()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_passes_through() {
        let err: AppError = ApiError::Api("Race not found".to_string()).into();
        assert_eq!(err.user_message(), ApiError::Api("Race not found".to_string()).user_message());
    }

    #[test]
    fn test_report_keeps_value_or_message() {
        assert_eq!(report::<_, ApiError>("stats", Ok(3)), Ok(3));
        let failed = report::<i32, _>("stats", Err(ApiError::HttpStatus(500)));
        assert_eq!(failed, Err(ApiError::HttpStatus(500).user_message()));
    }

    #[test]
    fn test_storage_message() {
        let err: AppError = StoreError::Serialization("bad json".to_string()).into();
        assert_eq!(err.user_message(), "Erro ao abrir os dados locais");
    }
}

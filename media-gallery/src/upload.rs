//! Upload payloads and progress reporting for the album upload dialogs

use serde::Serialize;

/// Accept list for the photo file picker
pub const ACCEPTED_PHOTO_TYPES: &str = "image/jpeg,image/png,image/gif,image/webp";

/// A photo picked by the user, read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl PhotoFile {
    /// Guesses the content type from the file extension
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_image_type(&file_name).map(str::to_string);
        Self {
            file_name,
            bytes,
            content_type,
        }
    }
}

fn guess_image_type(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// One multipart request of the photo upload loop
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file: PhotoFile,
    pub title: String,
    pub description: String,
}

impl PhotoUpload {
    pub fn into_form(self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut part =
            reqwest::multipart::Part::bytes(self.file.bytes).file_name(self.file.file_name);
        if let Some(content_type) = &self.file.content_type {
            part = part.mime_str(content_type)?;
        }

        Ok(reqwest::multipart::Form::new()
            .part("file", part)
            .text("title", self.title)
            .text("description", self.description))
    }
}

/// JSON body of `/upload/video/{album_id}`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VideoSubmission {
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Position of the upload loop, reported before each request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// 1-based index of the file being sent
    pub current: usize,
    pub total: usize,
}

impl UploadProgress {
    /// Share of the bar to fill, `current / total`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.current as f64 / self.total as f64
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    pub fn label(&self) -> String {
        format!("Enviando {} de {}...", self.current, self.total)
    }
}

/// Outcome of a photo upload loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl UploadSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn message(&self) -> String {
        let mut msg = format!("Concluído! {} foto(s) enviada(s)", self.succeeded);
        if self.failed > 0 {
            msg.push_str(&format!(", {} erro(s)", self.failed));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_file_guesses_type() {
        assert_eq!(
            PhotoFile::new("podio.JPG", vec![]).content_type.as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(
            PhotoFile::new("largada.webp", vec![]).content_type.as_deref(),
            Some("image/webp")
        );
        assert_eq!(PhotoFile::new("notas.txt", vec![]).content_type, None);
        assert_eq!(PhotoFile::new("sem-extensao", vec![]).content_type, None);
    }

    #[test]
    fn test_progress() {
        let progress = UploadProgress {
            current: 1,
            total: 4,
        };
        assert_eq!(progress.percent(), 25);
        assert_eq!(progress.label(), "Enviando 1 de 4...");
        assert_eq!(
            UploadProgress {
                current: 3,
                total: 3
            }
            .percent(),
            100
        );
    }

    #[test]
    fn test_summary_message() {
        let clean = UploadSummary {
            succeeded: 3,
            failed: 0,
        };
        assert_eq!(clean.message(), "Concluído! 3 foto(s) enviada(s)");

        let partial = UploadSummary {
            succeeded: 2,
            failed: 1,
        };
        assert_eq!(partial.total(), 3);
        assert_eq!(partial.message(), "Concluído! 2 foto(s) enviada(s), 1 erro(s)");
    }

    #[test]
    fn test_into_form_accepts_known_types() {
        let upload = PhotoUpload {
            file: PhotoFile::new("largada.png", vec![0x89, 0x50]),
            title: "Largada".to_string(),
            description: String::new(),
        };
        assert!(upload.into_form().is_ok());
    }
}

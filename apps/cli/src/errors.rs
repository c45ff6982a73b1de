use thiserror::Error;

/// Application-level error type for everything the remote service or the
/// transport can throw at us. Local storage failures never reach this enum:
/// they degrade to "no progress" inside the storage layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// The user has no resume analysis yet. Detected purely by the remote
    /// message-substring convention ("upload"/"analyze"); the remedy is to
    /// upload a resume first.
    #[error("{0}")]
    NotAnalyzed(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Classifies a non-2xx remote response body. The substring convention
    /// is shared with the web client and must not change.
    pub fn from_remote(status: u16, message: String) -> Self {
        if message.contains("upload") || message.contains("analyze") {
            AppError::NotAnalyzed(message)
        } else {
            AppError::Api { status, message }
        }
    }

    /// User-visible next step, when one exists.
    pub fn remedy(&self) -> Option<&'static str> {
        match self {
            AppError::NotAnalyzed(_) => {
                Some("Upload your resume first: careergap upload <file.pdf>")
            }
            AppError::Api { .. } => {
                Some("See your current matches: careergap recommendations")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_message_classifies_as_not_analyzed() {
        let err = AppError::from_remote(400, "Please upload a resume first".to_string());
        assert!(matches!(err, AppError::NotAnalyzed(_)));
    }

    #[test]
    fn test_analyze_message_classifies_as_not_analyzed() {
        let err = AppError::from_remote(404, "No resume to analyze".to_string());
        assert!(matches!(err, AppError::NotAnalyzed(_)));
    }

    #[test]
    fn test_other_messages_surface_verbatim() {
        let err = AppError::from_remote(404, "Career not found".to_string());
        match err {
            AppError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Career not found");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_not_analyzed_remedy_points_at_upload() {
        let err = AppError::from_remote(400, "upload required".to_string());
        assert!(err.remedy().unwrap().contains("upload"));
    }
}

/// API Client — the single point of entry for all CareerGap service calls.
///
/// ARCHITECTURAL RULE: No other module may talk to the remote service
/// directly. All network I/O MUST go through this module; the analysis and
/// roadmap cores stay pure.
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::errors::AppError;
use crate::models::career::{
    CareerRecommendation, RecommendationsResponse, Roadmap, SkillGapResult,
};
use crate::models::user::{ProfileResponse, UploadResponse, UserProfile};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Non-2xx responses carry `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            token,
        }
    }

    /// GET /api/auth/profile
    pub async fn profile(&self) -> Result<UserProfile, AppError> {
        let response: ProfileResponse = self.get_json("/api/auth/profile").await?;
        Ok(response.user)
    }

    /// GET /api/career/suggest
    pub async fn recommendations(&self) -> Result<Vec<CareerRecommendation>, AppError> {
        let response: RecommendationsResponse = self.get_json("/api/career/suggest").await?;
        Ok(response.recommendations)
    }

    /// GET /api/career/skill-gaps/{career}
    pub async fn skill_gaps(&self, career_name: &str) -> Result<SkillGapResult, AppError> {
        let path = format!(
            "/api/career/skill-gaps/{}",
            urlencoding::encode(career_name)
        );
        self.get_json(&path).await
    }

    /// GET /api/career/roadmap/{career}
    pub async fn roadmap(&self, career_name: &str) -> Result<Roadmap, AppError> {
        let path = format!("/api/career/roadmap/{}", urlencoding::encode(career_name));
        self.get_json(&path).await
    }

    /// POST /api/resume/upload — multipart field `resume`. The server does
    /// the parsing and scoring; we only ship the bytes.
    pub async fn upload_resume(&self, file: &Path) -> Result<UploadResponse, AppError> {
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Invalid resume file name".to_string()))?;

        let mime = match file.extension().and_then(|e| e.to_str()) {
            Some("pdf") => "application/pdf",
            Some("txt") => "text/plain",
            _ => {
                return Err(AppError::Validation(
                    "Please select a PDF or text file".to_string(),
                ))
            }
        };

        let bytes = tokio::fs::read(file).await?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("resume", part);

        let response = self
            .client
            .post(format!("{}/api/resume/upload", self.base_url))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Maps non-2xx responses through the shared error taxonomy, parsing the
    /// `{ "message" }` body when the server sent one.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RemoteErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(AppError::from_remote(status.as_u16(), message));
        }
        Ok(response.json::<T>().await?)
    }
}

use serde::{Deserialize, Serialize};

/// Authenticated user identity as served by `GET /api/auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Skills detected from the last analyzed resume, in detection order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// 0–100 score from the last resume analysis.
    #[serde(default)]
    pub resume_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// Response of `POST /api/resume/upload` — the refreshed analysis summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub resume_score: f64,
    #[serde(default)]
    pub skills: Vec<String>,
}

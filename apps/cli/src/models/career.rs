use serde::{Deserialize, Serialize};

/// One AI-generated career match from `GET /api/career/suggest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub career_name: String,
    pub match_percentage: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<CareerRecommendation>,
}

/// Skill-gap snapshot from `GET /api/career/skill-gaps/{career}`.
///
/// `missing_skills` is exactly the subsequence of `required_skills` with no
/// match among `user_skills` (by the substring-equivalence rule), order
/// preserved. The server upholds this; the client re-derives the matched
/// side locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    pub career_name: String,
    #[serde(default)]
    pub user_skills: Vec<String>,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub skill_gap_percentage: f64,
}

/// One ordered unit of a learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Learning roadmap from `GET /api/career/roadmap/{career}`, steps sorted by
/// step number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub career_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_time_to_complete: String,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
}

impl Roadmap {
    /// True iff step numbers are exactly 1..=N in order, no gaps or
    /// duplicates. Malformed roadmaps are rejected before any tracker is
    /// built on them.
    pub fn has_contiguous_steps(&self) -> bool {
        self.roadmap
            .iter()
            .enumerate()
            .all(|(i, s)| s.step == i as u32 + 1)
    }
}

//! Gap Classifier — buckets percentages into display tiers.
//!
//! Each tier carries its label and hex color as part of its identity; callers
//! never look colors up separately. Thresholds are inclusive on the low end.

use serde::Serialize;

/// Severity of a career's skill gap, derived from the server-supplied gap
/// percentage (0–100). Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

impl GapSeverity {
    /// ≤20 → Low, ≤50 → Medium, otherwise High.
    pub fn for_percentage(gap_percentage: f64) -> Self {
        if gap_percentage <= 20.0 {
            GapSeverity::Low
        } else if gap_percentage <= 50.0 {
            GapSeverity::Medium
        } else {
            GapSeverity::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GapSeverity::Low => "Minor Gap",
            GapSeverity::Medium => "Moderate Gap",
            GapSeverity::High => "Significant Gap",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            GapSeverity::Low => "#22C55E",
            GapSeverity::Medium => "#F59E0B",
            GapSeverity::High => "#EF4444",
        }
    }
}

/// Learning priority of a missing skill, purely positional within the
/// already-ordered missing list (first entries = learn first). No re-ranking
/// by any other signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillPriority {
    High,
    Medium,
    Low,
}

impl SkillPriority {
    /// Index 0–2 → High, 3–5 → Medium, 6+ → Low.
    pub fn for_index(index: usize) -> Self {
        if index < 3 {
            SkillPriority::High
        } else if index < 6 {
            SkillPriority::Medium
        } else {
            SkillPriority::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillPriority::High => "High",
            SkillPriority::Medium => "Medium",
            SkillPriority::Low => "Low",
        }
    }
}

/// Quality tier of a career recommendation's match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    /// ≥80 → Excellent, ≥60 → Good, ≥40 → Fair, otherwise Low.
    pub fn for_percentage(match_percentage: f64) -> Self {
        if match_percentage >= 80.0 {
            MatchTier::Excellent
        } else if match_percentage >= 60.0 {
            MatchTier::Good
        } else if match_percentage >= 40.0 {
            MatchTier::Fair
        } else {
            MatchTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
            MatchTier::Low => "Low Match",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MatchTier::Excellent => "#22C55E",
            MatchTier::Good => "#F59E0B",
            MatchTier::Fair => "#EF4444",
            MatchTier::Low => "#6B7280",
        }
    }
}

/// Color band for the overall resume score (dashboard gauge).
pub fn score_color(score: f64) -> &'static str {
    if score >= 80.0 {
        "#22C55E"
    } else if score >= 60.0 {
        "#F59E0B"
    } else {
        "#EF4444"
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "careergap",
    version,
    about = "Resume-analysis client: skill gaps, career matches, learning roadmaps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show your profile, resume score and detected skills
    Profile,

    /// List AI-generated career recommendations
    Recommendations,

    /// Skill-gap analysis for one career
    Gaps {
        /// Career name as listed by `recommendations`
        career: String,
    },

    /// Learning roadmap for one career, with your progress
    Roadmap {
        career: String,
    },

    /// Toggle completion of a roadmap step (toggling again undoes it)
    Complete {
        career: String,
        /// 1-based step number
        step: u32,
    },

    /// Clear all saved progress for one career's roadmap
    Reset {
        career: String,
    },

    /// Upload a resume (PDF or plain text) for a fresh analysis
    Upload {
        file: PathBuf,
    },
}

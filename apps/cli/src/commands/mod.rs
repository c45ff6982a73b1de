//! Presentation layer — one handler per subcommand. Handlers fetch the
//! immutable snapshots from the API client, run the pure cores over them,
//! and render plain terminal output. No computation of substance lives here.

use std::path::Path;
use std::sync::Arc;

use crate::analysis::matcher;
use crate::analysis::severity::{score_color, GapSeverity, MatchTier, SkillPriority};
use crate::api_client::ApiClient;
use crate::cli::Commands;
use crate::errors::AppError;
use crate::models::career::Roadmap;
use crate::roadmap::progress::{ProgressTracker, StepStatus};
use crate::storage::ProgressStore;

pub struct AppContext {
    pub api: ApiClient,
    pub store: Arc<dyn ProgressStore>,
}

pub async fn dispatch(command: Commands, ctx: &AppContext) -> Result<(), AppError> {
    match command {
        Commands::Profile => handle_profile(ctx).await,
        Commands::Recommendations => handle_recommendations(ctx).await,
        Commands::Gaps { career } => handle_gaps(ctx, &career).await,
        Commands::Roadmap { career } => handle_roadmap(ctx, &career).await,
        Commands::Complete { career, step } => handle_complete(ctx, &career, step).await,
        Commands::Reset { career } => handle_reset(ctx, &career).await,
        Commands::Upload { file } => handle_upload(ctx, &file).await,
    }
}

async fn handle_profile(ctx: &AppContext) -> Result<(), AppError> {
    let user = ctx.api.profile().await?;

    println!("{}", user.name);
    if let Some(email) = &user.email {
        println!("{email}");
    }
    println!(
        "Resume score: {}/100 ({})",
        user.resume_score,
        score_color(user.resume_score)
    );

    if user.skills.is_empty() {
        println!("No skills detected yet — upload a resume to get analyzed.");
    } else {
        println!("Detected skills ({}):", user.skills.len());
        for skill in &user.skills {
            println!("  - {skill}");
        }
    }
    Ok(())
}

async fn handle_recommendations(ctx: &AppContext) -> Result<(), AppError> {
    let recommendations = ctx.api.recommendations().await?;

    if recommendations.is_empty() {
        println!("No recommendations yet. Upload your resume to get career matches.");
        return Ok(());
    }

    println!("Career recommendations ({}):", recommendations.len());
    for rec in &recommendations {
        let tier = MatchTier::for_percentage(rec.match_percentage);
        println!(
            "  {:<30} {:>5.0}%  {}",
            rec.career_name,
            rec.match_percentage,
            tier.label()
        );
        if let Some(description) = &rec.description {
            println!("      {description}");
        }
    }
    Ok(())
}

async fn handle_gaps(ctx: &AppContext, career: &str) -> Result<(), AppError> {
    let gap = ctx.api.skill_gaps(career).await?;

    let matched = matcher::matched_skills(&gap.required_skills, &gap.user_skills);
    let severity = GapSeverity::for_percentage(gap.skill_gap_percentage);

    println!("Skill Gap Analysis — {}", gap.career_name);
    println!(
        "Match: {:.0}%  |  {} ({})",
        100.0 - gap.skill_gap_percentage,
        severity.label(),
        severity.color()
    );
    println!(
        "{} of {} required skills covered, {} to learn",
        matched.len(),
        gap.required_skills.len(),
        gap.missing_skills.len()
    );

    println!("\nSkills you have:");
    if matched.is_empty() {
        println!("  (none matched — consider updating your resume)");
    }
    for skill in &matched {
        println!("  [x] {skill}");
    }

    println!("\nSkills to learn:");
    if gap.missing_skills.is_empty() {
        println!("  You have all the required skills for this career path!");
    }
    for (index, skill) in gap.missing_skills.iter().enumerate() {
        let priority = SkillPriority::for_index(index);
        println!("  [ ] {:<30} priority: {}", skill, priority.label());
    }

    if !gap.missing_skills.is_empty() {
        println!("\nLearn first:");
        for (index, skill) in gap.missing_skills.iter().take(3).enumerate() {
            println!("  {}. {skill}", index + 1);
        }
        println!("\nNext: careergap roadmap \"{}\"", gap.career_name);
    }
    Ok(())
}

async fn handle_roadmap(ctx: &AppContext, career: &str) -> Result<(), AppError> {
    let user = ctx.api.profile().await?;
    let roadmap = ctx.api.roadmap(career).await?;
    let tracker = load_tracker(ctx, &roadmap, &user.id)?;

    println!("Learning Roadmap — {}", roadmap.career_name);
    if !roadmap.description.is_empty() {
        println!("{}", roadmap.description);
    }
    if !roadmap.estimated_time_to_complete.is_empty() {
        println!("Estimated time: {}", roadmap.estimated_time_to_complete);
    }
    if !roadmap.missing_skills.is_empty() {
        println!("Focus areas: {}", roadmap.missing_skills.join(", "));
    }

    println!(
        "\nProgress: {}% ({} of {} steps)\n",
        tracker.percent_complete(),
        tracker.completed_count(),
        tracker.total_steps()
    );

    for step in &roadmap.roadmap {
        let status = tracker.status_of(step.step);
        let marker = match status {
            StepStatus::Completed => "[x]",
            StepStatus::Available => "[ ]",
            StepStatus::Locked => "[-]",
        };
        println!("{marker} Step {}: {}", step.step, step.title);
        if !step.description.is_empty() {
            println!("      {}", step.description);
        }
        for resource in &step.resources {
            println!("      resource: {resource}");
        }
        if status == StepStatus::Locked {
            println!("      (complete the previous step to unlock)");
        }
    }

    if tracker.percent_complete() == 100 && tracker.total_steps() > 0 {
        println!(
            "\nCongratulations! You've completed the entire {} roadmap.",
            roadmap.career_name
        );
    }
    Ok(())
}

async fn handle_complete(ctx: &AppContext, career: &str, step: u32) -> Result<(), AppError> {
    let user = ctx.api.profile().await?;
    let roadmap = ctx.api.roadmap(career).await?;
    let mut tracker = load_tracker(ctx, &roadmap, &user.id)?;

    if step == 0 || step as usize > tracker.total_steps() {
        return Err(AppError::Validation(format!(
            "Step {step} is out of range (roadmap has {} steps)",
            tracker.total_steps()
        )));
    }

    tracker.toggle_step(step);
    let status = tracker.status_of(step);
    let verb = if status == StepStatus::Completed {
        "completed"
    } else {
        "un-completed"
    };
    println!(
        "Step {step} {verb}. Progress: {}% ({} of {} steps)",
        tracker.percent_complete(),
        tracker.completed_count(),
        tracker.total_steps()
    );
    Ok(())
}

async fn handle_reset(ctx: &AppContext, career: &str) -> Result<(), AppError> {
    let user = ctx.api.profile().await?;
    let roadmap = ctx.api.roadmap(career).await?;
    let mut tracker = load_tracker(ctx, &roadmap, &user.id)?;

    tracker.reset();
    println!("Progress for {} cleared.", roadmap.career_name);
    Ok(())
}

async fn handle_upload(ctx: &AppContext, file: &Path) -> Result<(), AppError> {
    let analysis = ctx.api.upload_resume(file).await?;

    println!("Resume analyzed. Score: {}/100", analysis.resume_score);
    if !analysis.skills.is_empty() {
        println!("Detected skills: {}", analysis.skills.join(", "));
    }
    println!("Next: careergap recommendations");
    Ok(())
}

/// Rejects malformed roadmaps before any tracker is built on them, then
/// loads persisted progress for the (career, user) key.
fn load_tracker(
    ctx: &AppContext,
    roadmap: &Roadmap,
    user_id: &str,
) -> Result<ProgressTracker, AppError> {
    if !roadmap.has_contiguous_steps() {
        return Err(AppError::Validation(format!(
            "Roadmap for {} has non-contiguous step numbers",
            roadmap.career_name
        )));
    }
    Ok(ProgressTracker::load(
        ctx.store.clone(),
        &roadmap.career_name,
        user_id,
        roadmap.roadmap.len(),
    ))
}

//! Text rendering of the resume view.
//!
//! A section appears only once its backing state is populated. Keyword and
//! skill lists render comma-joined, with `None` standing in for an empty list.

use std::fmt;

use resumetwin_core::{AtsResult, CareerTwin, SkillSuggestions};

use crate::state::ViewState;

const NONE_PLACEHOLDER: &str = "None";
const NO_ROLE_PLACEHOLDER: &str = "-- Choose --";

/// Render the full view.
pub fn render(state: &ViewState) -> String {
    View(state).to_string()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}

struct View<'a>(&'a ViewState);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "Upload Your Resume")?;
        if let Some(file) = &state.file {
            writeln!(f, "File: {}", file.name)?;
        }
        writeln!(f, "{}", state.message)?;

        if let Some(ats) = &state.ats_result {
            writeln!(f)?;
            write_ats(f, ats, &state.email)?;
        }

        writeln!(f)?;
        let role = state
            .career_path
            .map(|p| p.as_str())
            .unwrap_or(NO_ROLE_PLACEHOLDER);
        writeln!(f, "Career Role: {}", role)?;

        if let Some(suggestions) = &state.skill_suggestions {
            writeln!(f)?;
            write_skills(f, suggestions)?;
        }

        if !state.resume_text.is_empty() {
            writeln!(f)?;
            writeln!(f, "Extracted Resume Text:")?;
            writeln!(f, "{}", state.resume_text)?;
        }

        if !state.career_twins.is_empty() {
            writeln!(f)?;
            write_twins(f, &state.career_twins)?;
        }

        Ok(())
    }
}

fn write_ats(f: &mut fmt::Formatter<'_>, ats: &AtsResult, email: &str) -> fmt::Result {
    writeln!(f, "ATS Result")?;
    writeln!(f, "Score: {} / 100", ats.score_display())?;
    writeln!(f, "Matched Keywords: {}", join_or_none(&ats.keywords_found))?;
    writeln!(f, "Suggestions:")?;
    for suggestion in &ats.suggestions {
        writeln!(f, "  - {}", suggestion)?;
    }
    if !email.is_empty() {
        writeln!(f, "Email: {}", email)?;
    }
    Ok(())
}

fn write_skills(f: &mut fmt::Formatter<'_>, suggestions: &SkillSuggestions) -> fmt::Result {
    writeln!(f, "Skill Suggestions for {}", suggestions.career_path)?;
    writeln!(
        f,
        "Matched Skills: {}",
        join_or_none(&suggestions.matched_skills)
    )?;
    writeln!(
        f,
        "Missing/Recommended Skills: {}",
        join_or_none(&suggestions.missing_skills)
    )
}

fn write_twins(f: &mut fmt::Formatter<'_>, twins: &[CareerTwin]) -> fmt::Result {
    writeln!(f, "Career Twin Matches")?;
    for twin in twins {
        match twin.match_score {
            Some(score) => writeln!(
                f,
                "{} at {} ({} shared skills)",
                twin.role, twin.company, score
            )?,
            None => writeln!(f, "{} at {}", twin.role, twin.company)?,
        }
        writeln!(f, "Matched Skills: {}", twin.skills.join(", "))?;
        writeln!(f, "---")?;
    }
    Ok(())
}

//! Skill Gap Analyzer — diffs the candidate's skills against the target
//! role's required list and buckets what's missing into a three-month plan.

use serde::Serialize;

use crate::analysis::title_case;
use crate::catalog::RoleCatalog;

/// Month 3 is the same regardless of how many skills are missing.
const MONTH_3_TASKS: [&str; 3] = [
    "Build a capstone project",
    "Practice interview questions",
    "Revise concepts",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    #[serde(rename = "Month 1")]
    pub month_1: Vec<String>,
    #[serde(rename = "Month 2")]
    pub month_2: Vec<String>,
    #[serde(rename = "Month 3")]
    pub month_3: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGapResult {
    pub missing_skills: Vec<String>,
    pub roadmap: Roadmap,
}

/// Computes the missing-skill list and study roadmap for a target role.
///
/// Input skills are trimmed, lowercased, and dropped when empty; the role
/// lookup falls back to the generic list for unknown roles. Missing skills
/// keep the required list's order and are rendered in title case. Never
/// errors — empty input just means everything is missing.
pub fn analyze(current_skills: &[String], target_role: &str, catalog: &RoleCatalog) -> SkillGapResult {
    let normalized: Vec<String> = current_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let required = catalog.skills_for(target_role);

    let missing_skills: Vec<String> = required
        .iter()
        .filter(|skill| !normalized.contains(*skill))
        .map(|skill| title_case(skill))
        .collect();

    // Month 1: first two missing skills; Month 2: the next two. Fewer missing
    // skills just means shorter (possibly empty) months.
    let month_1 = missing_skills
        .iter()
        .take(2)
        .map(|skill| format!("Learn fundamentals of {skill}"))
        .collect();
    let month_2 = missing_skills
        .iter()
        .skip(2)
        .take(2)
        .map(|skill| format!("Build mini projects using {skill}"))
        .collect();
    let month_3 = MONTH_3_TASKS.iter().map(|t| t.to_string()).collect();

    SkillGapResult {
        missing_skills,
        roadmap: Roadmap {
            month_1,
            month_2,
            month_3,
        },
    }
}

//! ATS Scorer — simplified applicant-tracking keyword coverage: partitions
//! the role's keyword list into matched/missing by substring presence and
//! reports the matched percentage.

use serde::Serialize;

use crate::analysis::title_case;
use crate::catalog::RoleCatalog;

const UNREADABLE_MARKER: &str = "Unable to read resume text";

const UNREADABLE_SUGGESTIONS: [&str; 2] = [
    "Upload a text-based PDF or DOCX",
    "Avoid scanned image resumes",
];

/// Returned on every scored resume, regardless of the score.
const SCORED_SUGGESTIONS: [&str; 4] = [
    "Add more role-specific keywords",
    "Quantify achievements with numbers",
    "Use clear section headings",
    "Keep resume concise (1–2 pages)",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsResult {
    pub ats_score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Scores extracted resume text against the target role's keyword list.
///
/// `resume_text` is expected lowercase (the extractor's contract). Empty or
/// whitespace-only text yields the fixed zero result; otherwise each keyword
/// is matched by substring presence, in table order, and the score is the
/// matched fraction as a percentage truncated toward zero. The keyword list
/// is never empty (catalog fallback guarantees at least one entry), so the
/// division cannot be by zero.
pub fn score(resume_text: &str, target_role: &str, catalog: &RoleCatalog) -> AtsResult {
    if resume_text.trim().is_empty() {
        return unreadable_result();
    }

    let keywords = catalog.keywords_for(target_role);
    let (matched, missing): (Vec<&String>, Vec<&String>) = keywords
        .iter()
        .partition(|keyword| resume_text.contains(keyword.as_str()));

    let ats_score = (matched.len() * 100 / keywords.len()) as u32;

    AtsResult {
        ats_score,
        matched_keywords: matched.iter().map(|k| title_case(k)).collect(),
        missing_keywords: missing.iter().map(|k| title_case(k)).collect(),
        suggestions: SCORED_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

fn unreadable_result() -> AtsResult {
    AtsResult {
        ats_score: 0,
        matched_keywords: vec![],
        missing_keywords: vec![UNREADABLE_MARKER.to_string()],
        suggestions: UNREADABLE_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gets_fixed_zero_result() {
        let catalog = RoleCatalog::default();
        let result = score("", "data scientist", &catalog);
        assert_eq!(result.ats_score, 0);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.missing_keywords, ["Unable to read resume text"]);
        assert_eq!(
            result.suggestions,
            ["Upload a text-based PDF or DOCX", "Avoid scanned image resumes"]
        );
    }

    #[test]
    fn test_whitespace_only_text_is_unreadable() {
        let catalog = RoleCatalog::default();
        assert_eq!(score("   \n\t ", "anything", &catalog).ats_score, 0);
        assert_eq!(
            score("   ", "anything", &catalog).missing_keywords,
            ["Unable to read resume text"]
        );
    }

    #[test]
    fn test_data_scientist_partial_match() {
        let catalog = RoleCatalog::default();
        let result = score(
            "experienced python developer with sql and statistics background",
            "data scientist",
            &catalog,
        );
        assert_eq!(result.matched_keywords, ["Python", "Sql", "Statistics"]);
        assert_eq!(result.missing_keywords, ["Machine Learning", "Pandas", "Numpy"]);
        assert_eq!(result.ats_score, 50); // floor(3/6 * 100)
    }

    #[test]
    fn test_score_truncates_toward_zero() {
        let catalog = RoleCatalog::default();
        // Fallback list has 3 keywords; matching 1 of 3 is 33.33 → 33
        let result = score("great communication skills", "unknown role", &catalog);
        assert_eq!(result.matched_keywords, ["Communication"]);
        assert_eq!(result.ats_score, 33);
    }

    #[test]
    fn test_full_match_scores_100() {
        let catalog = RoleCatalog::default();
        let result = score(
            "python java data structures algorithms git",
            "software engineer",
            &catalog,
        );
        assert_eq!(result.ats_score, 100);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_partitions_preserve_keyword_list_order() {
        let catalog = RoleCatalog::default();
        let result = score("numpy and pandas and sql", "data scientist", &catalog);
        // Keyword table order: python, sql, machine learning, statistics, pandas, numpy
        assert_eq!(result.matched_keywords, ["Sql", "Pandas", "Numpy"]);
        assert_eq!(result.missing_keywords, ["Python", "Machine Learning", "Statistics"]);
    }

    #[test]
    fn test_scored_suggestions_are_fixed() {
        let catalog = RoleCatalog::default();
        let low = score("nothing relevant here", "data scientist", &catalog);
        let high = score(
            "python sql machine learning statistics pandas numpy",
            "data scientist",
            &catalog,
        );
        assert_eq!(low.suggestions, high.suggestions);
        assert_eq!(low.suggestions.len(), 4);
    }

    #[test]
    fn test_score_is_idempotent() {
        let catalog = RoleCatalog::default();
        let text = "python developer";
        assert_eq!(
            score(text, "data scientist", &catalog),
            score(text, "data scientist", &catalog)
        );
    }
}

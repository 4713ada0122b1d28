//! Career projection lookup — a static three-year career path keyed by the
//! client's experience label.

use serde::{Deserialize, Serialize};

pub const SALARY_RANGE: &str = "₹6 – 18 LPA";
pub const LINKEDIN_SUMMARY: &str =
    "AI-driven professional with strong analytics and problem-solving skills.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProjection {
    pub year_1: String,
    pub year_3: String,
    pub year_5: String,
    pub salary: String,
    pub linkedin_profile: String,
}

/// Returns the projected career path for an experience label.
///
/// The match on "Student" is exact and case-sensitive; every other label,
/// recognized or not, gets the working-professional path. Salary and summary
/// are the same fixed constants on both branches.
pub fn project(experience: &str) -> CareerProjection {
    let (year_1, year_3, year_5) = if experience == "Student" {
        ("Junior Analyst", "Data Scientist", "Senior AI Engineer")
    } else {
        ("Data Analyst", "Senior Data Scientist", "AI Lead")
    };

    CareerProjection {
        year_1: year_1.to_string(),
        year_3: year_3.to_string(),
        year_5: year_5.to_string(),
        salary: SALARY_RANGE.to_string(),
        linkedin_profile: LINKEDIN_SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_path() {
        let p = project("Student");
        assert_eq!(p.year_1, "Junior Analyst");
        assert_eq!(p.year_3, "Data Scientist");
        assert_eq!(p.year_5, "Senior AI Engineer");
    }

    #[test]
    fn test_any_other_label_gets_professional_path() {
        for label in ["Working Professional", "Fresher", "", "stud"] {
            let p = project(label);
            assert_eq!(p.year_1, "Data Analyst");
            assert_eq!(p.year_3, "Senior Data Scientist");
            assert_eq!(p.year_5, "AI Lead");
        }
    }

    #[test]
    fn test_student_match_is_case_sensitive() {
        assert_eq!(project("student").year_1, "Data Analyst");
        assert_eq!(project("STUDENT").year_1, "Data Analyst");
    }

    #[test]
    fn test_constants_identical_on_both_branches() {
        let student = project("Student");
        let other = project("anything");
        assert_eq!(student.salary, other.salary);
        assert_eq!(student.linkedin_profile, other.linkedin_profile);
    }

    #[test]
    fn test_serializes_with_original_field_names() {
        let json = serde_json::to_value(project("Student")).unwrap();
        for field in ["year_1", "year_3", "year_5", "salary", "linkedin_profile"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}

//! Role catalog — the role → required-skills and role → ATS-keywords tables.
//!
//! Compiled-in defaults cover the supported roles; setting `ROLE_CATALOG_PATH`
//! swaps in a JSON file of the same shape, so the tables can change without a
//! code change and tests can substitute fixture tables.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Immutable reference tables, held in `AppState` behind an `Arc`.
///
/// All role names and list entries are lowercase; lookups lowercase the
/// query, and renderers title-case entries on the way out. Entry order within
/// each list is significant and preserved through analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    pub role_skills: HashMap<String, Vec<String>>,
    pub role_keywords: HashMap<String, Vec<String>>,
    /// Used by the skill-gap analyzer when the role is not in `role_skills`.
    pub fallback_skills: Vec<String>,
    /// Used by the ATS scorer when the role is not in `role_keywords`.
    pub fallback_keywords: Vec<String>,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        let role_skills = HashMap::from([
            (
                "data scientist".to_string(),
                list(&["python", "sql", "statistics", "machine learning", "data visualization"]),
            ),
            (
                "software engineer".to_string(),
                list(&["python", "data structures", "algorithms", "git", "object oriented programming"]),
            ),
            (
                "ai engineer".to_string(),
                list(&["python", "machine learning", "deep learning", "linear algebra"]),
            ),
            (
                "web developer".to_string(),
                list(&["html", "css", "javascript", "backend framework", "databases"]),
            ),
        ]);

        let role_keywords = HashMap::from([
            (
                "data scientist".to_string(),
                list(&["python", "sql", "machine learning", "statistics", "pandas", "numpy"]),
            ),
            (
                "software engineer".to_string(),
                list(&["python", "java", "data structures", "algorithms", "git"]),
            ),
            (
                "web developer".to_string(),
                list(&["html", "css", "javascript", "react", "backend"]),
            ),
        ]);

        RoleCatalog {
            role_skills,
            role_keywords,
            fallback_skills: list(&["problem solving", "programming basics", "communication"]),
            fallback_keywords: list(&["problem solving", "communication", "teamwork"]),
        }
    }
}

impl RoleCatalog {
    /// Loads the catalog from `path`, or the compiled-in defaults when `None`.
    /// Fails fast at startup on an unreadable or invalid file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read role catalog at {}", p.display()))?;
                let parsed: RoleCatalog = serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid role catalog JSON at {}", p.display()))?;
                parsed.normalized()
            }
            None => RoleCatalog::default(),
        };

        // The ATS score divides by the keyword-list length; empty fallbacks
        // would make that reachable.
        ensure!(
            !catalog.fallback_skills.is_empty(),
            "Role catalog fallback_skills must not be empty"
        );
        ensure!(
            !catalog.fallback_keywords.is_empty(),
            "Role catalog fallback_keywords must not be empty"
        );
        Ok(catalog)
    }

    /// Required skills for `role`, falling back to the generic list.
    pub fn skills_for(&self, role: &str) -> &[String] {
        self.role_skills
            .get(&role.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback_skills)
    }

    /// ATS keywords for `role`, falling back to the generic list.
    pub fn keywords_for(&self, role: &str) -> &[String] {
        self.role_keywords
            .get(&role.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback_keywords)
    }

    /// Lowercases and trims every role name and list entry from a loaded file.
    fn normalized(mut self) -> Self {
        self.role_skills = normalize_table(self.role_skills);
        self.role_keywords = normalize_table(self.role_keywords);
        normalize_list(&mut self.fallback_skills);
        normalize_list(&mut self.fallback_keywords);
        self
    }
}

fn list(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

fn normalize_table(table: HashMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
    table
        .into_iter()
        .map(|(role, mut entries)| {
            normalize_list(&mut entries);
            (role.trim().to_lowercase(), entries)
        })
        .collect()
}

fn normalize_list(entries: &mut Vec<String>) {
    for entry in entries.iter_mut() {
        *entry = entry.trim().to_lowercase();
    }
    entries.retain(|e| !e.is_empty());
}
